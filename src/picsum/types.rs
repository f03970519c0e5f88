// Picsum API response types.
// Defines the photo record and how image URLs are derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Base URL for id-templated image requests.
pub const PICSUM_IMAGE_BASE: &str = "https://picsum.photos/id";

/// One photo from the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub author: String,
    #[serde(alias = "downloadUrl")]
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Where a photo's full image is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSource {
    /// The record's own `download_url`.
    #[default]
    DownloadUrl,
    /// A fixed-size blurred rendition templated from the record's id.
    Blurred { width: u32, height: u32, blur: u8 },
}

impl ImageSource {
    pub const BLURRED_DEFAULT: ImageSource = ImageSource::Blurred {
        width: 600,
        height: 900,
        blur: 2,
    };

    /// Resolve the image URL for a photo.
    pub fn url_for(&self, photo: &PhotoRecord) -> String {
        match self {
            ImageSource::DownloadUrl => photo.download_url.clone(),
            ImageSource::Blurred {
                width,
                height,
                blur,
            } => format!(
                "{}/{}/{}/{}?blur={}",
                PICSUM_IMAGE_BASE, photo.id, width, height, blur
            ),
        }
    }
}

impl FromStr for ImageSource {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "download" | "download_url" => Ok(ImageSource::DownloadUrl),
            "blurred" | "blur" => Ok(ImageSource::BLURRED_DEFAULT),
            other => Err(FeedError::Config(format!(
                "unknown image source '{}', expected 'download' or 'blurred'",
                other
            ))),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::DownloadUrl => write!(f, "download"),
            ImageSource::Blurred { .. } => write!(f, "blurred"),
        }
    }
}
