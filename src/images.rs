// Image fetching.
// Downloads each photo's image, decodes it off the async threads, and reports lifecycle events.

use std::io;

use image::RgbImage;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::error::{FeedError, Result};
use crate::event::{AppEvent, ImageEvent, ImageEventKind};
use crate::picsum::{ImageSource, PhotoRecord, PicsumClient};

/// Longest edge of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX: u32 = 320;

/// Spawns one task per requested image.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: PicsumClient,
    source: ImageSource,
    tx: UnboundedSender<AppEvent>,
}

impl ImageFetcher {
    pub fn new(client: PicsumClient, source: ImageSource, tx: UnboundedSender<AppEvent>) -> Self {
        Self { client, source, tx }
    }

    /// Start loading a photo's image. Events stop silently once the
    /// receiver is gone.
    pub fn spawn(&self, photo: &PhotoRecord) {
        let id = photo.id.clone();
        let url = self.source.url_for(photo);
        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            send(&tx, &id, ImageEventKind::Started);

            let kind = match fetch_thumbnail(&client, &url).await {
                Ok(thumbnail) => {
                    debug!(
                        id = %id,
                        width = thumbnail.width(),
                        height = thumbnail.height(),
                        "image decoded"
                    );
                    ImageEventKind::Loaded(thumbnail)
                }
                Err(e) => {
                    warn!(id = %id, url = %url, error = %e, "image failed to load");
                    ImageEventKind::Failed(e.to_string())
                }
            };
            send(&tx, &id, kind);
        });
    }
}

fn send(tx: &UnboundedSender<AppEvent>, id: &str, kind: ImageEventKind) {
    let _ = tx.send(AppEvent::Image(ImageEvent {
        id: id.to_string(),
        kind,
    }));
}

/// Download an image and decode it into a bounded thumbnail.
pub async fn fetch_thumbnail(client: &PicsumClient, url: &str) -> Result<RgbImage> {
    let bytes = client.fetch_image(url).await?;
    tokio::task::spawn_blocking(move || decode_thumbnail(&bytes))
        .await
        .map_err(|e| FeedError::Io(io::Error::other(e)))?
}

/// Decode encoded image bytes, downscaled to fit `THUMBNAIL_MAX`.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(bytes)?;
    let image = if image.width() > THUMBNAIL_MAX || image.height() > THUMBNAIL_MAX {
        image.thumbnail(THUMBNAIL_MAX, THUMBNAIL_MAX)
    } else {
        image
    };
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_thumbnail_downscales() {
        let thumbnail = decode_thumbnail(&png(800, 400)).unwrap();
        assert_eq!(thumbnail.dimensions(), (320, 160));
        assert_eq!(thumbnail.get_pixel(0, 0), &Rgb([200, 10, 10]));
    }

    #[test]
    fn test_decode_thumbnail_keeps_small_images() {
        let thumbnail = decode_thumbnail(&png(40, 60)).unwrap();
        assert_eq!(thumbnail.dimensions(), (40, 60));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_thumbnail(b"definitely not an image"),
            Err(FeedError::Image(_))
        ));
    }
}
