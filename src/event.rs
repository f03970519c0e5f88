// Events sent from background tasks to the UI loop.

use image::RgbImage;

use crate::state::{ImageSignal, LoadOutcome};

/// Message delivered over the app channel.
#[derive(Debug)]
pub enum AppEvent {
    /// The loader finished, successfully or not.
    FeedLoaded(LoadOutcome),
    /// An image task reported progress.
    Image(ImageEvent),
}

/// Lifecycle report for one photo's image.
#[derive(Debug)]
pub struct ImageEvent {
    pub id: String,
    pub kind: ImageEventKind,
}

#[derive(Debug)]
pub enum ImageEventKind {
    Started,
    Loaded(RgbImage),
    Failed(String),
}

impl ImageEventKind {
    pub fn signal(&self) -> ImageSignal {
        match self {
            ImageEventKind::Started => ImageSignal::Start,
            ImageEventKind::Loaded(_) => ImageSignal::Success,
            ImageEventKind::Failed(_) => ImageSignal::Failure,
        }
    }
}
