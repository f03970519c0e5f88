// Feed screen view-model.
// Owns all screen state for its lifetime: the published list, the loading flag, and image states.

use std::collections::{HashMap, HashSet};

use image::RgbImage;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::{AppEvent, ImageEvent, ImageEventKind};
use crate::images::ImageFetcher;
use crate::picsum::PhotoRecord;
use crate::state::{FeedLoader, FeedState, ImageLoadState, ImageStates};

/// Pages on each side of the current one whose images are requested.
pub const PREFETCH_RADIUS: usize = 1;

/// State of the single feed screen, built on mount and dropped on unmount.
#[derive(Debug, Default)]
pub struct FeedScreen {
    pub feed: FeedState,
    pub images: ImageStates,
    thumbnails: HashMap<String, RgbImage>,
    requested: HashSet<String>,
}

impl FeedScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the screen and start the loader. The loader task is not tracked:
    /// if the screen goes away first, its result is discarded.
    pub fn mount(loader: FeedLoader, tx: UnboundedSender<AppEvent>) -> Self {
        tokio::spawn(async move {
            let outcome = loader.run().await;
            let _ = tx.send(AppEvent::FeedLoaded(outcome));
        });
        debug!("feed screen mounted");
        Self::new()
    }

    /// Apply an event from a background task.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedLoaded(outcome) => {
                if let Some(failure) = &outcome.failure {
                    debug!(error = %failure, "feed finished after a failure");
                }
                self.feed.finish(&outcome);
            }
            AppEvent::Image(ImageEvent { id, kind }) => {
                let state = self.images.apply(&id, kind.signal());
                match (state, kind) {
                    (ImageLoadState::Loaded, ImageEventKind::Loaded(thumbnail)) => {
                        self.thumbnails.insert(id, thumbnail);
                    }
                    (ImageLoadState::Error, ImageEventKind::Failed(reason)) => {
                        debug!(id = %id, reason = %reason, "image marked as failed");
                    }
                    _ => {}
                }
            }
        }
    }

    /// Photos near the current page whose images have not been requested
    /// yet. Each is marked requested.
    pub fn take_unrequested(&mut self) -> Vec<PhotoRecord> {
        if self.feed.loading {
            return Vec::new();
        }

        let window = self.feed.window(PREFETCH_RADIUS);
        let mut pending = Vec::new();
        for photo in &self.feed.photos[window] {
            if self.requested.insert(photo.id.clone()) {
                pending.push(photo.clone());
            }
        }
        pending
    }

    /// Spawn image loads for the prefetch window.
    pub fn request_images(&mut self, fetcher: &ImageFetcher) {
        for photo in self.take_unrequested() {
            fetcher.spawn(&photo);
        }
    }

    pub fn image_state(&self, id: &str) -> ImageLoadState {
        self.images.get(id)
    }

    pub fn thumbnail(&self, id: &str) -> Option<&RgbImage> {
        self.thumbnails.get(id)
    }

    /// Tear the screen down. In-flight tasks are left to finish on their own.
    pub fn unmount(self) {
        debug!(
            photos = self.feed.photos.len(),
            images = self.images.len(),
            "feed screen unmounted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use crate::state::{LoadOutcome, Origin, Published};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buf.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run `f` with debug logs captured into a buffer.
    fn capture_logs(f: impl FnOnce()) -> String {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn photos(n: usize) -> Vec<PhotoRecord> {
        (0..n)
            .map(|i| PhotoRecord {
                id: i.to_string(),
                author: format!("Author {}", i),
                download_url: format!("u{}", i),
                width: None,
                height: None,
                url: None,
            })
            .collect()
    }

    fn published(n: usize) -> AppEvent {
        AppEvent::FeedLoaded(LoadOutcome {
            published: Some(Published {
                photos: photos(n),
                origin: Origin::Network,
            }),
            failure: None,
        })
    }

    fn image(id: &str, kind: ImageEventKind) -> AppEvent {
        AppEvent::Image(ImageEvent {
            id: id.to_string(),
            kind,
        })
    }

    #[test]
    fn test_nothing_requested_while_loading() {
        let mut screen = FeedScreen::new();
        assert!(screen.take_unrequested().is_empty());
    }

    #[test]
    fn test_requests_window_once() {
        let mut screen = FeedScreen::new();
        screen.handle(published(5));

        let ids: Vec<String> = screen.take_unrequested().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["0", "1"]);
        assert!(screen.take_unrequested().is_empty());

        screen.feed.next_page();
        let ids: Vec<String> = screen.take_unrequested().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_image_lifecycle_stores_thumbnail() {
        let mut screen = FeedScreen::new();
        screen.handle(published(2));
        assert_eq!(screen.image_state("0"), ImageLoadState::Loading);

        screen.handle(image("0", ImageEventKind::Started));
        assert_eq!(screen.image_state("0"), ImageLoadState::Loading);

        screen.handle(image("0", ImageEventKind::Loaded(RgbImage::new(2, 2))));
        assert_eq!(screen.image_state("0"), ImageLoadState::Loaded);
        assert!(screen.thumbnail("0").is_some());

        screen.handle(image("1", ImageEventKind::Failed("boom".to_string())));
        assert_eq!(screen.image_state("1"), ImageLoadState::Error);
        assert!(screen.thumbnail("1").is_none());
    }

    #[test]
    fn test_late_success_after_failure_is_ignored() {
        let mut screen = FeedScreen::new();
        screen.handle(image("0", ImageEventKind::Failed("boom".to_string())));
        screen.handle(image("0", ImageEventKind::Loaded(RgbImage::new(1, 1))));

        assert_eq!(screen.image_state("0"), ImageLoadState::Error);
        assert!(screen.thumbnail("0").is_none());
    }

    #[test]
    fn test_failure_reasons_are_logged() {
        let mut screen = FeedScreen::new();
        let logs = capture_logs(|| {
            screen.handle(AppEvent::FeedLoaded(LoadOutcome {
                published: None,
                failure: Some(FeedError::Config("disk full".to_string())),
            }));
            screen.handle(image("7", ImageEventKind::Failed("HTTP 404".to_string())));
        });

        assert!(logs.contains("disk full"), "logs: {}", logs);
        assert!(logs.contains("HTTP 404"), "logs: {}", logs);
        assert!(logs.contains("7"), "logs: {}", logs);
        assert!(!screen.feed.loading);
        assert_eq!(screen.image_state("7"), ImageLoadState::Error);
    }

    #[test]
    fn test_failed_load_ends_loading_with_empty_feed() {
        let mut screen = FeedScreen::new();
        screen.handle(AppEvent::FeedLoaded(LoadOutcome::default()));
        assert!(!screen.feed.loading);
        assert!(screen.feed.photos.is_empty());
        assert!(screen.take_unrequested().is_empty());
    }
}
