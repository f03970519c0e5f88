// State management module.
// Handles data loading, paging, and per-item image state for the feed screen.

pub mod feed;
pub mod images;
pub mod loader;

pub use feed::FeedState;
pub use images::{ImageLoadState, ImageSignal, ImageStates};
pub use loader::{FeedLoader, LoadOutcome, Origin, Published};
