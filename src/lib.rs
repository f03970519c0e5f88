// snapfeed: a terminal photo feed for the Lorem Picsum listing API.
// Fetches the photo list once, caches it on disk, and pages through it full-screen.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod event;
pub mod images;
pub mod logging;
pub mod picsum;
pub mod screen;
pub mod state;
pub mod ui;

pub use config::Config;
pub use error::{FeedError, Result};
