// Logging setup.
// Routes tracing output to a file since the terminal belongs to the UI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{FeedError, Result};

/// Install the global subscriber, appending to `path`.
pub fn init(path: &Path, filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter)
        .map_err(|e| FeedError::Config(format!("invalid log filter '{}': {}", filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| FeedError::Config(format!("logging already initialized: {}", e)))
}
