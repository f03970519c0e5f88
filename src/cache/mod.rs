// Cache module for local filesystem caching.
// Backs the persistent key-value store the feed loader memoizes into.

pub mod paths;
pub mod store;

pub use paths::{cache_dir, log_path, store_dir};
pub use store::KeyValueStore;
