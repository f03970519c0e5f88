// Picsum API module.
// Provides the client and types for the public photo listing API.

pub mod client;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, PicsumClient};
pub use types::{ImageSource, PhotoRecord};
