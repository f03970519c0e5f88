// HTTP client for the Picsum API.
// Issues the photo listing request and raw image downloads.

use std::time::Instant;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{FeedError, Result};

use super::types::PhotoRecord;

/// Default photo listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://picsum.photos/v2/list";

/// Picsum client. No auth, no timeouts, no retries.
#[derive(Debug, Clone)]
pub struct PicsumClient {
    client: Client,
    endpoint: String,
}

impl PicsumClient {
    /// Create a new client against the given listing endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("snapfeed"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FeedError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the photo listing, in server order.
    pub async fn list_photos(&self) -> Result<Vec<PhotoRecord>> {
        let started = Instant::now();
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let response = check_response(response)?;
        let photos: Vec<PhotoRecord> = response.json().await?;

        debug!(
            endpoint = %self.endpoint,
            count = photos.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "photo listing fetched"
        );
        Ok(photos)
    }

    /// Download raw image bytes.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let started = Instant::now();
        let response = self.client.get(url).send().await?;
        let response = check_response(response)?;
        let bytes = response.bytes().await?;

        debug!(
            url,
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "image fetched"
        );
        Ok(bytes.to_vec())
    }
}

/// Reject anything but a success status.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        status => Err(FeedError::Status {
            status,
            url: response.url().to_string(),
        }),
    }
}
