//! Asynchronous data source with a mock client

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::{timeout, Duration};

/// Error types for fetch operations
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

/// Trait for fetching remote data - allows for different implementations
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Client that answers immediately with a fixed body
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    body: String,
}

impl MockHttpClient {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new("mock response")
    }
}

#[async_trait]
impl DataSource for MockHttpClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if url.is_empty() {
            return Err(FetchError::NotFound(url.to_string()));
        }
        tracing::debug!("Mock fetch of {}", url);
        Ok(self.body.clone())
    }
}

/// Fetch with an upper bound on how long the source may take
pub async fn fetch_with_timeout(
    source: &dyn DataSource,
    url: &str,
    timeout_secs: u64,
) -> Result<String, FetchError> {
    match timeout(Duration::from_secs(timeout_secs), source.fetch(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(timeout_secs)),
    }
}
