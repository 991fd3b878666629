use async_trait::async_trait;
use railbook_shared::{Station, Train};

/// Read access to the remote reference data API
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    /// GET /trains
    async fn fetch_trains(&self) -> Result<Vec<Train>, FetchError>;

    /// GET /stations
    async fn fetch_stations(&self) -> Result<Vec<Station>, FetchError>;

    /// GET /trains/search?from=<code>&to=<code>
    async fn search_trains(&self, from: &str, to: &str) -> Result<Vec<Train>, FetchError>;
}

/// The only failure kind on the booking surface: a reference data read that did not produce a list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),
}
