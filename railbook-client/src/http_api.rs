//! HTTP client for the reference data API.
//!
//! Wraps the three read endpoints (`/trains`, `/stations`,
//! `/trains/search`) using [`reqwest`]. No request ever carries a body or
//! credentials.

use async_trait::async_trait;
use railbook_core::{FetchError, ReferenceDataSource};
use railbook_shared::{Station, Train};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for one reference data API instance.
pub struct HttpReferenceApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReferenceApi {
    /// * `base_url` - API root including any path prefix, e.g. `http://host:8080/api`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling, custom TLS).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(request_error)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(request_error)?;

        Self::parse_response(response).await
    }

    /// Map non-2xx statuses to [`FetchError::Status`], then decode the JSON body.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn request_error(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl ReferenceDataSource for HttpReferenceApi {
    async fn fetch_trains(&self) -> Result<Vec<Train>, FetchError> {
        self.get_json("/trains", &[]).await
    }

    async fn fetch_stations(&self) -> Result<Vec<Station>, FetchError> {
        self.get_json("/stations", &[]).await
    }

    async fn search_trains(&self, from: &str, to: &str) -> Result<Vec<Train>, FetchError> {
        self.get_json("/trains/search", &[("from", from), ("to", to)]).await
    }
}
