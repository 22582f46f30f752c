use std::time::Duration;

use reqwest::Client;

use super::error::CatalogError;
use super::types::{Candidate, CatalogItem, Fetched};

const API_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Anything that can produce one candidate per call.
///
/// The discovery loop depends on this seam instead of [`CatalogClient`]
/// directly so it can be exercised with scripted sources in tests.
pub trait CandidateSource {
    async fn fetch_one(&self) -> Result<Fetched, CatalogError>;
}

pub struct CatalogClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, API_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            client,
            base_url,
        }
    }
}

impl CandidateSource for CatalogClient {
    /// Fetch exactly one item with breed data requested.
    ///
    /// Performs a single GET; retrying is the discovery loop's job, never
    /// the client's.
    async fn fetch_one(&self) -> Result<Fetched, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("has_breeds", "1"), ("limit", "1")])
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let items = response.json::<Vec<CatalogItem>>().await?;
        let item = items.first().ok_or(CatalogError::EmptyResponse)?;

        match Candidate::from_item(item) {
            Some(candidate) => Ok(Fetched::Candidate(candidate)),
            None => Ok(Fetched::SkippedNoBreed),
        }
    }
}
