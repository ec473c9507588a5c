//! HTTP client for the currency backend.

use dioxus_logger::tracing::debug;

use crate::currency::decode_detail;
use crate::currency::decode_listing;
use crate::currency::CurrencyDetail;
use crate::currency::CurrencyId;
use crate::currency::CurrencySummary;
use crate::ApiError;

/// Where the backend listens unless the build overrides it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Fetches currency listings and detail records from the backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct CurrencyClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for CurrencyClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CurrencyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /cryptocurrency`
    pub fn listing_url(&self) -> String {
        format!("{}/cryptocurrency", self.base_url)
    }

    /// `GET /cryptocurrency/{id}`
    pub fn detail_url(&self, id: &CurrencyId) -> String {
        format!("{}/cryptocurrency/{}", self.base_url, id)
    }

    /// Lists every currency the backend knows about.
    pub async fn list_currencies(&self) -> Result<Vec<CurrencySummary>, ApiError> {
        let body = self.get_text(&self.listing_url()).await?;
        decode_listing(&body)
    }

    /// Fetches the full record for one currency.
    pub async fn currency(&self, id: &CurrencyId) -> Result<CurrencyDetail, ApiError> {
        let body = self.get_text(&self.detail_url(id)).await?;
        decode_detail(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::fetch(url, e))?
            .error_for_status()
            .map_err(|e| ApiError::fetch(url, e))?;

        response.text().await.map_err(|e| ApiError::fetch(url, e))
    }
}
