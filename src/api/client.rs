//! HTTP client for the color scheme service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::error::ApiError;
use crate::models::{SchemeMode, SchemeResult, SeedColor};

/// Public instance of The Color API
pub const DEFAULT_BASE_URL: &str = "https://www.thecolorapi.com";

/// Anything that can turn a seed, mode and count into a scheme
#[async_trait]
pub trait SchemeSource: Send + Sync {
    async fn fetch_scheme(
        &self,
        seed: &SeedColor,
        mode: SchemeMode,
        count: u32,
    ) -> Result<SchemeResult, ApiError>;
}

/// One-shot GET client: no retries, no caching
#[derive(Debug, Clone)]
pub struct ColorApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ColorApiClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("chroma-tui/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/scheme?hex=RRGGBB&mode=..&count=..`
    pub fn scheme_url(&self, seed: &SeedColor, mode: SchemeMode, count: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("scheme");
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("hex", seed.hex_digits())
            .append_pair("mode", mode.as_str())
            .append_pair("count", &count.to_string());
        url
    }
}

#[async_trait]
impl SchemeSource for ColorApiClient {
    async fn fetch_scheme(
        &self,
        seed: &SeedColor,
        mode: SchemeMode,
        count: u32,
    ) -> Result<SchemeResult, ApiError> {
        let url = self.scheme_url(seed, mode, count);
        debug!(%url, "requesting color scheme");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let body = response.bytes().await?;
        let scheme = serde_json::from_slice(&body)?;
        Ok(scheme)
    }
}
