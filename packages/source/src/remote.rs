//! Live hierarchy data from the public `api-wilayah-indonesia` JSON API.
//!
//! Endpoints (relative to the base URL):
//!
//! - `provinces.json`
//! - `regencies/{province_id}.json`
//! - `districts/{regency_id}.json`
//! - `villages/{district_id}.json`
//!
//! Every request goes through [`RetryPolicy`] and every response through
//! [`validate::decode_records`], so callers only ever see well-formed,
//! non-empty record lists or a [`SourceError::Unavailable`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use wilayah_region_models::{District, Province, Regency, RegionId, Village};

use crate::retry::RetryPolicy;
use crate::validate::{self, InvalidResponse};
use crate::{RegionSource, SourceError};

/// Public mirror of the Indonesian administrative region API.
pub const DEFAULT_BASE_URL: &str = "https://emsifa.github.io/api-wilayah-indonesia/api";

/// Per-attempt HTTP timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-like User-Agent; some CDNs challenge unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; Wilayah/1.0; +https://github.com)";

/// Failure of a single attempt.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response format: {0}")]
    Invalid(#[from] InvalidResponse),
}

/// Client for the remote hierarchy API.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    policy: RetryPolicy,
}

impl RemoteSource {
    /// Creates a client for `base_url` with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            policy: RetryPolicy::default(),
        })
    }

    /// Creates a client for [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be built.
    pub fn from_default_endpoint() -> Result<Self, SourceError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Replaces the retry policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Base URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/{path}", self.base_url);

        self.policy
            .run(&url, || self.attempt::<T>(&url))
            .await
            .map_err(|exhausted| SourceError::Unavailable {
                endpoint: url.clone(),
                attempts: exhausted.attempts,
                reason: exhausted.last_error.to_string(),
            })
    }

    async fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, AttemptError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        let records = validate::decode_records(status, content_type.as_deref(), &body)?;
        log::info!("{url}: received {} record(s)", records.len());

        Ok(records)
    }
}

#[async_trait]
impl RegionSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_provinces(&self) -> Result<Vec<Province>, SourceError> {
        self.fetch_list("provinces.json").await
    }

    async fn fetch_regencies(&self, province_id: RegionId) -> Result<Vec<Regency>, SourceError> {
        self.fetch_list(&format!("regencies/{province_id}.json"))
            .await
    }

    async fn fetch_districts(&self, regency_id: RegionId) -> Result<Vec<District>, SourceError> {
        self.fetch_list(&format!("districts/{regency_id}.json"))
            .await
    }

    async fn fetch_villages(&self, district_id: RegionId) -> Result<Vec<Village>, SourceError> {
        self.fetch_list(&format!("villages/{district_id}.json"))
            .await
    }
}
