#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative hierarchy data sources.
//!
//! Two implementations of [`RegionSource`] exist:
//!
//! - [`remote::RemoteSource`] pulls each level from a public JSON API,
//!   validating every response and retrying transient failures.
//! - [`fallback::FallbackSource`] serves an embedded sample with no I/O,
//!   used whenever the remote API cannot be trusted.

pub mod fallback;
pub mod progress;
pub mod remote;
pub mod retry;
pub mod validate;

use async_trait::async_trait;
use wilayah_region_models::{District, Province, Regency, RegionId, Village};

/// Errors that can occur while fetching hierarchy data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP client setup failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Every attempt against a remote endpoint failed.
    #[error("{endpoint} unavailable after {attempts} attempt(s): {reason}")]
    Unavailable {
        /// URL that was requested.
        endpoint: String,
        /// Number of attempts made.
        attempts: u32,
        /// Failure reason of the final attempt.
        reason: String,
    },
}

/// A provider of the four hierarchy levels.
///
/// Each fetch returns the children of a single parent, mirroring the
/// shape of the remote API (one request per parent).
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Short label used in logs (e.g. `"remote"`).
    fn name(&self) -> &str;

    /// Fetches every province.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the data cannot be retrieved.
    async fn fetch_provinces(&self) -> Result<Vec<Province>, SourceError>;

    /// Fetches the regencies of one province.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the data cannot be retrieved.
    async fn fetch_regencies(&self, province_id: RegionId) -> Result<Vec<Regency>, SourceError>;

    /// Fetches the districts of one regency.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the data cannot be retrieved.
    async fn fetch_districts(&self, regency_id: RegionId) -> Result<Vec<District>, SourceError>;

    /// Fetches the villages of one district.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the data cannot be retrieved.
    async fn fetch_villages(&self, district_id: RegionId) -> Result<Vec<Village>, SourceError>;
}
