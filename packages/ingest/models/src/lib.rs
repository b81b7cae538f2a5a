#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ingestion run stages, source modes, and result types.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use wilayah_database_models::TableStatistics;

/// Which source a run is drawing records from.
///
/// A run starts in [`SourceMode::Remote`] only if the connectivity probe
/// succeeds. Once it moves to [`SourceMode::Fallback`] it never goes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SourceMode {
    /// Live data from the remote API.
    Remote,
    /// Embedded dataset.
    Fallback {
        /// Failure text that caused the switch.
        reason: String,
    },
}

impl SourceMode {
    /// Short lowercase name (`"remote"` or `"fallback"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback { .. } => "fallback",
        }
    }

    /// Why the run fell back, if it did.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Remote => None,
            Self::Fallback { reason } => Some(reason),
        }
    }

    /// `true` once the run has switched to the embedded dataset.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stages of an ingestion run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunStage {
    /// Nothing has happened yet.
    Init,
    /// Probing the remote source to pick a mode.
    SourceSelection,
    /// Emptying the hierarchy tables.
    Cleaning,
    /// Loading provinces.
    ImportingProvinces,
    /// Loading regencies.
    ImportingRegencies,
    /// Loading districts.
    ImportingDistricts,
    /// Loading villages.
    ImportingVillages,
    /// Counting rows and checking the hierarchy.
    Verifying,
    /// Finished successfully (integrity findings do not change this).
    Done,
    /// Aborted by a storage error.
    Failed,
}

/// Outcome of a connectivity probe against the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// The remote source returned a valid province list.
    Connected {
        /// Number of provinces returned.
        provinces: usize,
    },
    /// All attempts failed.
    Failed {
        /// Last failure text.
        reason: String,
    },
}

/// Result of a completed ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionReport {
    /// Final source mode. [`SourceMode::Fallback`] carries the reason.
    pub mode: SourceMode,
    /// Row counts read back from storage after the load.
    pub statistics: TableStatistics,
    /// Row counts returned by each insert call.
    pub imported: TableStatistics,
    /// Integrity findings (advisory).
    pub issues: Vec<String>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// How long the run took.
    pub duration: Duration,
}

impl IngestionReport {
    /// Why the run fell back, if it did.
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        self.mode.reason()
    }

    /// Total stored rows across all four tables.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.statistics.total()
    }
}
