#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loads Indonesia's administrative hierarchy (provinces, regencies,
//! districts, villages) into the region database.
//!
//! [`orchestrator::Orchestrator`] decides between live and embedded data
//! and sequences the four-level load. The binary wraps it in a CLI.

pub mod commands;
pub mod interactive;
pub mod orchestrator;

use wilayah_database::DbError;
use wilayah_ingest_models::RunStage;

pub use orchestrator::Orchestrator;

/// Errors that abort an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A storage step failed.
    #[error("Ingestion failed during {stage}: {source}")]
    Stage {
        /// Stage the run was in.
        stage: RunStage,
        /// Underlying storage error.
        source: DbError,
    },
}

impl IngestError {
    /// Stage the run failed in.
    #[must_use]
    pub const fn stage(&self) -> RunStage {
        match self {
            Self::Stage { stage, .. } => *stage,
        }
    }
}
