//! The ingestion state machine.
//!
//! A run fetches the remote province list once to pick a [`SourceMode`]
//! (the fetched list is what gets imported), empties the hierarchy tables,
//! then loads provinces, regencies, districts and villages in that order. Remote failures move the run to the embedded
//! dataset for the rest of the run; storage failures abort it.

use std::cell::Cell;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use switchy_database::Database;
use wilayah_database::DbError;
use wilayah_database::loader::BulkLoader;
use wilayah_database::models::{RunRecord, TableStatistics};
use wilayah_database::runs;
use wilayah_ingest_models::{ConnectionStatus, IngestionReport, RunStage, SourceMode};
use wilayah_region_models::{HierarchyLevel, Province, Regency};
use wilayah_source::RegionSource;
use wilayah_source::fallback::FallbackSource;
use wilayah_source::progress::{ProgressCallback, null_progress};

use crate::IngestError;

/// Drives one source-to-storage load.
pub struct Orchestrator<'a> {
    db: &'a dyn Database,
    remote: &'a dyn RegionSource,
    fallback: FallbackSource,
    loader: BulkLoader<'a>,
    progress: Arc<dyn ProgressCallback>,
    stage: Cell<RunStage>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator writing to `db` and probing `remote`.
    #[must_use]
    pub fn new(db: &'a dyn Database, remote: &'a dyn RegionSource) -> Self {
        Self {
            db,
            remote,
            fallback: FallbackSource::new(),
            loader: BulkLoader::new(db),
            progress: null_progress(),
            stage: Cell::new(RunStage::Init),
        }
    }

    /// Reports per-province regency fetches to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: Option<Arc<dyn ProgressCallback>>) -> Self {
        self.progress = progress.unwrap_or_else(null_progress);
        self
    }

    /// Stage the last run reached ([`RunStage::Failed`] after an error).
    #[must_use]
    pub fn stage(&self) -> RunStage {
        self.stage.get()
    }

    /// Runs the full pipeline.
    ///
    /// Falling back to the embedded dataset is not an error: the returned
    /// report carries the mode and the reason.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Stage`] if cleaning, an insert, or the final
    /// verification queries fail.
    pub async fn run(&self) -> Result<IngestionReport, IngestError> {
        let started_at = chrono::Utc::now();
        let start = Instant::now();
        let mut imported = TableStatistics::default();

        self.enter(RunStage::SourceSelection);
        let (mode, provinces) = self.select_mode().await;

        self.enter(RunStage::Cleaning);
        log::info!("Cleaning existing data");
        self.guard(RunStage::Cleaning, self.loader.clean_all()).await?;

        self.enter(RunStage::ImportingProvinces);
        let count = self
            .guard(
                RunStage::ImportingProvinces,
                self.loader.insert_provinces(&provinces),
            )
            .await?;
        imported.set(HierarchyLevel::Province, count);
        log::info!("Imported {count} provinces ({mode})");

        self.enter(RunStage::ImportingRegencies);
        let (regencies, mode) = self.regencies(mode).await;
        let count = self
            .guard(
                RunStage::ImportingRegencies,
                self.loader.insert_regencies(&regencies),
            )
            .await?;
        imported.set(HierarchyLevel::Regency, count);
        log::info!("Imported {count} regencies ({mode})");

        self.enter(RunStage::ImportingDistricts);
        let districts = self.fallback.districts();
        let count = self
            .guard(
                RunStage::ImportingDistricts,
                self.loader.insert_districts(&districts),
            )
            .await?;
        imported.set(HierarchyLevel::District, count);
        log::info!("Imported {count} districts (fallback)");

        self.enter(RunStage::ImportingVillages);
        let villages = self.fallback.villages();
        let count = self
            .guard(
                RunStage::ImportingVillages,
                self.loader.insert_villages(&villages),
            )
            .await?;
        imported.set(HierarchyLevel::Village, count);
        log::info!("Imported {count} villages (fallback)");

        self.enter(RunStage::Verifying);
        let issues = self
            .guard(RunStage::Verifying, self.loader.verify_integrity())
            .await?;
        let statistics = self
            .guard(RunStage::Verifying, self.loader.statistics())
            .await?;

        for issue in &issues {
            log::warn!("Integrity: {issue}");
        }

        let report = IngestionReport {
            mode,
            statistics,
            imported,
            issues,
            started_at,
            duration: start.elapsed(),
        };

        best_effort("Recording run history", self.record(&report)).await;

        self.enter(RunStage::Done);
        log_report(&report);

        Ok(report)
    }

    /// Probes the remote source without touching storage.
    pub async fn test_connection(&self) -> ConnectionStatus {
        log::info!("Testing connectivity to {} source", self.remote.name());

        match self.remote.fetch_provinces().await {
            Ok(provinces) => {
                log::info!("Connected: {} provinces available", provinces.len());
                ConnectionStatus::Connected {
                    provinces: provinces.len(),
                }
            }
            Err(e) => {
                log::warn!("Connection failed: {e}");
                ConnectionStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Empties all four hierarchy tables without reloading them.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Stage`] if any table cannot be emptied.
    pub async fn clean(&self) -> Result<(), IngestError> {
        self.enter(RunStage::Cleaning);
        log::info!("Cleaning existing data");
        self.guard(RunStage::Cleaning, self.loader.clean_all()).await?;
        self.enter(RunStage::Done);
        Ok(())
    }

    /// Fetches the province list once and picks the mode from the outcome.
    ///
    /// The returned provinces are the ones the run imports: the fetched
    /// list in remote mode, the embedded list otherwise.
    async fn select_mode(&self) -> (SourceMode, Vec<Province>) {
        log::info!("Testing connectivity");

        match self.remote.fetch_provinces().await {
            Ok(provinces) => {
                log::info!(
                    "Remote source reachable ({} provinces), using live data",
                    provinces.len()
                );
                (SourceMode::Remote, provinces)
            }
            Err(e) => {
                log::warn!("Remote source unavailable, using fallback data: {e}");
                (
                    SourceMode::Fallback {
                        reason: e.to_string(),
                    },
                    self.fallback.provinces(),
                )
            }
        }
    }

    /// Fetches regencies one province at a time while in remote mode.
    ///
    /// The embedded province list drives the iteration. On the first
    /// failed province, regencies already fetched are kept and that
    /// province and every later one are taken from the embedded dataset.
    async fn regencies(&self, mode: SourceMode) -> (Vec<Regency>, SourceMode) {
        if mode.is_fallback() {
            return (self.fallback.regencies(), mode);
        }

        let scaffold = self.fallback.provinces();
        self.progress.set_total(scaffold.len() as u64);

        let mut regencies = Vec::new();

        for (i, province) in scaffold.iter().enumerate() {
            self.progress
                .set_message(format!("Regencies of {}", province.name));

            match self.remote.fetch_regencies(province.id).await {
                Ok(batch) => {
                    regencies.extend(batch);
                    self.progress.inc(1);
                }
                Err(e) => {
                    self.progress.finish_and_clear();
                    log::warn!(
                        "Regency fetch for province {} failed, switching to fallback data: {e}",
                        province.id
                    );

                    for rest in &scaffold[i..] {
                        regencies.extend(self.fallback.regencies_by_province(rest.id));
                    }

                    return (
                        regencies,
                        SourceMode::Fallback {
                            reason: e.to_string(),
                        },
                    );
                }
            }
        }

        self.progress
            .finish(format!("Fetched {} regencies", regencies.len()));

        (regencies, mode)
    }

    async fn record(&self, report: &IngestionReport) -> Result<(), DbError> {
        let run = RunRecord {
            id: None,
            mode: report.mode.to_string(),
            fallback_reason: report.fallback_reason().map(ToString::to_string),
            statistics: report.statistics,
            issues: report.issues.len() as u64,
            started_at: report.started_at.to_rfc3339(),
            finished_at: chrono::Utc::now().to_rfc3339(),
        };

        runs::record_run(self.db, &run).await
    }

    fn enter(&self, stage: RunStage) {
        log::debug!("Stage: {} -> {stage}", self.stage.get());
        self.stage.set(stage);
    }

    /// Awaits a storage step, turning its error into a fatal stage error.
    async fn guard<T>(
        &self,
        stage: RunStage,
        work: impl Future<Output = Result<T, DbError>>,
    ) -> Result<T, IngestError> {
        work.await.map_err(|source| {
            log::error!("Ingestion failed during {stage}: {source}");
            self.stage.set(RunStage::Failed);
            IngestError::Stage { stage, source }
        })
    }
}

/// Awaits `work`, logging and discarding any error.
async fn best_effort<T>(label: &str, work: impl Future<Output = Result<T, DbError>>) -> Option<T> {
    match work.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{label} failed: {e}");
            None
        }
    }
}

fn log_report(report: &IngestionReport) {
    let stats = &report.statistics;

    log::info!("Ingestion complete in {:.1}s", report.duration.as_secs_f64());
    log::info!("  Provinces: {}", stats.provinces);
    log::info!("  Regencies: {}", stats.regencies);
    log::info!("  Districts: {}", stats.districts);
    log::info!("  Villages:  {}", stats.villages);
    log::info!("  Total:     {}", stats.total());

    match report.fallback_reason() {
        Some(reason) => log::info!("  Source:    used fallback data (reason: {reason})"),
        None => log::info!("  Source:    {}", report.mode),
    }

    if !report.issues.is_empty() {
        log::info!("  Integrity issues: {}", report.issues.len());
    }
}
