//! Actions shared by the CLI subcommands and the interactive menu.
//!
//! Each function prints a human-readable result to stdout; diagnostics go
//! through `log`.

use dialoguer::Confirm;
use switchy_database::Database;
use wilayah_cli_utils::{IndicatifProgress, MultiProgress};
use wilayah_database::loader::BulkLoader;
use wilayah_database::models::RegionRow;
use wilayah_database::{queries, runs};
use wilayah_ingest_models::{ConnectionStatus, IngestionReport};
use wilayah_region_models::{HierarchyLevel, RegionId};
use wilayah_source::fallback::FallbackSource;
use wilayah_source::remote::RemoteSource;

use crate::Orchestrator;

/// Which part of the hierarchy `show` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    /// All provinces.
    Provinces,
    /// Regencies of a province.
    Regencies(RegionId),
    /// Districts of a regency.
    Districts(RegionId),
    /// Villages of a district.
    Villages(RegionId),
}

impl ShowTarget {
    /// Picks the deepest parent given, or provinces if none is.
    #[must_use]
    pub const fn from_parents(
        province: Option<RegionId>,
        regency: Option<RegionId>,
        district: Option<RegionId>,
    ) -> Self {
        match (district, regency, province) {
            (Some(id), _, _) => Self::Villages(id),
            (None, Some(id), _) => Self::Districts(id),
            (None, None, Some(id)) => Self::Regencies(id),
            (None, None, None) => Self::Provinces,
        }
    }
}

/// Runs a full ingestion against the public API with the embedded dataset
/// as fallback, and prints the final statistics block.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the run fails.
pub async fn run_ingestion(
    db: &dyn Database,
    multi: &MultiProgress,
) -> Result<IngestionReport, Box<dyn std::error::Error>> {
    let remote = RemoteSource::from_default_endpoint()?;
    let progress = IndicatifProgress::fetch_bar(multi, "Fetching regencies");

    let report = Orchestrator::new(db, &remote)
        .with_progress(Some(progress))
        .run()
        .await?;

    print_report(&report);

    Ok(report)
}

/// Probes the public API and prints the outcome.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn test_connection(
    db: &dyn Database,
) -> Result<ConnectionStatus, Box<dyn std::error::Error>> {
    let remote = RemoteSource::from_default_endpoint()?;
    let status = Orchestrator::new(db, &remote).test_connection().await;

    match &status {
        ConnectionStatus::Connected { provinces } => {
            println!("Connected to {} ({provinces} provinces)", remote.base_url());
        }
        ConnectionStatus::Failed { reason } => {
            println!("Connection failed: {reason}");
        }
    }

    Ok(status)
}

/// Empties all four hierarchy tables, asking first unless `assume_yes`.
///
/// Returns `false` if the user declined.
///
/// # Errors
///
/// Returns an error if the prompt or the clean fails.
pub async fn clean(db: &dyn Database, assume_yes: bool) -> Result<bool, Box<dyn std::error::Error>> {
    if !assume_yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all provinces, regencies, districts and villages?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(false);
        }
    }

    // Cleaning never reads from the source
    let offline = FallbackSource::new();
    Orchestrator::new(db, &offline).clean().await?;
    println!("All hierarchy tables emptied.");

    Ok(true)
}

/// Prints row counts and integrity findings.
///
/// # Errors
///
/// Returns an error if a query fails.
pub async fn show_stats(db: &dyn Database) -> Result<(), Box<dyn std::error::Error>> {
    let loader = BulkLoader::new(db);
    let stats = loader.statistics().await?;
    let issues = loader.verify_integrity().await?;

    for level in HierarchyLevel::ALL {
        println!("{:<12} {:>8}", level.plural(), stats.get(level));
    }
    println!("{:<12} {:>8}", "total", stats.total());

    if issues.is_empty() {
        println!("\nNo integrity issues.");
    } else {
        println!("\nIntegrity issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }

    Ok(())
}

/// Lists stored regions.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn show_regions(
    db: &dyn Database,
    target: ShowTarget,
) -> Result<Vec<RegionRow>, Box<dyn std::error::Error>> {
    let rows = match target {
        ShowTarget::Provinces => queries::list_level(db, HierarchyLevel::Province).await?,
        ShowTarget::Regencies(id) => queries::children_of(db, HierarchyLevel::Regency, id).await?,
        ShowTarget::Districts(id) => {
            queries::children_of(db, HierarchyLevel::District, id).await?
        }
        ShowTarget::Villages(id) => queries::children_of(db, HierarchyLevel::Village, id).await?,
    };

    if rows.is_empty() {
        println!("No rows.");
    } else {
        println!("{:<14} NAME", "ID");
        println!("{}", "-".repeat(50));
        for row in &rows {
            println!("{:<14} {}", row.id, row.name);
        }
    }

    Ok(rows)
}

/// Prints the most recent ingestion runs.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn show_history(db: &dyn Database, limit: u32) -> Result<(), Box<dyn std::error::Error>> {
    let history = runs::recent_runs(db, limit).await?;

    if history.is_empty() {
        println!("No ingestion runs recorded.");
        return Ok(());
    }

    println!(
        "{:<27} {:<9} {:>5} {:>6} {:>6} {:>6} {:>6}",
        "STARTED", "MODE", "PROV", "REG", "DIST", "VILL", "ISSUES"
    );
    println!("{}", "-".repeat(75));
    for run in &history {
        println!(
            "{:<27} {:<9} {:>5} {:>6} {:>6} {:>6} {:>6}",
            run.started_at,
            run.mode,
            run.statistics.provinces,
            run.statistics.regencies,
            run.statistics.districts,
            run.statistics.villages,
            run.issues,
        );
        if let Some(reason) = &run.fallback_reason {
            println!("  fallback reason: {reason}");
        }
    }

    Ok(())
}

fn print_report(report: &IngestionReport) {
    let stats = &report.statistics;

    println!();
    println!("Provinces: {:>8}", stats.provinces);
    println!("Regencies: {:>8}", stats.regencies);
    println!("Districts: {:>8}", stats.districts);
    println!("Villages:  {:>8}", stats.villages);
    println!("Total:     {:>8}", stats.total());

    match report.fallback_reason() {
        Some(reason) => println!("Source:    used fallback data (reason: {reason})"),
        None => println!("Source:    remote API"),
    }

    if !report.issues.is_empty() {
        println!("\nIntegrity issues:");
        for issue in &report.issues {
            println!("  - {issue}");
        }
    }

    println!("\nCompleted in {:.1}s", report.duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use wilayah_database::db::test_support::{remove, temp_db};
    use wilayah_region_models::Province;

    use super::*;

    #[test]
    fn deepest_parent_wins() {
        assert_eq!(ShowTarget::from_parents(None, None, None), ShowTarget::Provinces);
        assert_eq!(
            ShowTarget::from_parents(Some(31), None, None),
            ShowTarget::Regencies(31)
        );
        assert_eq!(
            ShowTarget::from_parents(Some(31), Some(3171), None),
            ShowTarget::Districts(3171)
        );
        assert_eq!(
            ShowTarget::from_parents(Some(31), Some(3171), Some(3_171_010)),
            ShowTarget::Villages(3_171_010)
        );
    }

    #[tokio::test]
    async fn clean_without_prompt_empties_tables() {
        let (db, path) = temp_db("commands_clean").await;
        let loader = BulkLoader::new(db.as_ref());
        loader
            .insert_provinces(&[Province {
                id: 11,
                name: "ACEH".to_string(),
            }])
            .await
            .unwrap();

        assert!(clean(db.as_ref(), true).await.unwrap());
        assert!(loader.statistics().await.unwrap().is_empty());

        drop(db);
        remove(&path);
    }
}
