//! History of completed ingestion runs.

use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};
use wilayah_database_models::{RunRecord, TableStatistics};

use crate::DbError;

/// Appends a run summary to `ingestion_runs`.
///
/// # Errors
///
/// Returns [`DbError`] if the insert fails.
pub async fn record_run(db: &dyn Database, run: &RunRecord) -> Result<(), DbError> {
    db.exec_raw_params(
        "INSERT INTO ingestion_runs
            (mode, fallback_reason, provinces, regencies, districts, villages,
             issues, started_at, finished_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        &[
            DatabaseValue::String(run.mode.clone()),
            run.fallback_reason
                .as_ref()
                .map_or(DatabaseValue::Null, |r| DatabaseValue::String(r.clone())),
            DatabaseValue::Int64(to_i64(run.statistics.provinces)),
            DatabaseValue::Int64(to_i64(run.statistics.regencies)),
            DatabaseValue::Int64(to_i64(run.statistics.districts)),
            DatabaseValue::Int64(to_i64(run.statistics.villages)),
            DatabaseValue::Int64(to_i64(run.issues)),
            DatabaseValue::String(run.started_at.clone()),
            DatabaseValue::String(run.finished_at.clone()),
        ],
    )
    .await?;

    Ok(())
}

/// Returns the most recent runs, newest first.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn recent_runs(db: &dyn Database, limit: u32) -> Result<Vec<RunRecord>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT * FROM ingestion_runs ORDER BY id DESC LIMIT $1",
            &[DatabaseValue::Int64(i64::from(limit))],
        )
        .await?;

    Ok(rows.iter().map(row_to_run).collect())
}

fn row_to_run(row: &switchy_database::Row) -> RunRecord {
    let count = |col: &str| -> u64 {
        let value: i64 = row.to_value(col).unwrap_or(0);
        u64::try_from(value).unwrap_or(0)
    };

    RunRecord {
        id: row.to_value("id").unwrap_or(None),
        mode: row.to_value("mode").unwrap_or_default(),
        fallback_reason: row.to_value("fallback_reason").unwrap_or(None),
        statistics: TableStatistics {
            provinces: count("provinces"),
            regencies: count("regencies"),
            districts: count("districts"),
            villages: count("villages"),
        },
        issues: count("issues"),
        started_at: row.to_value("started_at").unwrap_or_default(),
        finished_at: row.to_value("finished_at").unwrap_or_default(),
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
