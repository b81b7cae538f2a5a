//! Database location and lifecycle.

use std::path::{Path, PathBuf};

use switchy_database::Database;
use switchy_database_connection::init_sqlite_rusqlite;

use crate::DbError;

/// Default path for the region database, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/wilayah.db";

/// Environment variable that overrides [`DEFAULT_DB_PATH`].
pub const DB_PATH_ENV: &str = "WILAYAH_DB_PATH";

/// Resolves the database path: explicit argument, then `WILAYAH_DB_PATH`,
/// then [`DEFAULT_DB_PATH`].
#[must_use]
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || {
            std::env::var(DB_PATH_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from)
        },
        Path::to_path_buf,
    )
}

/// Opens (or creates) the region `SQLite` database and ensures the schema
/// exists.
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or schema creation
/// fails.
pub async fn open_db(path: &Path) -> Result<Box<dyn Database>, DbError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = init_sqlite_rusqlite(Some(path)).map_err(|e| DbError::Database(e.to_string()))?;

    ensure_schema(db.as_ref()).await?;

    log::debug!("Opened region database at {}", path.display());

    Ok(db)
}

/// Creates all tables if they don't already exist.
async fn ensure_schema(db: &dyn Database) -> Result<(), DbError> {
    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS provinces (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        )",
    )
    .await?;

    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS regencies (
            id          INTEGER PRIMARY KEY,
            province_id INTEGER NOT NULL REFERENCES provinces(id),
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        )",
    )
    .await?;

    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS districts (
            id          INTEGER PRIMARY KEY,
            regency_id  INTEGER NOT NULL REFERENCES regencies(id),
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        )",
    )
    .await?;

    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS villages (
            id          INTEGER PRIMARY KEY,
            district_id INTEGER NOT NULL REFERENCES districts(id),
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        )",
    )
    .await?;

    db.exec_raw("CREATE INDEX IF NOT EXISTS idx_regencies_province ON regencies (province_id)")
        .await?;
    db.exec_raw("CREATE INDEX IF NOT EXISTS idx_districts_regency ON districts (regency_id)")
        .await?;
    db.exec_raw("CREATE INDEX IF NOT EXISTS idx_villages_district ON villages (district_id)")
        .await?;

    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS ingestion_runs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            mode            TEXT NOT NULL,
            fallback_reason TEXT,
            provinces       INTEGER NOT NULL,
            regencies       INTEGER NOT NULL,
            districts       INTEGER NOT NULL,
            villages        INTEGER NOT NULL,
            issues          INTEGER NOT NULL,
            started_at      TEXT NOT NULL,
            finished_at     TEXT NOT NULL
        )",
    )
    .await?;

    // SQLite leaves foreign keys off by default
    db.exec_raw("PRAGMA foreign_keys = ON").await?;

    Ok(())
}

/// Throwaway databases for tests in this and dependent crates.
#[cfg(any(test, feature = "test-support"))]
#[allow(clippy::missing_panics_doc)]
pub mod test_support {
    use std::path::PathBuf;

    use switchy_database::Database;

    /// Opens a fresh database file under the system temp directory.
    ///
    /// `name` must be unique per test so parallel tests never share a file.
    pub async fn temp_db(name: &str) -> (Box<dyn Database>, PathBuf) {
        let path = std::env::temp_dir().join(format!("wilayah_db_test_{name}.db"));
        remove(&path);
        let db = super::open_db(&path).await.unwrap();
        (db, path)
    }

    /// Deletes a database file and its journal side files.
    pub fn remove(path: &std::path::Path) {
        let _ = std::fs::remove_file(path);
        for suffix in ["-wal", "-shm", "-journal"] {
            let mut side = path.as_os_str().to_owned();
            side.push(suffix);
            let _ = std::fs::remove_file(PathBuf::from(side));
        }
    }
}
