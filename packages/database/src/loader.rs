//! Bulk writes into the four hierarchy tables.
//!
//! [`BulkLoader`] is the only writer of `provinces`, `regencies`,
//! `districts` and `villages`. Every load is a full replace: callers run
//! [`BulkLoader::clean_all`] and then insert each level parent-first.
//! Inserts are chunked into multi-row statements of [`BATCH_SIZE`] rows
//! with foreign-key enforcement relaxed for the whole call.

use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};
use wilayah_database_models::TableStatistics;
use wilayah_region_models::{
    District, HierarchyLevel, HierarchyRecord, Province, Regency, Village,
};

use crate::DbError;
use crate::constraints::{ForeignKeyToggle, with_relaxed_foreign_keys};

/// Rows per multi-row `INSERT`, for every table.
pub const BATCH_SIZE: usize = 1000;

/// Tables in the order [`BulkLoader::clean_all`] empties them.
pub const CLEAN_ORDER: [HierarchyLevel; 4] = [
    HierarchyLevel::Village,
    HierarchyLevel::District,
    HierarchyLevel::Regency,
    HierarchyLevel::Province,
];

/// Writes hierarchy records and reports on what is stored.
pub struct BulkLoader<'a> {
    db: &'a dyn Database,
}

impl<'a> BulkLoader<'a> {
    /// Creates a loader over an open database.
    #[must_use]
    pub const fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Empties all four hierarchy tables.
    ///
    /// Enforcement is switched off before each table is emptied and turned
    /// back on once after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Truncate`] naming the first table that could not
    /// be emptied, or [`DbError::Constraint`] if enforcement could not be
    /// toggled.
    pub async fn clean_all(&self) -> Result<(), DbError> {
        with_relaxed_foreign_keys(self, async {
            for level in CLEAN_ORDER {
                let table = level.plural();
                self.set_foreign_keys(false).await?;

                let deleted = self
                    .db
                    .exec_raw_params(&format!("DELETE FROM {table}"), &[])
                    .await
                    .map_err(|e| DbError::Truncate {
                        table,
                        message: e.to_string(),
                    })?;

                log::debug!("Truncated {table} ({deleted} rows)");
            }
            Ok(())
        })
        .await
    }

    /// Inserts provinces, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Insert`] for the first failing batch.
    pub async fn insert_provinces(&self, records: &[Province]) -> Result<u64, DbError> {
        self.insert_rows(records).await
    }

    /// Inserts regencies, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Insert`] for the first failing batch.
    pub async fn insert_regencies(&self, records: &[Regency]) -> Result<u64, DbError> {
        self.insert_rows(records).await
    }

    /// Inserts districts, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Insert`] for the first failing batch.
    pub async fn insert_districts(&self, records: &[District]) -> Result<u64, DbError> {
        self.insert_rows(records).await
    }

    /// Inserts villages, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Insert`] for the first failing batch.
    pub async fn insert_villages(&self, records: &[Village]) -> Result<u64, DbError> {
        self.insert_rows(records).await
    }

    /// Writes `records` in source order, [`BATCH_SIZE`] rows per statement.
    ///
    /// Batches that succeed before a failing one stay written.
    async fn insert_rows<R: HierarchyRecord>(&self, records: &[R]) -> Result<u64, DbError> {
        let table = R::LEVEL.plural();

        if records.is_empty() {
            log::debug!("No {table} to insert");
            return Ok(0);
        }

        let now = chrono::Utc::now().to_rfc3339();

        with_relaxed_foreign_keys(self, async {
            let mut written = 0u64;

            for (batch, chunk) in records.chunks(BATCH_SIZE).enumerate() {
                let (sql, params) = batch_statement(chunk, &now);

                let affected = self.db.exec_raw_params(&sql, &params).await.map_err(|e| {
                    DbError::Insert {
                        table,
                        batch,
                        message: e.to_string(),
                    }
                })?;

                written += affected;
                log::debug!("Inserted batch {batch} into {table} ({affected} rows)");
            }

            Ok(written)
        })
        .await
    }

    /// Row count for every hierarchy table.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a count query fails.
    pub async fn statistics(&self) -> Result<TableStatistics, DbError> {
        let mut stats = TableStatistics::default();

        for level in HierarchyLevel::ALL {
            let count = self
                .count(&format!("SELECT COUNT(*) AS count FROM {}", level.plural()))
                .await?;
            stats.set(level, count);
        }

        Ok(stats)
    }

    /// Walks the hierarchy and describes anything incomplete.
    ///
    /// Reports parents with no children and children whose parent row is
    /// missing. An empty list means nothing was found. Findings are
    /// advisory and never change stored data.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a query fails.
    pub async fn verify_integrity(&self) -> Result<Vec<String>, DbError> {
        let mut issues = Vec::new();

        for parent in [
            HierarchyLevel::Province,
            HierarchyLevel::Regency,
            HierarchyLevel::District,
        ] {
            let Some(child) = parent.child() else {
                continue;
            };

            let childless = self
                .count(&format!(
                    "SELECT COUNT(*) AS count FROM {parents} p
                     LEFT JOIN {children} c ON c.{key} = p.id
                     WHERE c.id IS NULL",
                    parents = parent.plural(),
                    children = child.plural(),
                    key = parent.key_column(),
                ))
                .await?;

            if childless > 0 {
                issues.push(format!(
                    "{childless} {} without {}",
                    parent.plural(),
                    child.plural()
                ));
            }
        }

        for child in [
            HierarchyLevel::Regency,
            HierarchyLevel::District,
            HierarchyLevel::Village,
        ] {
            let Some(parent) = child.parent() else {
                continue;
            };

            let orphans = self
                .count(&format!(
                    "SELECT COUNT(*) AS count FROM {children} c
                     LEFT JOIN {parents} p ON p.id = c.{key}
                     WHERE p.id IS NULL",
                    parents = parent.plural(),
                    children = child.plural(),
                    key = parent.key_column(),
                ))
                .await?;

            if orphans > 0 {
                issues.push(format!(
                    "{orphans} {} reference missing {}",
                    child.plural(),
                    parent.plural()
                ));
            }
        }

        Ok(issues)
    }

    /// Whether the storage engine currently enforces foreign keys.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the setting cannot be read.
    pub async fn foreign_keys_enabled(&self) -> Result<bool, DbError> {
        let rows = self.db.query_raw_params("PRAGMA foreign_keys", &[]).await?;

        let value: i64 = match rows.first() {
            Some(row) => row
                .to_value("foreign_keys")
                .map_err(|e| DbError::Conversion {
                    message: format!("Failed to parse foreign_keys setting: {e}"),
                })?,
            None => 0,
        };

        Ok(value != 0)
    }

    async fn count(&self, sql: &str) -> Result<u64, DbError> {
        let rows = self.db.query_raw_params(sql, &[]).await?;

        let count: i64 = match rows.first() {
            Some(row) => row
                .to_value("count")
                .map_err(|e| DbError::Conversion {
                    message: format!("Failed to parse row count: {e}"),
                })?,
            None => 0,
        };

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

impl ForeignKeyToggle for BulkLoader<'_> {
    async fn set_foreign_keys(&self, enabled: bool) -> Result<(), DbError> {
        let sql = if enabled {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };

        self.db
            .exec_raw(sql)
            .await
            .map_err(|e| DbError::Constraint {
                message: e.to_string(),
            })?;

        // Per-connection setting; confirm it took effect.
        let actual = self
            .foreign_keys_enabled()
            .await
            .map_err(|e| DbError::Constraint {
                message: e.to_string(),
            })?;

        if actual != enabled {
            return Err(DbError::Constraint {
                message: format!("foreign_keys is {actual} after requesting {enabled}"),
            });
        }

        Ok(())
    }
}

/// Builds one multi-row `INSERT` for `chunk`.
///
/// The shared timestamp is `$1` and each row's own values follow in
/// order, so placeholders first appear in ascending order.
fn batch_statement<R: HierarchyRecord>(
    chunk: &[R],
    now: &str,
) -> (String, Vec<DatabaseValue>) {
    let level = R::LEVEL;
    let parent_column = level.parent().map(HierarchyLevel::key_column);

    let mut sql = format!("INSERT INTO {} (created_at, updated_at, id, ", level.plural());
    if let Some(column) = parent_column {
        sql.push_str(column);
        sql.push_str(", ");
    }
    sql.push_str("name) VALUES ");

    let per_row = if parent_column.is_some() { 3 } else { 2 };
    let mut params = Vec::with_capacity(1 + chunk.len() * per_row);
    params.push(DatabaseValue::String(now.to_string()));

    for (i, record) in chunk.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }

        sql.push_str("($1, $1");
        params.push(DatabaseValue::Int64(record.id()));
        sql.push_str(&format!(", ${}", params.len()));

        if parent_column.is_some() {
            params.push(
                record
                    .parent_id()
                    .map_or(DatabaseValue::Null, DatabaseValue::Int64),
            );
            sql.push_str(&format!(", ${}", params.len()));
        }

        params.push(DatabaseValue::String(record.name().to_string()));
        sql.push_str(&format!(", ${})", params.len()));
    }

    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{remove, temp_db};
    use crate::queries;

    fn province(id: i64, name: &str) -> Province {
        Province {
            id,
            name: name.to_string(),
        }
    }

    fn regency(id: i64, province_id: i64, name: &str) -> Regency {
        Regency {
            id,
            province_id,
            name: name.to_string(),
        }
    }

    #[test]
    fn statement_places_timestamp_first() {
        let rows = [regency(3171, 31, "A"), regency(3172, 31, "B")];
        let (sql, params) = batch_statement(&rows, "2024-01-01T00:00:00Z");

        assert_eq!(
            sql,
            "INSERT INTO regencies (created_at, updated_at, id, province_id, name) VALUES \
             ($1, $1, $2, $3, $4), ($1, $1, $5, $6, $7)"
        );
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn province_statement_has_no_parent_column() {
        let (sql, params) = batch_statement(&[province(11, "ACEH")], "t");

        assert_eq!(
            sql,
            "INSERT INTO provinces (created_at, updated_at, id, name) VALUES ($1, $1, $2, $3)"
        );
        assert_eq!(params.len(), 3);
    }

    #[tokio::test]
    async fn inserts_preserve_ids() {
        let (db, path) = temp_db("loader_ids").await;
        let loader = BulkLoader::new(db.as_ref());

        let written = loader
            .insert_provinces(&[province(31, "DKI JAKARTA"), province(11, "ACEH")])
            .await
            .unwrap();
        assert_eq!(written, 2);

        loader
            .insert_regencies(&[regency(3171, 31, "KOTA JAKARTA SELATAN")])
            .await
            .unwrap();

        let provinces = queries::list_level(db.as_ref(), HierarchyLevel::Province)
            .await
            .unwrap();
        let ids: Vec<i64> = provinces.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![11, 31]);

        let regencies = queries::children_of(db.as_ref(), HierarchyLevel::Regency, 31)
            .await
            .unwrap();
        assert_eq!(regencies.len(), 1);
        assert_eq!(regencies[0].id, 3171);
        assert_eq!(regencies[0].parent_id, Some(31));
        assert!(!regencies[0].created_at.is_empty());

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn large_insert_spans_batches() {
        let (db, path) = temp_db("loader_batches").await;
        let loader = BulkLoader::new(db.as_ref());

        loader.insert_provinces(&[province(11, "ACEH")]).await.unwrap();

        let regencies: Vec<Regency> = (0..2500)
            .map(|i| regency(110_000 + i, 11, &format!("R{i}")))
            .collect();
        let written = loader.insert_regencies(&regencies).await.unwrap();
        assert_eq!(written, 2500);

        let stats = loader.statistics().await.unwrap();
        assert_eq!(stats.provinces, 1);
        assert_eq!(stats.regencies, 2500);

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn clean_all_empties_every_table() {
        let (db, path) = temp_db("loader_clean").await;
        let loader = BulkLoader::new(db.as_ref());

        loader.insert_provinces(&[province(11, "ACEH")]).await.unwrap();
        loader
            .insert_regencies(&[regency(1101, 11, "KAB. SIMEULUE")])
            .await
            .unwrap();
        loader
            .insert_districts(&[District {
                id: 1_101_010,
                regency_id: 1101,
                name: "TEUPAH SELATAN".to_string(),
            }])
            .await
            .unwrap();
        loader
            .insert_villages(&[Village {
                id: 1_101_010_001,
                district_id: 1_101_010,
                name: "LATIUNG".to_string(),
            }])
            .await
            .unwrap();

        assert_eq!(loader.statistics().await.unwrap().total(), 4);

        loader.clean_all().await.unwrap();
        assert!(loader.statistics().await.unwrap().is_empty());

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn duplicate_id_fails_with_batch_context() {
        let (db, path) = temp_db("loader_duplicate").await;
        let loader = BulkLoader::new(db.as_ref());

        let err = loader
            .insert_provinces(&[province(11, "ACEH"), province(11, "ACEH AGAIN")])
            .await
            .unwrap_err();

        assert!(
            matches!(err, DbError::Insert { table: "provinces", batch: 0, .. }),
            "unexpected error: {err}"
        );

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn failure_in_second_batch_keeps_first() {
        let (db, path) = temp_db("loader_second_batch").await;
        let loader = BulkLoader::new(db.as_ref());

        loader.insert_provinces(&[province(11, "ACEH")]).await.unwrap();

        let mut regencies: Vec<Regency> = (0..1500)
            .map(|i| regency(110_000 + i, 11, &format!("R{i}")))
            .collect();
        regencies[1200].id = 110_000;

        let err = loader.insert_regencies(&regencies).await.unwrap_err();
        assert!(
            matches!(err, DbError::Insert { table: "regencies", batch: 1, .. }),
            "unexpected error: {err}"
        );

        let stats = loader.statistics().await.unwrap();
        assert_eq!(stats.regencies, 1000);

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn enforcement_is_back_on_after_failed_insert() {
        let (db, path) = temp_db("loader_enforcement_restored").await;
        let loader = BulkLoader::new(db.as_ref());

        assert!(loader.foreign_keys_enabled().await.unwrap());

        loader.insert_provinces(&[province(11, "ACEH")]).await.unwrap();
        loader
            .insert_regencies(&[regency(1101, 11, "A"), regency(1101, 11, "B")])
            .await
            .unwrap_err();

        assert!(loader.foreign_keys_enabled().await.unwrap());

        let orphan = db
            .exec_raw_params(
                "INSERT INTO regencies (created_at, updated_at, id, province_id, name) \
                 VALUES ($1, $1, $2, $3, $4)",
                &[
                    DatabaseValue::String("2024-01-01T00:00:00Z".to_string()),
                    DatabaseValue::Int64(9901),
                    DatabaseValue::Int64(99),
                    DatabaseValue::String("ORPHAN".to_string()),
                ],
            )
            .await;
        assert!(orphan.is_err(), "orphan regency was accepted");

        assert_eq!(loader.statistics().await.unwrap().regencies, 0);

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn verify_reports_childless_parents() {
        let (db, path) = temp_db("loader_childless").await;
        let loader = BulkLoader::new(db.as_ref());

        loader
            .insert_provinces(&[province(11, "ACEH"), province(12, "SUMATERA UTARA")])
            .await
            .unwrap();
        loader
            .insert_regencies(&[regency(1101, 11, "KAB. SIMEULUE")])
            .await
            .unwrap();

        let issues = loader.verify_integrity().await.unwrap();
        assert!(issues.contains(&"1 provinces without regencies".to_string()));
        assert!(issues.contains(&"1 regencies without districts".to_string()));

        drop(db);
        remove(&path);
    }

    #[tokio::test]
    async fn verify_on_empty_store_is_clean() {
        let (db, path) = temp_db("loader_empty_verify").await;
        let loader = BulkLoader::new(db.as_ref());

        assert!(loader.verify_integrity().await.unwrap().is_empty());

        drop(db);
        remove(&path);
    }
}
