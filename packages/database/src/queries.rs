//! Read queries over the hierarchy tables.

use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};
use wilayah_database_models::RegionRow;
use wilayah_region_models::{HierarchyLevel, RegionId};

use crate::DbError;

/// Lists every stored row of `level`, ordered by id.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn list_level(db: &dyn Database, level: HierarchyLevel) -> Result<Vec<RegionRow>, DbError> {
    let sql = format!(
        "SELECT id, {parent} AS parent_id, name, created_at, updated_at FROM {table} ORDER BY id",
        parent = parent_select(level),
        table = level.plural(),
    );

    let rows = db.query_raw_params(&sql, &[]).await?;
    rows.iter().map(|row| to_region_row(level, row)).collect()
}

/// Lists the stored rows of `level` whose parent is `parent_id`, ordered by
/// id.
///
/// For [`HierarchyLevel::Province`] there is no parent column, so the result
/// is always empty.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn children_of(
    db: &dyn Database,
    level: HierarchyLevel,
    parent_id: RegionId,
) -> Result<Vec<RegionRow>, DbError> {
    let Some(parent) = level.parent() else {
        return Ok(Vec::new());
    };

    let sql = format!(
        "SELECT id, {key} AS parent_id, name, created_at, updated_at FROM {table}
         WHERE {key} = $1
         ORDER BY id",
        key = parent.key_column(),
        table = level.plural(),
    );

    let rows = db
        .query_raw_params(&sql, &[DatabaseValue::Int64(parent_id)])
        .await?;
    rows.iter().map(|row| to_region_row(level, row)).collect()
}

/// Looks up a single row by id.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn find(
    db: &dyn Database,
    level: HierarchyLevel,
    id: RegionId,
) -> Result<Option<RegionRow>, DbError> {
    let sql = format!(
        "SELECT id, {parent} AS parent_id, name, created_at, updated_at FROM {table} WHERE id = $1",
        parent = parent_select(level),
        table = level.plural(),
    );

    let rows = db
        .query_raw_params(&sql, &[DatabaseValue::Int64(id)])
        .await?;

    rows.first().map(|row| to_region_row(level, row)).transpose()
}

fn parent_select(level: HierarchyLevel) -> &'static str {
    level.parent().map_or("NULL", HierarchyLevel::key_column)
}

fn to_region_row(level: HierarchyLevel, row: &switchy_database::Row) -> Result<RegionRow, DbError> {
    let id: i64 = row.to_value("id").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse {level} id: {e}"),
    })?;

    Ok(RegionRow {
        level,
        id,
        parent_id: row.to_value("parent_id").unwrap_or(None),
        name: row.to_value("name").unwrap_or_default(),
        created_at: row.to_value("created_at").unwrap_or_default(),
        updated_at: row.to_value("updated_at").unwrap_or_default(),
    })
}
