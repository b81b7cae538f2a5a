#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Row types as stored in and read back from the region database.
//!
//! These are distinct from the source-facing records in
//! `wilayah_region_models`: a stored row carries the load timestamps and a
//! uniform `parent_id` column regardless of level.

use serde::{Deserialize, Serialize};
use wilayah_region_models::{HierarchyLevel, RegionId};

/// A stored row from any of the four hierarchy tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    /// Level (and therefore table) the row came from.
    pub level: HierarchyLevel,
    /// Source-assigned code.
    pub id: RegionId,
    /// Parent code, `None` for provinces.
    pub parent_id: Option<RegionId>,
    /// Display name.
    pub name: String,
    /// RFC 3339 timestamp of the load that wrote this row.
    pub created_at: String,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}

/// Row count per hierarchy table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatistics {
    /// Rows in `provinces`.
    pub provinces: u64,
    /// Rows in `regencies`.
    pub regencies: u64,
    /// Rows in `districts`.
    pub districts: u64,
    /// Rows in `villages`.
    pub villages: u64,
}

impl TableStatistics {
    /// Count for a single level.
    #[must_use]
    pub const fn get(&self, level: HierarchyLevel) -> u64 {
        match level {
            HierarchyLevel::Province => self.provinces,
            HierarchyLevel::Regency => self.regencies,
            HierarchyLevel::District => self.districts,
            HierarchyLevel::Village => self.villages,
        }
    }

    /// Sets the count for a single level.
    pub const fn set(&mut self, level: HierarchyLevel, count: u64) {
        match level {
            HierarchyLevel::Province => self.provinces = count,
            HierarchyLevel::Regency => self.regencies = count,
            HierarchyLevel::District => self.districts = count,
            HierarchyLevel::Village => self.villages = count,
        }
    }

    /// Sum across all four tables.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.provinces + self.regencies + self.districts + self.villages
    }

    /// `true` when every table is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Summary of one completed ingestion run, as kept in `ingestion_runs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// Auto-assigned row id (`None` before insertion).
    pub id: Option<i64>,
    /// `"remote"` or `"fallback"`.
    pub mode: String,
    /// Why the run fell back, if it did.
    pub fallback_reason: Option<String>,
    /// Final table counts.
    pub statistics: TableStatistics,
    /// Number of integrity issues detected after the load.
    pub issues: u64,
    /// RFC 3339 start time.
    pub started_at: String,
    /// RFC 3339 finish time.
    pub finished_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_by_level() {
        let mut stats = TableStatistics::default();
        assert!(stats.is_empty());

        for (i, level) in HierarchyLevel::ALL.into_iter().enumerate() {
            stats.set(level, (i as u64 + 1) * 10);
        }

        assert_eq!(stats.get(HierarchyLevel::Province), 10);
        assert_eq!(stats.get(HierarchyLevel::Village), 40);
        assert_eq!(stats.total(), 100);
        assert!(!stats.is_empty());
    }
}
