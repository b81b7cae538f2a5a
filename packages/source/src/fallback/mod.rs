//! Offline data source backed by the embedded sample in [`data`].
//!
//! Every `*_by_*` accessor is a filter over the corresponding full list,
//! so each level has exactly one table of truth.

pub mod data;

use async_trait::async_trait;
use wilayah_region_models::{District, Province, Regency, RegionId, Village};

use crate::{RegionSource, SourceError};

/// Hierarchy data compiled into the binary. Lookups cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

#[allow(clippy::unused_self)]
impl FallbackSource {
    /// Creates the fallback source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns every province.
    #[must_use]
    pub fn provinces(&self) -> Vec<Province> {
        data::PROVINCES
            .iter()
            .map(|&(id, name)| Province {
                id,
                name: name.to_string(),
            })
            .collect()
    }

    /// Returns the full sampled regency list.
    #[must_use]
    pub fn regencies(&self) -> Vec<Regency> {
        data::REGENCIES
            .iter()
            .map(|&(id, province_id, name)| Regency {
                id,
                province_id,
                name: name.to_string(),
            })
            .collect()
    }

    /// Returns the regencies belonging to `province_id`.
    #[must_use]
    pub fn regencies_by_province(&self, province_id: RegionId) -> Vec<Regency> {
        self.regencies()
            .into_iter()
            .filter(|r| r.province_id == province_id)
            .collect()
    }

    /// Returns the full sampled district list.
    #[must_use]
    pub fn districts(&self) -> Vec<District> {
        data::DISTRICTS
            .iter()
            .map(|&(id, regency_id, name)| District {
                id,
                regency_id,
                name: name.to_string(),
            })
            .collect()
    }

    /// Returns the districts belonging to `regency_id`.
    #[must_use]
    pub fn districts_by_regency(&self, regency_id: RegionId) -> Vec<District> {
        self.districts()
            .into_iter()
            .filter(|d| d.regency_id == regency_id)
            .collect()
    }

    /// Returns the full sampled village list.
    #[must_use]
    pub fn villages(&self) -> Vec<Village> {
        data::VILLAGES
            .iter()
            .map(|&(id, district_id, name)| Village {
                id,
                district_id,
                name: name.to_string(),
            })
            .collect()
    }

    /// Returns the villages belonging to `district_id`.
    #[must_use]
    pub fn villages_by_district(&self, district_id: RegionId) -> Vec<Village> {
        self.villages()
            .into_iter()
            .filter(|v| v.district_id == district_id)
            .collect()
    }
}

#[async_trait]
impl RegionSource for FallbackSource {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn fetch_provinces(&self) -> Result<Vec<Province>, SourceError> {
        Ok(self.provinces())
    }

    async fn fetch_regencies(&self, province_id: RegionId) -> Result<Vec<Regency>, SourceError> {
        Ok(self.regencies_by_province(province_id))
    }

    async fn fetch_districts(&self, regency_id: RegionId) -> Result<Vec<District>, SourceError> {
        Ok(self.districts_by_regency(regency_id))
    }

    async fn fetch_villages(&self, district_id: RegionId) -> Result<Vec<Village>, SourceError> {
        Ok(self.villages_by_district(district_id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use wilayah_region_models::HierarchyRecord;

    use super::*;

    fn ids<T: HierarchyRecord>(records: &[T]) -> BTreeSet<RegionId> {
        records.iter().map(HierarchyRecord::id).collect()
    }

    #[test]
    fn covers_every_province() {
        let provinces = FallbackSource.provinces();
        assert_eq!(provinces.len(), 34);
        assert_eq!(ids(&provinces).len(), 34, "duplicate province code");
    }

    #[test]
    fn codes_are_unique_per_level() {
        let source = FallbackSource;
        assert_eq!(ids(&source.regencies()).len(), source.regencies().len());
        assert_eq!(ids(&source.districts()).len(), source.districts().len());
        assert_eq!(ids(&source.villages()).len(), source.villages().len());
    }

    #[test]
    fn every_child_has_a_parent_in_the_dataset() {
        let source = FallbackSource;
        let provinces = ids(&source.provinces());
        let regencies = ids(&source.regencies());
        let districts = ids(&source.districts());

        for r in source.regencies() {
            assert!(provinces.contains(&r.province_id), "orphan regency {}", r.id);
        }
        for d in source.districts() {
            assert!(regencies.contains(&d.regency_id), "orphan district {}", d.id);
        }
        for v in source.villages() {
            assert!(districts.contains(&v.district_id), "orphan village {}", v.id);
        }
    }

    #[test]
    fn child_codes_extend_parent_codes() {
        let source = FallbackSource;
        for r in source.regencies() {
            assert_eq!(r.id / 100, r.province_id, "regency {}", r.id);
        }
        for d in source.districts() {
            assert_eq!(d.id / 1000, d.regency_id, "district {}", d.id);
        }
        for v in source.villages() {
            assert_eq!(v.id / 1000, v.district_id, "village {}", v.id);
        }
    }

    #[test]
    fn filtered_views_are_subsets_of_full_lists() {
        let source = FallbackSource;

        let all_regencies = source.regencies();
        let mut regrouped = 0;
        for p in source.provinces() {
            let subset = source.regencies_by_province(p.id);
            regrouped += subset.len();
            for r in &subset {
                assert!(all_regencies.contains(r));
                assert_eq!(r.province_id, p.id);
            }
        }
        assert_eq!(regrouped, all_regencies.len());

        let all_districts = source.districts();
        for r in &all_regencies {
            for d in source.districts_by_regency(r.id) {
                assert!(all_districts.contains(&d));
            }
        }

        let all_villages = source.villages();
        for d in &all_districts {
            for v in source.villages_by_district(d.id) {
                assert!(all_villages.contains(&v));
            }
        }
    }

    #[test]
    fn fourth_level_is_only_sampled() {
        let source = FallbackSource;
        let with_villages: BTreeSet<RegionId> =
            source.villages().iter().map(|v| v.district_id).collect();
        assert!(with_villages.len() < source.districts().len());
        assert!(source.regencies_by_province(94).is_empty());
    }

    #[tokio::test]
    async fn trait_lookups_never_fail() {
        let source = FallbackSource;
        assert_eq!(source.fetch_provinces().await.unwrap().len(), 34);
        assert_eq!(source.fetch_regencies(31).await.unwrap().len(), 6);
        assert_eq!(source.fetch_districts(3173).await.unwrap().len(), 8);
        assert_eq!(source.fetch_villages(3_471_040).await.unwrap().len(), 7);
        assert!(source.fetch_villages(1).await.unwrap().is_empty());
    }
}
