#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative hierarchy record types.
//!
//! Indonesia's administrative divisions form a strict four-level tree:
//! province (`provinsi`) → regency/city (`kabupaten`/`kota`) → district
//! (`kecamatan`) → village (`kelurahan`/`desa`). Every record carries the
//! official code assigned by the source as its id. Codes are never
//! renumbered: a regency's code is its province code followed by two
//! digits, a district's code appends three more, and so on.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use strum_macros::{AsRefStr, Display, EnumString};

/// Official administrative code of a region.
///
/// Codes arrive from the remote API as digit strings (`"3171"`) and are
/// stored as integers. Leading zeros never occur in real codes.
pub type RegionId = i64;

/// One of the four hierarchy levels, ordered parent-first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HierarchyLevel {
    /// Top-level province.
    Province,
    /// Regency or city, child of a province.
    Regency,
    /// District, child of a regency.
    District,
    /// Village, child of a district.
    Village,
}

impl HierarchyLevel {
    /// All levels in parent-first import order.
    pub const ALL: [Self; 4] = [Self::Province, Self::Regency, Self::District, Self::Village];

    /// Plural form, which is also the storage table name.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Province => "provinces",
            Self::Regency => "regencies",
            Self::District => "districts",
            Self::Village => "villages",
        }
    }

    /// The level directly above this one, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Province => None,
            Self::Regency => Some(Self::Province),
            Self::District => Some(Self::Regency),
            Self::Village => Some(Self::District),
        }
    }

    /// The level directly below this one, if any.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Province => Some(Self::Regency),
            Self::Regency => Some(Self::District),
            Self::District => Some(Self::Village),
            Self::Village => None,
        }
    }

    /// Name of the foreign-key column that child rows of this level use
    /// to reference it (e.g. `province_id`).
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        match self {
            Self::Province => "province_id",
            Self::Regency => "regency_id",
            Self::District => "district_id",
            Self::Village => "village_id",
        }
    }
}

/// Common accessors over the four record types.
pub trait HierarchyRecord {
    /// Level this record type belongs to.
    const LEVEL: HierarchyLevel;

    /// Source-assigned code.
    fn id(&self) -> RegionId;

    /// Code of the parent record, `None` for provinces.
    fn parent_id(&self) -> Option<RegionId>;

    /// Display name.
    fn name(&self) -> &str;
}

/// A province as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Two-digit province code (e.g. `31` for DKI Jakarta).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RegionId,
    /// Province name.
    pub name: String,
}

/// A regency or city as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    /// Four-digit regency code.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RegionId,
    /// Code of the owning province.
    #[serde(deserialize_with = "deserialize_id")]
    pub province_id: RegionId,
    /// Regency name (e.g. `"KOTA BANDUNG"`).
    pub name: String,
}

/// A district as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// Seven-digit district code.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RegionId,
    /// Code of the owning regency.
    #[serde(deserialize_with = "deserialize_id")]
    pub regency_id: RegionId,
    /// District name.
    pub name: String,
}

/// A village as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    /// Ten-digit village code.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RegionId,
    /// Code of the owning district.
    #[serde(deserialize_with = "deserialize_id")]
    pub district_id: RegionId,
    /// Village name.
    pub name: String,
}

impl HierarchyRecord for Province {
    const LEVEL: HierarchyLevel = HierarchyLevel::Province;

    fn id(&self) -> RegionId {
        self.id
    }

    fn parent_id(&self) -> Option<RegionId> {
        None
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HierarchyRecord for Regency {
    const LEVEL: HierarchyLevel = HierarchyLevel::Regency;

    fn id(&self) -> RegionId {
        self.id
    }

    fn parent_id(&self) -> Option<RegionId> {
        Some(self.province_id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HierarchyRecord for District {
    const LEVEL: HierarchyLevel = HierarchyLevel::District;

    fn id(&self) -> RegionId {
        self.id
    }

    fn parent_id(&self) -> Option<RegionId> {
        Some(self.regency_id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HierarchyRecord for Village {
    const LEVEL: HierarchyLevel = HierarchyLevel::Village;

    fn id(&self) -> RegionId {
        self.id
    }

    fn parent_id(&self) -> Option<RegionId> {
        Some(self.district_id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Accepts an id encoded either as a JSON number or as a digit string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<RegionId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse::<RegionId>()
            .map_err(|_| D::Error::custom(format!("invalid region code: {s:?}"))),
    }
}
