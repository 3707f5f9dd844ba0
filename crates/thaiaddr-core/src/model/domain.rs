// crates/thaiaddr-core/src/model/domain.rs
use crate::error::AddrError;
use crate::traits::AddrBackend;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The master index.
///
/// Entities live in insertion-ordered vectors ("first occurrence wins");
/// the `*_slots` maps resolve a code to its position in O(1). Child lists
/// are pre-sorted by Thai name at build time, so hierarchy queries never
/// sort at query time. Nothing in here is mutated after the build: a reload
/// replaces the whole value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AddressDb<B: AddrBackend> {
    pub(crate) provinces: Vec<Province<B>>,
    pub(crate) districts: Vec<District<B>>,
    pub(crate) subdistricts: Vec<Subdistrict<B>>,

    pub(crate) province_slots: HashMap<u32, u32>,
    pub(crate) district_slots: HashMap<u32, u32>,
    pub(crate) subdistrict_slots: HashMap<u32, u32>,

    /// Province slots in Thai collation order.
    pub(crate) provinces_sorted: Vec<u32>,
    /// province code -> district slots, Thai collation order.
    pub(crate) districts_by_province: HashMap<u32, Vec<u32>>,
    /// district code -> subdistrict slots, Thai collation order.
    pub(crate) subdistricts_by_district: HashMap<u32, Vec<u32>>,

    /// Subdistricts, then districts, then provinces.
    pub(crate) search_index: Vec<SearchEntry<B>>,
}

/// A province (จังหวัด).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Province<B: AddrBackend> {
    pub code: u32,
    pub name_th: B::Str,
    pub name_en: B::Str,
}

/// A district (อำเภอ, or เขต in Bangkok).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct District<B: AddrBackend> {
    pub code: u32,
    pub province_code: Option<u32>,
    pub name_th: B::Str,
    pub name_en: B::Str,
}

/// A subdistrict (ตำบล, or แขวง in Bangkok). Postal codes live here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Subdistrict<B: AddrBackend> {
    pub code: u32,
    pub district_code: Option<u32>,
    pub province_code: Option<u32>,
    pub name_th: B::Str,
    pub name_en: B::Str,
    pub postal: Option<B::Str>,
}

/// Discriminator for the three administrative levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Province,
    District,
    Subdistrict,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Province => "province",
            Self::District => "district",
            Self::Subdistrict => "subdistrict",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "province" => Ok(Self::Province),
            "district" => Ok(Self::District),
            "subdistrict" | "sub_district" | "sub-district" => Ok(Self::Subdistrict),
            other => Err(AddrError::InvalidData(format!("unknown entity kind: {other}"))),
        }
    }
}

/// A borrowed view of any one entity, as returned by `entity(kind, code)`.
#[derive(Debug)]
pub enum Entity<'a, B: AddrBackend> {
    Province(&'a Province<B>),
    District(&'a District<B>),
    Subdistrict(&'a Subdistrict<B>),
}

// Manual impls: a derive would demand `B: Copy`.
impl<B: AddrBackend> Clone for Entity<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: AddrBackend> Copy for Entity<'_, B> {}

/// One row of the flat search index.
///
/// `province_code` and `district_code` name the province and district the
/// entry belongs to, including itself: a province entry carries its own
/// code as `province_code`, a district entry its own code as
/// `district_code`. Together with the parent names resolved at build time
/// this is enough to fill a province/district/subdistrict selection without
/// another lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchEntry<B: AddrBackend> {
    pub kind: EntityKind,
    pub code: u32,
    pub name_th: B::Str,
    pub name_en: B::Str,
    pub postal: Option<B::Str>,
    pub province_code: Option<u32>,
    pub district_code: Option<u32>,
    pub province_name_th: Option<B::Str>,
    pub province_name_en: Option<B::Str>,
    pub district_name_th: Option<B::Str>,
    pub district_name_en: Option<B::Str>,
    /// `name_en` folded once at build time for the English predicate.
    pub(crate) name_en_folded: String,
}

impl<B: AddrBackend> AddressDb<B> {
    /// Provinces in feed order.
    pub fn all_provinces(&self) -> &[Province<B>] {
        &self.provinces
    }

    /// Districts in feed order.
    pub fn all_districts(&self) -> &[District<B>] {
        &self.districts
    }

    /// Subdistricts in feed order.
    pub fn all_subdistricts(&self) -> &[Subdistrict<B>] {
        &self.subdistricts
    }

    /// The flat search index, in scan order.
    pub fn search_index(&self) -> &[SearchEntry<B>] {
        &self.search_index
    }
}

impl<B: AddrBackend> Province<B> {
    pub fn name_th(&self) -> &str {
        self.name_th.as_ref()
    }

    pub fn name_en(&self) -> &str {
        self.name_en.as_ref()
    }
}

impl<B: AddrBackend> District<B> {
    pub fn name_th(&self) -> &str {
        self.name_th.as_ref()
    }

    pub fn name_en(&self) -> &str {
        self.name_en.as_ref()
    }
}

impl<B: AddrBackend> Subdistrict<B> {
    pub fn name_th(&self) -> &str {
        self.name_th.as_ref()
    }

    pub fn name_en(&self) -> &str {
        self.name_en.as_ref()
    }

    pub fn postal(&self) -> Option<&str> {
        self.postal.as_ref().map(|s| s.as_ref())
    }
}

impl<B: AddrBackend> SearchEntry<B> {
    pub fn name_th(&self) -> &str {
        self.name_th.as_ref()
    }

    pub fn name_en(&self) -> &str {
        self.name_en.as_ref()
    }

    pub fn postal(&self) -> Option<&str> {
        self.postal.as_ref().map(|s| s.as_ref())
    }

    pub fn province_name_th(&self) -> Option<&str> {
        self.province_name_th.as_ref().map(|s| s.as_ref())
    }

    pub fn province_name_en(&self) -> Option<&str> {
        self.province_name_en.as_ref().map(|s| s.as_ref())
    }

    pub fn district_name_th(&self) -> Option<&str> {
        self.district_name_th.as_ref().map(|s| s.as_ref())
    }

    pub fn district_name_en(&self) -> Option<&str> {
        self.district_name_en.as_ref().map(|s| s.as_ref())
    }
}

impl<'a, B: AddrBackend> Entity<'a, B> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Province(_) => EntityKind::Province,
            Self::District(_) => EntityKind::District,
            Self::Subdistrict(_) => EntityKind::Subdistrict,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Province(p) => p.code,
            Self::District(d) => d.code,
            Self::Subdistrict(s) => s.code,
        }
    }

    pub fn name_th(&self) -> &'a str {
        match *self {
            Self::Province(p) => p.name_th(),
            Self::District(d) => d.name_th(),
            Self::Subdistrict(s) => s.name_th(),
        }
    }

    pub fn name_en(&self) -> &'a str {
        match *self {
            Self::Province(p) => p.name_en(),
            Self::District(d) => d.name_en(),
            Self::Subdistrict(s) => s.name_en(),
        }
    }

    pub fn as_subdistrict(&self) -> Option<&'a Subdistrict<B>> {
        match *self {
            Self::Subdistrict(s) => Some(s),
            _ => None,
        }
    }
}
