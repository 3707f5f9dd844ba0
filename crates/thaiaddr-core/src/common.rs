// crates/thaiaddr-core/src/common.rs
use crate::traits::AddrBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the index.
///
/// Returned by [`AddressLookup::stats`](crate::AddressLookup::stats), these
/// counts reflect the de-duplicated in-memory index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
    pub provinces: usize,
    pub districts: usize,
    pub subdistricts: usize,
    pub search_entries: usize,
}

/// Outcome of the integrity check. Purely advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub province_count: usize,
    pub district_count: usize,
    pub subdistrict_count: usize,
    pub passed: bool,
}

/// Default backend: plain `String`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultBackend;

impl AddrBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}
