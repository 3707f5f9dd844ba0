// crates/thaiaddr-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod integrity;
pub mod load;
pub mod search;

pub use domain::{
    AddressDb, District, Entity, EntityKind, Province, SearchEntry, Subdistrict,
};
pub use integrity::{EXPECTED_DISTRICTS, EXPECTED_PROVINCES, EXPECTED_SUBDISTRICTS};

/// Maximum number of entries a search returns.
pub const SEARCH_LIMIT: usize = 12;

/// Queries shorter than this (in characters, after trimming) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
