// crates/thaiaddr-core/src/traits.rs
use crate::common::{DbStats, IntegrityReport};
use crate::model::{District, Entity, EntityKind, Province, SearchEntry, Subdistrict};
use serde::{Deserialize, Serialize};

/// Storage backend for the strings held by the index.
///
/// This abstraction allows the crate to swap how textual data are stored
/// internally (for example to use interned or inline strings) without
/// changing the public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated type can be serialized/deserialized so a built index can be
/// snapshotted via bincode.
pub trait AddrBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// The query interface offered to presentation layers.
///
/// Every method is total: unknown codes, absent parents and short queries
/// produce `None` or an empty `Vec`, never an error.
pub trait AddressLookup<B: AddrBackend> {
    fn stats(&self) -> DbStats;

    /// Advisory comparison of the indexed counts against the national totals.
    fn integrity_report(&self) -> IntegrityReport;

    /// All provinces, sorted by Thai name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thaiaddr_core::{AddressDb, AddressLookup, DefaultBackend};
    ///
    /// let db = AddressDb::<DefaultBackend>::load().unwrap();
    /// for p in db.provinces().iter().take(5) {
    ///     println!("{} {} ({})", p.code, p.name_th(), p.name_en());
    /// }
    /// ```
    fn provinces(&self) -> Vec<&Province<B>>;

    /// Districts whose `province_code` equals `province_code`, sorted by Thai name.
    fn districts_of(&self, province_code: u32) -> Vec<&District<B>>;

    /// Subdistricts whose `district_code` equals `district_code`, sorted by Thai name.
    fn subdistricts_of(&self, district_code: u32) -> Vec<&Subdistrict<B>>;

    fn province(&self, code: u32) -> Option<&Province<B>>;
    fn district(&self, code: u32) -> Option<&District<B>>;
    fn subdistrict(&self, code: u32) -> Option<&Subdistrict<B>>;

    /// Parent province of a district, `None` when the reference dangles.
    fn province_of(&self, district: &District<B>) -> Option<&Province<B>>;

    /// Parent district of a subdistrict, `None` when the reference dangles.
    fn district_of(&self, subdistrict: &Subdistrict<B>) -> Option<&District<B>>;

    fn entity(&self, kind: EntityKind, code: u32) -> Option<Entity<'_, B>>;

    /// Like [`AddressLookup::entity`] but takes the code as text, the way
    /// form fields deliver it. Empty or non-numeric codes are "not found".
    fn entity_by_str(&self, kind: EntityKind, code: &str) -> Option<Entity<'_, B>> {
        let code = code.trim().parse::<u32>().ok()?;
        self.entity(kind, code)
    }

    /// Free-text search over Thai names, English names and postal codes.
    ///
    /// Leading and trailing whitespace in `query` is ignored, and what
    /// remains must be at least two characters long.
    ///
    /// Returns at most [`SEARCH_LIMIT`](crate::model::SEARCH_LIMIT) entries,
    /// subdistricts first, in index order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thaiaddr_core::{AddressDb, AddressLookup, DefaultBackend};
    ///
    /// let db = AddressDb::<DefaultBackend>::load().unwrap();
    /// for hit in db.search("10110") {
    ///     println!("{:?} {} {}", hit.kind, hit.name_th(), hit.postal().unwrap_or("-"));
    /// }
    /// ```
    fn search(&self, query: &str) -> Vec<&SearchEntry<B>>;
}
