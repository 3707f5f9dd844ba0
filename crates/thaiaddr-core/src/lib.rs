// crates/thaiaddr-core/src/lib.rs
//! # thaiaddr-core
//!
//! An in-memory index of Thailand's administrative geography: 77 provinces
//! (จังหวัด), 928 districts (อำเภอ/เขต) and 7436 subdistricts (ตำบล/แขวง)
//! with their postal codes.
//!
//! The index is built once from a flat feed and is read-only afterwards.
//! It answers cascaded lookups (province → district → subdistrict) and
//! free-text / postal-code search.
//!
//! ```rust
//! use thaiaddr_core::{AddressDb, AddressLookup, DefaultBackend, RecordRaw};
//!
//! let db = AddressDb::<DefaultBackend>::from_records(vec![RecordRaw {
//!     province_code: Some(10),
//!     province_name_th: Some("กรุงเทพมหานคร".into()),
//!     province_name_en: Some("Bangkok".into()),
//!     district_code: Some(1033),
//!     district_name_th: Some("คลองเตย".into()),
//!     district_name_en: Some("Khlong Toei".into()),
//!     subdistrict_code: Some(103301),
//!     subdistrict_name_th: Some("คลองเตย".into()),
//!     subdistrict_name_en: Some("Khlong Toei".into()),
//!     postal_code: Some("10110".into()),
//! }]);
//!
//! assert_eq!(db.districts_of(10).len(), 1);
//! assert_eq!(db.search("10110")[0].code, 103301);
//! ```

pub mod address;
pub mod api; // JSON / JS views
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;
pub mod traits;
// Shared Raw Input
pub mod raw;

// Re-exports
pub use crate::address::AddressSelection;
pub use crate::common::{DbStats, DefaultBackend, IntegrityReport};
pub use crate::error::{AddrError, Result};
pub use crate::model::{
    AddressDb, District, Entity, EntityKind, Province, SearchEntry, Subdistrict, SEARCH_LIMIT,
};
pub use crate::raw::RecordRaw;
pub use crate::traits::{AddrBackend, AddressLookup};

/// Convenient alias for the default backend.
pub type DefaultAddressDb = AddressDb<DefaultBackend>;

pub mod prelude {
    //! Common types and traits for applications.
    pub use crate::address::AddressSelection;
    pub use crate::api::{AddressView, EntityView, SearchHitView};
    pub use crate::common::{DbStats, DefaultBackend, IntegrityReport};
    pub use crate::error::{AddrError, Result};
    pub use crate::model::{
        AddressDb, District, Entity, EntityKind, Province, SearchEntry, Subdistrict,
    };
    pub use crate::raw::RecordRaw;
    pub use crate::traits::{AddrBackend, AddressLookup};
    pub use crate::DefaultAddressDb;
}
