//! thaiaddr-wasm: WebAssembly bindings for thaiaddr-core
//!
//! This crate exposes one JS class, `AddressIndex`, wrapping a built
//! `thaiaddr-core` index. It is what a browser address form needs for
//! cascading province → district → subdistrict dropdowns and a search box
//! that fills all three at once.
//!
//! What it provides
//! ----------------
//! - Construction from feed JSON text (`new AddressIndex(text)`), from a
//!   binary snapshot (`AddressIndex.fromSnapshot(bytes)`, gzip or plain), or
//!   from the sample feed embedded in the module (`AddressIndex.embedded()`)
//! - Hierarchy: `provinces()`, `districtsOf(code)`, `subdistrictsOf(code)`
//! - Lookup: `entity(kind, code)`, `address(subdistrictCode)`
//! - Search: `search(query)`, at most 12 hits, subdistricts first
//! - Health: `stats()`, `integrityReport()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { AddressIndex } from 'thaiaddr-wasm';
//!
//! async function main() {
//!   await init();
//!   const feed = await (await fetch('/data/thai_address.json')).text();
//!   const index = new AddressIndex(feed);
//!   if (!index.integrityReport().passed) {
//!     console.warn('address data looks incomplete');
//!   }
//!   for (const hit of index.search('10110')) {
//!     console.log(hit.kind, hit.nameTh, hit.districtNameTh, hit.postal);
//!   }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Returned objects use camelCase keys (`nameTh`, `provinceCode`, ...).
//! - Unknown codes give `null` (single entity) or `[]` (lists); only
//!   construction and an unknown entity kind throw.
use flate2::read::GzDecoder;
use serde::Serialize;
use std::io::Read;
use wasm_bindgen::prelude::*;

// Core Imports
use thaiaddr_core::api::{
    AddressView, DistrictView, EntityView, ProvinceView, SearchHitView, SubdistrictView,
};
use thaiaddr_core::loader::feed::parse_records;
use thaiaddr_core::{AddressLookup, AddressSelection, DefaultAddressDb, EntityKind};

// 1. Embed the sample feed
static EMBEDDED_FEED: &str = include_str!("../../thaiaddr-core/data/thai_address.json");

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"thaiaddr-wasm loaded".into());
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(js_err)
}

/// A built address index. Immutable once constructed.
#[wasm_bindgen]
pub struct AddressIndex {
    db: DefaultAddressDb,
}

impl AddressIndex {
    fn from_db(db: DefaultAddressDb) -> Self {
        let report = db.check_integrity();
        #[cfg(target_arch = "wasm32")]
        if !report.passed {
            web_sys::console::warn_1(
                &format!(
                    "thaiaddr: incomplete data ({} provinces, {} districts, {} subdistricts)",
                    report.province_count, report.district_count, report.subdistrict_count
                )
                .into(),
            );
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = report;
        Self { db }
    }

    /// The wrapped index, for Rust callers.
    pub fn db(&self) -> &DefaultAddressDb {
        &self.db
    }
}

#[wasm_bindgen]
impl AddressIndex {
    /// Builds the index from feed JSON text (an array of flat records).
    #[wasm_bindgen(constructor)]
    pub fn new(feed_json: &str) -> Result<AddressIndex, JsError> {
        let records = parse_records(feed_json.as_bytes()).map_err(js_err)?;
        Ok(Self::from_db(DefaultAddressDb::from_records(records)))
    }

    /// Loads a snapshot written by `thaiaddr build`, compressed or not.
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(bytes: &[u8]) -> Result<AddressIndex, JsError> {
        let db = if bytes.starts_with(&GZIP_MAGIC) {
            let mut decompressed = Vec::new();
            GzDecoder::new(bytes)
                .read_to_end(&mut decompressed)
                .map_err(js_err)?;
            DefaultAddressDb::from_bytes(&decompressed, None)
        } else {
            DefaultAddressDb::from_bytes(bytes, None)
        }
        .map_err(js_err)?;
        Ok(Self::from_db(db))
    }

    /// The sample feed compiled into the module.
    pub fn embedded() -> Result<AddressIndex, JsError> {
        Self::new(EMBEDDED_FEED)
    }

    /* ----------------------------------------------------------------------
       Health
    ---------------------------------------------------------------------- */

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.db.stats())
    }

    #[wasm_bindgen(js_name = integrityReport)]
    pub fn integrity_report(&self) -> Result<JsValue, JsError> {
        to_js(&self.db.integrity_report())
    }

    #[wasm_bindgen(js_name = provinceCount)]
    pub fn province_count(&self) -> usize {
        self.db.stats().provinces
    }

    /* ----------------------------------------------------------------------
       Hierarchy
    ---------------------------------------------------------------------- */

    pub fn provinces(&self) -> Result<JsValue, JsError> {
        let views: Vec<ProvinceView> = self.db.provinces().into_iter().map(Into::into).collect();
        to_js(&views)
    }

    #[wasm_bindgen(js_name = districtsOf)]
    pub fn districts_of(&self, province_code: u32) -> Result<JsValue, JsError> {
        let views: Vec<DistrictView> = self
            .db
            .districts_of(province_code)
            .into_iter()
            .map(Into::into)
            .collect();
        to_js(&views)
    }

    #[wasm_bindgen(js_name = subdistrictsOf)]
    pub fn subdistricts_of(&self, district_code: u32) -> Result<JsValue, JsError> {
        let views: Vec<SubdistrictView> = self
            .db
            .subdistricts_of(district_code)
            .into_iter()
            .map(Into::into)
            .collect();
        to_js(&views)
    }

    /* ----------------------------------------------------------------------
       Lookup
    ---------------------------------------------------------------------- */

    /// `kind` is `"province"`, `"district"` or `"subdistrict"`; `code` is
    /// the form-field text. Returns `null` when nothing matches.
    pub fn entity(&self, kind: &str, code: &str) -> Result<JsValue, JsError> {
        let kind: EntityKind = kind.parse().map_err(js_err)?;
        match self.db.entity_by_str(kind, code) {
            Some(e) => to_js(&EntityView::from(e)),
            None => Ok(JsValue::NULL),
        }
    }

    /// The full selection and formatted lines for a subdistrict, or `null`.
    pub fn address(&self, subdistrict_code: u32) -> Result<JsValue, JsError> {
        let sel = AddressSelection::from_subdistrict(&self.db, subdistrict_code);
        if sel.subdistrict.is_none() {
            return Ok(JsValue::NULL);
        }
        to_js(&AddressView::from(&sel))
    }

    /// Thai (`"th"`, default) or English (`"en"`) address line.
    #[wasm_bindgen(js_name = formatAddress)]
    pub fn format_address(&self, subdistrict_code: u32, lang: Option<String>) -> Option<String> {
        let sel = AddressSelection::from_subdistrict(&self.db, subdistrict_code);
        sel.subdistrict?;
        match lang.as_deref() {
            Some("en") => Some(sel.format_en()),
            _ => Some(sel.format_th()),
        }
    }

    /* ----------------------------------------------------------------------
       Search
    ---------------------------------------------------------------------- */

    pub fn search(&self, query: &str) -> Result<JsValue, JsError> {
        // Keep index order: subdistricts, then districts, then provinces.
        let array = js_sys::Array::new();
        for hit in self.db.search(query) {
            array.push(&to_js(&SearchHitView::from(hit))?);
        }
        Ok(array.into())
    }

    /// Codes of the search hits, in order.
    #[wasm_bindgen(js_name = searchCodes)]
    pub fn search_codes(&self, query: &str) -> Vec<u32> {
        self.db.search(query).iter().map(|h| h.code).collect()
    }
}
