// crates/thaiaddr-core/src/address.rs
//! Normalized address strings for a resolved province/district/subdistrict
//! selection.
use crate::model::{AddressDb, District, EntityKind, Province, SearchEntry, Subdistrict};
use crate::traits::{AddrBackend, AddressLookup};

/// Bangkok uses เขต / แขวง instead of อำเภอ / ตำบล and is written without
/// the จังหวัด prefix.
pub const BANGKOK_PROVINCE_CODE: u32 = 10;

/// A cascaded selection. Any level may be missing when the feed has a
/// dangling reference or the user has not picked that level yet.
#[derive(Debug)]
pub struct AddressSelection<'a, B: AddrBackend> {
    pub province: Option<&'a Province<B>>,
    pub district: Option<&'a District<B>>,
    pub subdistrict: Option<&'a Subdistrict<B>>,
}

impl<'a, B: AddrBackend> AddressSelection<'a, B> {
    /// Resolves the full chain for a subdistrict code. Unknown codes give an
    /// empty selection.
    pub fn from_subdistrict(db: &'a AddressDb<B>, code: u32) -> Self {
        let subdistrict = db.subdistrict(code);
        let district = subdistrict.and_then(|s| db.district_of(s));
        let province = district
            .and_then(|d| db.province_of(d))
            .or_else(|| subdistrict.and_then(|s| db.province(s.province_code?)));
        Self {
            province,
            district,
            subdistrict,
        }
    }

    /// Fills the selection from a search hit, the way picking a suggestion
    /// fills the three dropdowns.
    pub fn from_search_entry(db: &'a AddressDb<B>, entry: &SearchEntry<B>) -> Self {
        match entry.kind {
            EntityKind::Subdistrict => Self::from_subdistrict(db, entry.code),
            EntityKind::District => Self {
                province: entry.province_code.and_then(|c| db.province(c)),
                district: db.district(entry.code),
                subdistrict: None,
            },
            EntityKind::Province => Self {
                province: db.province(entry.code),
                district: None,
                subdistrict: None,
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.district.is_some() && self.subdistrict.is_some()
    }

    pub fn postal(&self) -> Option<&'a str> {
        self.subdistrict.and_then(|s| s.postal())
    }

    fn is_bangkok(&self) -> bool {
        self.province.is_some_and(|p| p.code == BANGKOK_PROVINCE_CODE)
    }

    /// Thai address line, e.g. `แขวงคลองเตย เขตคลองเตย กรุงเทพมหานคร 10110`
    /// or `ตำบลศรีภูมิ อำเภอเมืองเชียงใหม่ จังหวัดเชียงใหม่ 50200`.
    pub fn format_th(&self) -> String {
        let (sub_prefix, dist_prefix, prov_prefix) = if self.is_bangkok() {
            ("แขวง", "เขต", "")
        } else {
            ("ตำบล", "อำเภอ", "จังหวัด")
        };

        let mut parts: Vec<String> = Vec::with_capacity(4);
        if let Some(s) = self.subdistrict.filter(|s| !s.name_th().is_empty()) {
            parts.push(format!("{sub_prefix}{}", s.name_th()));
        }
        if let Some(d) = self.district.filter(|d| !d.name_th().is_empty()) {
            parts.push(format!("{dist_prefix}{}", d.name_th()));
        }
        if let Some(p) = self.province.filter(|p| !p.name_th().is_empty()) {
            parts.push(format!("{prov_prefix}{}", p.name_th()));
        }
        if let Some(postal) = self.postal() {
            parts.push(postal.to_owned());
        }
        parts.join(" ")
    }

    /// English address line, e.g. `Khlong Toei, Khlong Toei, Bangkok 10110`.
    pub fn format_en(&self) -> String {
        let names: Vec<&str> = [
            self.subdistrict.map(|s| s.name_en()),
            self.district.map(|d| d.name_en()),
            self.province.map(|p| p.name_en()),
        ]
        .into_iter()
        .flatten()
        .filter(|n| !n.is_empty())
        .collect();

        let line = names.join(", ");
        match self.postal() {
            Some(postal) if line.is_empty() => postal.to_owned(),
            Some(postal) => format!("{line} {postal}"),
            None => line,
        }
    }
}
