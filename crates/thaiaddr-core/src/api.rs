// crates/thaiaddr-core/src/api.rs
//! Owned, serializable views for front-ends (CLI `--json`, WASM).
//!
//! Field names are camelCase so the JSON matches what browser code expects.
use crate::address::AddressSelection;
use crate::model::{District, Entity, EntityKind, Province, SearchEntry, Subdistrict};
use crate::traits::AddrBackend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceView {
    pub code: u32,
    pub name_th: String,
    pub name_en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictView {
    pub code: u32,
    pub province_code: Option<u32>,
    pub name_th: String,
    pub name_en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdistrictView {
    pub code: u32,
    pub district_code: Option<u32>,
    pub province_code: Option<u32>,
    pub name_th: String,
    pub name_en: String,
    pub postal: Option<String>,
}

/// Any one entity, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityView {
    Province(ProvinceView),
    District(DistrictView),
    Subdistrict(SubdistrictView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHitView {
    pub kind: EntityKind,
    pub code: u32,
    pub name_th: String,
    pub name_en: String,
    pub postal: Option<String>,
    pub province_code: Option<u32>,
    pub district_code: Option<u32>,
    pub province_name_th: Option<String>,
    pub province_name_en: Option<String>,
    pub district_name_th: Option<String>,
    pub district_name_en: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub province: Option<ProvinceView>,
    pub district: Option<DistrictView>,
    pub subdistrict: Option<SubdistrictView>,
    pub postal: Option<String>,
    pub address_th: String,
    pub address_en: String,
}

impl<B: AddrBackend> From<&Province<B>> for ProvinceView {
    fn from(p: &Province<B>) -> Self {
        Self {
            code: p.code,
            name_th: p.name_th().to_owned(),
            name_en: p.name_en().to_owned(),
        }
    }
}

impl<B: AddrBackend> From<&District<B>> for DistrictView {
    fn from(d: &District<B>) -> Self {
        Self {
            code: d.code,
            province_code: d.province_code,
            name_th: d.name_th().to_owned(),
            name_en: d.name_en().to_owned(),
        }
    }
}

impl<B: AddrBackend> From<&Subdistrict<B>> for SubdistrictView {
    fn from(s: &Subdistrict<B>) -> Self {
        Self {
            code: s.code,
            district_code: s.district_code,
            province_code: s.province_code,
            name_th: s.name_th().to_owned(),
            name_en: s.name_en().to_owned(),
            postal: s.postal().map(str::to_owned),
        }
    }
}

impl<B: AddrBackend> From<Entity<'_, B>> for EntityView {
    fn from(e: Entity<'_, B>) -> Self {
        match e {
            Entity::Province(p) => Self::Province(p.into()),
            Entity::District(d) => Self::District(d.into()),
            Entity::Subdistrict(s) => Self::Subdistrict(s.into()),
        }
    }
}

impl<B: AddrBackend> From<&SearchEntry<B>> for SearchHitView {
    fn from(e: &SearchEntry<B>) -> Self {
        Self {
            kind: e.kind,
            code: e.code,
            name_th: e.name_th().to_owned(),
            name_en: e.name_en().to_owned(),
            postal: e.postal().map(str::to_owned),
            province_code: e.province_code,
            district_code: e.district_code,
            province_name_th: e.province_name_th().map(str::to_owned),
            province_name_en: e.province_name_en().map(str::to_owned),
            district_name_th: e.district_name_th().map(str::to_owned),
            district_name_en: e.district_name_en().map(str::to_owned),
        }
    }
}

impl<B: AddrBackend> From<&AddressSelection<'_, B>> for AddressView {
    fn from(sel: &AddressSelection<'_, B>) -> Self {
        Self {
            province: sel.province.map(Into::into),
            district: sel.district.map(Into::into),
            subdistrict: sel.subdistrict.map(Into::into),
            postal: sel.postal().map(str::to_owned),
            address_th: sel.format_th(),
            address_en: sel.format_en(),
        }
    }
}
