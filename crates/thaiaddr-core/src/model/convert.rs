// crates/thaiaddr-core/src/model/convert.rs
use crate::model::domain::{AddressDb, District, EntityKind, Province, SearchEntry, Subdistrict};
use crate::raw::RecordRaw;
use crate::text::{fold_en, ThaiCollator};
use crate::traits::AddrBackend;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

fn str_or_empty<B: AddrBackend>(s: &Option<String>) -> B::Str {
    B::str_from(s.as_deref().unwrap_or(""))
}

impl<B: AddrBackend> AddressDb<B> {
    /// **Index Builder:** flat feed rows -> de-duplicated maps, child lists
    /// and search index.
    ///
    /// Never fails. The first row seen for a code defines the entity; later
    /// rows with the same code are dropped. Rows that reference a parent
    /// that never appears are still indexed.
    pub fn from_records(records: Vec<RecordRaw>) -> Self {
        from_raw(&records)
    }

    /// Replaces every structure with a fresh build from `records`.
    ///
    /// The new index is built completely before it is swapped in.
    pub fn reload(&mut self, records: Vec<RecordRaw>) {
        *self = Self::from_records(records);
    }

    /// An index with no entities.
    pub fn empty() -> Self {
        Self {
            provinces: Vec::new(),
            districts: Vec::new(),
            subdistricts: Vec::new(),
            province_slots: HashMap::new(),
            district_slots: HashMap::new(),
            subdistrict_slots: HashMap::new(),
            provinces_sorted: Vec::new(),
            districts_by_province: HashMap::new(),
            subdistricts_by_district: HashMap::new(),
            search_index: Vec::new(),
        }
    }
}

/// **Standard Converter:** Raw -> Index.
pub fn from_raw<B: AddrBackend>(records: &[RecordRaw]) -> AddressDb<B> {
    let mut db = AddressDb::<B>::empty();
    let mut duplicate_rows = 0usize;

    for r in records {
        if let Some(code) = r.province_code {
            if let Entry::Vacant(slot) = db.province_slots.entry(code) {
                slot.insert(db.provinces.len() as u32);
                db.provinces.push(Province {
                    code,
                    name_th: str_or_empty::<B>(&r.province_name_th),
                    name_en: str_or_empty::<B>(&r.province_name_en),
                });
            }
        }

        if let Some(code) = r.district_code {
            if let Entry::Vacant(slot) = db.district_slots.entry(code) {
                slot.insert(db.districts.len() as u32);
                db.districts.push(District {
                    code,
                    province_code: r.province_code,
                    name_th: str_or_empty::<B>(&r.district_name_th),
                    name_en: str_or_empty::<B>(&r.district_name_en),
                });
            }
        }

        // Province and district columns repeat on every row; only a repeated
        // subdistrict code means a genuinely duplicated row.
        if let Some(code) = r.subdistrict_code {
            match db.subdistrict_slots.entry(code) {
                Entry::Vacant(slot) => {
                    slot.insert(db.subdistricts.len() as u32);
                    db.subdistricts.push(Subdistrict {
                        code,
                        district_code: r.district_code,
                        province_code: r.province_code,
                        name_th: str_or_empty::<B>(&r.subdistrict_name_th),
                        name_en: str_or_empty::<B>(&r.subdistrict_name_en),
                        postal: r.postal_code.as_deref().map(B::str_from),
                    });
                }
                Entry::Occupied(_) => duplicate_rows += 1,
            }
        }
    }

    derive_lookups(&mut db);
    debug!(
        rows = records.len(),
        provinces = db.provinces.len(),
        districts = db.districts.len(),
        subdistricts = db.subdistricts.len(),
        duplicate_rows,
        "address index built"
    );

    db
}

/// Builds the child lists and the search index from the entity vectors and
/// their slot maps.
pub(crate) fn derive_lookups<B: AddrBackend>(db: &mut AddressDb<B>) {
    build_child_lists(db);
    db.search_index = build_search_index(db);

    let inconsistent = count_inconsistent(db);
    if inconsistent > 0 {
        warn!(
            inconsistent,
            "subdistricts disagree with their district about the province; indexed as given"
        );
    }
}

/// Sorts every slot once by Thai collation and then distributes the slots
/// into per-parent buckets, which therefore come out sorted as well. The
/// sort is stable, so equal names keep feed order.
fn build_child_lists<B: AddrBackend>(db: &mut AddressDb<B>) {
    let collator = ThaiCollator::new();

    let mut order: Vec<u32> = (0..db.provinces.len() as u32).collect();
    order.sort_by(|&a, &b| {
        collator.compare(db.provinces[a as usize].name_th(), db.provinces[b as usize].name_th())
    });
    db.provinces_sorted = order;

    let mut order: Vec<u32> = (0..db.districts.len() as u32).collect();
    order.sort_by(|&a, &b| {
        collator.compare(db.districts[a as usize].name_th(), db.districts[b as usize].name_th())
    });
    for slot in order {
        if let Some(parent) = db.districts[slot as usize].province_code {
            db.districts_by_province.entry(parent).or_default().push(slot);
        }
    }

    let mut order: Vec<u32> = (0..db.subdistricts.len() as u32).collect();
    order.sort_by(|&a, &b| {
        collator.compare(
            db.subdistricts[a as usize].name_th(),
            db.subdistricts[b as usize].name_th(),
        )
    });
    for slot in order {
        if let Some(parent) = db.subdistricts[slot as usize].district_code {
            db.subdistricts_by_district
                .entry(parent)
                .or_default()
                .push(slot);
        }
    }
}

fn province_at<B: AddrBackend>(db: &AddressDb<B>, code: Option<u32>) -> Option<&Province<B>> {
    let slot = *db.province_slots.get(&code?)?;
    db.provinces.get(slot as usize)
}

fn district_at<B: AddrBackend>(db: &AddressDb<B>, code: Option<u32>) -> Option<&District<B>> {
    let slot = *db.district_slots.get(&code?)?;
    db.districts.get(slot as usize)
}

/// Subdistricts first, then districts, then provinces. Search results are
/// truncated in this order, which favours the most specific kind.
fn build_search_index<B: AddrBackend>(db: &AddressDb<B>) -> Vec<SearchEntry<B>> {
    let mut index =
        Vec::with_capacity(db.provinces.len() + db.districts.len() + db.subdistricts.len());

    for s in &db.subdistricts {
        let province = province_at(db, s.province_code);
        let district = district_at(db, s.district_code);
        index.push(SearchEntry {
            kind: EntityKind::Subdistrict,
            code: s.code,
            name_th: s.name_th.clone(),
            name_en: s.name_en.clone(),
            postal: s.postal.clone(),
            province_code: s.province_code,
            district_code: s.district_code,
            province_name_th: province.map(|p| p.name_th.clone()),
            province_name_en: province.map(|p| p.name_en.clone()),
            district_name_th: district.map(|d| d.name_th.clone()),
            district_name_en: district.map(|d| d.name_en.clone()),
            name_en_folded: fold_en(s.name_en()),
        });
    }

    for d in &db.districts {
        let province = province_at(db, d.province_code);
        index.push(SearchEntry {
            kind: EntityKind::District,
            code: d.code,
            name_th: d.name_th.clone(),
            name_en: d.name_en.clone(),
            postal: None,
            province_code: d.province_code,
            district_code: Some(d.code),
            province_name_th: province.map(|p| p.name_th.clone()),
            province_name_en: province.map(|p| p.name_en.clone()),
            district_name_th: None,
            district_name_en: None,
            name_en_folded: fold_en(d.name_en()),
        });
    }

    for p in &db.provinces {
        index.push(SearchEntry {
            kind: EntityKind::Province,
            code: p.code,
            name_th: p.name_th.clone(),
            name_en: p.name_en.clone(),
            postal: None,
            province_code: Some(p.code),
            district_code: None,
            province_name_th: None,
            province_name_en: None,
            district_name_th: None,
            district_name_en: None,
            name_en_folded: fold_en(p.name_en()),
        });
    }

    index
}

/// Subdistricts whose district is unknown or sits in another province.
/// Under first-wins de-duplication this happens when the feed disagrees
/// with itself about a district's province.
fn count_inconsistent<B: AddrBackend>(db: &AddressDb<B>) -> usize {
    db.subdistricts
        .iter()
        .filter(|s| {
            s.district_code.is_some()
                && district_at(db, s.district_code)
                    .map_or(true, |d| d.province_code != s.province_code)
        })
        .count()
}
