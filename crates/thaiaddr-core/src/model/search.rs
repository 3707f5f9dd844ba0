// crates/thaiaddr-core/src/model/search.rs
use crate::common::{DbStats, IntegrityReport};
use crate::model::domain::{
    AddressDb, District, Entity, EntityKind, Province, SearchEntry, Subdistrict,
};
use crate::model::{MIN_QUERY_CHARS, SEARCH_LIMIT};
use crate::text::fold_en;
use crate::traits::{AddrBackend, AddressLookup};

impl<B: AddrBackend> AddressLookup<B> for AddressDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            subdistricts: self.subdistricts.len(),
            search_entries: self.search_index.len(),
        }
    }

    fn integrity_report(&self) -> IntegrityReport {
        IntegrityReport::from_counts(
            self.provinces.len(),
            self.districts.len(),
            self.subdistricts.len(),
        )
    }

    fn provinces(&self) -> Vec<&Province<B>> {
        self.provinces_sorted
            .iter()
            .map(|&slot| &self.provinces[slot as usize])
            .collect()
    }

    fn districts_of(&self, province_code: u32) -> Vec<&District<B>> {
        self.districts_by_province
            .get(&province_code)
            .map(|slots| {
                slots
                    .iter()
                    .map(|&slot| &self.districts[slot as usize])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn subdistricts_of(&self, district_code: u32) -> Vec<&Subdistrict<B>> {
        self.subdistricts_by_district
            .get(&district_code)
            .map(|slots| {
                slots
                    .iter()
                    .map(|&slot| &self.subdistricts[slot as usize])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn province(&self, code: u32) -> Option<&Province<B>> {
        let slot = *self.province_slots.get(&code)?;
        self.provinces.get(slot as usize)
    }

    fn district(&self, code: u32) -> Option<&District<B>> {
        let slot = *self.district_slots.get(&code)?;
        self.districts.get(slot as usize)
    }

    fn subdistrict(&self, code: u32) -> Option<&Subdistrict<B>> {
        let slot = *self.subdistrict_slots.get(&code)?;
        self.subdistricts.get(slot as usize)
    }

    fn province_of(&self, district: &District<B>) -> Option<&Province<B>> {
        self.province(district.province_code?)
    }

    fn district_of(&self, subdistrict: &Subdistrict<B>) -> Option<&District<B>> {
        self.district(subdistrict.district_code?)
    }

    fn entity(&self, kind: EntityKind, code: u32) -> Option<Entity<'_, B>> {
        match kind {
            EntityKind::Province => self.province(code).map(Entity::Province),
            EntityKind::District => self.district(code).map(Entity::District),
            EntityKind::Subdistrict => self.subdistrict(code).map(Entity::Subdistrict),
        }
    }

    fn search(&self, query: &str) -> Vec<&SearchEntry<B>> {
        let q = query.trim();
        if q.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let q_en = fold_en(q);

        // FLAT LOOP: index order is subdistricts, districts, provinces, so the
        // truncation keeps the most specific matches.
        self.search_index
            .iter()
            .filter(|e| {
                e.name_th().contains(q)
                    || e.name_en_folded.contains(&q_en)
                    || e.postal().is_some_and(|p| p.contains(q))
            })
            .take(SEARCH_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RecordRaw;
    use crate::DefaultBackend;

    fn bangkok() -> AddressDb<DefaultBackend> {
        let mk = |d: u32, d_th: &str, d_en: &str, s: u32, s_th: &str, s_en: &str, postal: &str| {
            RecordRaw {
                province_code: Some(10),
                province_name_th: Some("กรุงเทพมหานคร".into()),
                province_name_en: Some("Bangkok".into()),
                district_code: Some(d),
                district_name_th: Some(d_th.into()),
                district_name_en: Some(d_en.into()),
                subdistrict_code: Some(s),
                subdistrict_name_th: Some(s_th.into()),
                subdistrict_name_en: Some(s_en.into()),
                postal_code: Some(postal.into()),
            }
        };
        AddressDb::from_records(vec![
            mk(1033, "คลองเตย", "Khlong Toei", 103301, "คลองเตย", "Khlong Toei", "10110"),
            mk(1033, "คลองเตย", "Khlong Toei", 103302, "คลองตัน", "Khlong Tan", "10110"),
            mk(1007, "ปทุมวัน", "Pathum Wan", 100704, "ลุมพินี", "Lumphini", "10330"),
        ])
    }

    #[test]
    fn short_and_blank_queries_match_nothing() {
        let db = bangkok();
        assert!(db.search("").is_empty());
        assert!(db.search("a").is_empty());
        assert!(db.search("ค").is_empty());
        assert!(db.search("    ").is_empty());
        assert!(db.search(" k ").is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let db = bangkok();
        let codes: Vec<u32> = db.search(" 10330 ").iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![100704]);
    }

    #[test]
    fn english_match_is_case_insensitive() {
        let db = bangkok();
        let hits = db.search("KHLONG");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].kind, EntityKind::Subdistrict);
        assert_eq!(hits[2].kind, EntityKind::District);
    }

    #[test]
    fn thai_match_is_substring() {
        let db = bangkok();
        let codes: Vec<u32> = db.search("คลอง").iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![103301, 103302, 1033]);
    }

    #[test]
    fn postal_match_only_hits_subdistricts() {
        let db = bangkok();
        let hits = db.search("10330");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, 100704);
        assert_eq!(hits[0].district_code, Some(1007));
        assert_eq!(hits[0].province_code, Some(10));
    }

    #[test]
    fn entity_lookup_by_kind() {
        let db = bangkok();
        assert_eq!(db.entity(EntityKind::Province, 10).map(|e| e.name_en()), Some("Bangkok"));
        assert_eq!(db.entity(EntityKind::District, 1033).map(|e| e.code()), Some(1033));
        assert!(db.entity(EntityKind::District, 10).is_none());
        assert!(db.entity_by_str(EntityKind::Subdistrict, "").is_none());
        assert!(db.entity_by_str(EntityKind::Subdistrict, "abc").is_none());
        assert_eq!(
            db.entity_by_str(EntityKind::Subdistrict, " 103302 ").map(|e| e.kind()),
            Some(EntityKind::Subdistrict)
        );
    }

    #[test]
    fn parent_context() {
        let db = bangkok();
        let s = db.subdistrict(100704).unwrap();
        let d = db.district_of(s).unwrap();
        assert_eq!(d.code, 1007);
        assert_eq!(db.province_of(d).map(|p| p.code), Some(10));
    }
}
