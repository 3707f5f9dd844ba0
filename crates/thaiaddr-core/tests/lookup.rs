// crates/thaiaddr-core/tests/lookup.rs
//! Hierarchy and search behaviour against the sample feed shipped in `data/`.

use thaiaddr_core::api::{EntityView, SearchHitView};
use thaiaddr_core::prelude::*;
use thaiaddr_core::SEARCH_LIMIT;

fn sample() -> DefaultAddressDb {
    let path =
        DefaultAddressDb::default_data_dir().join(DefaultAddressDb::default_dataset_filename());
    DefaultAddressDb::load_feed(path).expect("sample feed loads")
}

#[test]
fn sample_feed_shape() {
    let db = sample();
    let stats = db.stats();
    assert_eq!(stats.provinces, 3);
    assert_eq!(stats.districts, 9);
    assert_eq!(stats.subdistricts, 20);
    assert_eq!(stats.search_entries, 32);

    // The sample is a slice of the country, so the advisory check fails.
    let report = db.integrity_report();
    assert!(!report.passed);
    assert_eq!(report.subdistrict_count, 20);
}

#[test]
fn provinces_follow_thai_collation() {
    let db = sample();
    let codes: Vec<u32> = db.provinces().iter().map(|p| p.code).collect();
    // กรุงเทพมหานคร, เชียงใหม่ (sorted under ช), ลำปาง
    assert_eq!(codes, vec![10, 50, 52]);
}

#[test]
fn districts_sort_leading_vowels_behind_their_consonant() {
    let db = sample();
    let names: Vec<&str> = db.districts_of(52).iter().map(|d| d.name_th()).collect();
    assert_eq!(names, vec!["เกาะคา", "งาว", "เมืองลำปาง"]);

    let codes: Vec<u32> = db.districts_of(10).iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1033, 1007, 1001, 1039]);
}

#[test]
fn subdistricts_of_a_district() {
    let db = sample();
    let names: Vec<&str> = db.subdistricts_of(1033).iter().map(|s| s.name_th()).collect();
    assert_eq!(names, vec!["คลองตัน", "คลองเตย", "พระโขนง"]);
    assert!(db.subdistricts_of(10).is_empty());
    assert!(db.districts_of(99).is_empty());
}

#[test]
fn every_listed_child_resolves_back_to_its_parent() {
    let db = sample();
    for p in db.provinces() {
        for d in db.districts_of(p.code) {
            match db.entity(EntityKind::District, d.code) {
                Some(Entity::District(found)) => assert_eq!(found.province_code, Some(p.code)),
                other => panic!("district {} not found: {other:?}", d.code),
            }
            for s in db.subdistricts_of(d.code) {
                match db.entity(EntityKind::Subdistrict, s.code) {
                    Some(Entity::Subdistrict(found)) => {
                        assert_eq!(found.district_code, Some(d.code))
                    }
                    other => panic!("subdistrict {} not found: {other:?}", s.code),
                }
            }
        }
    }
}

#[test]
fn walking_up_the_hierarchy() {
    let db = sample();
    let s = db.subdistrict(500105).expect("ช้างเผือก");
    assert_eq!(s.postal(), Some("50300"));
    let d = db.district_of(s).expect("district");
    assert_eq!(d.name_en(), "Mueang Chiang Mai");
    let p = db.province_of(d).expect("province");
    assert_eq!(p.name_th(), "เชียงใหม่");
}

#[test]
fn postal_search_returns_subdistricts_only() {
    let db = sample();
    let hits = db.search("10110");
    let codes: Vec<u32> = hits.iter().map(|h| h.code).collect();
    assert_eq!(codes, vec![103301, 103302, 103303, 103901, 103902, 103903]);
    assert!(hits.iter().all(|h| h.kind == EntityKind::Subdistrict));
    assert_eq!(hits[0].district_name_th(), Some("คลองเตย"));
    assert_eq!(hits[3].district_name_en(), Some("Watthana"));
}

#[test]
fn broad_query_is_truncated_to_the_limit() {
    let db = sample();
    let hits = db.search("10");
    assert_eq!(hits.len(), SEARCH_LIMIT);
    assert!(hits.iter().all(|h| h.kind == EntityKind::Subdistrict));
}

#[test]
fn english_search_mixes_levels_in_index_order() {
    let db = sample();
    let hits = db.search("  khlong ");
    let kinds: Vec<EntityKind> = hits.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Subdistrict,
            EntityKind::Subdistrict,
            EntityKind::Subdistrict,
            EntityKind::Subdistrict,
            EntityKind::District,
        ]
    );
}

#[test]
fn thai_search_reaches_provinces_last() {
    let db = sample();
    let hits = db.search("ลำปาง");
    let codes: Vec<u32> = hits.iter().map(|h| h.code).collect();
    assert_eq!(codes, vec![520901, 5201, 52]);
    assert_eq!(hits[2].province_code, Some(52));
    assert_eq!(hits[2].district_code, None);
}

#[test]
fn search_hit_fills_a_selection() {
    let db = sample();
    let hit = db.search("Lumphini").into_iter().next().expect("hit");
    let sel = AddressSelection::from_search_entry(&db, hit);
    assert!(sel.is_complete());
    assert_eq!(sel.format_th(), "แขวงลุมพินี เขตปทุมวัน กรุงเทพมหานคร 10330");

    let view = SearchHitView::from(hit);
    assert_eq!(view.province_name_en.as_deref(), Some("Bangkok"));
}

#[test]
fn entity_views_are_tagged() {
    let db = sample();
    let entity = db.entity_by_str(EntityKind::District, "5209").expect("เกาะคา");
    let json = serde_json::to_value(EntityView::from(entity)).unwrap();
    assert_eq!(json["kind"], "district");
    assert_eq!(json["nameTh"], "เกาะคา");
    assert_eq!(json["provinceCode"], 52);
}
