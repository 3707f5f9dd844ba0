// crates/thaiaddr-core/tests/dataset.rs
//! National-scale integrity and the load/cache cycle.

use std::fs;
use thaiaddr_core::model::{EXPECTED_DISTRICTS, EXPECTED_PROVINCES, EXPECTED_SUBDISTRICTS};
use thaiaddr_core::prelude::*;

/// Rows shaped like the real feed: every province has districts and every
/// district has subdistricts.
fn national_rows(subdistricts: usize) -> Vec<RecordRaw> {
    (0..subdistricts)
        .map(|i| {
            let d = i % EXPECTED_DISTRICTS;
            let p = d % EXPECTED_PROVINCES;
            let province_code = 10 + p as u32;
            let district_code = province_code * 100 + (d / EXPECTED_PROVINCES) as u32;
            RecordRaw {
                province_code: Some(province_code),
                province_name_th: Some(format!("จังหวัด{p}")),
                province_name_en: Some(format!("Province {p}")),
                district_code: Some(district_code),
                district_name_th: Some(format!("อำเภอ{d}")),
                district_name_en: Some(format!("District {d}")),
                subdistrict_code: Some(district_code * 100 + (i / EXPECTED_DISTRICTS) as u32),
                subdistrict_name_th: Some(format!("ตำบล{i}")),
                subdistrict_name_en: Some(format!("Subdistrict {i}")),
                postal_code: Some(format!("{:05}", 10000 + i)),
            }
        })
        .collect()
}

#[test]
fn full_national_dataset_passes() {
    let db = DefaultAddressDb::from_records(national_rows(EXPECTED_SUBDISTRICTS));
    let report = db.check_integrity();
    assert!(report.passed);
    assert_eq!(report.province_count, 77);
    assert_eq!(report.district_count, 928);
    assert_eq!(report.subdistrict_count, 7436);
}

#[test]
fn one_missing_subdistrict_fails() {
    let db = DefaultAddressDb::from_records(national_rows(EXPECTED_SUBDISTRICTS - 1));
    let report = db.check_integrity();
    assert!(!report.passed);
    assert_eq!(report.subdistrict_count, 7435);
    assert_eq!(report.province_count, 77);
    assert_eq!(report.district_count, 928);
}

#[test]
fn duplicates_do_not_inflate_counts() {
    let mut rows = national_rows(EXPECTED_SUBDISTRICTS);
    rows.extend(national_rows(100));
    let db = DefaultAddressDb::from_records(rows);
    assert_eq!(db.stats().subdistricts, EXPECTED_SUBDISTRICTS);
    assert!(db.integrity_report().passed);
}

#[test]
fn report_serializes_in_camel_case() {
    let report = IntegrityReport::from_counts(77, 928, 7435);
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["subdistrictCount"], 7435);
    assert_eq!(json["passed"], false);
}

#[test]
fn feed_load_writes_and_reuses_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let feed = dir.path().join("feed.json");
    fs::write(&feed, serde_json::to_vec(&national_rows(50)).unwrap()).unwrap();

    let first = DefaultAddressDb::load_from_path(&feed, None).unwrap();
    let cache = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().ends_with(".bin"))
        .map(|e| e.path())
        .expect("cache written next to the feed");

    let second = DefaultAddressDb::load_from_path(&feed, None).unwrap();
    assert_eq!(first.stats(), second.stats());

    let from_cache = DefaultAddressDb::load_from_path(&cache, None).unwrap();
    assert_eq!(from_cache.stats(), first.stats());
    assert_eq!(from_cache.search("10049").len(), 1);
}

#[test]
fn province_filter_applies_to_feeds_and_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let feed = dir.path().join("feed.json");
    fs::write(&feed, serde_json::to_vec(&national_rows(200)).unwrap()).unwrap();

    let db = DefaultAddressDb::load_from_path(&feed, Some(&[10, 11][..])).unwrap();
    assert_eq!(db.stats().provinces, 2);
    assert!(db.all_subdistricts().iter().all(|s| matches!(s.province_code, Some(10 | 11))));

    let snapshot = dir.path().join("index.bin");
    DefaultAddressDb::load_from_path(&feed, None)
        .unwrap()
        .save_as(&snapshot)
        .unwrap();
    let filtered = DefaultAddressDb::load_from_path(&snapshot, Some(&[12][..])).unwrap();
    assert_eq!(filtered.stats().provinces, 1);
    assert_eq!(filtered.provinces()[0].code, 12);
}

#[test]
fn empty_and_broken_feeds_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.json");
    fs::write(&empty, "[]").unwrap();
    assert!(matches!(
        DefaultAddressDb::load_feed(&empty),
        Err(AddrError::EmptyFeed)
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[{\"provinceCode\": 10,").unwrap();
    assert!(matches!(
        DefaultAddressDb::load_feed(&broken),
        Err(AddrError::Json(_))
    ));
}
