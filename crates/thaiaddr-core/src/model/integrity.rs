// crates/thaiaddr-core/src/model/integrity.rs
use crate::common::IntegrityReport;
use crate::model::domain::AddressDb;
use crate::traits::AddrBackend;
use tracing::{info, warn};

/// Known number of provinces (76 จังหวัด plus Bangkok).
pub const EXPECTED_PROVINCES: usize = 77;
/// Known number of districts (อำเภอ and Bangkok เขต).
pub const EXPECTED_DISTRICTS: usize = 928;
/// Known number of subdistricts (ตำบล and Bangkok แขวง).
pub const EXPECTED_SUBDISTRICTS: usize = 7436;

impl IntegrityReport {
    /// Compares observed counts against the national totals. A count at or
    /// above its threshold passes.
    pub fn from_counts(provinces: usize, districts: usize, subdistricts: usize) -> Self {
        Self {
            province_count: provinces,
            district_count: districts,
            subdistrict_count: subdistricts,
            passed: provinces >= EXPECTED_PROVINCES
                && districts >= EXPECTED_DISTRICTS
                && subdistricts >= EXPECTED_SUBDISTRICTS,
        }
    }
}

impl<B: AddrBackend> AddressDb<B> {
    /// Runs the integrity check and logs the outcome. Never fails; a
    /// shortfall is a warning for the caller to surface, not an error.
    pub fn check_integrity(&self) -> IntegrityReport {
        let report = IntegrityReport::from_counts(
            self.provinces.len(),
            self.districts.len(),
            self.subdistricts.len(),
        );
        if report.passed {
            info!(
                provinces = report.province_count,
                districts = report.district_count,
                subdistricts = report.subdistrict_count,
                "address data complete"
            );
        } else {
            warn!(
                provinces = report.province_count,
                districts = report.district_count,
                subdistricts = report.subdistrict_count,
                expected_provinces = EXPECTED_PROVINCES,
                expected_districts = EXPECTED_DISTRICTS,
                expected_subdistricts = EXPECTED_SUBDISTRICTS,
                "address data looks incomplete"
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        let r = IntegrityReport::from_counts(77, 928, 7436);
        assert!(r.passed);
        let r = IntegrityReport::from_counts(77, 928, 7435);
        assert!(!r.passed);
        assert_eq!(r.subdistrict_count, 7435);
    }

    #[test]
    fn any_short_level_fails() {
        assert!(!IntegrityReport::from_counts(76, 928, 7436).passed);
        assert!(!IntegrityReport::from_counts(77, 927, 7436).passed);
        assert!(IntegrityReport::from_counts(78, 930, 7500).passed);
    }
}
