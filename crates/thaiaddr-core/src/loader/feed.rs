// crates/thaiaddr-core/src/loader/feed.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::{AddrError, Result};
use crate::raw::RecordRaw;
use std::io::Read;
use std::path::Path;

/// Parses a JSON array of flat records. An empty array is a load failure:
/// an index with no data is never handed to a caller.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RecordRaw>> {
    let records: Vec<RecordRaw> = serde_json::from_reader(reader)?;
    if records.is_empty() {
        return Err(AddrError::EmptyFeed);
    }
    Ok(records)
}

/// Reads a feed file (plain or gzip-compressed JSON).
pub fn read_records(path: &Path) -> Result<Vec<RecordRaw>> {
    let reader = common_io::open_stream(path)?;
    parse_records(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feed_is_rejected() {
        let err = parse_records(&b"[]"[..]).unwrap_err();
        assert!(matches!(err, AddrError::EmptyFeed));
    }

    #[test]
    fn malformed_feed_is_a_json_error() {
        let err = parse_records(&b"{\"provinceCode\": 10"[..]).unwrap_err();
        assert!(matches!(err, AddrError::Json(_)));
    }

    #[test]
    fn rows_are_parsed_in_order() {
        let rows = parse_records(
            &br#"[{"subdistrictCode": 2}, {"subdistrictCode": 1}, {"subdistrictCode": 2}]"#[..],
        )
        .unwrap();
        let codes: Vec<Option<u32>> = rows.iter().map(|r| r.subdistrict_code).collect();
        assert_eq!(codes, vec![Some(2), Some(1), Some(2)]);
    }
}
