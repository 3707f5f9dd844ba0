//! thaiaddr-cli
//! ============
//!
//! Command-line interface for the `thaiaddr-core` Thai address index.
//!
//! This crate primarily provides a binary (`thaiaddr`). The library target
//! holds the argument definitions and the text renderers so that docs.rs
//! shows this overview and the renderers can be tested without spawning
//! the binary.
//!
//! Basic usage:
//!
//! ```text
//! thaiaddr stats
//! thaiaddr provinces
//! thaiaddr districts 10
//! thaiaddr subdistricts 1033
//! thaiaddr entity subdistrict 103301
//! thaiaddr search คลองเตย
//! thaiaddr --json search 10110
//! thaiaddr address 103301
//! thaiaddr --input feed.json build feed.bin
//! ```
//!
//! By default the CLI loads the sample feed shipped with `thaiaddr-core` and
//! caches a binary snapshot next to it for faster subsequent runs. Use
//! `--input <path>` for another feed or snapshot, `--filter 10,50` to keep
//! only some provinces, and `--no-cache` to skip the snapshot cache.

pub mod args;

use thaiaddr_core::prelude::*;

/// Parses `--filter` into province codes. Blank items are ignored.
pub fn parse_province_filter(raw: &str) -> anyhow::Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<u32>()
                .map_err(|_| anyhow::anyhow!("invalid province code in --filter: {x}"))
        })
        .collect()
}

/// `code  name_th (name_en)`; the English part is left out when empty.
pub fn format_named(code: u32, name_th: &str, name_en: &str) -> String {
    if name_en.is_empty() {
        format!("{code:>6}  {name_th}")
    } else {
        format!("{code:>6}  {name_th} ({name_en})")
    }
}

/// One search hit with its parent context, e.g.
/// `subdistrict 103301  คลองเตย (Khlong Toei) · คลองเตย · กรุงเทพมหานคร · 10110`.
pub fn format_hit<B: AddrBackend>(hit: &SearchEntry<B>) -> String {
    let mut line = format!(
        "{:<11} {}",
        hit.kind.as_str(),
        format_named(hit.code, hit.name_th(), hit.name_en()).trim_start()
    );
    for part in [hit.district_name_th(), hit.province_name_th(), hit.postal()]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
    {
        line.push_str(" · ");
        line.push_str(part);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parsing() {
        assert_eq!(parse_province_filter("10, 50,,").unwrap(), vec![10, 50]);
        assert!(parse_province_filter("10,BKK").is_err());
        assert!(parse_province_filter("").unwrap().is_empty());
    }

    #[test]
    fn hit_line_carries_parents() {
        let db = DefaultAddressDb::from_records(vec![RecordRaw {
            province_code: Some(10),
            province_name_th: Some("กรุงเทพมหานคร".into()),
            district_code: Some(1033),
            district_name_th: Some("คลองเตย".into()),
            subdistrict_code: Some(103301),
            subdistrict_name_th: Some("คลองเตย".into()),
            subdistrict_name_en: Some("Khlong Toei".into()),
            postal_code: Some("10110".into()),
            ..RecordRaw::default()
        }]);
        let hits = db.search("10110");
        assert_eq!(
            format_hit(hits[0]),
            "subdistrict 103301  คลองเตย (Khlong Toei) · คลองเตย · กรุงเทพมหานคร · 10110"
        );
        assert_eq!(format_named(10, "กรุงเทพมหานคร", ""), "    10  กรุงเทพมหานคร");
    }
}
