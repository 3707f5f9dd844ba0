//! Error handling example for thaiaddr-rs
//!
//! Loading is the only step that can fail. Every query afterwards answers
//! with `None` or an empty list instead of an error.

use thaiaddr_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Error Handling Example ===\n");

    // Example 1: Load errors
    println!("--- Example 1: Loading from a missing file ---");
    match DefaultAddressDb::load_from_path("/no/such/thai_address.json", None) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(AddrError::NotFound(msg)) => println!("  NotFound: {msg}"),
        Err(e) => println!("  other error: {e}"),
    }
    println!();

    println!("--- Example 2: Empty feed ---");
    match thaiaddr_rs::loader::feed::parse_records(&b"[]"[..]) {
        Ok(rows) => println!("  parsed {} rows", rows.len()),
        Err(e) => println!("  {e}"),
    }
    println!();

    let db = DefaultAddressDb::load()?;

    // Example 3: Unknown codes
    println!("--- Example 3: Unknown codes ---");
    for code in ["", "abc", "99", "103301"] {
        match db.entity_by_str(EntityKind::Subdistrict, code) {
            Some(e) => println!("  {code:>6}: {} ({})", e.name_th(), e.name_en()),
            None => println!("  {code:>6}: not found"),
        }
    }
    println!("  districts_of(99): {} entries", db.districts_of(99).len());
    println!();

    // Example 4: Queries that are too short
    println!("--- Example 4: Short queries ---");
    for q in ["", "a", " ก ", "กร"] {
        println!("  {q:?} -> {} hit(s)", db.search(q).len());
    }

    Ok(())
}
