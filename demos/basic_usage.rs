//! Basic usage example for thaiaddr-rs
//!
//! This example demonstrates how to:
//! - Load the address index (with its snapshot cache)
//! - Walk the province → district → subdistrict cascade
//! - Search by Thai name, English name and postal code
//! - Check the data against the national totals

use thaiaddr_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Basic Usage Example ===\n");

    // Load the index
    println!("Loading address index...");
    let db = DefaultAddressDb::load()?;
    let stats = db.stats();
    println!(
        "✓ Index loaded: {} provinces, {} districts, {} subdistricts\n",
        stats.provinces, stats.districts, stats.subdistricts
    );

    // Example 1: Provinces in Thai order
    println!("--- Example 1: Provinces ---");
    for (i, p) in db.provinces().iter().enumerate() {
        println!("{}. {} ({}) [{}]", i + 1, p.name_th(), p.name_en(), p.code);
    }
    println!();

    // Example 2: Districts and subdistricts of Bangkok
    println!("--- Example 2: Bangkok cascade ---");
    for d in db.districts_of(10) {
        println!("เขต{} ({})", d.name_th(), d.name_en());
        for s in db.subdistricts_of(d.code) {
            println!("    แขวง{} {}", s.name_th(), s.postal().unwrap_or("-"));
        }
    }
    println!();

    // Example 3: Search
    println!("--- Example 3: Search ---");
    for query in ["10110", "เชียง", "lampang"] {
        let hits = db.search(query);
        println!("'{query}': {} hit(s)", hits.len());
        for hit in hits {
            println!("    {:<11} {} {}", hit.kind, hit.code, hit.name_th());
        }
    }
    println!();

    // Example 4: Integrity
    println!("--- Example 4: Integrity check ---");
    let report = db.integrity_report();
    if report.passed {
        println!("✓ Complete national dataset");
    } else {
        println!(
            "! Partial dataset: {} / {} / {}",
            report.province_count, report.district_count, report.subdistrict_count
        );
    }

    Ok(())
}
