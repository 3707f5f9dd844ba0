//! Address picker example for thaiaddr-rs
//!
//! Simulates a form: the user types into a search box, picks the first
//! suggestion, and the province/district/subdistrict fields plus the
//! postal code are filled from it.

use thaiaddr_rs::api::AddressView;
use thaiaddr_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== thaiaddr-rs Address Picker Example ===\n");

    let db = DefaultAddressDb::load()?;

    for typed in ["ลุมพินี", "Si Phum", "52130", "k", "เกาะคา"] {
        println!("> {typed}");
        let suggestions = db.search(typed);
        let Some(first) = suggestions.first() else {
            println!("  (no suggestions)\n");
            continue;
        };

        let selection = AddressSelection::from_search_entry(&db, first);
        let province = selection.province.map(|p| p.name_th()).unwrap_or("-");
        let district = selection.district.map(|d| d.name_th()).unwrap_or("-");
        let subdistrict = selection.subdistrict.map(|s| s.name_th()).unwrap_or("-");
        println!("  province:    {province}");
        println!("  district:    {district}");
        println!("  subdistrict: {subdistrict}");
        println!("  postal:      {}", selection.postal().unwrap_or("-"));
        if selection.is_complete() {
            println!("  th: {}", selection.format_th());
            println!("  en: {}", selection.format_en());
        }
        println!();
    }

    // The same selection as the JSON a web front-end receives.
    let view = AddressView::from(&AddressSelection::from_subdistrict(&db, 103301));
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not render JSON: {e}"),
    }

    Ok(())
}
