//! thaiaddr: command-line interface for thaiaddr-core
//!
//! Loads the address index once per invocation and answers one query:
//! statistics, the integrity check, the province → district → subdistrict
//! cascade, entity lookup, free-text/postal search, formatted postal
//! addresses, or writing a binary snapshot.
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the feed bundled with the `thaiaddr-core`
//! crate and caches a binary snapshot next to it. `--input` points at
//! another feed (`.json`, `.json.gz`) or directly at a snapshot (`.bin`).

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thaiaddr_cli::args::{CliArgs, Commands};
use thaiaddr_cli::{format_hit, format_named, parse_province_filter};
use thaiaddr_core::api::{
    AddressView, DistrictView, EntityView, ProvinceView, SearchHitView, SubdistrictView,
};
use thaiaddr_core::loader::{write_snapshot, CompressionMode};
use thaiaddr_core::prelude::*;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args);

    let db = load_db(&args)?;

    match &args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Index statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Districts: {}", stats.districts);
            println!("  Subdistricts: {}", stats.subdistricts);
            println!("  Search entries: {}", stats.search_entries);
        }

        Commands::Check => {
            let report = db.integrity_report();
            if args.json {
                print_json(&report)?;
            } else {
                use thaiaddr_core::model::{
                    EXPECTED_DISTRICTS, EXPECTED_PROVINCES, EXPECTED_SUBDISTRICTS,
                };
                println!("Provinces: {} / {EXPECTED_PROVINCES}", report.province_count);
                println!("Districts: {} / {EXPECTED_DISTRICTS}", report.district_count);
                println!(
                    "Subdistricts: {} / {EXPECTED_SUBDISTRICTS}",
                    report.subdistrict_count
                );
                println!("Status: {}", if report.passed { "OK" } else { "INCOMPLETE" });
            }
            if !report.passed {
                std::process::exit(2);
            }
        }

        Commands::Provinces => {
            let provinces = db.provinces();
            if args.json {
                let views: Vec<ProvinceView> = provinces.into_iter().map(Into::into).collect();
                return print_json(&views);
            }
            for p in provinces {
                println!("{}", format_named(p.code, p.name_th(), p.name_en()));
            }
        }

        Commands::Districts { province } => {
            let districts = db.districts_of(*province);
            if args.json {
                let views: Vec<DistrictView> = districts.into_iter().map(Into::into).collect();
                return print_json(&views);
            }
            if districts.is_empty() {
                eprintln!("No districts found for province {province}");
            }
            for d in districts {
                println!("{}", format_named(d.code, d.name_th(), d.name_en()));
            }
        }

        Commands::Subdistricts { district } => {
            let subdistricts = db.subdistricts_of(*district);
            if args.json {
                let views: Vec<SubdistrictView> =
                    subdistricts.into_iter().map(Into::into).collect();
                return print_json(&views);
            }
            if subdistricts.is_empty() {
                eprintln!("No subdistricts found for district {district}");
            }
            for s in subdistricts {
                println!(
                    "{}  {}",
                    format_named(s.code, s.name_th(), s.name_en()),
                    s.postal().unwrap_or("-")
                );
            }
        }

        Commands::Entity { kind, code } => match db.entity_by_str(*kind, code) {
            Some(entity) => {
                if args.json {
                    return print_json(&EntityView::from(entity));
                }
                println!("Kind: {}", entity.kind());
                println!("Code: {}", entity.code());
                println!("Name (th): {}", entity.name_th());
                println!("Name (en): {}", entity.name_en());
                if let Some(s) = entity.as_subdistrict() {
                    println!("Postal: {}", s.postal().unwrap_or("-"));
                }
            }
            None => eprintln!("No {kind} found for code: {code}"),
        },

        Commands::Search { query } => {
            let hits = db.search(query);
            if args.json {
                let views: Vec<SearchHitView> = hits.into_iter().map(Into::into).collect();
                return print_json(&views);
            }
            if hits.is_empty() {
                println!("No matches for: {query}");
            }
            for hit in hits {
                println!("{}", format_hit(hit));
            }
        }

        Commands::Address { subdistrict } => {
            let sel = AddressSelection::from_subdistrict(&db, *subdistrict);
            if sel.subdistrict.is_none() {
                eprintln!("No subdistrict found for code: {subdistrict}");
                return Ok(());
            }
            if args.json {
                return print_json(&AddressView::from(&sel));
            }
            println!("{}", sel.format_th());
            println!("{}", sel.format_en());
        }

        Commands::Build { out, uncompressed } => {
            let mode = if *uncompressed {
                CompressionMode::None
            } else {
                CompressionMode::default()
            };
            write_snapshot(Path::new(out), &db, mode)
                .with_context(|| format!("writing snapshot to {out}"))?;
            let stats = db.stats();
            println!(
                "Wrote snapshot to {out} ({} provinces, {} districts, {} subdistricts)",
                stats.provinces, stats.districts, stats.subdistricts
            );
        }
    }

    Ok(())
}

fn load_db(args: &CliArgs) -> anyhow::Result<DefaultAddressDb> {
    let filter = args
        .filter
        .as_deref()
        .map(parse_province_filter)
        .transpose()?
        .filter(|f| !f.is_empty());

    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        let db = DefaultAddressDb::fetch(url).with_context(|| format!("downloading {url}"))?;
        return Ok(match &filter {
            Some(f) => db.retain_provinces(f),
            None => db,
        });
    }

    let input = args.input.as_ref().map(PathBuf::from).unwrap_or_else(|| {
        DefaultAddressDb::default_data_dir().join(DefaultAddressDb::default_dataset_filename())
    });
    debug!(input = %input.display(), ?filter, "loading index");

    #[cfg(feature = "json")]
    if args.no_cache && input.extension().map_or(true, |ext| ext != "bin") {
        let db = DefaultAddressDb::load_feed(&input)
            .with_context(|| format!("loading {}", input.display()))?;
        return Ok(match &filter {
            Some(f) => db.retain_provinces(f),
            None => db,
        });
    }

    let db = DefaultAddressDb::load_from_path(&input, filter.as_deref())
        .with_context(|| format!("loading {}", input.display()))?;
    Ok(db)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(args: &CliArgs) {
    // --quiet silences everything, --verbose honours RUST_LOG (default info),
    // otherwise only warnings such as an incomplete dataset get through.
    let filter = if args.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
