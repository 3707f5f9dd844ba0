use clap::{Parser, Subcommand};
use thaiaddr_core::EntityKind;

/// CLI arguments for thaiaddr
#[derive(Debug, Parser)]
#[command(
    name = "thaiaddr",
    version,
    about = "CLI for browsing and searching the Thai province/district/subdistrict index"
)]
pub struct CliArgs {
    /// Path to the input feed (.json, .json.gz) or snapshot (.bin)
    /// (default: the thai_address.json shipped with thaiaddr-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Download the feed from this URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Optional comma-separated list of province codes to keep (e.g. 10,50)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Parse the feed without reading or writing the snapshot cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show loader diagnostics on stderr (honours RUST_LOG)
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all diagnostics
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Compare counts against the national totals (77 / 928 / 7436);
    /// exits with status 2 when the data looks incomplete
    Check,

    /// List all provinces in Thai order
    Provinces,

    /// List the districts of a province
    Districts {
        /// Province code (e.g. 10 for Bangkok)
        province: u32,
    },

    /// List the subdistricts of a district
    Subdistricts {
        /// District code (e.g. 1033)
        district: u32,
    },

    /// Look up one entity by kind and code
    Entity {
        /// province, district or subdistrict
        kind: EntityKind,
        /// Numeric code
        code: String,
    },

    /// Search Thai names, English names and postal codes
    Search {
        /// At least two characters
        query: String,
    },

    /// Print the full postal address of a subdistrict
    Address {
        /// Subdistrict code (e.g. 103301)
        subdistrict: u32,
    },

    /// Build the index from the input and write a binary snapshot
    Build {
        /// Output path, conventionally ending in .bin
        out: String,

        /// Write the snapshot without gzip compression
        #[arg(long)]
        uncompressed: bool,
    },
}
