// crates/thaiaddr-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (JSON feed vs binary snapshot).
//!
//! Loading is the only fallible step of the crate. Every entry point here
//! either returns a fully built [`AddressDb`] or a single [`AddrError`](crate::AddrError);
//! there is no partially initialized state.

use crate::error::Result;
use crate::model::{AddressDb, CACHE_SUFFIX};
use crate::DefaultBackend;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub mod common_io;
pub mod feed;
pub mod fetch;
pub mod snapshot;

pub use snapshot::{write_snapshot, CompressionMode};

/// Timeout used by `AddressDb::fetch` (`fetch` feature).
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

impl AddressDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "thai_address.json"
    }

    /// Loads the dataset shipped in [`AddressDb::default_data_dir`].
    pub fn load() -> Result<Self> {
        let path = Self::default_data_dir().join(Self::default_dataset_filename());
        Self::load_from_path(path, None)
    }

    /// **Standard Loader.**
    ///
    /// - `*.bin` paths are read as snapshots.
    /// - Anything else is parsed as a JSON feed. A snapshot cache next to the
    ///   feed is used when it is at least as new as the feed, and rewritten
    ///   (best effort) otherwise.
    ///
    /// `filter` keeps only the listed province codes.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[u32]>) -> Result<Self> {
        let path = path.as_ref();
        let db = if is_snapshot(path) {
            Self::load_binary_file(path, filter)?
        } else {
            Self::load_via_cache(path, filter)?
        };
        db.check_integrity();
        Ok(db)
    }

    /// Parses and indexes a feed without touching any cache file.
    #[cfg(feature = "json")]
    pub fn load_feed(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let records = feed::read_records(path)?;
        info!(path = %path.display(), rows = records.len(), "feed parsed");
        let db = Self::from_records(records);
        db.check_integrity();
        Ok(db)
    }

    #[cfg(feature = "json")]
    fn load_via_cache(path: &Path, filter: Option<&[u32]>) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if common_io::is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path, filter) {
                Ok(db) => {
                    debug!(cache = %cache_path.display(), "loaded index from cache");
                    return Ok(db);
                }
                Err(e) => {
                    warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable cache")
                }
            }
        }

        // 2. Build
        let records = feed::read_records(path)?;
        info!(path = %path.display(), rows = records.len(), "feed parsed");
        let db = Self::from_records(records);

        // 3. Cache
        if let Err(e) = db.save_as(&cache_path) {
            warn!(cache = %cache_path.display(), error = %e, "could not write cache");
        }

        // 4. Filter
        match filter {
            Some(f) if !f.is_empty() => Ok(db.retain_provinces(f)),
            _ => Ok(db),
        }
    }

    #[cfg(not(feature = "json"))]
    fn load_via_cache(path: &Path, _filter: Option<&[u32]>) -> Result<Self> {
        Err(crate::error::AddrError::InvalidData(format!(
            "{} is not a snapshot and JSON feeds need the 'json' feature",
            path.display()
        )))
    }
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrError;

    #[test]
    fn snapshot_detection_by_extension() {
        assert!(is_snapshot(Path::new("data/thai_address.json.comp.bin")));
        assert!(!is_snapshot(Path::new("data/thai_address.json")));
        assert!(!is_snapshot(Path::new("data/thai_address.json.gz")));
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let err =
            AddressDb::<DefaultBackend>::load_from_path("/no/such/feed.json", None).unwrap_err();
        assert!(matches!(err, AddrError::NotFound(_)));
    }
}
