// crates/thaiaddr-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::Result;
use crate::model::AddressDb;
use crate::traits::AddrBackend;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        #[cfg(feature = "compact")]
        {
            Self::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            Self::None
        }
    }
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl<B: AddrBackend> AddressDb<B> {
    /// Loads a snapshot written by [`AddressDb::save_as`]. Gzip is detected
    /// from the file content.
    pub fn load_binary_file(path: impl AsRef<Path>, filter: Option<&[u32]>) -> Result<Self> {
        let mut stream = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data, filter)?)
    }

    /// Writes a snapshot, compressed when the `compact` feature is on.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self, CompressionMode::default())
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

/// Writes an index snapshot to disk.
pub fn write_snapshot<B: AddrBackend>(
    path: &Path,
    db: &AddressDb<B>,
    compression: CompressionMode,
) -> Result<()> {
    let bytes = db.to_bytes()?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(&bytes)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::AddrError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrError;
    use crate::raw::RecordRaw;
    use crate::{AddressLookup, DefaultBackend};

    fn small() -> AddressDb<DefaultBackend> {
        AddressDb::from_records(vec![RecordRaw {
            province_code: Some(50),
            province_name_th: Some("เชียงใหม่".into()),
            district_code: Some(5001),
            subdistrict_code: Some(500101),
            subdistrict_name_en: Some("Si Phum".into()),
            postal_code: Some("50200".into()),
            ..RecordRaw::default()
        }])
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        let db = small();
        db.save_as(&path).unwrap();

        let back = AddressDb::<DefaultBackend>::load_binary_file(&path, None).unwrap();
        assert_eq!(back.stats(), db.stats());
        assert_eq!(back.search("phum").len(), 1);
    }

    #[test]
    fn uncompressed_snapshot_loads_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.raw.bin");
        write_snapshot(&path, &small(), CompressionMode::None).unwrap();
        let back = AddressDb::<DefaultBackend>::load_binary_file(&path, None).unwrap();
        assert_eq!(back.province(50).map(|p| p.name_th()), Some("เชียงใหม่"));
    }

    #[test]
    fn garbage_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.bin");
        std::fs::write(&path, [0xffu8; 3]).unwrap();
        let err = AddressDb::<DefaultBackend>::load_binary_file(&path, None).unwrap_err();
        assert!(matches!(err, AddrError::Bincode(_)));
    }
}
