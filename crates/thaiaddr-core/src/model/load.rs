// crates/thaiaddr-core/src/model/load.rs
use crate::model::convert::derive_lookups;
use crate::model::domain::AddressDb;
use crate::traits::AddrBackend;
use bincode::Options;

/// Upper bound for a snapshot payload; the full national dataset is a few MB.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl<B: AddrBackend> AddressDb<B> {
    /// Reconstructs the index from a bincode snapshot, optionally keeping
    /// only the given province codes.
    ///
    /// 1. It deserializes the master index from the provided bytes.
    /// 2. If a filter is active, it narrows the index with
    ///    [`AddressDb::retain_provinces`].
    pub fn from_bytes(
        data: &[u8],
        filter_provinces: Option<&[u32]>,
    ) -> Result<Self, bincode::Error> {
        let master: AddressDb<B> = snapshot_options().deserialize(data)?;

        // If no filter is provided, return the master index directly (Fast path)
        let filter = match filter_provinces {
            Some(f) if !f.is_empty() => f,
            _ => return Ok(master),
        };

        Ok(master.retain_provinces(filter))
    }

    /// A new index holding only the given provinces and the districts and
    /// subdistricts that name one of them as their province.
    ///
    /// Entities are copied as stored, in insertion order, and the lookups
    /// are derived again, so first-wins parents survive the filter.
    pub fn retain_provinces(&self, provinces: &[u32]) -> Self {
        let keep = |code: Option<u32>| code.is_some_and(|p| provinces.contains(&p));
        let mut db = Self::empty();

        for p in self.provinces.iter().filter(|p| keep(Some(p.code))) {
            db.province_slots.insert(p.code, db.provinces.len() as u32);
            db.provinces.push(p.clone());
        }
        for d in self.districts.iter().filter(|d| keep(d.province_code)) {
            db.district_slots.insert(d.code, db.districts.len() as u32);
            db.districts.push(d.clone());
        }
        for s in self.subdistricts.iter().filter(|s| keep(s.province_code)) {
            db.subdistrict_slots.insert(s.code, db.subdistricts.len() as u32);
            db.subdistricts.push(s.clone());
        }

        derive_lookups(&mut db);
        db
    }

    /// Serializes the index into the snapshot format read by [`AddressDb::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self)
    }
}
