// crates/thaiaddr-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use super::feed;
use crate::error::Result;
use crate::model::AddressDb;
use crate::raw::RecordRaw;
use crate::DefaultBackend;
use std::time::Duration;
use tracing::info;

/// Downloads the feed with a blocking GET. Non-2xx responses are errors.
pub fn fetch_records(url: &str, timeout: Duration) -> Result<Vec<RecordRaw>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.bytes()?;
    info!(url, bytes = body.len(), "feed downloaded");
    feed::parse_records(&body[..])
}

impl AddressDb<DefaultBackend> {
    /// Downloads, parses and indexes a feed in one step.
    pub fn fetch(url: &str) -> Result<Self> {
        let records = fetch_records(url, super::DEFAULT_FETCH_TIMEOUT)?;
        let db = Self::from_records(records);
        db.check_integrity();
        Ok(db)
    }
}
