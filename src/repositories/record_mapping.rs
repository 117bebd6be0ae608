// src/repositories/record_mapping.rs
//
// Raw store records -> domain values.
// Records that fail to decode are skipped, never reported as errors.

use log::debug;
use serde::de::DeserializeOwned;

use crate::domain::{Banner, Venue};
use crate::integrations::RawRecord;

/// Venues take the store-assigned id, overriding any `id` in the payload
pub fn map_venues(records: Vec<RawRecord>) -> Vec<Venue> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            decode::<Venue>(record).map(|venue| Venue { id, ..venue })
        })
        .collect()
}

/// Banners keep whatever id their payload carries
pub fn map_banners(records: Vec<RawRecord>) -> Vec<Banner> {
    records.into_iter().filter_map(decode::<Banner>).collect()
}

fn decode<T: DeserializeOwned>(record: RawRecord) -> Option<T> {
    match serde_json::from_value(record.data) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Skipping malformed record {}: {}", record.id, e);
            None
        }
    }
}
