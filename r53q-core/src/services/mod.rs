//! Services over the provider

mod zone_service;

pub use zone_service::{ZoneInfo, ZoneRecords, ZoneService};
