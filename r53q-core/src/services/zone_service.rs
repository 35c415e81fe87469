//! Zone query service

use std::fmt;
use std::sync::Arc;

use futures::TryStreamExt;
use r53q_provider::{hosted_zones, record_sets, DnsProvider, HostedZone, ResourceRecordSet};

use crate::error::CoreResult;
use crate::zone_ref::{resolve_zone, ZoneRef};

/// A resolved zone and every record set in it
#[derive(Debug, Clone)]
pub struct ZoneRecords {
    pub zone: HostedZone,
    pub records: Vec<ResourceRecordSet>,
}

/// What `zone <identifier> [count]` reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneInfo {
    /// Number of record sets in the zone.
    RecordCount(u64),
    /// Bare zone id, reported for domain-form input.
    ZoneId(String),
    /// Zone name without trailing dot, reported for id-form input.
    ZoneName(String),
}

impl fmt::Display for ZoneInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordCount(count) => write!(f, "{count}"),
            Self::ZoneId(value) | Self::ZoneName(value) => f.write_str(value),
        }
    }
}

/// Zone and record queries over one provider
pub struct ZoneService {
    provider: Arc<dyn DnsProvider>,
}

impl ZoneService {
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// Every hosted zone, all pages drained.
    pub async fn list_zones(&self) -> CoreResult<Vec<HostedZone>> {
        let zones: Vec<HostedZone> = hosted_zones(self.provider.as_ref()).try_collect().await?;
        log::debug!("listed {} hosted zones", zones.len());
        Ok(zones)
    }

    /// The first zone matching `identifier`.
    ///
    /// Pages are fetched until a match is found; later pages are never requested.
    pub async fn find_zone(&self, identifier: &str) -> CoreResult<HostedZone> {
        let zone = resolve_zone(identifier, hosted_zones(self.provider.as_ref())).await?;
        log::debug!("{identifier} resolved to {}", zone.id);
        Ok(zone)
    }

    /// Resolve `identifier` and fetch all of its record sets.
    pub async fn list_records(&self, identifier: &str) -> CoreResult<ZoneRecords> {
        let zone = self.find_zone(identifier).await?;
        let records: Vec<ResourceRecordSet> = record_sets(self.provider.as_ref(), zone.bare_id())
            .try_collect()
            .await?;
        Ok(ZoneRecords { zone, records })
    }

    /// Resolve `identifier` and report its record count, id or name.
    pub async fn zone_info(&self, identifier: &str, count_only: bool) -> CoreResult<ZoneInfo> {
        let zone = self.find_zone(identifier).await?;

        Ok(if count_only {
            ZoneInfo::RecordCount(zone.record_count)
        } else if ZoneRef::parse(identifier).is_domain() {
            ZoneInfo::ZoneId(zone.bare_id().to_string())
        } else {
            ZoneInfo::ZoneName(zone.domain().to_string())
        })
    }
}
