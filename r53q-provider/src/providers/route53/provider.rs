//! Route 53 `DnsProvider` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{
    HostedZone, PaginatedResponse, RecordSetCursor, ResourceRecordSet, strip_zone_prefix,
};

use super::types::{
    HostedZoneXml, ListHostedZonesResponse, ListResourceRecordSetsResponse, ResourceRecordSetXml,
};
use super::{
    API_VERSION_PATH, MAX_RECORD_PAGE_SIZE, MAX_ZONE_PAGE_SIZE, Route53Provider, SERVICE,
};

impl Route53Provider {
    /// `maxitems` value for a listing, if a page size was configured
    fn max_items(&self, limit: u32) -> Option<String> {
        self.page_size.map(|size| size.clamp(1, limit).to_string())
    }

    fn convert_zone(zone: HostedZoneXml) -> HostedZone {
        HostedZone {
            id: zone.id,
            name: zone.name,
            record_count: zone.resource_record_set_count.unwrap_or(0),
        }
    }

    fn convert_record_set(rrs: ResourceRecordSetXml) -> ResourceRecordSet {
        ResourceRecordSet {
            name: rrs.name,
            record_type: rrs.record_type,
            ttl: rrs.ttl.unwrap_or(0),
            values: rrs
                .resource_records
                .map(|r| r.resource_record.into_iter().map(|v| v.value).collect())
                .unwrap_or_default(),
            alias_target: rrs.alias_target.map(|a| a.dns_name),
        }
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    fn id(&self) -> &'static str {
        SERVICE
    }

    async fn list_hosted_zones(
        &self,
        marker: Option<&str>,
    ) -> Result<PaginatedResponse<HostedZone, String>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(marker) = marker {
            params.push(("marker", marker.to_string()));
        }
        if let Some(max_items) = self.max_items(MAX_ZONE_PAGE_SIZE) {
            params.push(("maxitems", max_items));
        }

        let path = format!("{API_VERSION_PATH}/hostedzone");
        let response: ListHostedZonesResponse =
            self.get(&path, &params, ErrorContext::default()).await?;

        let next_marker = match (response.is_truncated, response.next_marker) {
            (true, Some(next)) => Some(next),
            (true, None) => {
                log::warn!("[{SERVICE}] truncated hosted zone page without NextMarker; stopping");
                None
            }
            (false, _) => None,
        };

        let zones = response
            .hosted_zones
            .hosted_zone
            .into_iter()
            .map(Self::convert_zone)
            .collect();

        Ok(PaginatedResponse::new(zones, next_marker))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordSetCursor>,
    ) -> Result<PaginatedResponse<ResourceRecordSet, RecordSetCursor>> {
        let zone_id = strip_zone_prefix(zone_id);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = cursor {
            params.push(("name", cursor.name.clone()));
            if let Some(record_type) = &cursor.record_type {
                params.push(("type", record_type.clone()));
            }
            if let Some(identifier) = &cursor.identifier {
                params.push(("identifier", identifier.clone()));
            }
        }
        if let Some(max_items) = self.max_items(MAX_RECORD_PAGE_SIZE) {
            params.push(("maxitems", max_items));
        }

        let path = format!("{API_VERSION_PATH}/hostedzone/{zone_id}/rrset");
        let response: ListResourceRecordSetsResponse = self
            .get(&path, &params, ErrorContext::for_zone(zone_id))
            .await?;

        let next_cursor = match (response.is_truncated, response.next_record_name) {
            (true, Some(name)) => Some(RecordSetCursor {
                name,
                record_type: response.next_record_type,
                identifier: response.next_record_identifier,
            }),
            (true, None) => {
                log::warn!(
                    "[{SERVICE}] truncated record set page for {zone_id} without NextRecordName; stopping"
                );
                None
            }
            (false, _) => None,
        };

        let records = response
            .resource_record_sets
            .resource_record_set
            .into_iter()
            .map(Self::convert_record_set)
            .collect();

        Ok(PaginatedResponse::new(records, next_cursor))
    }
}
