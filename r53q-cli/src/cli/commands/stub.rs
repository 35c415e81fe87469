//! Single-page in-memory provider for command tests

use std::sync::Arc;

use async_trait::async_trait;
use r53q_core::ZoneService;
use r53q_provider::{
    DnsProvider, HostedZone, PaginatedResponse, ProviderError, RecordSetCursor,
    ResourceRecordSet, Result,
};

#[derive(Default)]
pub struct StubProvider {
    pub zones: Vec<HostedZone>,
    /// Served for every zone
    pub records: Vec<ResourceRecordSet>,
    pub failure: Option<ProviderError>,
}

#[async_trait]
impl DnsProvider for StubProvider {
    fn id(&self) -> &'static str {
        "stub"
    }

    async fn list_hosted_zones(
        &self,
        _marker: Option<&str>,
    ) -> Result<PaginatedResponse<HostedZone, String>> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(PaginatedResponse::last(self.zones.clone())),
        }
    }

    async fn list_record_sets(
        &self,
        _zone_id: &str,
        _cursor: Option<&RecordSetCursor>,
    ) -> Result<PaginatedResponse<ResourceRecordSet, RecordSetCursor>> {
        Ok(PaginatedResponse::last(self.records.clone()))
    }
}

pub fn service(provider: StubProvider) -> ZoneService {
    ZoneService::new(Arc::new(provider))
}

pub fn zone(bare_id: &str, name: &str, record_count: u64) -> HostedZone {
    HostedZone {
        id: format!("/hostedzone/{bare_id}"),
        name: name.to_string(),
        record_count,
    }
}

pub fn record(name: &str, record_type: &str, ttl: u64, values: &[&str]) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl,
        values: values.iter().map(|v| (*v).to_string()).collect(),
        alias_target: None,
    }
}
