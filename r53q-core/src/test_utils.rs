//! Test helpers
//!
//! An in-memory provider serving fixed pages and recording what was requested.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use r53q_provider::{
    DnsProvider, HostedZone, PaginatedResponse, ProviderError, RecordSetCursor,
    ResourceRecordSet, Result,
};

// ===== MockProvider =====

pub struct MockProvider {
    zone_pages: Vec<Vec<HostedZone>>,
    /// Bare zone id -> record pages
    record_pages: HashMap<String, Vec<Vec<ResourceRecordSet>>>,
    /// Returned by every call when set
    failure: Option<ProviderError>,
    zone_calls: AtomicUsize,
    record_calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn with_zone_pages(zone_pages: Vec<Vec<HostedZone>>) -> Self {
        Self {
            zone_pages,
            record_pages: HashMap::new(),
            failure: None,
            zone_calls: AtomicUsize::new(0),
            record_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::with_zone_pages(Vec::new())
        }
    }

    pub fn with_records(mut self, zone_id: &str, pages: Vec<Vec<ResourceRecordSet>>) -> Self {
        self.record_pages.insert(zone_id.to_string(), pages);
        self
    }

    /// Number of `list_hosted_zones` calls so far
    pub fn zone_calls(&self) -> usize {
        self.zone_calls.load(Ordering::SeqCst)
    }

    /// Zone id of every `list_record_sets` call so far
    pub fn record_zone_ids(&self) -> Vec<String> {
        self.record_calls.lock().unwrap().clone()
    }
}

fn page_index(cursor: Option<&str>) -> usize {
    cursor.and_then(|c| c.parse().ok()).unwrap_or(0)
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones(
        &self,
        marker: Option<&str>,
    ) -> Result<PaginatedResponse<HostedZone, String>> {
        self.zone_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let index = page_index(marker);
        let items = self.zone_pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.zone_pages.len()).then(|| (index + 1).to_string());
        Ok(PaginatedResponse::new(items, next))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordSetCursor>,
    ) -> Result<PaginatedResponse<ResourceRecordSet, RecordSetCursor>> {
        self.record_calls.lock().unwrap().push(zone_id.to_string());
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let Some(pages) = self.record_pages.get(zone_id) else {
            return Err(ProviderError::DomainNotFound {
                provider: "mock".to_string(),
                domain: zone_id.to_string(),
                raw_message: None,
            });
        };
        let index = page_index(cursor.map(|c| c.name.as_str()));
        let next = (index + 1 < pages.len()).then(|| RecordSetCursor {
            name: (index + 1).to_string(),
            record_type: None,
            identifier: None,
        });
        Ok(PaginatedResponse::new(
            pages.get(index).cloned().unwrap_or_default(),
            next,
        ))
    }
}

// ===== Factories =====

/// Zone with a `/hostedzone/` prefixed id
pub fn zone(bare_id: &str, name: &str, record_count: u64) -> HostedZone {
    HostedZone {
        id: format!("/hostedzone/{bare_id}"),
        name: name.to_string(),
        record_count,
    }
}

pub fn record(name: &str, record_type: &str, values: &[&str]) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl: 300,
        values: values.iter().map(|v| (*v).to_string()).collect(),
        alias_target: None,
    }
}
