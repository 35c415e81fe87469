//! Route 53 API XML response bodies (API version 2013-04-01)

use serde::Deserialize;

// ============ ListHostedZones ============

/// Response payload for `ListHostedZones`.
#[derive(Debug, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZonesWrapper,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZonesWrapper {
    #[serde(rename = "HostedZone", default)]
    pub hosted_zone: Vec<HostedZoneXml>,
}

#[derive(Debug, Deserialize)]
pub struct HostedZoneXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ResourceRecordSetCount")]
    pub resource_record_set_count: Option<u64>,
}

// ============ ListResourceRecordSets ============

/// Response payload for `ListResourceRecordSets`.
#[derive(Debug, Deserialize)]
pub struct ListResourceRecordSetsResponse {
    #[serde(rename = "ResourceRecordSets", default)]
    pub resource_record_sets: ResourceRecordSetsWrapper,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextRecordName")]
    pub next_record_name: Option<String>,
    #[serde(rename = "NextRecordType")]
    pub next_record_type: Option<String>,
    #[serde(rename = "NextRecordIdentifier")]
    pub next_record_identifier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecordSetsWrapper {
    #[serde(rename = "ResourceRecordSet", default)]
    pub resource_record_set: Vec<ResourceRecordSetXml>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceRecordSetXml {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "TTL")]
    pub ttl: Option<u64>,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: Option<ResourceRecordsWrapper>,
    #[serde(rename = "AliasTarget")]
    pub alias_target: Option<AliasTargetXml>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecordsWrapper {
    #[serde(rename = "ResourceRecord", default)]
    pub resource_record: Vec<ResourceRecordXml>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceRecordXml {
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AliasTargetXml {
    #[serde(rename = "DNSName")]
    pub dns_name: String,
}

// ============ Errors ============

/// Error body returned with 4xx/5xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}
