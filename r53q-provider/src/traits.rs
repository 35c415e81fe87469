use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{HostedZone, PaginatedResponse, RecordSetCursor, ResourceRecordSet};

/// Raw API error as reported by the provider (internal)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Provider error code
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Request context used while mapping errors (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone the request was about (for `DomainNotFound`)
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_zone(zone_id: &str) -> Self {
        Self {
            domain: Some(zone_id.to_string()),
        }
    }
}

/// Maps raw provider error codes onto [`ProviderError`] (internal)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unmapped error
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only access to a DNS hosting provider.
///
/// Each method fetches exactly one page. Use [`crate::hosted_zones`] and
/// [`crate::record_sets`] to walk every page lazily.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Fetch one page of hosted zones, starting at `marker` (the previous page's cursor).
    async fn list_hosted_zones(
        &self,
        marker: Option<&str>,
    ) -> Result<PaginatedResponse<HostedZone, String>>;

    /// Fetch one page of record sets in `zone_id`, starting at `cursor`.
    ///
    /// `zone_id` may be bare (`Z123`) or prefixed (`/hostedzone/Z123`).
    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordSetCursor>,
    ) -> Result<PaginatedResponse<ResourceRecordSet, RecordSetCursor>>;
}
