//! # r53q-provider
//!
//! Read-only client for AWS Route 53: lists hosted zones and the record sets
//! inside them.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use r53q_provider::{AwsCredentials, create_provider, hosted_zones, record_sets};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(AwsCredentials {
//!         access_key_id: "AKIA...".to_string(),
//!         secret_access_key: "...".to_string(),
//!         region: "us-east-1".to_string(),
//!     })?;
//!
//!     // Pages are requested as the stream is consumed
//!     let zones: Vec<_> = hosted_zones(provider.as_ref()).try_collect().await?;
//!     for zone in &zones {
//!         println!("{} {} ({} records)", zone.bare_id(), zone.name, zone.record_count);
//!     }
//!
//!     let mut records = record_sets(provider.as_ref(), zones[0].bare_id());
//!     while let Some(rrs) = records.try_next().await? {
//!         println!("{} {} {}", rrs.name, rrs.record_type, rrs.display_values());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). API error
//! codes are mapped onto structured variants:
//!
//! - [`ProviderError::InvalidCredentials`]: signature or key rejected
//! - [`ProviderError::PermissionDenied`]: the principal lacks `route53:List*`
//! - [`ProviderError::DomainNotFound`]: no hosted zone with that id
//! - [`ProviderError::RateLimited`]: throttled by the API
//!
//! Requests are never retried.

mod error;
mod factory;
mod http_client;
mod pagination;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Lazy pagination
pub use pagination::{hosted_zones, record_sets};

// Re-export types
pub use types::{
    AwsCredentials, HOSTED_ZONE_PREFIX, HostedZone, PaginatedResponse, RecordSetCursor,
    ResourceRecordSet, strip_zone_prefix,
};

// Re-export concrete provider
pub use providers::{Route53Provider, Route53ProviderBuilder};
