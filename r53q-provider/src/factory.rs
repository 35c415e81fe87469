//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::Route53Provider;
use crate::traits::DnsProvider;
use crate::types::AwsCredentials;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks.
///
/// # Errors
///
/// Fails when the HTTP client cannot be initialised.
///
/// # Examples
///
/// ```rust,no_run
/// use r53q_provider::{AwsCredentials, create_provider};
///
/// let provider = create_provider(AwsCredentials {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "...".to_string(),
///     region: "us-east-1".to_string(),
/// })?;
/// assert_eq!(provider.id(), "route53");
/// # Ok::<(), r53q_provider::ProviderError>(())
/// ```
pub fn create_provider(credentials: AwsCredentials) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(Route53Provider::new(credentials)?))
}
