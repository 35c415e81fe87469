//! AWS Route 53 Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 API-specific XML response types.
pub(crate) mod types;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;
use crate::types::AwsCredentials;

/// API version prefix shared by every Route 53 path.
pub(crate) const API_VERSION_PATH: &str = "/2013-04-01";
/// Service name used in the SigV4 credential scope.
pub(crate) const SERVICE: &str = "route53";
/// Largest `maxitems` accepted by `ListHostedZones`.
pub(crate) const MAX_ZONE_PAGE_SIZE: u32 = 100;
/// Largest `maxitems` accepted by `ListResourceRecordSets`.
pub(crate) const MAX_RECORD_PAGE_SIZE: u32 = 300;

/// Global endpoint and signing region for the partition a region belongs to.
///
/// Route 53 is a global service: every region of a partition talks to the same
/// endpoint and signs for the partition's home region.
pub(crate) fn partition_endpoint(region: &str) -> (&'static str, &'static str) {
    if region.starts_with("cn-") {
        ("https://route53.amazonaws.com.cn", "cn-northwest-1")
    } else if region.starts_with("us-gov-") {
        ("https://route53.us-gov.amazonaws.com", "us-gov-west-1")
    } else {
        ("https://route53.amazonaws.com", "us-east-1")
    }
}

/// AWS Route 53 provider implementation.
///
/// Authenticates with static access keys via AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use r53q_provider::{AwsCredentials, Route53Provider};
///
/// let provider = Route53Provider::new(AwsCredentials {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "...".to_string(),
///     region: "eu-west-1".to_string(),
/// })?;
/// # Ok::<(), r53q_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    /// Base URL without trailing slash, e.g. `https://route53.amazonaws.com`.
    pub(crate) endpoint: String,
    /// `Host` header value (includes the port when it is not the scheme default).
    pub(crate) host: String,
    pub(crate) signing_region: String,
    pub(crate) page_size: Option<u32>,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    credentials: AwsCredentials,
    endpoint: Option<String>,
    page_size: Option<u32>,
}

impl Route53ProviderBuilder {
    fn new(credentials: AwsCredentials) -> Self {
        Self {
            credentials,
            endpoint: None,
            page_size: None,
        }
    }

    /// Send requests to `endpoint` instead of the partition endpoint.
    ///
    /// The signing region still follows the credentials' region.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Request at most `size` items per page (default: provider default).
    ///
    /// Clamped to the per-operation maximum.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Build the [`Route53Provider`] instance.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the endpoint is not an absolute URL with a host,
    /// `NetworkError` when the HTTP client cannot be initialised.
    pub fn build(self) -> Result<Route53Provider> {
        let (default_endpoint, signing_region) = partition_endpoint(&self.credentials.region);
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();

        let invalid_endpoint = |detail: String| ProviderError::InvalidParameter {
            provider: SERVICE.to_string(),
            param: "endpoint".to_string(),
            detail,
        };
        let url = Url::parse(&endpoint).map_err(|e| invalid_endpoint(format!("{endpoint}: {e}")))?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(invalid_endpoint(format!("{endpoint}: missing host"))),
        };

        log::debug!("[{SERVICE}] endpoint {endpoint}, signing region {signing_region}");

        Ok(Route53Provider {
            client: create_http_client()?,
            credentials: self.credentials,
            endpoint,
            host,
            signing_region: signing_region.to_string(),
            page_size: self.page_size,
        })
    }
}

impl Route53Provider {
    /// Creates a provider for the credentials' partition with default settings.
    ///
    /// # Errors
    ///
    /// See [`Route53ProviderBuilder::build`].
    pub fn new(credentials: AwsCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}
