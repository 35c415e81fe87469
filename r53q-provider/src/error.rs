use std::fmt;

/// Errors from Route 53 requests.
///
/// Every variant names the provider that produced it (`provider`), so messages
/// read `[route53] ...`. Errors reach the caller unchanged: nothing in this
/// crate retries.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// Connection failure, unreadable body or a 502/503/504 gateway status.
    NetworkError { provider: String, detail: String },

    /// Access key unknown, secret wrong, or signature rejected.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// A request value the API refused: zone id, pagination token, endpoint.
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// HTTP 429 or a throttling error code.
    RateLimited {
        provider: String,
        /// Seconds from the `Retry-After` header.
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    Timeout { provider: String, detail: String },

    /// The hosted zone named in the request does not exist.
    DomainNotFound {
        provider: String,
        /// Zone id as sent.
        domain: String,
        raw_message: Option<String>,
    },

    /// Credentials are valid but the IAM policy denies the action.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// The response body did not decode.
    ParseError { provider: String, detail: String },

    /// Any error code without a dedicated variant.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is caused by user input or account state rather than by the
    /// provider or the network. Used to pick the log level.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
                | Self::DomainNotFound { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

/// `head`, then `: detail` when there is one.
fn write_with_detail(
    f: &mut fmt::Formatter<'_>,
    head: fmt::Arguments<'_>,
    detail: Option<&str>,
) -> fmt::Result {
    match detail {
        Some(detail) => write!(f, "{head}: {detail}"),
        None => write!(f, "{head}"),
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => write_with_detail(
                f,
                format_args!("[{provider}] Invalid credentials"),
                raw_message.as_deref(),
            ),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => write!(f, "[{provider}] Invalid parameter '{param}': {detail}"),
            Self::RateLimited {
                provider,
                retry_after: Some(secs),
                ..
            } => write!(f, "[{provider}] Rate limited (retry after {secs}s)"),
            Self::RateLimited { provider, .. } => write!(f, "[{provider}] Rate limited"),
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => write_with_detail(
                f,
                format_args!("[{provider}] Hosted zone '{domain}' not found"),
                raw_message.as_deref(),
            ),
            Self::PermissionDenied {
                provider,
                raw_message,
            } => write_with_detail(
                f,
                format_args!("[{provider}] Permission denied"),
                raw_message.as_deref(),
            ),
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code: Some(code),
                raw_message,
            } => write!(f, "[{provider}] {code}: {raw_message}"),
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => write!(f, "[{provider}] {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

pub type Result<T> = std::result::Result<T, ProviderError>;
