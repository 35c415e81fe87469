//! Route 53 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! Codes not listed below fall back to `Unknown` with the raw code attached.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{Route53Provider, SERVICE};

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        SERVICE
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ Authentication ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "UnrecognizedClientException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Authorization ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Throttling ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ Zones ============
            Some("NoSuchHostedZone") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ Parameters ============
            Some("InvalidPaginationToken") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "marker".to_string(),
                detail: raw.message,
            },
            Some("InvalidInput" | "InvalidArgument") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "request".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AwsCredentials;

    fn provider() -> Route53Provider {
        Route53Provider::new(AwsCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
        })
        .unwrap()
    }

    fn map(code: &str) -> ProviderError {
        provider().map_error(
            RawApiError::with_code(code, "raw message"),
            ErrorContext::default(),
        )
    }

    #[test]
    fn credential_codes() {
        for code in [
            "InvalidClientTokenId",
            "SignatureDoesNotMatch",
            "IncompleteSignature",
            "MissingAuthenticationToken",
            "ExpiredToken",
            "UnrecognizedClientException",
        ] {
            assert!(
                matches!(map(code), ProviderError::InvalidCredentials { .. }),
                "{code} should map to InvalidCredentials"
            );
        }
    }

    #[test]
    fn access_denied() {
        assert!(matches!(
            map("AccessDenied"),
            ProviderError::PermissionDenied { raw_message: Some(ref m), .. } if m == "raw message"
        ));
        assert!(matches!(
            map("AccessDeniedException"),
            ProviderError::PermissionDenied { .. }
        ));
    }

    #[test]
    fn throttling() {
        for code in ["Throttling", "ThrottlingException", "PriorRequestNotComplete"] {
            assert!(
                matches!(map(code), ProviderError::RateLimited { retry_after: None, .. }),
                "{code} should map to RateLimited"
            );
        }
    }

    #[test]
    fn no_such_hosted_zone_carries_zone_id() {
        let err = provider().map_error(
            RawApiError::with_code("NoSuchHostedZone", "No hosted zone found with ID: Z9"),
            ErrorContext::for_zone("Z9"),
        );
        assert!(matches!(
            err,
            ProviderError::DomainNotFound { ref domain, .. } if domain == "Z9"
        ));
    }

    #[test]
    fn invalid_pagination_token_names_marker() {
        assert!(matches!(
            map("InvalidPaginationToken"),
            ProviderError::InvalidParameter { ref param, .. } if param == "marker"
        ));
        assert!(matches!(
            map("InvalidInput"),
            ProviderError::InvalidParameter { ref param, .. } if param == "request"
        ));
    }

    #[test]
    fn unmapped_code_is_unknown() {
        assert!(matches!(
            map("ServiceUnavailable"),
            ProviderError::Unknown { raw_code: Some(ref c), .. } if c == "ServiceUnavailable"
        ));
    }
}
