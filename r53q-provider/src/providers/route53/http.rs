//! Route 53 HTTP request methods

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::{redact_signature, truncate_for_log};

use super::Route53Provider;
use super::types::ErrorResponse;

/// RFC 3986 encode and sort query parameters by key.
///
/// The result is used verbatim both on the wire and in the canonical request.
pub(crate) fn canonical_query(params: &[(&str, String)]) -> String {
    let mut encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    encoded.sort_unstable();
    encoded.join("&")
}

impl Route53Provider {
    /// Map a non-2xx response onto a [`crate::ProviderError`]
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(body) = quick_xml::de::from_str::<ErrorResponse>(response_text) {
            log::debug!(
                "[{}] API error {}: {}",
                self.provider_name(),
                body.error.code,
                body.error.message
            );
            return Err(self.map_error(
                RawApiError::with_code(body.error.code, body.error.message),
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// Execute a signed GET request and decode the XML body
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let query = canonical_query(params);

        let headers = vec![
            ("host".to_string(), self.host.clone()),
            ("x-amz-date".to_string(), amz_date.clone()),
        ];
        let authorization = self.sign("GET", path, &query, &headers, &amz_date);
        log::debug!("Authorization: {}", redact_signature(&authorization));

        let url = if query.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query}", self.endpoint)
        };

        let request = self
            .client
            .get(&url)
            .header("x-amz-date", &amz_date)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }
}
