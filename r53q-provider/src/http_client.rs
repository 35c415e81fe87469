//! Sending signed requests and decoding XML bodies
//!
//! Each request is sent exactly once. Transport failures, HTTP 429 and gateway
//! statuses become errors here; every other status is handed back with its body
//! so the provider can decode its own error document.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

pub struct HttpUtils;

impl HttpUtils {
    /// Send `request_builder` and return `(status, body)`.
    ///
    /// `method` and `url` are only used for logging.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider: &str,
        method: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{provider}] {method} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| send_error(provider, &e))?;

        let status = response.status().as_u16();
        log::debug!("[{provider}] HTTP {status}");

        if status == 429 || matches!(status, 502..=504) {
            return Err(status_error(provider, status, response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("reading response body: {e}"),
            })?;
        log::debug!("[{provider}] body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Decode an XML body into `T`, matching child elements by name.
    pub fn parse_xml<T: DeserializeOwned>(body: &str, provider: &str) -> Result<T> {
        quick_xml::de::from_str(body).map_err(|e| {
            log::debug!(
                "[{provider}] cannot decode response ({e}): {}",
                truncate_for_log(body)
            );
            ProviderError::ParseError {
                provider: provider.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn send_error(provider: &str, e: &reqwest::Error) -> ProviderError {
    let provider = provider.to_string();
    let detail = e.to_string();
    if e.is_timeout() {
        ProviderError::Timeout { provider, detail }
    } else {
        ProviderError::NetworkError { provider, detail }
    }
}

/// Error for a 429 or gateway response. Consumes the body.
async fn status_error(provider: &str, status: u16, response: Response) -> ProviderError {
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();

    if status == 429 {
        log::debug!("[{provider}] throttled, retry_after={retry_after:?}");
        ProviderError::RateLimited {
            provider: provider.to_string(),
            retry_after,
            raw_message: Some(body),
        }
    } else {
        log::debug!("[{provider}] gateway error HTTP {status}");
        ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
        }
    }
}
