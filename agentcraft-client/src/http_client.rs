//! Generic HTTP client tools
//!
//! Shared request/response handling for every resource collection:
//! sending, logging, status classification and payload decoding.
//! Requests are never retried.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::Payload;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `resource` - collection name (for logging and errors)
    /// * `method_name` - HTTP method (for logging)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any received response except 429
    /// * `Err(ClientError::Timeout | NetworkError)` when nothing was received
    /// * `Err(ClientError::RateLimited)` for HTTP 429
    pub async fn execute_request(
        request_builder: RequestBuilder,
        resource: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[{resource}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{resource}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::debug!("[{resource}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ClientError::RateLimited {
                resource: resource.to_string(),
                retry_after,
                raw_message: extract_message(&body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                resource: resource.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{resource}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Classify a non-success status into a [`ClientError`]
    ///
    /// `id` is the addressed record, if the request targeted a single record.
    pub fn check_status(
        status_code: u16,
        response_text: &str,
        resource: &str,
        id: Option<i64>,
    ) -> Result<(), ClientError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        let raw_message = extract_message(response_text);
        let resource = resource.to_string();

        let error = match status_code {
            400 | 422 => ClientError::Validation {
                resource,
                raw_message,
            },
            401 | 403 => ClientError::PermissionDenied {
                resource,
                raw_message,
            },
            404 => ClientError::NotFound {
                resource,
                id: id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                raw_message,
            },
            500..=599 => ClientError::ServerError {
                resource,
                status: status_code,
                raw_message,
            },
            _ => ClientError::Unknown {
                resource,
                status: Some(status_code),
                raw_message: raw_message.unwrap_or_else(|| truncate_for_log(response_text)),
            },
        };

        // 失败只在调用方（CrudService）记录一次
        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, resource: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::debug!("[{resource}] Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                resource: resource.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse a backend payload, bare or wrapped in `{ "code", "data" }`
    pub fn parse_payload<T>(response_text: &str, resource: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        Self::parse_json::<Payload<T>>(response_text, resource).map(Payload::into_inner)
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks for the usual `message` / `msg` / `detail` / `error` string fields and
/// falls back to the (truncated) raw text. Empty bodies yield `None`.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "msg", "detail", "error"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                return Some(msg.clone());
            }
        }
    }

    Some(truncate_for_log(trimmed))
}
