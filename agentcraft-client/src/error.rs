use serde::{Deserialize, Serialize};

/// Unified error type for every resource client operation.
///
/// Each variant carries a `resource` field naming the backend collection
/// (`model`, `knowledgeBase`, `agent`) that produced the error, plus
/// variant-specific context. All variants are serializable so the console
/// and the proxy can report them as structured JSON.
///
/// No variant is retried automatically: every operation is exactly one
/// remote call and the caller decides how to surface a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Collection that produced the error.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Collection that produced the error.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The backend answered with a 5xx status.
    ServerError {
        /// Collection that produced the error.
        resource: String,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The addressed record does not exist (HTTP 404).
    NotFound {
        /// Collection that produced the error.
        resource: String,
        /// Identifier of the missing record.
        id: String,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The backend rejected the draft (HTTP 400 / 422).
    Validation {
        /// Collection that produced the error.
        resource: String,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The caller is not allowed to perform the operation (HTTP 401 / 403).
    PermissionDenied {
        /// Collection that produced the error.
        resource: String,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The backend is throttling requests (HTTP 429).
    RateLimited {
        /// Collection that produced the error.
        resource: String,
        /// Suggested wait time in seconds, if the backend sent `Retry-After`.
        retry_after: Option<u64>,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The client configuration is unusable (bad base URL, TLS init failure).
    InvalidConfig {
        /// Details about the configuration problem.
        detail: String,
    },

    /// Failed to parse the backend's response body.
    ParseError {
        /// Collection that produced the error.
        resource: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Collection that produced the error.
        resource: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unmapped non-success status.
    Unknown {
        /// Collection that produced the error.
        resource: String,
        /// HTTP status code, if a response was received.
        status: Option<u16>,
        /// Raw error message.
        raw_message: String,
    },
}

impl ClientError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Validation { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// The collection this error belongs to, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            Self::NetworkError { resource, .. }
            | Self::Timeout { resource, .. }
            | Self::ServerError { resource, .. }
            | Self::NotFound { resource, .. }
            | Self::Validation { resource, .. }
            | Self::PermissionDenied { resource, .. }
            | Self::RateLimited { resource, .. }
            | Self::ParseError { resource, .. }
            | Self::SerializationError { resource, .. }
            | Self::Unknown { resource, .. } => Some(resource),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { resource, detail } => {
                write!(f, "[{resource}] Network error: {detail}")
            }
            Self::Timeout { resource, detail } => {
                write!(f, "[{resource}] Request timeout: {detail}")
            }
            Self::ServerError {
                resource,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{resource}] Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{resource}] Server error (HTTP {status})")
                }
            }
            Self::NotFound { resource, id, .. } => {
                write!(f, "[{resource}] Record '{id}' not found")
            }
            Self::Validation {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{resource}] Rejected by server: {msg}")
                } else {
                    write!(f, "[{resource}] Rejected by server")
                }
            }
            Self::PermissionDenied {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{resource}] Permission denied: {msg}")
                } else {
                    write!(f, "[{resource}] Permission denied")
                }
            }
            Self::RateLimited {
                resource,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{resource}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{resource}] Rate limited")
                }
            }
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
            Self::ParseError { resource, detail } => {
                write!(f, "[{resource}] Parse error: {detail}")
            }
            Self::SerializationError { resource, detail } => {
                write!(f, "[{resource}] Serialization error: {detail}")
            }
            Self::Unknown {
                resource,
                status,
                raw_message,
            } => match status {
                Some(status) => write!(f, "[{resource}] HTTP {status}: {raw_message}"),
                None => write!(f, "[{resource}] {raw_message}"),
            },
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            resource: "model".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[model] Network error: connection refused");
    }

    #[test]
    fn display_server_error_with_message() {
        let e = ClientError::ServerError {
            resource: "model".to_string(),
            status: 500,
            raw_message: Some("db down".to_string()),
        };
        assert_eq!(e.to_string(), "[model] Server error (HTTP 500): db down");
    }

    #[test]
    fn display_not_found() {
        let e = ClientError::NotFound {
            resource: "knowledgeBase".to_string(),
            id: "42".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[knowledgeBase] Record '42' not found");
    }

    #[test]
    fn display_validation_without_message() {
        let e = ClientError::Validation {
            resource: "model".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[model] Rejected by server");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ClientError::RateLimited {
            resource: "agent".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[agent] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unknown_with_status() {
        let e = ClientError::Unknown {
            resource: "model".to_string(),
            status: Some(418),
            raw_message: "teapot".to_string(),
        };
        assert_eq!(e.to_string(), "[model] HTTP 418: teapot");
    }

    #[test]
    fn expected_variants_are_user_or_state_errors() {
        assert!(
            ClientError::NotFound {
                resource: "model".into(),
                id: "1".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            ClientError::Validation {
                resource: "model".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ClientError::ServerError {
                resource: "model".into(),
                status: 503,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ClientError::Timeout {
                resource: "model".into(),
                detail: "30s".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::ServerError {
            resource: "model".to_string(),
            status: 502,
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ServerError\""));
        assert!(json.contains("\"status\":502"));
    }

    #[test]
    fn resource_accessor() {
        let e = ClientError::ParseError {
            resource: "agent".into(),
            detail: "eof".into(),
        };
        assert_eq!(e.resource(), Some("agent"));
        let e = ClientError::InvalidConfig {
            detail: "bad url".into(),
        };
        assert_eq!(e.resource(), None);
    }
}
