//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::form::FieldErrors;

// Re-export library error type
pub use agentcraft_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Client-side validation failed; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Another operation is still in flight
    #[error("Another operation is in progress")]
    Busy,

    /// Edit submitted without a record being edited
    #[error("No record is being edited")]
    NoCurrentRecord,

    /// Resource client error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Busy | Self::NoCurrentRecord => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_classification() {
        let not_found: CoreError = ClientError::NotFound {
            resource: "model".into(),
            id: "1".into(),
            raw_message: None,
        }
        .into();
        assert!(not_found.is_expected());

        let server: CoreError = ClientError::ServerError {
            resource: "model".into(),
            status: 500,
            raw_message: None,
        }
        .into();
        assert!(!server.is_expected());
        assert_eq!(server.to_string(), "[model] Server error (HTTP 500)");
    }

    #[test]
    fn validation_lists_fields() {
        let mut errors = FieldErrors::default();
        errors.insert("name", "Name is required");
        let err = CoreError::Validation(errors);
        assert_eq!(err.to_string(), "Validation failed: name: Name is required");
        assert!(err.is_expected());
    }
}
