//! 代理自身产生的错误（后端返回的错误原样透传，不经过这里）

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Path names a collection the backend does not serve
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Verb not relayed to the backend
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Backend could not be reached or did not answer in time
    #[error("Backend unreachable: {0}")]
    BadGateway(String),
}

impl ProxyError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownResource(_) => "NotFound",
            Self::MethodNotAllowed(_) => "MethodNotAllowed",
            Self::BadGateway(_) => "BadGateway",
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }))
    }
}
