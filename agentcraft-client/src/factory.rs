//! Client factory functions.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::client::HttpResourceClient;
use crate::error::{ClientError, Result};
use crate::traits::{Resource, ResourceApi};

/// 默认后端地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings shared by every resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; collection paths are appended to it.
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidConfig {
            detail: format!("base URL '{}': {e}", self.base_url),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::InvalidConfig {
                detail: format!("unsupported scheme '{other}' in '{}'", self.base_url),
            }),
        }
    }
}

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ClientError::InvalidConfig {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Creates a [`ResourceApi`] for record type `R` talking to `config.base_url`.
///
/// The returned client is wrapped in `Arc<dyn ResourceApi<R>>` so it can be
/// shared across async tasks.
pub fn create_resource_client<R: Resource>(
    config: &ClientConfig,
) -> Result<Arc<dyn ResourceApi<R>>> {
    config.validate()?;
    let client = create_http_client(config)?;
    Ok(Arc::new(HttpResourceClient::<R>::new(
        client,
        config.base_url.clone(),
    )))
}
