//! 后端请求转发

use agentcraft_client::{ClientConfig, ResourceKind, create_http_client, truncate_for_log};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};

use crate::config::BackendConfig;
use crate::error::ProxyError;

/// Backend answer, relayed verbatim.
#[derive(Debug)]
pub struct Forwarded {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Sends proxied requests to the backend collections.
pub struct Forwarder {
    client: Client,
    base_url: String,
}

impl Forwarder {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// 使用共享的 HTTP client 配置（超时）构建
    pub fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let client_config = ClientConfig {
            base_url: config.base_url.clone(),
            request_timeout: config.timeout(),
            ..ClientConfig::default()
        };
        client_config.validate()?;
        let client = create_http_client(&client_config)?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{collection}[/{id}][?{query}]`
    pub fn target_url(&self, kind: ResourceKind, id: Option<&str>, query: &str) -> String {
        let mut url = format!("{}/{}", self.base_url, kind.collection());
        if let Some(id) = id {
            url.push('/');
            url.push_str(id);
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Forward one request. Any HTTP answer from the backend is `Ok`;
    /// only transport failures become [`ProxyError::BadGateway`].
    pub async fn forward(
        &self,
        method: Method,
        kind: ResourceKind,
        id: Option<&str>,
        query: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<Forwarded, ProxyError> {
        let url = self.target_url(kind, id, query);
        tracing::debug!(%method, %url, "forwarding");

        let mut request = self.client.request(method.clone(), &url);
        if !body.is_empty() {
            request = request
                .header(CONTENT_TYPE, content_type.unwrap_or("application/json"))
                .body(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "backend unreachable");
            ProxyError::BadGateway(e.to_string())
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::BadGateway(format!("failed to read backend body: {e}")))?
            .to_vec();

        if status >= 400 {
            tracing::warn!(
                %method,
                %url,
                status,
                body = %truncate_for_log(&String::from_utf8_lossy(&body)),
                "backend returned error"
            );
        } else {
            tracing::info!(%method, %url, status, "forwarded");
        }

        Ok(Forwarded {
            status,
            content_type,
            body,
        })
    }
}
