//! reqwest-backed resource client

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{Resource, ResourceApi};

/// REST client for one backend collection.
///
/// `GET {base}/{collection}`, `POST {base}/{collection}`,
/// `PUT {base}/{collection}/{id}`, `DELETE {base}/{collection}/{id}`.
pub struct HttpResourceClient<R> {
    client: Client,
    base_url: String,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResourceClient<R> {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            _marker: PhantomData,
        }
    }

    fn resource() -> &'static str {
        R::KIND.collection()
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, Self::resource())
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{id}", self.base_url, Self::resource())
    }

    /// 序列化请求体（提前序列化，以便区分序列化错误与网络错误）
    fn encode(draft: &R::Draft) -> Result<Vec<u8>> {
        serde_json::to_vec(draft).map_err(|e| ClientError::SerializationError {
            resource: Self::resource().to_string(),
            detail: e.to_string(),
        })
    }

    /// 发送请求、检查状态码并解析响应
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
        id: Option<i64>,
    ) -> Result<T> {
        let (status, body) =
            HttpUtils::execute_request(request, Self::resource(), method, url).await?;
        HttpUtils::check_status(status, &body, Self::resource(), id)?;
        HttpUtils::parse_payload(&body, Self::resource())
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for HttpResourceClient<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let url = self.collection_url();
        let request = self.client.get(&url);
        self.send(request, "GET", &url, None).await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        let url = self.collection_url();
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(Self::encode(draft)?);
        let record: R = self.send(request, "POST", &url, None).await?;
        log::debug!("[{}] Created record {}", Self::resource(), record.id());
        Ok(record)
    }

    async fn update(&self, id: i64, draft: &R::Draft) -> Result<R> {
        let url = self.item_url(id);
        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(Self::encode(draft)?);
        let record = self.send(request, "PUT", &url, Some(id)).await?;
        log::debug!("[{}] Updated record {id}", Self::resource());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        let request = self.client.delete(&url);
        let (status, body) =
            HttpUtils::execute_request(request, Self::resource(), "DELETE", &url).await?;
        HttpUtils::check_status(status, &body, Self::resource(), Some(id))?;
        log::debug!("[{}] Deleted record {id}", Self::resource());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KnowledgeBase, KnowledgeBaseDraft, Model, ModelDraft};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn model_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "name_alias": "gpt4",
            "description": "prod",
            "url": "https://api.example.com/v1",
            "token": "secret",
            "timeout": 30,
            "created": "2024-03-01 10:20:30",
            "modified": "2024-03-01 10:20:30"
        })
    }

    fn gpt4_draft() -> ModelDraft {
        ModelDraft {
            name: "gpt4proxy".into(),
            name_alias: "gpt4".into(),
            url: "https://api.example.com/v1".into(),
            token: "secret".into(),
            timeout: 30,
            description: "prod".into(),
        }
    }

    #[tokio::test]
    async fn list_decodes_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([model_json(1, "a"), model_json(2, "b")])),
            )
            .mount(&server)
            .await;

        let client = HttpResourceClient::<Model>::new(Client::new(), server.uri());
        let models = client.list().await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].name, "b");
    }

    #[tokio::test]
    async fn list_decodes_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/knowledgeBase"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": [{"id": 5, "name": "docs", "description": "faq"}]
            })))
            .mount(&server)
            .await;

        let client = HttpResourceClient::<KnowledgeBase>::new(
            Client::new(),
            format!("{}/api/", server.uri()),
        );
        let kbs = client.list().await.unwrap();
        assert_eq!(kbs.len(), 1);
        assert_eq!(kbs[0].id, 5);
    }

    #[tokio::test]
    async fn create_posts_draft_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model"))
            .and(body_json(json!({
                "name": "gpt4proxy",
                "name_alias": "gpt4",
                "url": "https://api.example.com/v1",
                "token": "secret",
                "timeout": 30,
                "description": "prod"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_json(11, "gpt4proxy")))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpResourceClient::<Model>::new(Client::new(), server.uri());
        let model = client.create(&gpt4_draft()).await.unwrap();
        assert_eq!(model.id, 11);
        assert_eq!(model.name, "gpt4proxy");
    }

    #[tokio::test]
    async fn create_rejected_maps_to_validation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "alias taken"})),
            )
            .mount(&server)
            .await;

        let client = HttpResourceClient::<Model>::new(Client::new(), server.uri());
        let err = client.create(&gpt4_draft()).await.unwrap_err();
        assert!(
            matches!(&err, ClientError::Validation { raw_message: Some(m), .. } if m == "alias taken"),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn update_unknown_id_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/knowledgeBase/77"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpResourceClient::<KnowledgeBase>::new(Client::new(), server.uri());
        let err = client
            .update(77, &KnowledgeBaseDraft::default())
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ClientError::NotFound { id, .. } if id == "77"),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn delete_targets_own_collection() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/knowledgeBase/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpResourceClient::<KnowledgeBase>::new(Client::new(), server.uri());
        client.delete(3).await.unwrap();
    }

    #[tokio::test]
    async fn server_error_maps_to_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpResourceClient::<Model>::new(Client::new(), server.uri());
        let err = client.list().await.unwrap_err();
        assert!(
            matches!(&err, ClientError::ServerError { status: 500, .. }),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = HttpResourceClient::<Model>::new(Client::new(), server.uri());
        let err = client.list().await.unwrap_err();
        assert!(
            matches!(&err, ClientError::ParseError { .. }),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_network_error() {
        // 端口 1 通常无人监听
        let client = HttpResourceClient::<Model>::new(Client::new(), "http://127.0.0.1:1");
        let err = client.list().await.unwrap_err();
        assert!(
            matches!(
                &err,
                ClientError::NetworkError { .. } | ClientError::Timeout { .. }
            ),
            "unexpected error: {err:?}"
        );
    }
}
