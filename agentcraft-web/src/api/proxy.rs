//! Passthrough handlers: forward verb, query and body; mirror status and body.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, web};
use agentcraft_client::ResourceKind;

use crate::error::ProxyError;
use crate::forward::Forwarder;

pub async fn forward_collection(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    forwarder: web::Data<Forwarder>,
) -> Result<HttpResponse, ProxyError> {
    let resource = path.into_inner();
    relay(&req, &forwarder, &resource, None, body).await
}

pub async fn forward_item(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Bytes,
    forwarder: web::Data<Forwarder>,
) -> Result<HttpResponse, ProxyError> {
    let (resource, id) = path.into_inner();
    relay(&req, &forwarder, &resource, Some(&id), body).await
}

async fn relay(
    req: &HttpRequest,
    forwarder: &Forwarder,
    resource: &str,
    id: Option<&str>,
    body: web::Bytes,
) -> Result<HttpResponse, ProxyError> {
    let kind = ResourceKind::from_collection(resource)
        .ok_or_else(|| ProxyError::UnknownResource(resource.to_string()))?;
    let method = backend_method(req.method(), id.is_some())?;
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let forwarded = forwarder
        .forward(
            method,
            kind,
            id,
            req.query_string(),
            content_type,
            body.to_vec(),
        )
        .await?;

    let status = StatusCode::from_u16(forwarded.status).map_err(|_| {
        ProxyError::BadGateway(format!("invalid backend status {}", forwarded.status))
    })?;

    let mut response = HttpResponse::build(status);
    response.content_type(
        forwarded
            .content_type
            .as_deref()
            .unwrap_or("application/json"),
    );
    Ok(response.body(forwarded.body))
}

/// 集合路径只接受 GET/POST，单条记录路径只接受 GET/PUT/PATCH/DELETE。
///
/// actix 与 reqwest 依赖的 `http` 版本不同，按名称转换
fn backend_method(method: &Method, item: bool) -> Result<reqwest::Method, ProxyError> {
    Ok(match (method, item) {
        (&Method::GET, _) => reqwest::Method::GET,
        (&Method::POST, false) => reqwest::Method::POST,
        (&Method::PUT, true) => reqwest::Method::PUT,
        (&Method::PATCH, true) => reqwest::Method::PATCH,
        (&Method::DELETE, true) => reqwest::Method::DELETE,
        _ => return Err(ProxyError::MethodNotAllowed(method.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use actix_web::{App, web};
    use reqwest::Client;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api;
    use crate::forward::Forwarder;

    use super::*;

    macro_rules! proxy_app {
        ($base:expr) => {
            init_service(
                App::new()
                    .app_data(web::Data::new(Forwarder::new(Client::new(), $base)))
                    .route("/health", web::get().to(api::health_check))
                    .configure(api::config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn mirrors_success_body() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": [{"id": 1}]})),
            )
            .mount(&backend)
            .await;

        let app = proxy_app!(backend.uri());
        let resp =
            call_service(&app, TestRequest::get().uri("/api/model").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"code": 200, "data": [{"id": 1}]}));
    }

    #[actix_web::test]
    async fn mirrors_backend_errors() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/knowledgeBase/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "missing"})))
            .mount(&backend)
            .await;
        Mock::given(method("GET"))
            .and(path("/agent"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
            .mount(&backend)
            .await;

        let app = proxy_app!(backend.uri());

        let resp = call_service(
            &app,
            TestRequest::get()
                .uri("/api/knowledgeBase/9")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": "missing"}));

        let resp =
            call_service(&app, TestRequest::get().uri("/api/agent").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": "db down"}));
    }

    #[actix_web::test]
    async fn forwards_body_and_query() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/model"))
            .and(query_param("dry", "1"))
            .and(body_json(json!({"name": "gpt4proxy"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
            .expect(1)
            .mount(&backend)
            .await;

        let app = proxy_app!(backend.uri());
        let resp = call_service(
            &app,
            TestRequest::post()
                .uri("/api/model?dry=1")
                .set_json(json!({"name": "gpt4proxy"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["id"], 11);
    }

    #[actix_web::test]
    async fn item_verbs_target_their_collection() {
        let backend = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/knowledgeBase/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .expect(1)
            .mount(&backend)
            .await;
        Mock::given(method("PUT"))
            .and(path("/model/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
            .expect(1)
            .mount(&backend)
            .await;

        let app = proxy_app!(backend.uri());
        let resp = call_service(
            &app,
            TestRequest::delete()
                .uri("/api/knowledgeBase/3")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = call_service(
            &app,
            TestRequest::put()
                .uri("/api/model/5")
                .set_json(json!({"name": "renamed"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unknown_resource_is_local_404() {
        let backend = MockServer::start().await;
        let app = proxy_app!(backend.uri());

        let resp = call_service(
            &app,
            TestRequest::get().uri("/api/accounts").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["code"], "NotFound");
        assert!(backend.received_requests().await.unwrap_or_default().is_empty());
    }

    #[actix_web::test]
    async fn unreachable_backend_is_bad_gateway() {
        let app = proxy_app!("http://127.0.0.1:1");
        let resp =
            call_service(&app, TestRequest::get().uri("/api/model").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["code"], "BadGateway");
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = proxy_app!("http://127.0.0.1:1");
        let resp =
            call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[test]
    fn methods_are_checked_per_path_shape() {
        assert!(matches!(
            backend_method(&Method::OPTIONS, false),
            Err(ProxyError::MethodNotAllowed(_))
        ));
        assert!(matches!(
            backend_method(&Method::PUT, false),
            Err(ProxyError::MethodNotAllowed(_))
        ));
        assert!(matches!(
            backend_method(&Method::POST, true),
            Err(ProxyError::MethodNotAllowed(_))
        ));
        assert_eq!(
            backend_method(&Method::PATCH, true).unwrap(),
            reqwest::Method::PATCH
        );
        assert_eq!(
            backend_method(&Method::GET, false).unwrap(),
            reqwest::Method::GET
        );
    }

    #[actix_web::test]
    async fn other_verbs_get_json_405() {
        let backend = MockServer::start().await;
        let app = proxy_app!(backend.uri());

        for req in [
            TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/api/model"),
            TestRequest::put().uri("/api/model"),
            TestRequest::post().uri("/api/knowledgeBase/2"),
        ] {
            let resp = call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            let body: Value = read_body_json(resp).await;
            assert_eq!(body["code"], "MethodNotAllowed");
        }

        let resp = call_service(
            &app,
            TestRequest::default()
                .method(Method::HEAD)
                .uri("/api/model/1")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(backend.received_requests().await.unwrap_or_default().is_empty());
    }
}
