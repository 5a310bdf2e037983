//! HttpLaptopRepository against a scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rock_catalog::prelude::*;
use rock_data::{FetchClient, FetchError, Method, RequestBuilder, Response, Transport};

const BASE: &str = "http://localhost:8000/api/Laptop";

#[derive(Default)]
struct Scripted {
    replies: Mutex<VecDeque<Result<Response, FetchError>>>,
    seen: Mutex<Vec<RequestBuilder>>,
}

impl Scripted {
    fn with(replies: Vec<Result<Response, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::default(),
        })
    }

    fn requests(&self) -> Vec<RequestBuilder> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Scripted {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("no scripted reply".into())))
    }
}

fn ok(body: &str) -> Result<Response, FetchError> {
    Ok(Response::new(200, Vec::new(), body.as_bytes().to_vec()))
}

fn repo(transport: Arc<Scripted>) -> HttpLaptopRepository {
    HttpLaptopRepository::with_client(FetchClient::new(transport), ApiConfig::default())
}

fn record_json(id: &str, category: &str) -> String {
    format!(
        r#"{{"id":"{id}","image":"","categoria":"{category}","marca":"Lenovo","modelo":"Legion 5",
            "procesador":"Ryzen 7","ramgb":16,"almacenamientogb":1024,"precio":1299.99,"pulgadas":15.6}}"#
    )
}

#[tokio::test]
async fn fetch_sends_get_to_base_url() {
    let transport = Scripted::with(vec![ok(&format!("[{}]", record_json("a", "gaming")))]);
    let records = repo(transport.clone())
        .fetch_catalog(&CatalogQuery::all())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);

    let seen = transport.requests();
    assert_eq!(seen[0].method(), Method::Get);
    assert_eq!(seen[0].url(), BASE);
    assert_eq!(seen[0].header_value("accept"), Some("application/json"));
    assert_eq!(seen[0].request_timeout(), Some(Duration::from_secs(8)));
}

#[tokio::test]
async fn fetch_passes_server_side_filters() {
    let transport = Scripted::with(vec![ok("[]")]);
    repo(transport.clone())
        .fetch_catalog(&CatalogQuery::all().with_category("gaming").with_brand("MSI"))
        .await
        .unwrap();
    assert_eq!(
        transport.requests()[0].full_url().unwrap(),
        format!("{}?categoria=gaming&marca=MSI", BASE)
    );
}

#[tokio::test]
async fn server_error_then_retry_succeeds() {
    let body = format!(
        "[{},{},{}]",
        record_json("a", "gaming"),
        record_json("b", "trabajo"),
        record_json("c", "otros")
    );
    let transport = Scripted::with(vec![
        Ok(Response::new(500, Vec::new(), b"boom".to_vec())),
        ok(&body),
    ]);
    let repo = repo(transport);

    let err = repo.fetch_catalog(&CatalogQuery::all()).await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::HttpStatus {
            status: 500,
            body: "Internal Server Error - boom".into()
        }
    );

    let records = repo.fetch_catalog(&CatalogQuery::all()).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn non_array_body_is_empty_catalog() {
    let transport = Scripted::with(vec![ok(r#"{"message":"ok"}"#)]);
    let records = repo(transport).fetch_catalog(&CatalogQuery::all()).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn connection_failure_carries_hint() {
    let transport = Scripted::with(vec![Err(FetchError::Connection {
        url: BASE.into(),
        message: "connection refused".into(),
    })]);
    let err = repo(transport).fetch_catalog(&CatalogQuery::all()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains(BASE));
}

#[tokio::test]
async fn timeout_is_its_own_error() {
    let transport = Scripted::with(vec![Err(FetchError::Timeout {
        url: BASE.into(),
        after: Duration::from_secs(8),
    })]);
    let err = repo(transport).fetch_catalog(&CatalogQuery::all()).await.unwrap_err();
    assert_eq!(err, CatalogError::Timeout(Duration::from_secs(8)));
}

#[tokio::test]
async fn search_posts_query_and_decodes() {
    let body = format!(
        r#"{{"consultaOriginal":"gaming barato","totalEncontrados":1,"laptops":[{}],"timestamp":"2025-06-01T10:00:00Z"}}"#,
        record_json("z", "gaming")
    );
    let transport = Scripted::with(vec![ok(&body)]);
    let query = SearchQuery::parse("  gaming barato ").unwrap();
    let result = repo(transport.clone()).search(&query).await.unwrap();
    assert_eq!(result.original_query, "gaming barato");
    assert_eq!(result.laptops.len(), 1);

    let seen = transport.requests();
    assert_eq!(seen[0].method(), Method::Post);
    assert_eq!(seen[0].url(), format!("{}/Gemini/buscar-laptops", BASE));
    let sent: serde_json::Value = serde_json::from_slice(seen[0].body().unwrap()).unwrap();
    assert_eq!(sent, serde_json::json!({ "consulta": "gaming barato" }));
}

#[tokio::test]
async fn search_with_wrong_shape_is_decode_error() {
    let transport = Scripted::with(vec![ok("[]")]);
    let query = SearchQuery::parse("gaming").unwrap();
    let err = repo(transport).search(&query).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn search_http_error_maps_to_status() {
    let transport = Scripted::with(vec![Ok(Response::new(503, Vec::new(), Vec::new()))]);
    let query = SearchQuery::parse("gaming").unwrap();
    let err = repo(transport).search(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn health_reports_each_outcome() {
    let transport = Scripted::with(vec![
        Ok(Response::new(200, Vec::new(), Vec::new())),
        Ok(Response::new(502, Vec::new(), Vec::new())),
        Err(FetchError::Timeout {
            url: BASE.into(),
            after: Duration::from_secs(5),
        }),
        Err(FetchError::Connection {
            url: BASE.into(),
            message: "refused".into(),
        }),
    ]);
    let repo = repo(transport.clone());

    assert_eq!(repo.check_health().await, HealthStatus::Healthy { status: 200 });
    assert_eq!(repo.check_health().await, HealthStatus::Unhealthy { status: 502 });
    assert_eq!(repo.check_health().await, HealthStatus::TimedOut);
    assert!(matches!(repo.check_health().await, HealthStatus::Unreachable { .. }));

    let seen = transport.requests();
    assert_eq!(seen[0].method(), Method::Head);
    assert_eq!(seen[0].request_timeout(), Some(Duration::from_secs(5)));
}
