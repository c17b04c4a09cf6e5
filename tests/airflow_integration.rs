//! Airflow integration tests: registered tools against a stub Airflow REST API.

use airflow_mcp::airflow::AirflowClient;
use airflow_mcp::server::AirflowMcpServer;
use airflow_mcp::tools::{setup_tools, AirflowCapabilities, SelectionRequest};
use airflow_mcp::types::{AirflowConfig, ApiCategory, ApiVersion};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// One request as seen by the stub.
#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

async fn stub(State(log): State<Log>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    log.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    });

    if uri.path().ends_with("/missing") {
        let problem = json!({"detail": "Pool `missing` not found", "status": 404, "title": "Not Found"});
        return (StatusCode::NOT_FOUND, axum::Json(problem)).into_response();
    }
    if uri.path().ends_with("/gateway") {
        let page = "<html><body><h1>502 Bad Gateway</h1></body></html>";
        return (StatusCode::BAD_GATEWAY, page).into_response();
    }
    if method == Method::DELETE {
        return StatusCode::NO_CONTENT.into_response();
    }
    axum::Json(json!({"path": uri.path(), "ok": true})).into_response()
}

/// Helper: spin up a stub Airflow on a random port, return (base url, request log).
async fn start_stub_airflow() -> (String, Log) {
    let log: Log = Arc::default();
    let app = axum::Router::new().fallback(stub).with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), log)
}

fn client(host: &str, configure: impl FnOnce(&mut AirflowConfig)) -> AirflowClient {
    let mut config = AirflowConfig {
        host: host.to_string(),
        ..AirflowConfig::default()
    };
    configure(&mut config);
    AirflowClient::new(config).unwrap()
}

fn server_for(client: &AirflowClient, apis: Vec<ApiCategory>, read_only: bool) -> AirflowMcpServer {
    let selection = SelectionRequest::new(apis, read_only);
    let mut server = AirflowMcpServer::new();
    setup_tools(
        &mut server,
        &AirflowCapabilities,
        client,
        selection.apis(),
        selection.read_only(),
    )
    .unwrap();
    server
}

fn result_text(result: &rmcp::model::CallToolResult) -> String {
    serde_json::to_value(result).unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

fn last(log: &Log) -> Recorded {
    log.lock().unwrap().last().cloned().unwrap()
}

#[tokio::test]
async fn test_get_tool_sends_query_and_basic_auth() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |c| {
        c.username = Some("admin".to_string());
        c.password = Some("secret".to_string());
    });
    let server = server_for(&client, vec![ApiCategory::Pool], false);

    let result = server
        .call("get_pools", json!({"limit": 5, "order_by": "name"}))
        .await
        .unwrap();
    assert_ne!(result.is_error, Some(true));
    assert!(result_text(&result).contains("/api/v1/pools"));

    let request = last(&log);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/v1/pools");
    let query = request.query.unwrap();
    assert!(query.contains("limit=5"));
    assert!(query.contains("order_by=name"));
    // admin:secret
    assert_eq!(request.authorization.as_deref(), Some("Basic YWRtaW46c2VjcmV0"));
}

#[tokio::test]
async fn test_bearer_token_preferred_over_basic_auth() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |c| {
        c.username = Some("admin".to_string());
        c.password = Some("secret".to_string());
        c.jwt_token = Some("tok-123".to_string());
    });
    let server = server_for(&client, vec![ApiCategory::Monitoring], false);

    server.call("get_health", json!({})).await.unwrap();
    assert_eq!(last(&log).authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_post_tool_sends_json_body() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Pool], false);

    server
        .call("post_pool", json!({"name": "etl", "slots": 4}))
        .await
        .unwrap();

    let request = last(&log);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/v1/pools");
    assert_eq!(request.body, Some(json!({"name": "etl", "slots": 4})));
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn test_pause_dag_patches_is_paused() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Dag], false);

    server.call("pause_dag", json!({"dag_id": "etl_daily"})).await.unwrap();

    let request = last(&log);
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/api/v1/dags/etl_daily");
    assert_eq!(request.query.as_deref(), Some("update_mask=is_paused"));
    assert_eq!(request.body, Some(json!({"is_paused": true})));
}

#[tokio::test]
async fn test_delete_with_empty_body_reports_status() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Variable], false);

    let result = server
        .call("delete_variable", json!({"variable_key": "api_key"}))
        .await
        .unwrap();
    assert_ne!(result.is_error, Some(true));
    assert!(result_text(&result).contains("204"));
    assert_eq!(last(&log).path, "/api/v1/variables/api_key");
}

#[tokio::test]
async fn test_airflow_error_is_tool_error_with_detail() {
    let (host, _log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Pool], false);

    let result = server
        .call("get_pool", json!({"pool_name": "missing"}))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    let text = result_text(&result);
    assert!(text.contains("404"));
    assert!(text.contains("Pool `missing` not found"));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let (host, _log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Pool], false);

    let result = server
        .call("get_pool", json!({"pool_name": "gateway"}))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    let text = result_text(&result);
    assert!(text.contains("502"));
    assert!(text.contains("<h1>502 Bad Gateway</h1>"), "got {}", text);
}

#[tokio::test]
async fn test_missing_required_argument_never_reaches_airflow() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |_| {});
    let server = server_for(&client, vec![ApiCategory::Pool], false);

    let err = server.call("get_pool", json!({})).await.unwrap_err();
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_v2_client_targets_v2_prefix() {
    let (host, log) = start_stub_airflow().await;
    let client = client(&host, |c| c.api_version = ApiVersion::V2);
    let server = server_for(&client, vec![ApiCategory::Monitoring], false);

    server.call("get_version", json!({})).await.unwrap();
    assert_eq!(last(&log).path, "/api/v2/version");
}

#[tokio::test]
async fn test_unreachable_airflow_is_tool_error() {
    // Nothing listens on port 9 locally
    let client = client("http://127.0.0.1:9", |_| {});
    let server = server_for(&client, vec![ApiCategory::Monitoring], false);

    let result = server.call("get_health", json!({})).await.unwrap();
    assert_eq!(result.is_error, Some(true));
}
