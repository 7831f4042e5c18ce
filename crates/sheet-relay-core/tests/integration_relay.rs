#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use sheet_relay_core::{relay_router, RelayConfig, RelayState, RELAY_PATH};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHEET_ID: &str = "sheet-123";
const API_KEY: &str = "key-abc";

fn full_config(upstream: &MockServer) -> RelayConfig {
    RelayConfig {
        sheet_id: SHEET_ID.to_string(),
        api_key: API_KEY.to_string(),
        append_url: format!("{}/exec", upstream.uri()),
        append_token: Some("server-secret".to_string()),
        sheets_api_base: format!("{}/v4", upstream.uri()),
    }
}

fn relay_server(config: RelayConfig) -> TestServer {
    let state = RelayState::new(config).expect("failed to build relay state");
    TestServer::new(relay_router(state)).expect("failed to start test server")
}

fn assert_cors_headers(response: &axum_test::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-allow-methods"), "GET,POST,OPTIONS");
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type, Authorization"
    );
}

fn metadata_body() -> Value {
    json!({
        "spreadsheetId": SHEET_ID,
        "sheets": [
            {"properties": {"sheetId": 0, "title": "Users"}},
            {"properties": {"sheetId": 1}},
            {"properties": {"sheetId": 2, "title": ""}},
            {},
            {"properties": {"sheetId": 3, "title": "Sessions"}}
        ]
    })
}

#[tokio::test]
async fn test_names_sentinel_lists_sheet_titles() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}")))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("sheet", "__names__").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": [["Users", "Sessions"]]}));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_names_flag_lists_sheet_titles() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("names", "1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": [["Users", "Sessions"]]}));
}

#[tokio::test]
async fn test_missing_sheet_is_rejected() {
    let upstream = MockServer::start().await;
    let server = relay_server(full_config(&upstream));

    let response = server.get(RELAY_PATH).add_query_param("range", "A1:B2").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"error": "Missing sheet"}));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_missing_credentials_rejected_before_anything_else() {
    let upstream = MockServer::start().await;
    let config = RelayConfig { sheet_id: String::new(), ..full_config(&upstream) };
    let server = relay_server(config);

    for query in [
        vec![("sheet", "Foo")],
        vec![("sheet", "__names__")],
        vec![("names", "1")],
        vec![],
    ] {
        let mut request = server.get(RELAY_PATH);
        for (key, value) in query {
            request = request.add_query_param(key, value);
        }
        let response = request.await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({"error": "Missing SHEET_ID or API_KEY"}));
    }

    let requests = upstream.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "no upstream call without credentials");
}

#[tokio::test]
async fn test_missing_api_key_rejected() {
    let upstream = MockServer::start().await;
    let config = RelayConfig { api_key: String::new(), ..full_config(&upstream) };
    let server = relay_server(config);

    let response = server.get(RELAY_PATH).add_query_param("sheet", "Foo").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"error": "Missing SHEET_ID or API_KEY"}));
}

#[tokio::test]
async fn test_range_is_encoded_into_values_path() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Foo%21A1%3AB2")))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Foo!A1:B2",
            "majorDimension": "ROWS",
            "values": [["a", "b"], ["c", "d"]]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server
        .get(RELAY_PATH)
        .add_query_param("sheet", "Foo")
        .add_query_param("range", "A1:B2")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": [["a", "b"], ["c", "d"]]}));
}

#[tokio::test]
async fn test_sheet_without_range_reads_whole_sheet() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Foo")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Foo!A1:Z1000",
            "values": [["id", "name"]]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("sheet", "Foo").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": [["id", "name"]]}));
}

#[tokio::test]
async fn test_empty_range_reads_as_empty_grid() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Empty")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Empty!A1:Z1000",
            "majorDimension": "ROWS"
        })))
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("sheet", "Empty").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": []}));
}

#[tokio::test]
async fn test_upstream_read_error_still_answers_ok() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Missing")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "Unable to parse range: Missing", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("sheet", "Missing").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"values": []}));
}

#[tokio::test]
async fn test_non_json_read_body_becomes_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Foo")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.get(RELAY_PATH).add_query_param("sheet", "Foo").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("non-JSON"), "unexpected message: {message}");
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Foo%211%3A1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [["id", "email", "created_at"]]
        })))
        .expect(2)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let first = server
        .get(RELAY_PATH)
        .add_query_param("sheet", "Foo")
        .add_query_param("range", "1:1")
        .await
        .json::<Value>();
    let second = server
        .get(RELAY_PATH)
        .add_query_param("sheet", "Foo")
        .add_query_param("range", "1:1")
        .await
        .json::<Value>();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_write_injects_server_token() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"sheet": "Log", "row": ["x"], "token": "server-secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.post(RELAY_PATH).json(&json!({"sheet": "Log", "row": ["x"]})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"ok": true}));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_write_preserves_caller_token() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(body_json(json!({"token": "client-token", "n": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.post(RELAY_PATH).json(&json!({"token": "client-token", "n": 1})).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_write_without_server_token_forwards_body_as_is() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(body_json(json!({"n": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&upstream)
        .await;

    let config = RelayConfig { append_token: None, ..full_config(&upstream) };
    let server = relay_server(config);
    let response = server.post(RELAY_PATH).json(&json!({"n": 1})).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_write_empty_body_sends_token_only() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(body_json(json!({"token": "server-secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.post(RELAY_PATH).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_write_relays_upstream_status_and_json() {
    let upstream = MockServer::start().await;
    let upstream_body = json!({"ok": false, "error": "row rejected", "details": {"column": 3}});
    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(422).set_body_json(upstream_body.clone()))
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.post(RELAY_PATH).json(&json!({"row": []})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>(), upstream_body);
}

#[tokio::test]
async fn test_write_relays_raw_text() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(201).set_body_string("Appended row 12"))
        .mount(&upstream)
        .await;

    let server = relay_server(full_config(&upstream));
    let response = server.post(RELAY_PATH).json(&json!({"row": ["a"]})).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.text(), "Appended row 12");
}

#[tokio::test]
async fn test_write_without_append_url_is_server_error() {
    let upstream = MockServer::start().await;
    let config = RelayConfig { append_url: String::new(), ..full_config(&upstream) };
    let server = relay_server(config);

    let response = server.post(RELAY_PATH).json(&json!({"row": ["a"]})).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({"error": "Target URL not configured"}));
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_write_with_invalid_json_is_server_error() {
    let upstream = MockServer::start().await;
    let server = relay_server(full_config(&upstream));

    let response = server.post(RELAY_PATH).text("{not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json::<Value>()["error"].is_string());
    let requests = upstream.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "malformed body must not be forwarded");
}

#[tokio::test]
async fn test_write_over_body_limit_is_json_error() {
    let upstream = MockServer::start().await;
    let state = RelayState::new(full_config(&upstream)).expect("failed to build relay state");
    let app = relay_router(state).layer(DefaultBodyLimit::max(64));
    let server = TestServer::new(app).expect("failed to start test server");

    let body = json!({"row": "x".repeat(128)});
    let response = server.post(RELAY_PATH).json(&body).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let error = response.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    assert!(error.contains("length limit exceeded"), "unexpected error: {error}");
    assert_cors_headers(&response);

    let requests = upstream.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "oversized body must not be forwarded");
}

#[tokio::test]
async fn test_preflight_returns_no_content() {
    let upstream = MockServer::start().await;
    let server = relay_server(full_config(&upstream));

    let response = server.method(Method::OPTIONS, RELAY_PATH).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_unsupported_methods_are_rejected() {
    let upstream = MockServer::start().await;
    let server = relay_server(full_config(&upstream));

    for verb in [Method::DELETE, Method::PUT, Method::PATCH] {
        let response = server.method(verb.clone(), RELAY_PATH).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.header("allow"), "GET, POST, OPTIONS", "{verb}");
        assert_eq!(response.json::<Value>(), json!({"error": "Method Not Allowed"}));
        assert_cors_headers(&response);
    }
}
