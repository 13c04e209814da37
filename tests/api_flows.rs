use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use setbuilder::ai::config::AiConfig;
use setbuilder::presets::PRESET_SETS;
use setbuilder::{api_router, messages, Resolver};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_app() -> Router {
    api_router(Resolver::Local, "static")
}

async fn remote_app(server: &MockServer) -> Router {
    let url = format!("{}/v1/chat/completions", server.uri());
    let resolver = Resolver::from_config(Some(AiConfig::new("k", url))).unwrap();
    api_router(resolver, "static")
}

async fn post_json(app: Router, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/build-set")
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn prompt_body(prompt: &str) -> Body {
    Body::from(serde_json::to_vec(&json!({ "prompt": prompt })).unwrap())
}

#[tokio::test]
async fn blank_prompt_is_rejected() {
    for body in [
        prompt_body(""),
        prompt_body("   \n "),
        Body::from("{}"),
        Body::from("garbage"),
    ] {
        let (status, payload) = post_json(local_app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload, json!({ "error": messages::PROMPT_REQUIRED }));
    }
}

#[tokio::test]
async fn local_preset_flow() {
    let (status, payload) = post_json(local_app(), prompt_body("I need a PPE kit")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, ppe) = PRESET_SETS[0];
    assert_eq!(payload, json!({ "items": ppe }));
}

#[tokio::test]
async fn local_split_flow() {
    let (status, payload) = post_json(local_app(), prompt_body("tent, rope, knife")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!({ "items": ["tent", "rope", "knife"] }));
}

#[tokio::test]
async fn remote_flow_deduplicates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"choices":[{"message":{"content":"{\"items\":[\"a\",\"a\",\" b \"]}"}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let (status, payload) = post_json(remote_app(&server).await, prompt_body("letters")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!({ "items": ["a", "b"] }));
}

#[tokio::test]
async fn remote_unauthorized_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (status, payload) = post_json(remote_app(&server).await, prompt_body("letters")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload, json!({ "error": messages::CREDENTIAL_REJECTED }));
}

#[tokio::test]
async fn remote_upstream_error_includes_status_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached", "type": "requests" }
        })))
        .mount(&server)
        .await;

    let (status, payload) = post_json(remote_app(&server).await, prompt_body("letters")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        payload,
        json!({ "error": "Language model request failed with status 429: Rate limit reached" })
    );
}

#[tokio::test]
async fn remote_unreachable_is_server_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/v1/chat/completions");
    let app = api_router(
        Resolver::from_config(Some(AiConfig::new("k", url))).unwrap(),
        "static",
    );

    let (status, payload) = post_json(app, prompt_body("letters")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload, json!({ "error": messages::SERVICE_UNREACHABLE }));
}

#[tokio::test]
async fn separator_only_prompt_is_rejected() {
    let (status, payload) = post_json(local_app(), prompt_body("\u{1c} \u{1f}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload, json!({ "error": messages::PROMPT_REQUIRED }));
}

#[tokio::test]
async fn remote_missing_items_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"choices":[{"message":{"content":"{\"list\":[\"a\"]}"}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let (status, payload) = post_json(remote_app(&server).await, prompt_body("letters")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload, json!({ "error": messages::MISSING_ITEMS }));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = local_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/build-set")
                .body(prompt_body("tent"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get("x-request-id").unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn serves_static_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Set Builder</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
    let app = api_router(Resolver::Local, dir.path());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<h1>Set Builder</h1>");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/missing.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
