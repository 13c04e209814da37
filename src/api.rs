use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderName, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::error::ResolveError;
use crate::messages;
use crate::resolver::Resolver;
use crate::text_utils::trim_item;

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildSetResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Debug)]
struct AppState {
    resolver: Arc<Resolver>,
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

/// Build the HTTP router: the build-set endpoint plus the static frontend.
pub fn router(resolver: Resolver, static_dir: impl Into<PathBuf>) -> Router {
    let state = AppState {
        resolver: Arc::new(resolver),
    };
    let request_id_layer = middleware::from_fn(assign_request_id);
    Router::new()
        .route("/api/build-set", post(build_set))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(request_id_layer)
}

async fn build_set(
    State(state): State<AppState>,
    Extension(request): Extension<RequestContext>,
    body: Bytes,
) -> Response {
    let prompt = extract_prompt(&body);
    if prompt.is_empty() {
        tracing::debug!(request_id = %request.request_id, "Rejected blank prompt");
        return error_response(StatusCode::BAD_REQUEST, messages::PROMPT_REQUIRED.to_string());
    }

    let items = match state.resolver.resolve(&prompt).await {
        Ok(items) => items,
        Err(err) => return resolve_error_response(&request, &err),
    };

    tracing::debug!(
        request_id = %request.request_id,
        mode = state.resolver.mode(),
        item_count = items.len(),
        "Built set"
    );
    (StatusCode::OK, Json(BuildSetResponse { items })).into_response()
}

/// Read `prompt` from a JSON body, treating anything unparsable as empty.
///
/// Strings are used as-is, other scalars are stringified, and a missing or
/// null field yields an empty prompt. The result is trimmed.
fn extract_prompt(body: &[u8]) -> String {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let prompt = match payload.get("prompt") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    trim_item(&prompt).to_string()
}

fn resolve_error_response(request: &RequestContext, err: &ResolveError) -> Response {
    match err {
        ResolveError::Unreachable(source) => tracing::error!(
            request_id = %request.request_id,
            kind = err.kind(),
            error = %source,
            "Failed to reach the language model service"
        ),
        ResolveError::InvalidJson(Some(source)) => tracing::error!(
            request_id = %request.request_id,
            kind = err.kind(),
            error = %source,
            "Language model response was invalid"
        ),
        _ => tracing::error!(
            request_id = %request.request_id,
            kind = err.kind(),
            error = %err,
            "Failed to generate set items"
        ),
    }
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().clone();
    let mut response = next.run(req).await;
    let status = response.status();
    let header_value = match request_id.parse() {
        Ok(value) => value,
        Err(_) => {
            return response;
        }
    };
    response
        .headers_mut()
        .insert(HeaderName::from_static("x-request-id"), header_value);
    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        "Request completed"
    );
    response
}
