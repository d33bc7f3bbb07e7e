use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{HeaderMap, HeaderValue},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info_span, warn};
use uuid::Uuid;

pub mod graphql;
pub mod rest;

use crate::{
    domain::models::RequestContext,
    infrastructure::{config::Config, state::AppState},
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the HTTP surface. The caller layers an `Extension<Arc<AppState>>`
/// on top, the same way `main` does.
pub fn build_router(config: Arc<Config>) -> Router {
    let router = Router::new()
        .route("/health", get(healthcheck))
        .route("/api/versions", get(versions))
        .merge(graphql::adapter::router(&config.api))
        .fallback(rest::adapter::handle)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }));

    match cors_layer(&config.app.cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn versions(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "rest": rest::REST_PREFIX,
        "graphql": state.config.api.graphql_path,
    }))
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, error = %err, "ignoring invalid cors origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Copies transport headers and the raw query string into a fresh request
/// context. Headers that are not valid UTF-8 are skipped.
pub(crate) fn request_context(headers: &HeaderMap, query: Option<&str>) -> RequestContext {
    let mut request = RequestContext::new();

    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            request.insert_header(name.as_str(), value);
        }
    }

    if let Some(query) = query {
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            request.query.insert(name.into_owned(), value.into_owned());
        }
    }

    request
}
