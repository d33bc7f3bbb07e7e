//! Bridges axum requests into the REST dispatcher.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, Method, Uri},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    api::request_context,
    domain::models::HttpMethod,
    infrastructure::state::AppState,
    services::errors::ApiError,
};

/// Fallback handler: any request not claimed by an explicit route is routed
/// through the endpoint registry.
pub async fn handle(
    Extension(state): Extension<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let Ok(method) = method.as_str().parse::<HttpMethod>() else {
        debug!(%method, path = uri.path(), "unsupported method");
        return Err(ApiError::NotFound);
    };

    let mut request = request_context(&headers, uri.query());
    request.body = parse_body(&body)?;

    match state.rest.dispatch(method, uri.path(), &mut request) {
        Ok(value) => Ok(Json(value)),
        Err(err) => {
            warn!(%method, path = uri.path(), error = %err, "rest request rejected");
            Err(err)
        }
    }
}

pub(crate) fn parse_body(body: &[u8]) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|err| ApiError::InvalidBody(err.to_string()))
}
