//! JSON transport for the GraphQL dispatcher.
//!
//! Clients post `{"type": "Mutation", "field": "requestBooking", "args": {...}}`
//! and receive a GraphQL-shaped `{"data": ..., "errors": [...]}` envelope.
//! Dispatch failures are reported in `errors` with HTTP 200; only a malformed
//! envelope is rejected at the transport level.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use validator::Validate;

use super::schema::SCHEMA_SDL;
use crate::{
    api::request_context,
    domain::models::OperationKind,
    infrastructure::{config::ApiConfig, state::AppState},
    services::errors::ApiError,
};

#[derive(Debug, Deserialize, Validate)]
pub struct GraphQLRequest {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    #[validate(length(min = 1))]
    pub field: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GraphQLResponse {
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GraphQLError {
    pub message: String,
    pub path: Vec<String>,
    pub extensions: ErrorExtensions,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorExtensions {
    pub code: &'static str,
}

impl GraphQLResponse {
    fn from_result(field: &str, result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => {
                let mut data = Map::new();
                data.insert(field.to_string(), value);
                Self {
                    data: Some(Value::Object(data)),
                    errors: Vec::new(),
                }
            }
            Err(err) => Self {
                data: None,
                errors: vec![GraphQLError {
                    message: err.to_string(),
                    path: vec![field.to_string()],
                    extensions: ErrorExtensions { code: err.code() },
                }],
            },
        }
    }
}

pub fn router(config: &ApiConfig) -> Router {
    let router = Router::new().route(&config.graphql_path, post(handle));

    if config.expose_schema {
        router.route(&format!("{}/schema", config.graphql_path), get(schema))
    } else {
        router
    }
}

async fn handle(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GraphQLResponse>, ApiError> {
    let payload: GraphQLRequest =
        serde_json::from_slice(&body).map_err(|err| ApiError::InvalidBody(err.to_string()))?;
    payload
        .validate()
        .map_err(|err| ApiError::InvalidBody(err.to_string()))?;

    let mut request = request_context(&headers, None);
    let result = state
        .graphql
        .dispatch(payload.kind, &payload.field, &mut request, &payload.args);
    if let Err(err) = &result {
        warn!(kind = %payload.kind, field = %payload.field, error = %err, "graphql operation rejected");
    }

    Ok(Json(GraphQLResponse::from_result(&payload.field, result)))
}

async fn schema() -> &'static str {
    SCHEMA_SDL
}
