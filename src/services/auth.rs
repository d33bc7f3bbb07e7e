//! Session issuance routes. None of them require a bearer token and all of
//! them answer with fixed placeholder payloads.

use serde_json::{json, Map, Value};

use crate::{
    domain::{
        models::{HttpMethod, OperationKind, RequestContext},
        routing::{GraphQLOperation, RestEndpoint},
    },
    services::errors::ApiError,
};

pub const REST_ENDPOINTS: &[RestEndpoint] = &[
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/auth/login",
        protected: false,
        handler: login,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/auth/refresh",
        protected: false,
        handler: refresh,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/auth/password-reset/request",
        protected: false,
        handler: request_password_reset,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/auth/password-reset/confirm",
        protected: false,
        handler: confirm_password_reset,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/auth/sso/club/initiate",
        protected: false,
        handler: initiate_club_sso,
    },
];

pub const GRAPHQL_OPERATIONS: &[GraphQLOperation] = &[
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "login",
        protected: false,
        resolve: resolve_login,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "refreshSession",
        protected: false,
        resolve: resolve_refresh_session,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "requestPasswordReset",
        protected: false,
        resolve: resolve_request_password_reset,
    },
];

fn session_tokens() -> Value {
    json!({ "accessToken": "jwt-token", "refreshToken": "refresh-token" })
}

fn refreshed_tokens() -> Value {
    json!({ "accessToken": "new-jwt-token" })
}

fn login(_request: &mut RequestContext) -> Result<Value, ApiError> {
    Ok(session_tokens())
}

fn refresh(_request: &mut RequestContext) -> Result<Value, ApiError> {
    Ok(refreshed_tokens())
}

fn request_password_reset(_request: &mut RequestContext) -> Result<Value, ApiError> {
    Ok(json!({ "status": "password-reset-email-queued" }))
}

fn confirm_password_reset(_request: &mut RequestContext) -> Result<Value, ApiError> {
    Ok(json!({ "status": "password-updated" }))
}

fn initiate_club_sso(_request: &mut RequestContext) -> Result<Value, ApiError> {
    Ok(json!({ "redirectUrl": "https://club-sso.example.com/start" }))
}

fn resolve_login(_request: &mut RequestContext, _args: &Map<String, Value>) -> Result<Value, ApiError> {
    Ok(session_tokens())
}

fn resolve_refresh_session(
    _request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    Ok(refreshed_tokens())
}

fn resolve_request_password_reset(
    _request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    Ok(Value::Bool(true))
}
