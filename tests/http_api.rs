use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Extension, Router,
};
use club_booking::{
    api,
    infrastructure::{
        config::{ApiConfig, Config},
        state::AppState,
    },
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(config: Config) -> Router {
    let config = Arc::new(config);
    let state = Arc::new(AppState::new(Arc::clone(&config)));
    api::build_router(config).layer(Extension(state))
}

fn app() -> Router {
    app_with(Config::default())
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, body))
}

fn graphql(body: Value, roles: &str, club_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer token")
        .header("x-roles", roles)
        .header("x-club-id", club_id)
        .body(Body::from(body.to_string()))
        .expect("failed to build graphql request")
}

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let request = Request::builder().uri("/health").body(Body::empty())?;

    let (status, body) = send(app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn rest_club_profile_round_trip() -> Result<()> {
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/clubs/42")
        .header(header::AUTHORIZATION, "Bearer token")
        .header("x-club-id", "42")
        .header("x-roles", "club_admin")
        .body(Body::empty())?;

    let (status, body) = send(app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "42", "name": "Club profile" }));
    Ok(())
}

#[tokio::test]
async fn rest_errors_map_to_status_codes() -> Result<()> {
    let anonymous = Request::builder()
        .uri("/api/v1/clubs/42")
        .body(Body::empty())?;
    let (status, body) = send(app(), anonymous).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "unauthorized: missing bearer token" }));

    let cross_tenant = Request::builder()
        .uri("/api/v1/clubs/42")
        .header(header::AUTHORIZATION, "Bearer token")
        .header("x-club-id", "99")
        .header("x-roles", "club_admin")
        .body(Body::empty())?;
    let (status, _) = send(app(), cross_tenant).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/v1/clubs/42")
        .body(Body::empty())?;
    let (status, body) = send(app(), delete).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));

    let put = Request::builder()
        .method("PUT")
        .uri("/api/v1/clubs/42")
        .body(Body::empty())?;
    let (status, _) = send(app(), put).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn path_param_outranks_query_string() -> Result<()> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/clubs/5/bookings?club_id=6")
        .header(header::AUTHORIZATION, "Bearer token")
        .header("x-roles", "customer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "partySize": 4 }).to_string()))?;

    let (status, body) = send(app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "requested" }));
    Ok(())
}

#[tokio::test]
async fn malformed_rest_body_is_bad_request() -> Result<()> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;

    let (status, _) = send(app(), request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn graphql_mutation_returns_data_envelope() -> Result<()> {
    let request = graphql(
        json!({ "type": "Mutation", "field": "requestBooking", "args": { "clubId": "7" } }),
        "customer",
        "7",
    );

    let (status, body) = send(app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "requestBooking": { "status": "requested" } } }));
    Ok(())
}

#[tokio::test]
async fn graphql_errors_are_reported_in_body() -> Result<()> {
    let request = graphql(
        json!({ "type": "Mutation", "field": "approveBooking", "args": { "clubId": "7" } }),
        "customer",
        "7",
    );

    let (status, body) = send(app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["extensions"]["code"], json!("FORBIDDEN"));
    assert_eq!(body["errors"][0]["path"], json!(["approveBooking"]));
    Ok(())
}

#[tokio::test]
async fn graphql_envelope_is_validated() -> Result<()> {
    let request = graphql(json!({ "type": "Query", "field": "" }), "customer", "7");
    let (status, _) = send(app(), request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = graphql(json!({ "type": "Fragment", "field": "club" }), "customer", "7");
    let (status, _) = send(app(), request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn schema_and_versions_follow_config() -> Result<()> {
    let request = Request::builder()
        .uri("/api/v1/graphql/schema")
        .body(Body::empty())?;
    let (status, body) = send(app(), request).await?;
    assert_eq!(status, StatusCode::OK);
    let sdl = body.as_str().expect("schema is plain text");
    assert!(sdl.contains("createAvailabilityHold"));

    let config = Config {
        api: ApiConfig {
            graphql_path: "/graphql".to_string(),
            expose_schema: false,
        },
        ..Config::default()
    };

    let request = Request::builder()
        .uri("/api/versions")
        .body(Body::empty())?;
    let (status, body) = send(app_with(config.clone()), request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "rest": "/api/v1", "graphql": "/graphql" }));

    // with the schema route disabled the request falls through to the REST registry
    let request = Request::builder()
        .uri("/graphql/schema")
        .body(Body::empty())?;
    let (status, _) = send(app_with(config), request).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
