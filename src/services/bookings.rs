//! Section availability, holds and booking approval routes.
//!
//! Availability numbers and hold expiry are fixed placeholders; no seat state
//! is tracked.

use serde_json::{json, Map, Value};

use crate::{
    domain::{
        models::{HttpMethod, OperationKind, RequestContext, Role},
        policy::{enforce_tenant_isolation, require_role},
        routing::{GraphQLOperation, RestEndpoint},
    },
    services::errors::ApiError,
};

const AVAILABILITY_READERS: &[Role] = &[
    Role::Customer,
    Role::ClubAdmin,
    Role::Manager,
    Role::Host,
    Role::Analyst,
];
const BOOKERS: &[Role] = &[Role::Customer, Role::ClubAdmin, Role::Manager, Role::Host];
const APPROVERS: &[Role] = &[Role::ClubAdmin, Role::Manager, Role::Host];

const HOLD_EXPIRES_AT: &str = "2026-01-01T00:05:00Z";

pub const REST_ENDPOINTS: &[RestEndpoint] = &[
    RestEndpoint {
        method: HttpMethod::Get,
        path: "/api/v1/clubs/:clubId/sections/:sectionId/availability",
        protected: true,
        handler: section_availability,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/clubs/:clubId/sections/:sectionId/holds",
        protected: true,
        handler: create_hold,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/clubs/:clubId/bookings",
        protected: true,
        handler: request_booking,
    },
    RestEndpoint {
        method: HttpMethod::Patch,
        path: "/api/v1/clubs/:clubId/bookings/:bookingId/approve",
        protected: true,
        handler: approve_booking,
    },
    RestEndpoint {
        method: HttpMethod::Patch,
        path: "/api/v1/clubs/:clubId/bookings/:bookingId/reject",
        protected: true,
        handler: reject_booking,
    },
];

pub const GRAPHQL_OPERATIONS: &[GraphQLOperation] = &[
    GraphQLOperation {
        kind: OperationKind::Query,
        field: "sectionAvailability",
        protected: true,
        resolve: resolve_section_availability,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "createAvailabilityHold",
        protected: true,
        resolve: resolve_create_availability_hold,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "requestBooking",
        protected: true,
        resolve: resolve_request_booking,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "approveBooking",
        protected: true,
        resolve: resolve_approve_booking,
    },
    GraphQLOperation {
        kind: OperationKind::Subscription,
        field: "availabilityUpdated",
        protected: true,
        resolve: resolve_availability_updated,
    },
];

fn guard(request: &mut RequestContext, allowed: &[Role]) -> Result<(), ApiError> {
    enforce_tenant_isolation(request)?;
    require_role(request, allowed)
}

fn hold_created() -> Value {
    json!({ "status": "hold_created", "holdExpiresAt": HOLD_EXPIRES_AT })
}

fn section_availability(request: &mut RequestContext) -> Result<Value, ApiError> {
    guard(request, AVAILABILITY_READERS)?;
    Ok(json!({
        "sectionId": request.param("sectionId"),
        "availableSpots": 6,
        "heldSpots": 2,
        "confirmedSpots": 12,
        "availabilityVersion": 4,
    }))
}

fn create_hold(request: &mut RequestContext) -> Result<Value, ApiError> {
    guard(request, BOOKERS)?;
    Ok(hold_created())
}

fn request_booking(request: &mut RequestContext) -> Result<Value, ApiError> {
    guard(request, BOOKERS)?;
    Ok(json!({ "status": "requested" }))
}

fn approve_booking(request: &mut RequestContext) -> Result<Value, ApiError> {
    guard(request, APPROVERS)?;
    Ok(json!({ "status": "approved" }))
}

fn reject_booking(request: &mut RequestContext) -> Result<Value, ApiError> {
    guard(request, APPROVERS)?;
    Ok(json!({ "status": "rejected" }))
}

fn resolve_section_availability(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    guard(request, AVAILABILITY_READERS)?;
    Ok(json!({
        "availableSpots": 6,
        "heldSpots": 2,
        "confirmedSpots": 12,
        "availabilityVersion": 4,
    }))
}

fn resolve_create_availability_hold(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    guard(request, BOOKERS)?;
    Ok(hold_created())
}

fn resolve_request_booking(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    guard(request, BOOKERS)?;
    Ok(json!({ "status": "requested" }))
}

fn resolve_approve_booking(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    guard(request, APPROVERS)?;
    Ok(json!({ "status": "approved" }))
}

fn resolve_availability_updated(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    guard(request, AVAILABILITY_READERS)?;
    Ok(json!({ "event": "availability_updated", "availabilityVersion": 5 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AuthContext;

    fn customer_of(club_id: &str) -> RequestContext {
        let mut request = RequestContext::new();
        request.auth = Some(AuthContext {
            user_id: "u-1".to_string(),
            club_id: Some(club_id.to_string()),
            roles: vec![Role::Customer],
        });
        request
    }

    #[test]
    fn availability_echoes_section_id() {
        let mut request = customer_of("3")
            .with_param("clubId", "3")
            .with_param("sectionId", "balcony");

        let value = section_availability(&mut request).expect("customer may read availability");
        assert_eq!(value["sectionId"], json!("balcony"));
        assert_eq!(value["availableSpots"], json!(6));
        assert_eq!(request.tenant_id.as_deref(), Some("3"));
    }

    #[test]
    fn customers_cannot_approve() {
        let mut request = customer_of("3").with_param("clubId", "3");
        assert!(matches!(
            approve_booking(&mut request),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn tenant_is_checked_before_role() {
        let mut request = customer_of("3");
        assert_eq!(
            approve_booking(&mut request),
            Err(ApiError::MissingTenantContext)
        );
    }
}
