//! Club profile and staff membership routes.

use serde_json::{json, Map, Value};

use crate::{
    domain::{
        models::{HttpMethod, OperationKind, RequestContext, Role},
        policy::{enforce_tenant_isolation, require_role},
        routing::{GraphQLOperation, RestEndpoint},
    },
    services::errors::ApiError,
};

const PROFILE_READERS: &[Role] = &[Role::ClubAdmin, Role::Manager, Role::Host];
const MEMBERSHIP_WRITERS: &[Role] = &[Role::ClubAdmin, Role::Manager];

pub const REST_ENDPOINTS: &[RestEndpoint] = &[
    RestEndpoint {
        method: HttpMethod::Get,
        path: "/api/v1/clubs/:clubId",
        protected: true,
        handler: get_club,
    },
    RestEndpoint {
        method: HttpMethod::Post,
        path: "/api/v1/clubs/:clubId/employees",
        protected: true,
        handler: add_employee,
    },
];

pub const GRAPHQL_OPERATIONS: &[GraphQLOperation] = &[
    GraphQLOperation {
        kind: OperationKind::Query,
        field: "club",
        protected: true,
        resolve: resolve_club,
    },
    GraphQLOperation {
        kind: OperationKind::Mutation,
        field: "addEmployeeMembership",
        protected: true,
        resolve: resolve_add_employee_membership,
    },
];

fn club_profile(request: &mut RequestContext) -> Result<Value, ApiError> {
    enforce_tenant_isolation(request)?;
    require_role(request, PROFILE_READERS)?;
    Ok(json!({ "id": request.tenant_id, "name": "Club profile" }))
}

fn get_club(request: &mut RequestContext) -> Result<Value, ApiError> {
    club_profile(request)
}

fn add_employee(request: &mut RequestContext) -> Result<Value, ApiError> {
    enforce_tenant_isolation(request)?;
    require_role(request, MEMBERSHIP_WRITERS)?;
    Ok(json!({ "status": "employee-membership-created" }))
}

fn resolve_club(request: &mut RequestContext, _args: &Map<String, Value>) -> Result<Value, ApiError> {
    club_profile(request)
}

fn resolve_add_employee_membership(
    request: &mut RequestContext,
    _args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    enforce_tenant_isolation(request)?;
    require_role(request, MEMBERSHIP_WRITERS)?;
    Ok(Value::Bool(true))
}
