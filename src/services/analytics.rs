use serde_json::{json, Map, Value};

use crate::{
    domain::{
        models::{HttpMethod, OperationKind, RequestContext, Role},
        policy::{enforce_tenant_isolation, require_role},
        routing::{GraphQLOperation, RestEndpoint},
    },
    services::errors::ApiError,
};

const ANALYTICS_READERS: &[Role] = &[Role::ClubAdmin, Role::Manager, Role::Analyst];

pub const REST_ENDPOINTS: &[RestEndpoint] = &[RestEndpoint {
    method: HttpMethod::Get,
    path: "/api/v1/clubs/:clubId/analytics/overview",
    protected: true,
    handler: overview,
}];

pub const GRAPHQL_OPERATIONS: &[GraphQLOperation] = &[GraphQLOperation {
    kind: OperationKind::Query,
    field: "analyticsOverview",
    protected: true,
    resolve: resolve_overview,
}];

fn overview(request: &mut RequestContext) -> Result<Value, ApiError> {
    enforce_tenant_isolation(request)?;
    require_role(request, ANALYTICS_READERS)?;
    Ok(json!({
        "occupancyRate": 0.78,
        "approvalRate": 0.83,
        "revenue": 12500,
    }))
}

fn resolve_overview(request: &mut RequestContext, _args: &Map<String, Value>) -> Result<Value, ApiError> {
    overview(request)
}
