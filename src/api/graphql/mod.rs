//! GraphQL root-field dispatch.
//!
//! Operations are addressed by kind and field name; there is no query
//! document parsing. A string `clubId` argument is mirrored into the request
//! params and query so resolvers run the same tenant checks as REST handlers.

use std::sync::OnceLock;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    domain::{
        models::{OperationKind, RequestContext},
        routing::GraphQLOperation,
    },
    infrastructure::auth::authenticate,
    services::{analytics, auth, bookings, clubs, errors::ApiError},
};

pub mod adapter;
pub mod schema;

pub const DEFAULT_GRAPHQL_PATH: &str = "/api/v1/graphql";

static OPERATIONS: OnceLock<Vec<GraphQLOperation>> = OnceLock::new();

/// Every GraphQL operation in registration order: auth, clubs, bookings, analytics.
pub fn operations() -> &'static [GraphQLOperation] {
    OPERATIONS.get_or_init(|| {
        [
            auth::GRAPHQL_OPERATIONS,
            clubs::GRAPHQL_OPERATIONS,
            bookings::GRAPHQL_OPERATIONS,
            analytics::GRAPHQL_OPERATIONS,
        ]
        .concat()
    })
}

#[derive(Debug, Clone)]
pub struct GraphQLDispatcher {
    operations: Vec<GraphQLOperation>,
}

impl Default for GraphQLDispatcher {
    fn default() -> Self {
        Self::new(operations().to_vec())
    }
}

impl GraphQLDispatcher {
    pub fn new(operations: Vec<GraphQLOperation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[GraphQLOperation] {
        &self.operations
    }

    pub fn dispatch(
        &self,
        kind: OperationKind,
        field: &str,
        request: &mut RequestContext,
        args: &Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let operation = self
            .operations
            .iter()
            .find(|candidate| candidate.kind == kind && candidate.field == field)
            .ok_or_else(|| {
                debug!(%kind, field, "no graphql operation matched");
                ApiError::UnknownOperation
            })?;

        debug!(%kind, field, "dispatching graphql operation");

        if operation.protected {
            authenticate(request)?;
        }

        if let Some(Value::String(club_id)) = args.get("clubId") {
            request.params.insert("clubId".to_string(), club_id.clone());
            request.query.insert("club_id".to_string(), club_id.clone());
        }

        (operation.resolve)(request, args)
    }
}

/// Dispatches against the global registry.
pub fn dispatch_graphql(
    kind: OperationKind,
    field: &str,
    request: &mut RequestContext,
    args: &Map<String, Value>,
) -> Result<Value, ApiError> {
    GraphQLDispatcher::default().dispatch(kind, field, request, args)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn echo_context(request: &mut RequestContext, args: &Map<String, Value>) -> Result<Value, ApiError> {
        Ok(json!({
            "param": request.param("clubId"),
            "query": request.query_param("club_id"),
            "args": args,
        }))
    }

    fn dispatcher(protected: bool) -> GraphQLDispatcher {
        GraphQLDispatcher::new(vec![GraphQLOperation {
            kind: OperationKind::Mutation,
            field: "echo",
            protected,
            resolve: echo_context,
        }])
    }

    #[test]
    fn registry_covers_every_module() {
        let fields: Vec<_> = operations().iter().map(|op| op.field).collect();
        assert_eq!(
            fields,
            vec![
                "login",
                "refreshSession",
                "requestPasswordReset",
                "club",
                "addEmployeeMembership",
                "sectionAvailability",
                "createAvailabilityHold",
                "requestBooking",
                "approveBooking",
                "availabilityUpdated",
                "analyticsOverview",
            ]
        );
    }

    #[test]
    fn lookup_is_by_kind_and_case_sensitive_field() {
        let dispatcher = dispatcher(false);
        let args = Map::new();

        assert_eq!(
            dispatcher.dispatch(OperationKind::Query, "echo", &mut RequestContext::new(), &args),
            Err(ApiError::UnknownOperation)
        );
        assert_eq!(
            dispatcher.dispatch(OperationKind::Mutation, "Echo", &mut RequestContext::new(), &args),
            Err(ApiError::UnknownOperation)
        );
    }

    #[test]
    fn string_club_id_is_copied_into_params_and_query() {
        let mut args = Map::new();
        args.insert("clubId".to_string(), json!("7"));
        let mut request = RequestContext::new().with_param("clubId", "stale");

        let value = dispatcher(false)
            .dispatch(OperationKind::Mutation, "echo", &mut request, &args)
            .expect("operation resolves");

        assert_eq!(value["param"], json!("7"));
        assert_eq!(value["query"], json!("7"));
        assert_eq!(value["args"]["clubId"], json!("7"));
    }

    #[test]
    fn non_string_club_id_is_ignored() {
        let mut args = Map::new();
        args.insert("clubId".to_string(), json!(7));
        let mut request = RequestContext::new();

        let value = dispatcher(false)
            .dispatch(OperationKind::Mutation, "echo", &mut request, &args)
            .expect("operation resolves");

        assert_eq!(value["param"], Value::Null);
        assert_eq!(value["query"], Value::Null);
    }

    #[test]
    fn protected_operations_require_a_token() {
        let mut request = RequestContext::new();
        assert_eq!(
            dispatcher(true).dispatch(OperationKind::Mutation, "echo", &mut request, &Map::new()),
            Err(ApiError::Unauthorized)
        );
    }
}
