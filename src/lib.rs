//! Multi-tenant club booking API surface.
//!
//! REST and GraphQL requests are routed through ordered registries of static
//! descriptors (see [`api::rest`] and [`api::graphql`]). Protected routes run
//! the header-based [`infrastructure::auth::authenticate`] guard, and handlers
//! apply [`domain::policy`] tenant and role checks before answering with fixed
//! placeholder payloads.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;

pub use api::{
    graphql::{dispatch_graphql, GraphQLDispatcher},
    rest::{dispatch_rest, RestDispatcher},
};
pub use domain::models::{AuthContext, HttpMethod, OperationKind, RequestContext, Role};
pub use services::errors::ApiError;
