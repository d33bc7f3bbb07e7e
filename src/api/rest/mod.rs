//! REST dispatch over the module registries.
//!
//! Endpoints are tried in registration order and the first one whose method
//! and path template match handles the request. There is no ranking by
//! specificity, so an earlier, more general template shadows later ones.

use std::sync::OnceLock;

use serde_json::Value;
use tracing::debug;

use crate::{
    domain::{
        models::{HttpMethod, RequestContext},
        routing::{match_path, RestEndpoint},
    },
    infrastructure::auth::authenticate,
    services::{analytics, auth, bookings, clubs, errors::ApiError},
};

pub mod adapter;

pub const REST_PREFIX: &str = "/api/v1";

static ENDPOINTS: OnceLock<Vec<RestEndpoint>> = OnceLock::new();

/// Every REST endpoint in registration order: auth, clubs, bookings, analytics.
pub fn endpoints() -> &'static [RestEndpoint] {
    ENDPOINTS.get_or_init(|| {
        [
            auth::REST_ENDPOINTS,
            clubs::REST_ENDPOINTS,
            bookings::REST_ENDPOINTS,
            analytics::REST_ENDPOINTS,
        ]
        .concat()
    })
}

#[derive(Debug, Clone)]
pub struct RestDispatcher {
    endpoints: Vec<RestEndpoint>,
}

impl Default for RestDispatcher {
    fn default() -> Self {
        Self::new(endpoints().to_vec())
    }
}

impl RestDispatcher {
    pub fn new(endpoints: Vec<RestEndpoint>) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &[RestEndpoint] {
        &self.endpoints
    }

    /// Routes a request to the first matching endpoint and runs it.
    ///
    /// Path parameters bound by the template are merged into
    /// `request.params`, but entries the caller already set are kept.
    /// Protected endpoints authenticate after the merge and before the
    /// handler runs.
    pub fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        request: &mut RequestContext,
    ) -> Result<Value, ApiError> {
        let (endpoint, matched) = self
            .endpoints
            .iter()
            .filter(|candidate| candidate.method == method)
            .find_map(|candidate| match_path(candidate.path, path).map(|params| (candidate, params)))
            .ok_or_else(|| {
                debug!(%method, path, "no rest endpoint matched");
                ApiError::NotFound
            })?;

        debug!(%method, path, template = endpoint.path, "dispatching rest request");

        for (name, value) in matched {
            request.params.entry(name).or_insert(value);
        }

        if endpoint.protected {
            authenticate(request)?;
        }

        (endpoint.handler)(request)
    }
}

/// Dispatches against the global registry.
pub fn dispatch_rest(
    method: HttpMethod,
    path: &str,
    request: &mut RequestContext,
) -> Result<Value, ApiError> {
    RestDispatcher::default().dispatch(method, path, request)
}
