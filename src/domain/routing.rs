//! Route descriptors and the template path matcher shared by the dispatchers.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{
    domain::models::{HttpMethod, OperationKind, RequestContext},
    services::errors::ApiError,
};

pub type Handler = fn(&mut RequestContext) -> Result<Value, ApiError>;

pub type Resolver = fn(&mut RequestContext, &Map<String, Value>) -> Result<Value, ApiError>;

/// One routable REST endpoint. Registries are ordered: the first descriptor
/// whose method and template match a request handles it.
#[derive(Clone, Copy)]
pub struct RestEndpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub protected: bool,
    pub handler: Handler,
}

impl std::fmt::Debug for RestEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestEndpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("protected", &self.protected)
            .finish_non_exhaustive()
    }
}

/// One GraphQL root field.
#[derive(Clone, Copy)]
pub struct GraphQLOperation {
    pub kind: OperationKind,
    pub field: &'static str,
    pub protected: bool,
    pub resolve: Resolver,
}

impl std::fmt::Debug for GraphQLOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLOperation")
            .field("kind", &self.kind)
            .field("field", &self.field)
            .field("protected", &self.protected)
            .finish_non_exhaustive()
    }
}

/// Matches `path` against a `/`-separated template where `:name` segments
/// bind whatever sits at the same position.
///
/// Empty segments are ignored on both sides, so leading, trailing and doubled
/// slashes are tolerated. Segment values are bound as-is (no percent
/// decoding). A repeated parameter name keeps the last bound value.
pub fn match_path(template: &str, path: &str) -> Option<HashMap<String, String>> {
    let template_segments: Vec<&str> = segments(template).collect();
    let path_segments: Vec<&str> = segments(path).collect();

    if template_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in template_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if expected != actual {
            return None;
        }
    }

    Some(params)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
