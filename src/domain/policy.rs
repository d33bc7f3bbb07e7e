use tracing::warn;

use crate::{
    domain::models::{RequestContext, Role},
    services::errors::ApiError,
};

/// Rejects the request unless the authenticated roles intersect `allowed`.
///
/// `super_admin` is a platform-wide role and satisfies every requirement.
/// A request without an auth context or with no roles always fails.
pub fn require_role(request: &RequestContext, allowed: &[Role]) -> Result<(), ApiError> {
    let roles = request
        .auth
        .as_ref()
        .map(|auth| auth.roles.as_slice())
        .unwrap_or_default();

    let permitted = roles
        .iter()
        .any(|role| *role == Role::SuperAdmin || allowed.contains(role));

    if permitted {
        return Ok(());
    }

    let required = allowed
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    warn!(required = %required, ?roles, "missing required role");
    Err(ApiError::forbidden(format!(
        "missing required role ({required})"
    )))
}

/// Resolves the club a request addresses and pins it as the tenant.
///
/// The tenant comes from the first non-empty of the `clubId` path param, the
/// `club_id` query param and the `x-club-id` header. An authenticated club id
/// that disagrees with it is rejected unless the caller is `super_admin`.
pub fn enforce_tenant_isolation(request: &mut RequestContext) -> Result<(), ApiError> {
    let route_club_id = [
        request.param("clubId"),
        request.query_param("club_id"),
        request.header("x-club-id"),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| !candidate.is_empty())
    .map(str::to_string)
    .ok_or(ApiError::MissingTenantContext)?;

    if let Some(auth) = request.auth.as_ref() {
        let cross_tenant = auth
            .club_id
            .as_deref()
            .is_some_and(|club_id| !club_id.is_empty() && club_id != route_club_id);

        if cross_tenant && !auth.has_role(Role::SuperAdmin) {
            warn!(
                user_id = %auth.user_id,
                auth_club_id = ?auth.club_id,
                route_club_id = %route_club_id,
                "cross-tenant request blocked"
            );
            return Err(ApiError::forbidden("cross-tenant request blocked"));
        }
    }

    request.tenant_id = Some(route_club_id);
    Ok(())
}
