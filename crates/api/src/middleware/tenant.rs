use crate::error::ApiError;
use crate::AppState;
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use clinic_models::ClinicId;
use clinic_tenant::{Resolution, TenantContext, TenantError};
use std::sync::Arc;

/// Clinic resolved for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentClinic(pub ClinicId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentClinic
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when the route went through `require_clinic`
        parts
            .extensions
            .get::<CurrentClinic>()
            .copied()
            .ok_or(ApiError::Tenant(TenantError::NoActiveScope))
    }
}

/// Middleware resolving the `X-Clinic-ID` header before any tenant-scoped handler.
///
/// Exempt paths run with an empty slot. Otherwise the clinic is checked against
/// the store and the rest of the request runs inside its own tenant scope,
/// which is released when that future finishes, fails or is dropped.
pub async fn require_clinic(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_owned();
    let headers = request.headers().clone();
    let resolution = state.tenant_resolver.resolve(&path, &headers).await?;

    let clinic_id = match resolution {
        Resolution::Exempt => return Ok(TenantContext::open(next.run(request)).await),
        Resolution::Clinic(clinic_id) => clinic_id,
    };

    request.extensions_mut().insert(CurrentClinic(clinic_id));

    TenantContext::open(async move {
        let _guard = TenantContext::set(clinic_id)?;
        Ok::<_, ApiError>(next.run(request).await)
    })
    .await
}
