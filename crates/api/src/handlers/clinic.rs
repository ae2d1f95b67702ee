use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use clinic_models::{Clinic, ClinicId, CreateClinic, UpdateClinic};
use std::sync::Arc;

/// Ids that can never exist are answered like unknown ones.
fn clinic_id(raw: i64) -> Result<ClinicId, ApiError> {
    ClinicId::new(raw).ok_or_else(|| ApiError::not_found(format!("Clinic not found with id: {}", raw)))
}

/// List all clinics
/// GET /clinicas
pub async fn list_clinics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Clinic>>, ApiError> {
    Ok(Json(state.clinic_service.find_all().await?))
}

/// GET /clinicas/:id
pub async fn get_clinic(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Clinic>, ApiError> {
    let clinic = state.clinic_service.find_by_id(clinic_id(id)?).await?;
    Ok(Json(clinic))
}

/// Register a new clinic (tenant onboarding)
/// POST /clinicas
pub async fn create_clinic(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<CreateClinic>,
) -> Result<(StatusCode, Json<Clinic>), ApiError> {
    let clinic = state.clinic_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(clinic)))
}

/// PUT /clinicas/:id
pub async fn update_clinic(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<UpdateClinic>,
) -> Result<Json<Clinic>, ApiError> {
    let clinic = state.clinic_service.update(clinic_id(id)?, request).await?;
    Ok(Json(clinic))
}

/// DELETE /clinicas/:id
pub async fn delete_clinic(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    state.clinic_service.delete(clinic_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
