// Health plan handlers. The owning clinic always comes from `CurrentClinic`,
// never from the path or the body.

use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::middleware::CurrentClinic;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use clinic_models::{CreateHealthPlan, HealthPlan};
use std::sync::Arc;

/// GET /planos-saude
pub async fn list_health_plans(
    State(state): State<Arc<AppState>>,
    CurrentClinic(clinic_id): CurrentClinic,
) -> Result<Json<Vec<HealthPlan>>, ApiError> {
    Ok(Json(state.health_plan_service.find_all(clinic_id).await?))
}

/// GET /planos-saude/:id
pub async fn get_health_plan(
    State(state): State<Arc<AppState>>,
    CurrentClinic(clinic_id): CurrentClinic,
    PathParam(id): PathParam<i64>,
) -> Result<Json<HealthPlan>, ApiError> {
    let plan = state.health_plan_service.find_by_id(clinic_id, id).await?;
    Ok(Json(plan))
}

/// POST /planos-saude
pub async fn create_health_plan(
    State(state): State<Arc<AppState>>,
    CurrentClinic(clinic_id): CurrentClinic,
    JsonBody(request): JsonBody<CreateHealthPlan>,
) -> Result<(StatusCode, Json<HealthPlan>), ApiError> {
    let plan = state.health_plan_service.create(clinic_id, request).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// PUT /planos-saude/:id
pub async fn update_health_plan(
    State(state): State<Arc<AppState>>,
    CurrentClinic(clinic_id): CurrentClinic,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<CreateHealthPlan>,
) -> Result<Json<HealthPlan>, ApiError> {
    let plan = state.health_plan_service.update(clinic_id, id, request).await?;
    Ok(Json(plan))
}

/// DELETE /planos-saude/:id
pub async fn delete_health_plan(
    State(state): State<Arc<AppState>>,
    CurrentClinic(clinic_id): CurrentClinic,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    state.health_plan_service.delete(clinic_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
