use crate::handlers;
use crate::middleware;
use crate::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Operational endpoints (tenant-exempt)
        .route("/actuator/health", get(handlers::health::health_check))
        // Clinic management (tenant-exempt, operates across clinics)
        .route(
            "/clinicas",
            get(handlers::clinic::list_clinics).post(handlers::clinic::create_clinic),
        )
        .route(
            "/clinicas/:id",
            get(handlers::clinic::get_clinic)
                .put(handlers::clinic::update_clinic)
                .delete(handlers::clinic::delete_clinic),
        )
        // Tenant-scoped resources
        .route(
            "/planos-saude",
            get(handlers::health_plan::list_health_plans)
                .post(handlers::health_plan::create_health_plan),
        )
        .route(
            "/planos-saude/:id",
            get(handlers::health_plan::get_health_plan)
                .put(handlers::health_plan::update_health_plan)
                .delete(handlers::health_plan::delete_health_plan),
        )
        .layer(from_fn_with_state(state.clone(), middleware::require_clinic))
        .with_state(state)
}
