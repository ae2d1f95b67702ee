use crate::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use clinic_database::{InMemoryClinicRepository, InMemoryHealthPlanRepository};
use clinic_models::{ClinicId, CreateClinic};
use clinic_tenant::TenantConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// In-memory state with one clinic per subdomain, ids assigned from 1.
pub async fn state_with_clinics(subdomains: &[&str]) -> Arc<AppState> {
    let state = Arc::new(AppState::new(
        Arc::new(InMemoryClinicRepository::new()),
        Arc::new(InMemoryHealthPlanRepository::new()),
        &TenantConfig::default(),
    ));

    for subdomain in subdomains {
        state
            .clinic_service
            .create(CreateClinic {
                trade_name: format!("Clinica {}", subdomain),
                subdomain: subdomain.to_string(),
                active: None,
            })
            .await
            .unwrap();
    }

    state
}

pub fn clinic(raw: i64) -> ClinicId {
    ClinicId::new(raw).unwrap()
}

pub fn request(method: &str, uri: &str, clinic: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = clinic {
        builder = builder.header("X-Clinic-ID", value);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
