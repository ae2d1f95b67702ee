use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinic_services::ServiceError;
use clinic_tenant::{TenantContext, TenantError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Every failure a handler or the tenant middleware can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Service(ServiceError::NotFound(message.into()))
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Tenant(TenantError::MissingHeader) => {
                (StatusCode::BAD_REQUEST, "missing_clinic_header")
            }
            Self::Tenant(TenantError::InvalidHeader) => {
                (StatusCode::BAD_REQUEST, "invalid_clinic_header")
            }
            Self::Tenant(TenantError::ClinicNotFound(_)) => (StatusCode::NOT_FOUND, "clinic_not_found"),
            Self::Tenant(TenantError::NoActiveScope | TenantError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            Self::Service(ServiceError::Validation(_)) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::Service(ServiceError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Service(ServiceError::Conflict(_)) => (StatusCode::CONFLICT, "conflict"),
            Self::Service(ServiceError::Business(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "business_rule_violation")
            }
            Self::Service(ServiceError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }

    /// Text returned to the caller. Server-side details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Tenant(e) if e.is_client_error() => e.to_string(),
            Self::Service(
                ServiceError::Validation(msg)
                | ServiceError::NotFound(msg)
                | ServiceError::Conflict(msg)
                | ServiceError::Business(msg),
            ) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Service(ServiceError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Service(ServiceError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let clinic_id = TenantContext::current();

        if status.is_server_error() {
            tracing::error!(clinic_id = ?clinic_id, error = %self, "Request failed");
        } else {
            tracing::warn!(clinic_id = ?clinic_id, status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::new(code, &self.public_message()))).into_response()
    }
}
