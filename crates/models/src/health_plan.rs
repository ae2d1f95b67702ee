use crate::ClinicId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Health plan accepted by a clinic. Always owned by exactly one clinic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HealthPlan {
    pub id: i64,
    pub clinic_id: ClinicId,
    pub name: String,

    /// Registration code with the national health agency (ANS)
    pub ans_code: Option<String>,

    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or replace a health plan.
///
/// There is no clinic field: ownership always comes from the resolved tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHealthPlan {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 20))]
    pub ans_code: Option<String>,

    pub active: Option<bool>,
}
