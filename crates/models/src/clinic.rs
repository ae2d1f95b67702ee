use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

/// Identifier of a clinic, the tenant every scoped record belongs to.
///
/// Always positive: both [`ClinicId::new`] and deserialization reject zero and
/// negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i64", into = "i64")]
#[sqlx(transparent)]
pub struct ClinicId(i64);

impl ClinicId {
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ClinicId {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("clinic id must be positive, got {}", raw))
    }
}

impl From<ClinicId> for i64 {
    fn from(id: ClinicId) -> Self {
        id.0
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clinic (tenant)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Clinic {
    pub id: ClinicId,
    pub trade_name: String,
    pub subdomain: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create new clinic request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClinic {
    #[validate(length(min = 1, max = 255))]
    pub trade_name: String,

    #[validate(length(min = 3, max = 63), regex(path = *SUBDOMAIN_REGEX))]
    pub subdomain: String,

    pub active: Option<bool>,
}

/// Update clinic request (full replacement of the editable fields)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateClinic {
    #[validate(length(min = 1, max = 255))]
    pub trade_name: String,

    #[validate(length(min = 3, max = 63), regex(path = *SUBDOMAIN_REGEX))]
    pub subdomain: String,

    pub active: bool,
}

// Subdomain validation regex
lazy_static::lazy_static! {
    static ref SUBDOMAIN_REGEX: regex::Regex = regex::Regex::new(r"^[a-z0-9-]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_id_rejects_non_positive() {
        assert!(ClinicId::new(0).is_none());
        assert!(ClinicId::new(-7).is_none());
        assert_eq!(ClinicId::new(42).map(ClinicId::get), Some(42));
    }

    #[test]
    fn test_clinic_id_serializes_as_number() {
        let id = ClinicId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        assert_eq!(id.to_string(), "3");
        assert_eq!(serde_json::from_str::<ClinicId>("3").unwrap(), id);
    }

    #[test]
    fn test_clinic_id_deserialization_rejects_non_positive() {
        assert!(serde_json::from_str::<ClinicId>("0").is_err());
        assert!(serde_json::from_str::<ClinicId>("-5").is_err());

        let plan = serde_json::json!({
            "id": 1,
            "clinic_id": 0,
            "name": "Unimed",
            "ans_code": null,
            "active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<crate::HealthPlan>(plan).is_err());
    }

    #[test]
    fn test_create_clinic_validation() {
        let valid = CreateClinic {
            trade_name: "Clinica Central".to_string(),
            subdomain: "clinica-central".to_string(),
            active: None,
        };
        assert!(valid.validate().is_ok());

        let bad_subdomain = CreateClinic {
            subdomain: "Clinica Central".to_string(),
            ..valid.clone()
        };
        assert!(bad_subdomain.validate().is_err());

        let short_subdomain = CreateClinic {
            subdomain: "ab".to_string(),
            ..valid.clone()
        };
        assert!(short_subdomain.validate().is_err());

        let empty_name = CreateClinic {
            trade_name: String::new(),
            ..valid
        };
        assert!(empty_name.validate().is_err());
    }
}
