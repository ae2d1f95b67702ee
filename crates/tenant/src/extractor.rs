// Tenant extractor implementation
// Reads the clinic id from the request headers

use crate::error::{Result, TenantError};
use axum::http::HeaderMap;
use clinic_models::ClinicId;

/// Header every tenant-scoped request must carry.
pub const CLINIC_ID_HEADER: &str = "x-clinic-id";

#[derive(Debug, Clone, Default)]
pub struct TenantExtractor;

impl TenantExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parses the clinic id header without consulting any store.
    ///
    /// The value is taken as-is: surrounding whitespace makes it invalid.
    pub fn extract_clinic_id(&self, headers: &HeaderMap) -> Result<ClinicId> {
        let raw = match headers.get(CLINIC_ID_HEADER) {
            Some(value) => value.to_str().map_err(|_| TenantError::InvalidHeader)?,
            None => return Err(TenantError::MissingHeader),
        };

        if raw.trim().is_empty() {
            return Err(TenantError::MissingHeader);
        }

        raw.parse::<i64>()
            .ok()
            .and_then(ClinicId::new)
            .ok_or(TenantError::InvalidHeader)
    }
}
