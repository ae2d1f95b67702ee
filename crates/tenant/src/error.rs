use clinic_models::ClinicId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TenantError>;

#[derive(Debug, Error)]
pub enum TenantError {
    #[error("Header X-Clinic-ID is required")]
    MissingHeader,

    #[error("Header X-Clinic-ID must be a valid positive number")]
    InvalidHeader,

    #[error("Clinic given in header not found: {0}")]
    ClinicNotFound(ClinicId),

    #[error("No tenant scope is open for the current task")]
    NoActiveScope,

    #[error("Tenant store error: {0}")]
    Store(String),
}

impl TenantError {
    /// Errors caused by the request itself rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader | Self::InvalidHeader | Self::ClinicNotFound(_)
        )
    }
}
