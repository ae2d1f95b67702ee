use crate::error::{Result, TenantError};
use async_trait::async_trait;
use clinic_database::ClinicRepository;
use clinic_models::ClinicId;
use std::sync::Arc;

/// Answers whether a clinic exists. Queried on every tenant-scoped request,
/// never cached.
#[async_trait]
pub trait TenantStore: Send + Sync {
    async fn exists_by_id(&self, clinic_id: ClinicId) -> Result<bool>;
}

#[async_trait]
impl TenantStore for Arc<dyn ClinicRepository> {
    async fn exists_by_id(&self, clinic_id: ClinicId) -> Result<bool> {
        ClinicRepository::exists_by_id(self.as_ref(), clinic_id)
            .await
            .map_err(|e| TenantError::Store(e.to_string()))
    }
}
