pub mod clinics;
pub mod health_plans;
pub mod memory;

use crate::error::Result;
use async_trait::async_trait;
use clinic_models::{Clinic, ClinicId, CreateClinic, CreateHealthPlan, HealthPlan, UpdateClinic};

/// Persistence for clinics. Clinics are the tenants themselves, so lookups
/// here are global and never filtered by an active clinic.
#[async_trait]
pub trait ClinicRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Clinic>>;

    async fn find_by_id(&self, id: ClinicId) -> Result<Option<Clinic>>;

    async fn exists_by_id(&self, id: ClinicId) -> Result<bool>;

    async fn exists_by_subdomain(&self, subdomain: &str) -> Result<bool>;

    async fn insert(&self, request: &CreateClinic) -> Result<Clinic>;

    /// Fails with `NotFound` when the clinic does not exist.
    async fn update(&self, id: ClinicId, request: &UpdateClinic) -> Result<Clinic>;

    async fn delete_by_id(&self, id: ClinicId) -> Result<()>;
}

/// Persistence for health plans.
///
/// Every method takes the owning clinic: a plan stored under another clinic
/// is indistinguishable from a missing one.
#[async_trait]
pub trait HealthPlanRepository: Send + Sync {
    async fn find_all_by_clinic(&self, clinic_id: ClinicId) -> Result<Vec<HealthPlan>>;

    async fn find_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<Option<HealthPlan>>;

    async fn insert(&self, clinic_id: ClinicId, request: &CreateHealthPlan) -> Result<HealthPlan>;

    /// Fails with `NotFound` when no plan with this id belongs to the clinic.
    async fn update(
        &self,
        clinic_id: ClinicId,
        id: i64,
        request: &CreateHealthPlan,
    ) -> Result<HealthPlan>;

    /// Returns whether a row was removed.
    async fn delete_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<bool>;
}
