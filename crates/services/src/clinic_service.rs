use crate::error::{Result, ServiceError};
use clinic_database::{ClinicRepository, DatabaseError};
use clinic_models::{Clinic, ClinicId, CreateClinic, UpdateClinic};
use std::sync::Arc;
use validator::Validate;

/// Clinic management. Clinics are the tenants, so these operations run
/// outside any clinic scope.
#[derive(Clone)]
pub struct ClinicService {
    clinic_repo: Arc<dyn ClinicRepository>,
}

impl ClinicService {
    pub fn new(clinic_repo: Arc<dyn ClinicRepository>) -> Self {
        Self { clinic_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Clinic>> {
        Ok(self.clinic_repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: ClinicId) -> Result<Clinic> {
        self.clinic_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Clinic not found with id: {}", id)))
    }

    /// Create a clinic; the subdomain must not be taken by any other clinic.
    pub async fn create(&self, request: CreateClinic) -> Result<Clinic> {
        request.validate()?;

        if self.clinic_repo.exists_by_subdomain(&request.subdomain).await? {
            return Err(subdomain_conflict(&request.subdomain));
        }

        let clinic = self
            .clinic_repo
            .insert(&request)
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent create
                DatabaseError::DuplicateEntry(_) => subdomain_conflict(&request.subdomain),
                other => other.into(),
            })?;

        tracing::info!(clinic_id = %clinic.id, subdomain = %clinic.subdomain, "Clinic created");
        Ok(clinic)
    }

    /// Replace a clinic's editable fields.
    ///
    /// Keeping the current subdomain is always allowed; moving to one held by
    /// another clinic is a business rule violation.
    pub async fn update(&self, id: ClinicId, request: UpdateClinic) -> Result<Clinic> {
        request.validate()?;

        let existing = self.find_by_id(id).await?;

        if existing.subdomain != request.subdomain
            && self.clinic_repo.exists_by_subdomain(&request.subdomain).await?
        {
            return Err(subdomain_taken(&request.subdomain));
        }

        let clinic = self
            .clinic_repo
            .update(id, &request)
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateEntry(_) => subdomain_taken(&request.subdomain),
                DatabaseError::NotFound(_) => {
                    ServiceError::NotFound(format!("Clinic not found with id: {}", id))
                }
                other => other.into(),
            })?;

        tracing::info!(clinic_id = %clinic.id, "Clinic updated");
        Ok(clinic)
    }

    pub async fn delete(&self, id: ClinicId) -> Result<()> {
        if !self.clinic_repo.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(format!(
                "Clinic not found for deletion with id: {}",
                id
            )));
        }

        self.clinic_repo.delete_by_id(id).await?;

        tracing::info!(clinic_id = %id, "Clinic deleted");
        Ok(())
    }
}

fn subdomain_conflict(subdomain: &str) -> ServiceError {
    ServiceError::Conflict(format!("Subdomain already in use: {}", subdomain))
}

fn subdomain_taken(subdomain: &str) -> ServiceError {
    ServiceError::Business(format!("New subdomain already in use: {}", subdomain))
}
