use crate::error::{Result, ServiceError};
use clinic_database::{DatabaseError, HealthPlanRepository};
use clinic_models::{ClinicId, CreateHealthPlan, HealthPlan};
use std::sync::Arc;
use validator::Validate;

/// Health plans of a single clinic.
///
/// Every operation takes the clinic resolved for the request and passes it
/// to the repository, so a plan owned by another clinic can neither be read
/// nor changed. Such a plan is reported exactly like a missing one.
#[derive(Clone)]
pub struct HealthPlanService {
    plan_repo: Arc<dyn HealthPlanRepository>,
}

impl HealthPlanService {
    pub fn new(plan_repo: Arc<dyn HealthPlanRepository>) -> Self {
        Self { plan_repo }
    }

    pub async fn find_all(&self, clinic_id: ClinicId) -> Result<Vec<HealthPlan>> {
        Ok(self.plan_repo.find_all_by_clinic(clinic_id).await?)
    }

    pub async fn find_by_id(&self, clinic_id: ClinicId, id: i64) -> Result<HealthPlan> {
        self.plan_repo
            .find_by_id_and_clinic(id, clinic_id)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    pub async fn create(&self, clinic_id: ClinicId, request: CreateHealthPlan) -> Result<HealthPlan> {
        request.validate()?;

        let plan = self.plan_repo.insert(clinic_id, &request).await?;

        tracing::info!(clinic_id = %clinic_id, plan_id = plan.id, "Health plan created");
        Ok(plan)
    }

    pub async fn update(
        &self,
        clinic_id: ClinicId,
        id: i64,
        request: CreateHealthPlan,
    ) -> Result<HealthPlan> {
        request.validate()?;

        self.find_by_id(clinic_id, id).await?;

        let plan = self
            .plan_repo
            .update(clinic_id, id, &request)
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => plan_not_found(id),
                other => other.into(),
            })?;

        tracing::info!(clinic_id = %clinic_id, plan_id = plan.id, "Health plan updated");
        Ok(plan)
    }

    pub async fn delete(&self, clinic_id: ClinicId, id: i64) -> Result<()> {
        self.find_by_id(clinic_id, id).await?;

        if !self.plan_repo.delete_by_id_and_clinic(id, clinic_id).await? {
            return Err(plan_not_found(id));
        }

        tracing::info!(clinic_id = %clinic_id, plan_id = id, "Health plan deleted");
        Ok(())
    }
}

fn plan_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Health plan not found with id: {}", id))
}
