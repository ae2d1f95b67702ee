use super::HealthPlanRepository;
use crate::error::{DatabaseError, Result};
use async_trait::async_trait;
use clinic_models::{ClinicId, CreateHealthPlan, HealthPlan};
use sqlx::PgPool;

pub struct PgHealthPlanRepository {
    pool: PgPool,
}

impl PgHealthPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthPlanRepository for PgHealthPlanRepository {
    async fn find_all_by_clinic(&self, clinic_id: ClinicId) -> Result<Vec<HealthPlan>> {
        let plans = sqlx::query_as::<_, HealthPlan>(
            "SELECT * FROM health_plans WHERE clinic_id = $1 ORDER BY name",
        )
        .bind(clinic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    async fn find_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<Option<HealthPlan>> {
        let plan = sqlx::query_as::<_, HealthPlan>(
            "SELECT * FROM health_plans WHERE id = $1 AND clinic_id = $2",
        )
        .bind(id)
        .bind(clinic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn insert(&self, clinic_id: ClinicId, request: &CreateHealthPlan) -> Result<HealthPlan> {
        let plan = sqlx::query_as::<_, HealthPlan>(
            r#"
            INSERT INTO health_plans (clinic_id, name, ans_code, active)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(clinic_id)
        .bind(&request.name)
        .bind(&request.ans_code)
        .bind(request.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn update(
        &self,
        clinic_id: ClinicId,
        id: i64,
        request: &CreateHealthPlan,
    ) -> Result<HealthPlan> {
        let plan = sqlx::query_as::<_, HealthPlan>(
            r#"
            UPDATE health_plans
            SET name = $3, ans_code = $4, active = $5, updated_at = NOW()
            WHERE id = $1 AND clinic_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(clinic_id)
        .bind(&request.name)
        .bind(&request.ans_code)
        .bind(request.active.unwrap_or(true))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("HealthPlan", &id.to_string()))?;

        Ok(plan)
    }

    async fn delete_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM health_plans WHERE id = $1 AND clinic_id = $2")
            .bind(id)
            .bind(clinic_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
