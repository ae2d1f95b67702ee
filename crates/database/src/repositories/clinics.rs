use super::ClinicRepository;
use crate::error::{DatabaseError, Result};
use async_trait::async_trait;
use clinic_models::{Clinic, ClinicId, CreateClinic, UpdateClinic};
use sqlx::PgPool;

pub struct PgClinicRepository {
    pool: PgPool,
}

impl PgClinicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClinicRepository for PgClinicRepository {
    async fn find_all(&self) -> Result<Vec<Clinic>> {
        let clinics = sqlx::query_as::<_, Clinic>("SELECT * FROM clinics ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(clinics)
    }

    async fn find_by_id(&self, id: ClinicId) -> Result<Option<Clinic>> {
        let clinic = sqlx::query_as::<_, Clinic>("SELECT * FROM clinics WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(clinic)
    }

    async fn exists_by_id(&self, id: ClinicId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clinics WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn exists_by_subdomain(&self, subdomain: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clinics WHERE subdomain = $1)")
                .bind(subdomain)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert(&self, request: &CreateClinic) -> Result<Clinic> {
        let clinic = sqlx::query_as::<_, Clinic>(
            r#"
            INSERT INTO clinics (trade_name, subdomain, active)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&request.trade_name)
        .bind(&request.subdomain)
        .bind(request.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "Clinic", "subdomain"))?;

        Ok(clinic)
    }

    async fn update(&self, id: ClinicId, request: &UpdateClinic) -> Result<Clinic> {
        let clinic = sqlx::query_as::<_, Clinic>(
            r#"
            UPDATE clinics
            SET trade_name = $2, subdomain = $3, active = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.trade_name)
        .bind(&request.subdomain)
        .bind(request.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "Clinic", "subdomain"))?
        .ok_or_else(|| DatabaseError::not_found("Clinic", &id.to_string()))?;

        Ok(clinic)
    }

    async fn delete_by_id(&self, id: ClinicId) -> Result<()> {
        sqlx::query("DELETE FROM clinics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
