//! Process-local repositories.
//!
//! Used when the service runs without Postgres (`STORAGE_BACKEND=memory`) and
//! by the test suites. They enforce the same constraints as the SQL schema:
//! unique subdomains and clinic-filtered access to health plans.

use super::{ClinicRepository, HealthPlanRepository};
use crate::error::{DatabaseError, Result};
use async_trait::async_trait;
use chrono::Utc;
use clinic_models::{Clinic, ClinicId, CreateClinic, CreateHealthPlan, HealthPlan, UpdateClinic};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<K, V> {
    next_id: i64,
    rows: BTreeMap<K, V>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<K, V> Table<K, V> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
pub struct InMemoryClinicRepository {
    table: RwLock<Table<ClinicId, Clinic>>,
}

impl InMemoryClinicRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClinicRepository for InMemoryClinicRepository {
    async fn find_all(&self) -> Result<Vec<Clinic>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ClinicId) -> Result<Option<Clinic>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: ClinicId) -> Result<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn exists_by_subdomain(&self, subdomain: &str) -> Result<bool> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .any(|c| c.subdomain == subdomain))
    }

    async fn insert(&self, request: &CreateClinic) -> Result<Clinic> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|c| c.subdomain == request.subdomain) {
            return Err(DatabaseError::duplicate("Clinic", "subdomain"));
        }

        let id = ClinicId::new(table.allocate_id())
            .ok_or_else(|| DatabaseError::Other("Clinic id sequence exhausted".to_string()))?;
        let now = Utc::now();
        let clinic = Clinic {
            id,
            trade_name: request.trade_name.clone(),
            subdomain: request.subdomain.clone(),
            active: request.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, clinic.clone());

        Ok(clinic)
    }

    async fn update(&self, id: ClinicId, request: &UpdateClinic) -> Result<Clinic> {
        let mut table = self.table.write().await;

        if table
            .rows
            .values()
            .any(|c| c.id != id && c.subdomain == request.subdomain)
        {
            return Err(DatabaseError::duplicate("Clinic", "subdomain"));
        }

        let clinic = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found("Clinic", &id.to_string()))?;
        clinic.trade_name = request.trade_name.clone();
        clinic.subdomain = request.subdomain.clone();
        clinic.active = request.active;
        clinic.updated_at = Utc::now();

        Ok(clinic.clone())
    }

    async fn delete_by_id(&self, id: ClinicId) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryHealthPlanRepository {
    table: RwLock<Table<i64, HealthPlan>>,
}

impl InMemoryHealthPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthPlanRepository for InMemoryHealthPlanRepository {
    async fn find_all_by_clinic(&self, clinic_id: ClinicId) -> Result<Vec<HealthPlan>> {
        let mut plans: Vec<HealthPlan> = self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|p| p.clinic_id == clinic_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(plans)
    }

    async fn find_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<Option<HealthPlan>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .get(&id)
            .filter(|p| p.clinic_id == clinic_id)
            .cloned())
    }

    async fn insert(&self, clinic_id: ClinicId, request: &CreateHealthPlan) -> Result<HealthPlan> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let now = Utc::now();
        let plan = HealthPlan {
            id,
            clinic_id,
            name: request.name.clone(),
            ans_code: request.ans_code.clone(),
            active: request.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, plan.clone());

        Ok(plan)
    }

    async fn update(
        &self,
        clinic_id: ClinicId,
        id: i64,
        request: &CreateHealthPlan,
    ) -> Result<HealthPlan> {
        let mut table = self.table.write().await;
        let plan = table
            .rows
            .get_mut(&id)
            .filter(|p| p.clinic_id == clinic_id)
            .ok_or_else(|| DatabaseError::not_found("HealthPlan", &id.to_string()))?;
        plan.name = request.name.clone();
        plan.ans_code = request.ans_code.clone();
        plan.active = request.active.unwrap_or(true);
        plan.updated_at = Utc::now();

        Ok(plan.clone())
    }

    async fn delete_by_id_and_clinic(&self, id: i64, clinic_id: ClinicId) -> Result<bool> {
        let mut table = self.table.write().await;
        let owned = table.rows.get(&id).is_some_and(|p| p.clinic_id == clinic_id);
        if owned {
            table.rows.remove(&id);
        }
        Ok(owned)
    }
}
