use crate::config::TenantConfig;
use crate::error::{Result, TenantError};
use crate::extractor::TenantExtractor;
use crate::paths::ExemptPaths;
use crate::store::TenantStore;
use axum::http::HeaderMap;
use clinic_models::ClinicId;
use std::sync::Arc;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path bypasses tenant resolution; no clinic is bound.
    Exempt,
    /// The header names a clinic known to the store.
    Clinic(ClinicId),
}

/// Gatekeeper run before every tenant-scoped handler.
#[derive(Clone)]
pub struct TenantResolver {
    extractor: TenantExtractor,
    exempt_paths: ExemptPaths,
    store: Arc<dyn TenantStore>,
}

impl TenantResolver {
    pub fn new(config: &TenantConfig, store: Arc<dyn TenantStore>) -> Self {
        Self {
            extractor: TenantExtractor::new(),
            exempt_paths: config.exempt_paths(),
            store,
        }
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.matches(path)
    }

    /// Exemption is checked first: an exempt path is never validated, whatever
    /// header it carries.
    pub async fn resolve(&self, path: &str, headers: &HeaderMap) -> Result<Resolution> {
        if self.is_exempt(path) {
            return Ok(Resolution::Exempt);
        }

        let clinic_id = self.extractor.extract_clinic_id(headers)?;

        if !self.store.exists_by_id(clinic_id).await? {
            return Err(TenantError::ClinicNotFound(clinic_id));
        }

        tracing::debug!(clinic_id = %clinic_id, path, "Clinic resolved");
        Ok(Resolution::Clinic(clinic_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::HeaderValue;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Store double recording every lookup.
    struct RecordingStore {
        known: HashSet<i64>,
        lookups: Mutex<Vec<i64>>,
    }

    impl RecordingStore {
        fn with(known: &[i64]) -> Arc<Self> {
            Arc::new(Self {
                known: known.iter().copied().collect(),
                lookups: Mutex::new(Vec::new()),
            })
        }

        fn lookups(&self) -> Vec<i64> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TenantStore for RecordingStore {
        async fn exists_by_id(&self, clinic_id: ClinicId) -> Result<bool> {
            self.lookups.lock().unwrap().push(clinic_id.get());
            Ok(self.known.contains(&clinic_id.get()))
        }
    }

    struct FailingStore;

    #[async_trait]
    impl TenantStore for FailingStore {
        async fn exists_by_id(&self, _clinic_id: ClinicId) -> Result<bool> {
            Err(TenantError::Store("connection refused".to_string()))
        }
    }

    fn resolver(store: Arc<dyn TenantStore>) -> TenantResolver {
        TenantResolver::new(&TenantConfig::default(), store)
    }

    fn clinic_header(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("X-Clinic-ID", HeaderValue::from_static(value));
        headers
    }

    #[tokio::test]
    async fn test_resolves_existing_clinic() {
        let store = RecordingStore::with(&[1]);
        let resolution = resolver(store.clone())
            .resolve("/planos-saude", &clinic_header("1"))
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Clinic(ClinicId::new(1).unwrap()));
        assert_eq!(store.lookups(), vec![1]);
    }

    #[tokio::test]
    async fn test_missing_header_skips_store() {
        let store = RecordingStore::with(&[1]);
        let err = resolver(store.clone())
            .resolve("/planos-saude", &HeaderMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TenantError::MissingHeader));
        assert!(store.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_header_skips_store() {
        let store = RecordingStore::with(&[1]);
        let err = resolver(store.clone())
            .resolve("/planos-saude", &clinic_header("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, TenantError::InvalidHeader));
        assert!(store.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_clinic() {
        let store = RecordingStore::with(&[1]);
        let err = resolver(store)
            .resolve("/planos-saude", &clinic_header("999"))
            .await
            .unwrap_err();

        match err {
            TenantError::ClinicNotFound(id) => assert_eq!(id.get(), 999),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exempt_path_wins_over_header() {
        let store = RecordingStore::with(&[]);
        let resolver = resolver(store.clone());

        for headers in [HeaderMap::new(), clinic_header("abc"), clinic_header("5")] {
            let resolution = resolver.resolve("/clinicas/5", &headers).await.unwrap();
            assert_eq!(resolution, Resolution::Exempt);
        }
        assert!(store.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let err = resolver(Arc::new(FailingStore))
            .resolve("/planos-saude", &clinic_header("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, TenantError::Store(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_clinic_repository_acts_as_store() {
        use clinic_database::{ClinicRepository, InMemoryClinicRepository};
        use clinic_models::CreateClinic;

        let repo: Arc<dyn ClinicRepository> = Arc::new(InMemoryClinicRepository::new());
        let clinic = repo
            .insert(&CreateClinic {
                trade_name: "Clinica Centro".to_string(),
                subdomain: "centro".to_string(),
                active: None,
            })
            .await
            .unwrap();

        let resolver = resolver(Arc::new(repo));
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Clinic-ID",
            HeaderValue::from_str(&clinic.id.to_string()).unwrap(),
        );

        assert_eq!(
            resolver.resolve("/planos-saude", &headers).await.unwrap(),
            Resolution::Clinic(clinic.id)
        );
        assert!(matches!(
            resolver.resolve("/planos-saude", &clinic_header("2")).await,
            Err(TenantError::ClinicNotFound(_))
        ));
    }
}
