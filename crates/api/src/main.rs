// Multiclinicas API Server
// Main entry point for the clinic management REST API

mod config;
mod error;
mod extract;
mod handlers;
mod middleware;
mod routes;

#[cfg(test)]
mod test_support;

use clinic_database::{
    ClinicRepository, Database, HealthPlanRepository, InMemoryClinicRepository,
    InMemoryHealthPlanRepository, PgClinicRepository, PgHealthPlanRepository,
};
use clinic_services::{ClinicService, HealthPlanService};
use clinic_tenant::{TenantConfig, TenantResolver, TenantStore};
use config::{Config, StorageBackend};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

pub struct AppState {
    pub clinic_service: ClinicService,
    pub health_plan_service: HealthPlanService,
    pub tenant_resolver: TenantResolver,
    /// Present only with Postgres storage; checked by the health endpoint.
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(
        clinic_repo: Arc<dyn ClinicRepository>,
        plan_repo: Arc<dyn HealthPlanRepository>,
        tenant_config: &TenantConfig,
    ) -> Self {
        // The clinic table is the tenant store
        let tenant_store: Arc<dyn TenantStore> = Arc::new(clinic_repo.clone());

        Self {
            clinic_service: ClinicService::new(clinic_repo),
            health_plan_service: HealthPlanService::new(plan_repo),
            tenant_resolver: TenantResolver::new(tenant_config, tenant_store),
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clinic_api=debug,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_tracing();

    tracing::info!("Starting Multiclinicas API Server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    tracing::info!("Server: {}:{}", config.server_host, config.server_port);
    tracing::info!("Tenant-exempt paths: {:?}", config.tenant.exempt_paths);

    let (state, database) = match config.storage {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let database = Database::new(config.database.clone()).await?;
            database.ping().await?;
            database.ensure_schema().await?;
            tracing::info!("Database connected");

            let state = AppState::new(
                Arc::new(PgClinicRepository::new(database.pool().clone())),
                Arc::new(PgHealthPlanRepository::new(database.pool().clone())),
                &config.tenant,
            )
            .with_database(database.clone());
            (state, Some(database))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let state = AppState::new(
                Arc::new(InMemoryClinicRepository::new()),
                Arc::new(InMemoryHealthPlanRepository::new()),
                &config.tenant,
            );
            (state, None)
        }
    };

    let state = Arc::new(state);

    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server ready at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(database) = database {
        database.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
