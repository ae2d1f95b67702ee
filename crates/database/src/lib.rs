pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{DatabaseError, Result};
pub use repositories::{
    clinics::PgClinicRepository,
    health_plans::PgHealthPlanRepository,
    memory::{InMemoryClinicRepository, InMemoryHealthPlanRepository},
    ClinicRepository, HealthPlanRepository,
};
