pub mod clinic_service;
pub mod error;
pub mod health_plan_service;

pub use clinic_service::ClinicService;
pub use error::{Result, ServiceError};
pub use health_plan_service::HealthPlanService;
