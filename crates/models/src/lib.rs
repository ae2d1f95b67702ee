// Core modules
pub mod clinic;
pub mod health_plan;

// Re-export commonly used types
pub use clinic::{Clinic, ClinicId, CreateClinic, UpdateClinic};
pub use health_plan::{CreateHealthPlan, HealthPlan};
