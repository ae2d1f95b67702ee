pub mod clinic;
pub mod health;
pub mod health_plan;
