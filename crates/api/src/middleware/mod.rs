pub mod tenant;

pub use tenant::{require_clinic, CurrentClinic};
