// Tenant (clinic) resolution and request scoping.
//
// Every tenant-scoped request carries an `X-Clinic-ID` header. The resolver
// validates it against the clinic store and the context keeps the resolved
// clinic for the lifetime of that request only.

pub mod config;
pub mod context;
pub mod error;
pub mod extractor;
pub mod paths;
pub mod resolver;
pub mod store;

pub use config::TenantConfig;
pub use context::{TenantContext, TenantGuard};
pub use error::{Result, TenantError};
pub use extractor::{TenantExtractor, CLINIC_ID_HEADER};
pub use paths::ExemptPaths;
pub use resolver::{Resolution, TenantResolver};
pub use store::TenantStore;
