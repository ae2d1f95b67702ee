use crate::paths::ExemptPaths;

/// Routes that operate across clinics or expose operational endpoints.
pub const DEFAULT_EXEMPT_PATHS: &[&str] = &["/clinicas/**", "/actuator/**"];

#[derive(Debug, Clone)]
pub struct TenantConfig {
    pub exempt_paths: Vec<String>,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            exempt_paths: DEFAULT_EXEMPT_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TenantConfig {
    pub fn from_env() -> Self {
        match std::env::var("TENANT_EXEMPT_PATHS") {
            Ok(value) => Self {
                exempt_paths: parse_patterns(&value),
            },
            Err(_) => Self::default(),
        }
    }

    pub fn exempt_paths(&self) -> ExemptPaths {
        ExemptPaths::new(self.exempt_paths.iter().cloned())
    }
}

fn parse_patterns(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| {
            let valid = ExemptPaths::is_valid_pattern(p);
            if !valid {
                tracing::warn!(pattern = %p, "Ignoring exempt path: `**` must be the last segment");
            }
            valid
        })
        .map(str::to_string)
        .collect()
}
