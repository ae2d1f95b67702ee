/// Path patterns that bypass tenant resolution.
///
/// Supports:
///   - Exact: `/health`
///   - Single wildcard: `/api/*/status` (exactly one segment)
///   - Double wildcard: `/clinicas/**` (any depth, including none). Only
///     allowed as the last segment; a pattern with `**` anywhere else never
///     matches.
#[derive(Debug, Clone, Default)]
pub struct ExemptPaths {
    patterns: Vec<String>,
}

impl ExemptPaths {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| match_path(pattern, path))
    }

    /// Whether `pattern` uses `**` only as its final segment.
    pub fn is_valid_pattern(pattern: &str) -> bool {
        let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        segments
            .iter()
            .position(|s| *s == "**")
            .map_or(true, |i| i == segments.len() - 1)
    }
}

fn match_path(pattern: &str, path: &str) -> bool {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut ri = 0; // request path index

    let last = pattern_parts.len().saturating_sub(1);

    for (pi, pp) in pattern_parts.into_iter().enumerate() {
        if pp == "**" {
            return pi == last;
        }

        let Some(segment) = path_parts.get(ri) else {
            return false;
        };

        if pp != "*" && pp != *segment {
            return false;
        }

        ri += 1;
    }

    ri == path_parts.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(match_path("/health", "/health"));
        assert!(match_path("/health", "/health/"));
        assert!(!match_path("/health", "/healths"));
        assert!(!match_path("/health", "/health/live"));
    }

    #[test]
    fn test_double_wildcard() {
        assert!(match_path("/clinicas/**", "/clinicas"));
        assert!(match_path("/clinicas/**", "/clinicas/1"));
        assert!(match_path("/clinicas/**", "/clinicas/1/a/b"));
        assert!(!match_path("/clinicas/**", "/planos-saude"));
        assert!(!match_path("/clinicas/**", "/clinicas-extra"));
    }

    #[test]
    fn test_single_wildcard() {
        assert!(match_path("/api/*/status", "/api/users/status"));
        assert!(!match_path("/api/*/status", "/api/users/detail"));
        assert!(!match_path("/api/*/status", "/api/status"));
    }

    #[test]
    fn test_inner_double_wildcard_never_matches() {
        assert!(!match_path("/a/**/b", "/a/x/b"));
        assert!(!match_path("/a/**/b", "/a/anything"));
        assert!(!ExemptPaths::new(["/a/**/b"]).matches("/a"));
    }

    #[test]
    fn test_pattern_validity() {
        assert!(ExemptPaths::is_valid_pattern("/clinicas/**"));
        assert!(ExemptPaths::is_valid_pattern("/api/*/status"));
        assert!(ExemptPaths::is_valid_pattern("/health"));
        assert!(ExemptPaths::is_valid_pattern("/**"));
        assert!(!ExemptPaths::is_valid_pattern("/a/**/b"));
    }

    #[test]
    fn test_any_pattern_matches() {
        let exempt = ExemptPaths::new(["/clinicas/**", "/actuator/**"]);
        assert!(exempt.matches("/actuator/health"));
        assert!(exempt.matches("/clinicas"));
        assert!(!exempt.matches("/planos-saude"));
        assert!(!exempt.matches("/"));
        assert!(!ExemptPaths::default().matches("/clinicas"));
    }
}
