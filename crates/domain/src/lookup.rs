use std::fmt;

/// Progress of a single lookup, reported through tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    CacheHit,
    CacheMissNeedsRefresh,
    RefreshInFlight,
    Resolved,
    Unresolved,
}

impl LookupState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheHit => "cache_hit",
            Self::CacheMissNeedsRefresh => "cache_miss",
            Self::RefreshInFlight => "refresh_in_flight",
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for LookupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn a query name into a cache key by stripping the root qualifier.
///
/// ```
/// use netbox_resolver_domain::lookup::normalize_lookup_key;
///
/// assert_eq!(normalize_lookup_key("my_host."), "my_host");
/// assert_eq!(normalize_lookup_key(" my_host "), "my_host");
/// assert_eq!(normalize_lookup_key("."), "");
/// ```
pub fn normalize_lookup_key(name: &str) -> &str {
    name.trim().trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_inner_dots() {
        assert_eq!(normalize_lookup_key("web01.lab.local."), "web01.lab.local");
        assert_eq!(normalize_lookup_key("web01..."), "web01");
    }

    #[test]
    fn test_normalize_keeps_case() {
        assert_eq!(normalize_lookup_key("NoSuchHost"), "NoSuchHost");
    }
}
