use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::errors::ConfigError;
use crate::priority::{PriorityTier, RecordSourceKind, RefreshStrategy, ResolutionPolicy};

/// Inventory connection and lookup settings (`[netbox]` table)
///
/// `url`, `token` and `cache_duration` are required; everything else has a
/// default. Durations use humantime syntax (`"30s"`, `"5m"`, `"100ms"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetboxConfig {
    /// Base URL of the inventory (e.g., "https://netbox.example.org")
    #[serde(default)]
    pub url: Option<String>,

    /// API token sent as `Authorization: Token <token>`
    #[serde(default)]
    pub token: Option<String>,

    /// How long a resolved name stays cached
    #[serde(default, alias = "cacheDuration", alias = "localCacheDuration")]
    pub cache_duration: Option<String>,

    /// Ordered key-kinds tried on a miss. Empty means all, in default order.
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,

    /// Stop at the first tier that yields an address
    #[serde(default, alias = "stopWhenFound")]
    pub stop_when_found: bool,

    /// "priority" (targeted queries) or "full_index" (enumerate and rebuild)
    #[serde(default = "default_refresh_mode")]
    pub refresh_mode: String,

    /// Collection enumerated in full_index mode: "ip_addresses" or "devices"
    #[serde(default = "default_full_index_source")]
    pub full_index_source: String,

    /// Upper bound for every inventory request
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,

    /// `limit` query parameter sent with every page request
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Safety bound on pages followed through `next`
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for NetboxConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            cache_duration: None,
            priority: default_priority(),
            stop_when_found: false,
            refresh_mode: default_refresh_mode(),
            full_index_source: default_full_index_source(),
            request_timeout: default_request_timeout(),
            page_limit: default_page_limit(),
            max_pages: default_max_pages(),
        }
    }
}

impl NetboxConfig {
    /// Validate the raw settings and convert them into typed resolver settings.
    pub fn to_settings(&self) -> Result<ResolverSettings, ConfigError> {
        let raw_url = non_empty(&self.url).ok_or(ConfigError::MissingField("url"))?;
        let token = non_empty(&self.token).ok_or(ConfigError::MissingField("token"))?;
        let raw_ttl =
            non_empty(&self.cache_duration).ok_or(ConfigError::MissingField("cache_duration"))?;

        let base_url = parse_base_url(raw_url)?;
        let cache_ttl = parse_duration("cache_duration", raw_ttl)?;
        let request_timeout = parse_duration("request_timeout", &self.request_timeout)?;

        let priority = if self.priority.is_empty() {
            PriorityTier::default_order()
        } else {
            let mut tiers = Vec::with_capacity(self.priority.len());
            for name in &self.priority {
                let tier = PriorityTier::from_name(name)
                    .ok_or_else(|| ConfigError::UnknownPriority(name.clone()))?;
                if !tiers.contains(&tier) {
                    tiers.push(tier);
                }
            }
            tiers
        };

        let strategy = match self.refresh_mode.as_str() {
            "priority" => RefreshStrategy::PriorityTiers,
            "full_index" => {
                let source = RecordSourceKind::from_name(&self.full_index_source).ok_or_else(
                    || ConfigError::UnknownRecordSource(self.full_index_source.clone()),
                )?;
                RefreshStrategy::FullIndex { source }
            }
            other => return Err(ConfigError::UnknownRefreshMode(other.to_string())),
        };

        if self.page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_pages",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(ResolverSettings {
            base_url,
            token: token.to_string(),
            cache_ttl,
            priority,
            policy: ResolutionPolicy::new(self.stop_when_found),
            strategy,
            request_timeout,
            page_limit: self.page_limit,
            max_pages: self.max_pages,
        })
    }
}

/// Validated settings a resolver is constructed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub base_url: Url,
    pub token: String,
    pub cache_ttl: Duration,
    pub priority: Vec<PriorityTier>,
    pub policy: ResolutionPolicy,
    pub strategy: RefreshStrategy,
    pub request_timeout: Duration,
    pub page_limit: u32,
    pub max_pages: usize,
}

impl ResolverSettings {
    /// Settings with every optional value at its default.
    pub fn new(base_url: Url, token: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            base_url,
            token: token.into(),
            cache_ttl,
            priority: PriorityTier::default_order(),
            policy: ResolutionPolicy::default(),
            strategy: RefreshStrategy::PriorityTiers,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_limit: default_page_limit(),
            max_pages: default_max_pages(),
        }
    }

    pub fn with_priority(mut self, priority: Vec<PriorityTier>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_strategy(mut self, strategy: RefreshStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(url)
}

fn parse_duration(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration {
        field,
        value: raw.to_string(),
    };
    let duration = humantime::parse_duration(raw.trim()).map_err(|_| invalid())?;
    if duration.is_zero() {
        return Err(invalid());
    }
    Ok(duration)
}

fn default_priority() -> Vec<String> {
    PriorityTier::default_order()
        .iter()
        .map(|tier| tier.as_str().to_string())
        .collect()
}

fn default_refresh_mode() -> String {
    "priority".to_string()
}

fn default_full_index_source() -> String {
    RecordSourceKind::default().as_str().to_string()
}

fn default_request_timeout() -> String {
    format!("{DEFAULT_REQUEST_TIMEOUT_SECS}s")
}

fn default_page_limit() -> u32 {
    100
}

fn default_max_pages() -> usize {
    1000
}
