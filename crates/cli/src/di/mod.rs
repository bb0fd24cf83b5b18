use netbox_resolver_application::use_cases::ResolveNameUseCase;
use netbox_resolver_domain::ResolverSettings;
use netbox_resolver_infrastructure::{NameCache, NetboxClient};
use std::sync::Arc;
use tracing::info;

/// Everything a command needs, wired once at startup.
pub struct ResolverServices {
    pub resolve: Arc<ResolveNameUseCase>,
    pub cache: Arc<NameCache>,
}

impl ResolverServices {
    pub fn new(settings: &ResolverSettings) -> anyhow::Result<Self> {
        let cache = Arc::new(NameCache::new());
        let client = Arc::new(NetboxClient::new(settings)?);
        let resolve = Arc::new(ResolveNameUseCase::new(client, cache.clone(), settings));

        info!(
            url = %settings.base_url,
            cache_ttl_secs = settings.cache_ttl.as_secs(),
            strategy = ?settings.strategy,
            priority = ?settings.priority,
            "Resolver ready"
        );

        Ok(Self { resolve, cache })
    }
}
