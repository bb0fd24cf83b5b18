use super::page::Page;
use super::record_source::RecordSource;
use super::records::{DeviceDto, IntoInventoryRecord, IpAddressDto};
use async_trait::async_trait;
use netbox_resolver_application::ports::InventorySource;
use netbox_resolver_domain::{
    DomainError, InventoryRecord, PriorityTier, RecordSourceKind, ResolverSettings,
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("netbox-resolver/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the inventory REST API.
///
/// One `reqwest::Client` (and its connection pool) is built per inventory and
/// reused for every request. Every request carries the API token and is
/// bounded by the configured timeout.
pub struct NetboxClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    page_limit: u32,
    max_pages: usize,
}

impl NetboxClient {
    pub fn new(settings: &ResolverSettings) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .timeout(settings.request_timeout)
            .connect_timeout(settings.request_timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {e}")))?;

        info!(
            url = %settings.base_url,
            timeout_ms = settings.request_timeout.as_millis() as u64,
            page_limit = settings.page_limit,
            "Inventory client initialized"
        );

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            token: settings.token.clone(),
            page_limit: settings.page_limit,
            max_pages: settings.max_pages,
        })
    }

    /// `{base}/api/{resource_path}/?{filters}&limit=N`
    pub fn endpoint(&self, resource_path: &str, filters: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/api/{}/",
            self.base_url.path().trim_end_matches('/'),
            resource_path.trim_matches('/')
        );
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in filters {
                query.append_pair(key, value);
            }
            query.append_pair("limit", &self.page_limit.to_string());
        }

        url
    }

    /// One authenticated GET, decoded as a page of `T`.
    pub async fn fetch_page<T: DeserializeOwned>(&self, url: &Url) -> Result<Page<T>, DomainError> {
        debug!(url = %url, "GET inventory page");

        let response = self
            .http
            .get(url.clone())
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::InventoryStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| transport_error(url, e))?;

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::Decode(format!("{url}: {e}")))
    }

    /// Follow `next` from `first` until the last page and convert every item.
    ///
    /// Nothing is returned unless every page succeeds.
    async fn collect<T>(&self, first: Url) -> Result<Vec<InventoryRecord>, DomainError>
    where
        T: DeserializeOwned + IntoInventoryRecord,
    {
        let mut records = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut current = first;
        let mut pages = 0usize;

        loop {
            if pages >= self.max_pages || !visited.insert(current.to_string()) {
                return Err(DomainError::PaginationLimit {
                    pages,
                    url: current.to_string(),
                });
            }

            let page: Page<T> = self.fetch_page(&current).await?;
            pages += 1;

            let is_last = page.is_last();
            let next = page.next;
            let total = page.count;
            records.extend(page.results.into_iter().filter_map(IntoInventoryRecord::into_record));

            debug!(page = pages, total, collected = records.len(), "Inventory page decoded");

            if is_last {
                break;
            }
            match next {
                Some(next) => current = self.anchor_next(&next)?,
                None => break,
            }
        }

        Ok(records)
    }

    /// Resolve a `next` cursor against the configured origin.
    ///
    /// Only path and query are taken from the cursor, so the token is never
    /// sent to a host other than the configured one (proxies often rewrite
    /// scheme or host in generated links).
    fn anchor_next(&self, next: &str) -> Result<Url, DomainError> {
        let parsed = self
            .base_url
            .join(next)
            .map_err(|e| DomainError::Decode(format!("Invalid next page URL '{next}': {e}")))?;

        let mut url = self.base_url.clone();
        url.set_path(parsed.path());
        url.set_query(parsed.query());
        url.set_fragment(None);
        Ok(url)
    }
}

fn transport_error(url: &Url, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::InventoryTimeout(url.to_string())
    } else {
        DomainError::Transport(format!("{url}: {e}"))
    }
}

#[async_trait]
impl InventorySource for NetboxClient {
    async fn query_by_key(
        &self,
        tier: PriorityTier,
        key: &str,
    ) -> Result<Vec<InventoryRecord>, DomainError> {
        let url = self.endpoint(
            RecordSource::AddressEnumeration.resource_path(),
            &[(tier.query_param(), key)],
        );
        self.collect::<IpAddressDto>(url).await
    }

    async fn enumerate(
        &self,
        source: RecordSourceKind,
    ) -> Result<Vec<InventoryRecord>, DomainError> {
        let source = RecordSource::from(source);
        let url = self.endpoint(source.resource_path(), &[]);

        debug!(source = source.as_str(), url = %url, "Enumerating inventory");

        match source {
            RecordSource::AddressEnumeration => self.collect::<IpAddressDto>(url).await,
            RecordSource::DeviceEnumeration => self.collect::<DeviceDto>(url).await,
        }
    }
}
