use serde::Deserialize;

/// One page of a paginated inventory list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of results across all pages
    #[serde(default)]
    pub count: u64,

    /// Absolute URL of the next page, `null` on the last page
    #[serde(default)]
    pub next: Option<String>,

    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next.as_deref().map_or(true, str::is_empty)
    }
}
