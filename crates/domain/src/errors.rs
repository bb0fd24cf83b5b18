use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Inventory transport error: {0}")]
    Transport(String),

    #[error("Inventory request timed out: {0}")]
    InventoryTimeout(String),

    #[error("Inventory returned HTTP {status} for {url}")]
    InventoryStatus { status: u16, url: String },

    #[error("Failed to decode inventory response: {0}")]
    Decode(String),

    #[error("Pagination limit reached after {pages} pages at {url}")]
    PaginationLimit { pages: usize, url: String },
}
