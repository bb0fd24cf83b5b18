pub mod client;
pub mod page;
pub mod record_source;
pub mod records;

pub use client::NetboxClient;
pub use page::Page;
pub use record_source::RecordSource;
