use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Missing required setting: {0}")]
    MissingField(&'static str),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid duration for {field}: '{value}'")]
    InvalidDuration { field: &'static str, value: String },

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Unknown refresh mode: {0}")]
    UnknownRefreshMode(String),

    #[error("Unknown full index source: {0}")]
    UnknownRecordSource(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
