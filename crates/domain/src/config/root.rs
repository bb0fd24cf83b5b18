use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::netbox::{NetboxConfig, ResolverSettings};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "netbox-resolver.toml";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub netbox: NetboxConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub cache_duration: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path`, falling back to `netbox-resolver.toml`
    /// in the working directory, then to defaults. CLI overrides are applied last.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.url {
            self.netbox.url = Some(url);
        }
        if let Some(token) = overrides.token {
            self.netbox.token = Some(token);
        }
        if let Some(duration) = overrides.cache_duration {
            self.netbox.cache_duration = Some(duration);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_level() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }
        self.netbox.to_settings().map(|_| ())
    }

    pub fn resolver_settings(&self) -> Result<ResolverSettings, ConfigError> {
        self.netbox.to_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::{PriorityTier, RecordSourceKind, RefreshStrategy};
    use std::io::Write;
    use std::time::Duration;

    const SAMPLE: &str = r#"
[netbox]
url = "https://netbox.example.org"
token = "0123456789abcdef"
cache_duration = "90s"
priority = ["virtual_machine", "device"]
stop_when_found = true
refresh_mode = "full_index"
full_index_source = "devices"
request_timeout = "2s"

[logging]
level = "debug"
"#;

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        config.validate().unwrap();

        let settings = config.resolver_settings().unwrap();
        assert_eq!(settings.token, "0123456789abcdef");
        assert_eq!(settings.cache_ttl, Duration::from_secs(90));
        assert_eq!(
            settings.priority,
            vec![PriorityTier::VirtualMachine, PriorityTier::Device]
        );
        assert!(settings.policy.stop_on_first_match);
        assert_eq!(
            settings.strategy,
            RefreshStrategy::FullIndex {
                source: RecordSourceKind::Devices
            }
        );
        assert_eq!(settings.request_timeout, Duration::from_secs(2));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_camel_case_aliases() {
        let config = Config::from_toml_str(
            r#"
[netbox]
url = "https://netbox.example.org"
token = "t"
cacheDuration = "1m"
stopWhenFound = true
"#,
        )
        .unwrap();

        let settings = config.resolver_settings().unwrap();
        assert_eq!(settings.cache_ttl, Duration::from_secs(60));
        assert!(settings.policy.stop_on_first_match);
    }

    #[test]
    fn test_default_config_fails_validation() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("url"))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(
            file.path().to_str(),
            CliOverrides {
                token: Some("override".to_string()),
                log_level: Some("warn".to_string()),
                ..CliOverrides::default()
            },
        )
        .unwrap();

        assert_eq!(config.netbox.token.as_deref(), Some("override"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::load(Some("/nonexistent/netbox-resolver.toml"), CliOverrides::default());
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::from_toml_str(SAMPLE).unwrap();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "logging.level",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::from_toml_str("[netbox\nurl ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let misspelled = Config::from_toml_str(
            r#"
[netbox]
url = "https://netbox.example.org"
token = "t"
cache_duration = "30s"
stop_when_fuond = true
"#,
        );
        assert!(matches!(misspelled, Err(ConfigError::Parse(ref msg)) if msg.contains("stop_when_fuond")));

        let unknown_table = Config::from_toml_str("[netbx]\nurl = \"https://netbox.example.org\"\n");
        assert!(matches!(unknown_table, Err(ConfigError::Parse(_))));

        let unknown_logging = Config::from_toml_str("[logging]\nlevel = \"info\"\ncolour = true\n");
        assert!(matches!(unknown_logging, Err(ConfigError::Parse(_))));
    }
}
