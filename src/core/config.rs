use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Authorization token used when none is given on the command line
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "console" or "json"; the only switch for output style
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            access_token: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_endpoint() -> String {
    "https://api.meeting.huaweicloud.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.client.endpoint.is_empty() {
            bail!("endpoint must not be empty");
        }

        let endpoint = Url::parse(&self.client.endpoint)
            .context(format!("Invalid endpoint '{}'", self.client.endpoint))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!(
                "Invalid endpoint scheme '{}'. Must be http or https",
                endpoint.scheme()
            );
        }

        if self.client.timeout_secs == 0 {
            bail!("timeout_secs must be greater than 0");
        }

        if let Some(token) = &self.client.access_token {
            if token.is_empty() {
                bail!("access_token must not be empty when set");
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.client.timeout_secs, 30);
        assert!(config.client.access_token.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").expect("Failed to parse empty config");
        assert_eq!(config.client.endpoint, "https://api.meeting.huaweicloud.com/v1");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            file,
            r#"
[client]
endpoint = "http://localhost:8080/v1"
timeout_secs = 5
access_token = "tok-from-file"

[logging]
level = "debug"
format = "json"
"#
        )
        .expect("Failed to write config");

        let config = Config::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.client.endpoint, "http://localhost:8080/v1");
        assert_eq!(config.client.timeout_secs, 5);
        assert_eq!(config.client.access_token.as_deref(), Some("tok-from-file"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.example.toml");
        let config = Config::from_file(&path).expect("Failed to load example config");
        assert_eq!(config.client.timeout_secs, 30);
        assert!(config.client.access_token.is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/meeting-users.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_endpoint_scheme() {
        let result = Config::from_toml("[client]\nendpoint = \"ftp://example.com\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unparseable_endpoint() {
        let result = Config::from_toml("[client]\nendpoint = \"not a url\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = Config::from_toml("[client]\ntimeout_secs = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = Config::from_toml("[client]\naccess_token = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let result = Config::from_toml("[logging]\nlevel = \"verbose\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_log_format() {
        let result = Config::from_toml("[logging]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }
}
