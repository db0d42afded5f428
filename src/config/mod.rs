use anyhow::{Context, Result};
use serde::Deserialize;

/// Events API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Events service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8999".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the environment.
    ///
    /// `EVENTS_API_URL` and `EVENTS_REQUEST_TIMEOUT_SECS` override the
    /// defaults when set.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("EVENTS_API_URL").unwrap_or_else(|_| default_base_url());

        let request_timeout_secs = std::env::var("EVENTS_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| default_request_timeout().to_string())
            .parse()
            .context("EVENTS_REQUEST_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            base_url,
            request_timeout_secs,
        })
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8999");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            base_url = "http://feeds.internal:9000"
            request_timeout_secs = 5
        "#;

        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "http://feeds.internal:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_partial_config() {
        // Missing keys use defaults
        let toml = r#"
            base_url = "http://feeds.internal:9000"
        "#;

        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "http://feeds.internal:9000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_empty_config() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8999");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:8999\"").unwrap();
        writeln!(file, "request_timeout_secs = 10").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8999");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/events.toml").is_err());
    }

    #[test]
    fn test_from_env_defaults() {
        // Neither variable is set in the test environment
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8999");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
