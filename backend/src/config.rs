use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VALIDX_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("VALIDX_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

/// Where the static host binds and whether it opens a browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("VALIDX_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("VALIDX_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(flag) = lookup("VALIDX_OPEN_BROWSER") {
            config.open_browser = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(flag)),
            };
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_key() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("VALIDX_HOST", "0.0.0.0"),
            ("VALIDX_PORT", " 9000 "),
            ("VALIDX_OPEN_BROWSER", "False"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn blank_host_keeps_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("VALIDX_HOST", "  ")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("VALIDX_PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("VALIDX_PORT", "70000")])),
            Err(ConfigError::InvalidPort("70000".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("VALIDX_OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidFlag("maybe".to_string()))
        );
    }
}
