//! Runtime configuration for the proxy generator.
//!
//! The command line carries only the three positional arguments, so
//! transport and logging settings come from a TOML file and environment
//! variables, layered over built-in defaults.
//!
//! Configuration is read from:
//! - `$XMLRPC_CPP_PROXY_CONFIG` if set (the file must exist)
//! - otherwise `<config dir>/xmlrpc-cpp-proxy/config.toml` if present
//!   (Linux: `~/.config`, macOS: `~/Library/Application Support`)
//!
//! Then `$XMLRPC_CPP_PROXY_TIMEOUT` and `$XMLRPC_CPP_PROXY_LOG` override
//! the file.
//!
//! # Examples
//!
//! ```toml
//! timeout_secs = 10
//! user_agent = "my-build/1.0"
//! log_level = "debug"
//! ```
//!
//! ```
//! use xmlrpc_proxy_core::ProxyConfig;
//!
//! let config = ProxyConfig::default();
//! assert_eq!(config.timeout().as_secs(), 30);
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Names the configuration file to load.
pub const CONFIG_ENV: &str = "XMLRPC_CPP_PROXY_CONFIG";

/// Overrides `timeout_secs`.
pub const TIMEOUT_ENV: &str = "XMLRPC_CPP_PROXY_TIMEOUT";

/// Overrides `log_level`.
pub const LOG_ENV: &str = "XMLRPC_CPP_PROXY_LOG";

/// Settings that tune how the generator talks to the server and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Per-call HTTP timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every call
    pub user_agent: String,

    /// Log filter directive used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("xmlrpc-cpp-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl ProxyConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if a named file is missing or any
    /// layer holds an invalid value.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration, reading variables through `env`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if a named file is missing or any
    /// layer holds an invalid value.
    pub fn load_with<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if let Some(path) = env(CONFIG_ENV) {
            Self::from_file(Path::new(&path))?
        } else {
            match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            }
        };

        config.apply_env(&env)?;
        config.validate()?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Parses a TOML configuration file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        toml::from_str(&content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse {}: {e}", path.display()),
        })
    }

    /// Location of the per-user configuration file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xmlrpc-cpp-proxy").join("config.toml"))
    }

    fn apply_env<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(TIMEOUT_ENV) {
            self.timeout_secs = raw.trim().parse().map_err(|_| Error::ConfigError {
                message: format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"),
            })?;
        }

        if let Some(level) = env(LOG_ENV) {
            self.log_level = level;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for a zero timeout or an empty user agent.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::ConfigError {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "user_agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Per-call timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ProxyConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_level, "warn");
        assert!(config.user_agent.starts_with("xmlrpc-cpp-proxy/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults_partially() {
        let file = config_file("timeout_secs = 5\n");
        let path = file.path().to_str().unwrap();

        let config = ProxyConfig::load_with(env_from(&[(CONFIG_ENV, path)])).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = config_file("timeout_secs = 5\nlog_level = \"info\"\n");
        let path = file.path().to_str().unwrap();

        let config = ProxyConfig::load_with(env_from(&[
            (CONFIG_ENV, path),
            (TIMEOUT_ENV, "12"),
            (LOG_ENV, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(12));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_named_file_is_error() {
        let err = ProxyConfig::load_with(env_from(&[(
            CONFIG_ENV,
            "/nonexistent/xmlrpc-cpp-proxy.toml",
        )]))
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_unparseable_file_is_error() {
        let file = config_file("timeout_secs = \"soon\"\n");
        let err = ProxyConfig::from_file(file.path()).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_bad_timeout_env() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        let err = ProxyConfig::load_with(env_from(&[(CONFIG_ENV, path), (TIMEOUT_ENV, "ten")]))
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ProxyConfig {
            timeout_secs: 0,
            ..ProxyConfig::default()
        };
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let config = ProxyConfig {
            user_agent: "  ".to_string(),
            ..ProxyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = toml::to_string(&ProxyConfig::default()).unwrap();
        let parsed: ProxyConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, ProxyConfig::default());
    }
}
