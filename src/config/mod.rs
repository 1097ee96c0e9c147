//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files (explicit path or `<config_dir>/partsguard/config.toml`)
//! - Environment variables (`PARTSGUARD_*`)
//! - CLI arguments (applied by the binary on top of both)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};
use crate::identity::ReservedNames;
use crate::profanity::{DEFAULT_REPLACEMENT, DEFAULT_WRAP_PREFIX, DEFAULT_WRAP_SUFFIX};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Profanity filter output settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Reserved-name settings
    #[serde(default)]
    pub names: NamesConfig,

    /// HTTP sidecar settings
    #[serde(default)]
    pub server: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;

        toml::from_str(&content)
            .map_err(|e| GuardError::Config(format!("Failed to parse config: {e}")))
    }

    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("partsguard").join("config.toml"))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Filter settings
        if let Some(replacement) = lookup("PARTSGUARD_REPLACEMENT") {
            config.filter.replacement = replacement;
        }
        if let Some(prefix) = lookup("PARTSGUARD_WRAP_PREFIX") {
            config.filter.wrap_prefix = prefix;
        }
        if let Some(suffix) = lookup("PARTSGUARD_WRAP_SUFFIX") {
            config.filter.wrap_suffix = suffix;
        }

        // Reserved names, comma-separated
        if let Some(extra) = lookup("PARTSGUARD_RESERVED_EXTRA") {
            config.names.additional = extra
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // Server settings
        if let Some(host) = lookup("PARTSGUARD_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PARTSGUARD_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }

        config
    }

    /// Load the config file (explicit or default location) and apply
    /// environment overrides on top
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            },
        };

        Ok(base.merge(Self::from_env()))
    }

    /// Merge with another config (other takes precedence where it differs
    /// from the defaults; reserved-name lists are concatenated)
    pub fn merge(self, other: Self) -> Self {
        let filter_defaults = FilterConfig::default();
        let server_defaults = HttpConfig::default();

        let mut additional = self.names.additional;
        for name in other.names.additional {
            if !additional.contains(&name) {
                additional.push(name);
            }
        }

        Self {
            filter: FilterConfig {
                replacement: if other.filter.replacement != filter_defaults.replacement {
                    other.filter.replacement
                } else {
                    self.filter.replacement
                },
                wrap_prefix: if other.filter.wrap_prefix != filter_defaults.wrap_prefix {
                    other.filter.wrap_prefix
                } else {
                    self.filter.wrap_prefix
                },
                wrap_suffix: if other.filter.wrap_suffix != filter_defaults.wrap_suffix {
                    other.filter.wrap_suffix
                } else {
                    self.filter.wrap_suffix
                },
            },
            names: NamesConfig {
                additional,
                case_insensitive: self.names.case_insensitive || other.names.case_insensitive,
            },
            server: HttpConfig {
                host: if other.server.host != server_defaults.host {
                    other.server.host
                } else {
                    self.server.host
                },
                port: if other.server.port != server_defaults.port {
                    other.server.port
                } else {
                    self.server.port
                },
                ..self.server
            },
        }
    }
}

/// Profanity filter output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Text substituted for each match by `censor`
    pub replacement: String,

    /// Markup inserted before a flagged word by `wrap`
    pub wrap_prefix: String,

    /// Markup inserted after a flagged word by `wrap`
    pub wrap_suffix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT.to_string(),
            wrap_prefix: DEFAULT_WRAP_PREFIX.to_string(),
            wrap_suffix: DEFAULT_WRAP_SUFFIX.to_string(),
        }
    }
}

/// Reserved-name configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// Names reserved on top of the built-in set
    pub additional: Vec<String>,

    /// Compare names without regard to case
    pub case_insensitive: bool,
}

impl NamesConfig {
    /// Build the reserved-name set described by this section
    pub fn reserved_names(&self) -> ReservedNames {
        let names = ReservedNames::new();
        let names = if self.case_insensitive {
            names.case_insensitive()
        } else {
            names
        };
        names.with_additional(self.additional.iter().cloned())
    }
}

/// HTTP sidecar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Allow cross-origin requests
    pub cors: bool,

    /// Log every request through the tracing layer
    pub request_logging: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_size: 1024 * 1024, // 1 MB
            cors: true,
            request_logging: true,
        }
    }
}

impl HttpConfig {
    /// Get the full listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.replacement, "[censored]");
        assert_eq!(config.server.port, 3000);
        assert!(config.names.additional.is_empty());
        assert!(!config.names.case_insensitive);
    }

    #[test]
    fn test_listen_addr() {
        let config = HttpConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [filter]
            replacement = "***"

            [names]
            additional = ["moderator", "partseller"]
            case_insensitive = true

            [server]
            host = "0.0.0.0"
            port = 9090
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.filter.replacement, "***");
        assert_eq!(config.filter.wrap_suffix, "</span>");
        assert_eq!(config.names.additional, vec!["moderator", "partseller"]);
        assert_eq!(config.server.port, 9090);
        assert!(config.server.cors);

        let reserved = config.names.reserved_names();
        assert!(reserved.contains("MODERATOR"));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8181").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 8181);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_config_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(GuardError::Config(_))
        ));

        assert!(matches!(
            Config::from_file("/nonexistent/partsguard.toml"),
            Err(GuardError::Io(_))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PARTSGUARD_REPLACEMENT", "###"),
            ("PARTSGUARD_RESERVED_EXTRA", "moderator, ,support-team"),
            ("PARTSGUARD_PORT", "not-a-port"),
            ("PARTSGUARD_HOST", "0.0.0.0"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.filter.replacement, "###");
        assert_eq!(config.names.additional, vec!["moderator", "support-team"]);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let mut file_config = Config::default();
        file_config.filter.replacement = "***".to_string();
        file_config.server.port = 8181;
        file_config.names.additional = vec!["moderator".to_string()];

        let mut env_config = Config::default();
        env_config.server.port = 9090;
        env_config.names.additional = vec!["moderator".to_string(), "staff".to_string()];

        let merged = file_config.merge(env_config);
        assert_eq!(merged.filter.replacement, "***");
        assert_eq!(merged.server.port, 9090);
        assert_eq!(merged.names.additional, vec!["moderator", "staff"]);
    }
}
