// src/config.rs

//! docnav configuration file
//!
//! # Example config.toml
//!
//! ```toml
//! [registry]
//! host = "https://crates.io"
//! token = "cio_..."
//!
//! [http]
//! proxy = "http://proxy.internal:3128"
//! timeout_secs = 30
//!
//! [index]
//! format = "init-call"
//! ```
//!
//! A missing file is not an error; every section has defaults.
//! `DOCNAV_REGISTRY_HOST` and `DOCNAV_REGISTRY_TOKEN` override the registry
//! section.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::index::SidebarFormat;

/// Default registry API host
pub const DEFAULT_REGISTRY_HOST: &str = "https://crates.io";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_REGISTRY_HOST: &str = "DOCNAV_REGISTRY_HOST";
pub const ENV_REGISTRY_TOKEN: &str = "DOCNAV_REGISTRY_TOKEN";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub index: IndexConfig,
}

/// Registry endpoint and credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL; the API lives under `{host}/api/v1`
    #[serde(default = "default_host")]
    pub host: String,

    /// API token sent in the Authorization header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_host() -> String {
    DEFAULT_REGISTRY_HOST.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: None,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Proxy URL for all registry requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("docnav/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Index generation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Output format for `generate` when none is given
    #[serde(default)]
    pub format: SidebarFormat,
}

/// Default config file location (`$XDG_CONFIG_HOME/docnav/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docnav").join("config.toml"))
}

impl Config {
    /// Load from `path`, or the default location when `None`
    ///
    /// Environment overrides are applied on top of the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an explicit environment lookup
    ///
    /// The result is validated after overrides are applied.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let mut config = match path {
            Some(ref p) if p.exists() => Self::from_file(p)?,
            Some(ref p) => {
                debug!("No config at {}, using defaults", p.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without applying environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the registry host is an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.registry.host).map_err(|e| {
            Error::ConfigError(format!("Invalid registry host '{}': {e}", self.registry.host))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::ConfigError(format!(
                "Registry host must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::ConfigError("http.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Apply `DOCNAV_REGISTRY_*` overrides using the given variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_REGISTRY_HOST).filter(|v| !v.is_empty()) {
            debug!("Registry host overridden by {}", ENV_REGISTRY_HOST);
            self.registry.host = host;
        }
        if let Some(token) = lookup(ENV_REGISTRY_TOKEN).filter(|v| !v.is_empty()) {
            debug!("Registry token overridden by {}", ENV_REGISTRY_TOKEN);
            self.registry.token = Some(token);
        }
    }

    /// Effective registry section
    pub fn registry_configuration(&self) -> &RegistryConfig {
        &self.registry
    }

    /// Serialize the config to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))
    }

    /// Write the config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::IoError(format!("Failed to create directory {}: {e}", parent.display()))
            })?;
        }
        fs::write(path, self.to_toml()?).map_err(|e| {
            Error::IoError(format!("Failed to write {}: {e}", path.display()))
        })?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Store a registry token in the config file at `path`
///
/// Other settings in the file are preserved. Environment overrides are not
/// written back.
pub fn registry_login(path: &Path, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::ConfigError("Registry token must not be empty".to_string()));
    }

    let mut config = if path.exists() {
        Config::from_file(path)?
    } else {
        Config::default()
    };
    config.registry.token = Some(token.to_string());
    config.save(path)
}
