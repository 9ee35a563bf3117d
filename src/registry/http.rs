// src/registry/http.rs

//! HTTP client construction

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Proxy variables checked, in order
const PROXY_ENV_VARS: [&str; 4] = ["https_proxy", "HTTPS_PROXY", "http_proxy", "HTTP_PROXY"];

/// Create a new HTTP handle with the configured timeout, user agent and proxy
pub fn http_handle(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone());

    if let Some(proxy) = &config.proxy {
        debug!("Using HTTP proxy {}", proxy);
        let proxy = reqwest::Proxy::all(proxy.as_str())
            .map_err(|e| Error::InitError(format!("Invalid proxy '{}': {e}", proxy)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))
}

/// First non-empty proxy URL from the environment
pub fn proxy_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    PROXY_ENV_VARS
        .iter()
        .filter_map(|var| lookup(*var))
        .find(|value| !value.trim().is_empty())
}

/// Determine if an HTTP proxy exists, in config or the environment
pub fn http_proxy_exists<F>(config: &HttpConfig, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    config.proxy.is_some() || proxy_from_env(lookup).is_some()
}
