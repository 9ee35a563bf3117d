// src/registry/mod.rs

//! Package registry API client
//!
//! Talks to a crates.io-compatible registry over its v1 HTTP API:
//! searching, publishing, yanking, and managing crate owners.
//!
//! # Example
//!
//! ```ignore
//! use docnav::registry::Registry;
//!
//! let registry = Registry::new("https://crates.io", None)?;
//! let (crates, total) = registry.search("sidebar", 10)?;
//! println!("{} of {} matches", crates.len(), total);
//! ```

mod client;
mod http;

pub use client::Registry;
pub use http::{http_handle, http_proxy_exists, proxy_from_env};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the registry client
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout)
    #[error("http error: {0}")]
    Http(String),

    /// Registry answered with an unexpected status code
    #[error("{}", not_ok_message(.code, .headers, .body))]
    NotOkResponse {
        code: u16,
        headers: Vec<String>,
        body: Vec<u8>,
    },

    #[error("response body was not utf-8")]
    NonUtf8Body,

    /// Errors reported by the registry in an `{"errors": [...]}` body
    #[error("api errors: {}", .0.join(", "))]
    Api(Vec<String>),

    #[error("unauthorized API access")]
    Unauthorized,

    #[error("no upload token found, please run `docnav registry login`")]
    TokenMissing,

    #[error("cannot find crate")]
    NotFound,

    #[error("{what} is too large to upload ({len} bytes)")]
    TooLarge { what: &'static str, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn not_ok_message(code: &u16, headers: &[String], body: &[u8]) -> String {
    let mut msg = format!("failed to get a 200 OK response, got {code}\nheaders:\n");
    for header in headers {
        msg.push_str("    ");
        msg.push_str(header.trim_end());
        msg.push('\n');
    }
    msg.push_str("body:\n");
    msg.push_str(&String::from_utf8_lossy(body));
    msg
}

/// Result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// A crate as returned by search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crate {
    pub name: String,
    pub description: Option<String>,
    pub max_version: String,
}

/// Metadata sent with a publish request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCrate {
    pub name: String,
    pub vers: String,
    #[serde(default)]
    pub deps: Vec<NewCrateDependency>,
    #[serde(default)]
    pub features: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub documentation: Option<String>,
    pub homepage: Option<String>,
    pub readme: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub license: Option<String>,
    pub license_file: Option<String>,
    pub repository: Option<String>,
}

/// A dependency entry of [`NewCrate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCrateDependency {
    #[serde(default)]
    pub optional: bool,
    #[serde(default = "default_true")]
    pub default_features: bool,
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub version_req: String,
    pub target: Option<String>,
    #[serde(default = "default_dep_kind")]
    pub kind: String,
}

fn default_true() -> bool {
    true
}

fn default_dep_kind() -> String {
    "normal".to_string()
}

/// A registry user (crate owner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub login: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Non-fatal problems the registry reports after a publish
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Warnings {
    #[serde(default)]
    pub invalid_categories: Vec<String>,
    #[serde(default)]
    pub invalid_badges: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl Warnings {
    pub fn is_empty(&self) -> bool {
        self.invalid_categories.is_empty() && self.invalid_badges.is_empty() && self.other.is_empty()
    }
}
