// src/registry/client.rs

//! Registry v1 API client
//!
//! All endpoints live under `{host}/api/v1`. Mutating calls need an API
//! token; a missing token fails before any request is sent.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::http::http_handle;
use super::{Crate, NewCrate, RegistryError, RegistryResult, User, Warnings};
use crate::config::{Config, HttpConfig};
use crate::error::Result;

/// Maximum attempts for idempotent requests
const MAX_RETRIES: u32 = 3;

/// Retry delay in milliseconds, multiplied by the attempt number
const RETRY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Authorized,
    Unauthorized,
}

#[derive(Deserialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Deserialize)]
struct ApiErrorList {
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    detail: String,
}

#[derive(Serialize)]
struct OwnersReq<'a> {
    users: &'a [&'a str],
}

#[derive(Deserialize)]
struct Users {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct TotalCrates {
    total: u32,
}

#[derive(Deserialize)]
struct Crates {
    crates: Vec<Crate>,
    meta: TotalCrates,
}

#[derive(Deserialize)]
struct PublishResponse {
    #[serde(default)]
    warnings: Warnings,
}

/// Client for one registry host
pub struct Registry {
    host: String,
    token: Option<String>,
    client: Client,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl Registry {
    /// Create a client with default HTTP settings
    pub fn new(host: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = http_handle(&HttpConfig::default())?;
        Ok(Self::with_client(host, token, client))
    }

    /// Create a client from the registry and http sections of `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = config.registry_configuration();
        let client = http_handle(&config.http)?;
        Ok(Self::with_client(
            registry.host.clone(),
            registry.token.clone(),
            client,
        ))
    }

    /// Create a client around an existing HTTP handle
    pub fn with_client(host: impl Into<String>, token: Option<String>, client: Client) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self {
            host,
            token,
            client,
            max_retries: MAX_RETRIES,
            retry_delay_ms: RETRY_DELAY_MS,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn add_owners(&self, krate: &str, owners: &[&str]) -> RegistryResult<()> {
        let body = serde_json::to_vec(&OwnersReq { users: owners })?;
        let body = self.put(&format!("/crates/{}/owners", encode(krate)), body)?;
        expect_ok(&body)
    }

    pub fn remove_owners(&self, krate: &str, owners: &[&str]) -> RegistryResult<()> {
        let body = serde_json::to_vec(&OwnersReq { users: owners })?;
        let body = self.delete(&format!("/crates/{}/owners", encode(krate)), Some(body))?;
        expect_ok(&body)
    }

    pub fn list_owners(&self, krate: &str) -> RegistryResult<Vec<User>> {
        let body = self.get(&format!("/crates/{}/owners", encode(krate)), Auth::Authorized)?;
        Ok(serde_json::from_str::<Users>(&body)?.users)
    }

    /// Upload a crate tarball with its metadata
    pub fn publish(&self, krate: &NewCrate, tarball: &Path) -> RegistryResult<Warnings> {
        let json = serde_json::to_string(krate)?;
        let tarball = fs::read(tarball)?;
        let body = encode_publish_body(&json, &tarball)?;

        info!(
            "Publishing {} v{} ({} byte tarball) to {}",
            krate.name,
            krate.vers,
            tarball.len(),
            self.host
        );
        let response = self.put("/crates/new", body)?;

        match serde_json::from_str::<PublishResponse>(&response) {
            Ok(parsed) => Ok(parsed.warnings),
            Err(e) => {
                warn!("Could not read publish warnings from {}: {}", self.host, e);
                Ok(Warnings::default())
            }
        }
    }

    /// Search crates by name and description
    ///
    /// Returns one page of at most `limit` crates and the total match count.
    pub fn search(&self, query: &str, limit: u32) -> RegistryResult<(Vec<Crate>, u32)> {
        let path = format!("/crates?q={}&per_page={}", encode(query), limit);
        let body = self.get(&path, Auth::Unauthorized)?;
        let crates = serde_json::from_str::<Crates>(&body)?;
        Ok((crates.crates, crates.meta.total))
    }

    pub fn yank(&self, krate: &str, version: &str) -> RegistryResult<()> {
        let path = format!("/crates/{}/{}/yank", encode(krate), encode(version));
        let body = self.delete(&path, None)?;
        expect_ok(&body)
    }

    pub fn unyank(&self, krate: &str, version: &str) -> RegistryResult<()> {
        let path = format!("/crates/{}/{}/unyank", encode(krate), encode(version));
        let body = self.put(&path, Vec::new())?;
        expect_ok(&body)
    }

    fn get(&self, path: &str, auth: Auth) -> RegistryResult<String> {
        self.req(Method::GET, path, None, auth)
    }

    fn put(&self, path: &str, body: Vec<u8>) -> RegistryResult<String> {
        self.req(Method::PUT, path, Some(body), Auth::Authorized)
    }

    fn delete(&self, path: &str, body: Option<Vec<u8>>) -> RegistryResult<String> {
        self.req(Method::DELETE, path, body, Auth::Authorized)
    }

    fn req(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        auth: Auth,
    ) -> RegistryResult<String> {
        let url = format!("{}/api/v1{}", self.host, path);

        let token = match auth {
            Auth::Authorized => Some(self.token.as_deref().ok_or(RegistryError::TokenMissing)?),
            Auth::Unauthorized => None,
        };

        let build = || -> RequestBuilder {
            let mut request = self
                .client
                .request(method.clone(), &url)
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json");
            if let Some(token) = token {
                request = request.header(AUTHORIZATION, token);
            }
            if let Some(body) = &body {
                request = request.body(body.clone());
            }
            request
        };

        // Only reads are safe to replay
        let retries = if method == Method::GET { self.max_retries } else { 1 };

        debug!("{} {}", method, url);
        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            match build().send() {
                Ok(response) => break response,
                Err(e) => {
                    if attempt >= retries {
                        return Err(RegistryError::Http(format!(
                            "{} {} failed after {attempt} attempt(s): {e}",
                            method, url
                        )));
                    }
                    warn!("Request attempt {} to {} failed: {}, retrying...", attempt, url, e);
                    std::thread::sleep(Duration::from_millis(self.retry_delay_ms * attempt as u64));
                }
            }
        };

        let code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())))
            .collect();
        let body = response
            .bytes()
            .map_err(|e| RegistryError::Http(format!("Failed to read response from {url}: {e}")))?
            .to_vec();

        check_response(code, headers, body)
    }
}

/// Percent-encode a path segment or query value
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Classify a registry response
///
/// A 200 response whose body is an `{"errors": [...]}` list is still an
/// error.
fn check_response(code: u16, headers: Vec<String>, body: Vec<u8>) -> RegistryResult<String> {
    match code {
        200 => {}
        403 => return Err(RegistryError::Unauthorized),
        404 => return Err(RegistryError::NotFound),
        code => {
            return Err(RegistryError::NotOkResponse {
                code,
                headers,
                body,
            })
        }
    }

    let body = String::from_utf8(body).map_err(|_| RegistryError::NonUtf8Body)?;
    if let Ok(errors) = serde_json::from_str::<ApiErrorList>(&body) {
        return Err(RegistryError::Api(
            errors.errors.into_iter().map(|e| e.detail).collect(),
        ));
    }
    Ok(body)
}

/// Require an `{"ok": true}` acknowledgement
fn expect_ok(body: &str) -> RegistryResult<()> {
    if serde_json::from_str::<OkResponse>(body)?.ok {
        Ok(())
    } else {
        Err(RegistryError::Api(vec![
            "registry did not acknowledge the request".to_string(),
        ]))
    }
}

/// Frame a publish upload
///
/// Layout: little-endian u32 metadata length, metadata JSON, little-endian
/// u32 tarball length, tarball bytes.
fn encode_publish_body(json: &str, tarball: &[u8]) -> RegistryResult<Vec<u8>> {
    let json_len = u32::try_from(json.len()).map_err(|_| RegistryError::TooLarge {
        what: "crate metadata",
        len: json.len(),
    })?;
    let tarball_len = u32::try_from(tarball.len()).map_err(|_| RegistryError::TooLarge {
        what: "crate tarball",
        len: tarball.len(),
    })?;

    let mut body = Vec::with_capacity(8 + json.len() + tarball.len());
    body.extend_from_slice(&json_len.to_le_bytes());
    body.extend_from_slice(json.as_bytes());
    body.extend_from_slice(&tarball_len.to_le_bytes());
    body.extend_from_slice(tarball);
    Ok(body)
}
