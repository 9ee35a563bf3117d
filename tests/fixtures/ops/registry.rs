pub struct RegistryConfig {
    pub index: Option<String>,
    pub token: Option<String>,
}

pub struct PublishOpts<'a> {
    pub token: Option<String>,
    pub index: Option<String>,
    pub verify: bool,
    pub allow_dirty: bool,
    pub jobs: Option<u32>,
    pub dry_run: bool,
    pub target: Option<&'a str>,
}

pub struct OwnersOptions {
    pub krate: Option<String>,
    pub token: Option<String>,
    pub index: Option<String>,
    pub to_add: Option<Vec<String>>,
    pub to_remove: Option<Vec<String>>,
    pub list: bool,
}

pub fn publish(_opts: &PublishOpts) -> Result<(), String> {
    Ok(())
}

pub fn registry_configuration() -> Result<RegistryConfig, String> {
    Ok(RegistryConfig {
        index: None,
        token: None,
    })
}

pub fn registry_login(_token: String) -> Result<(), String> {
    Ok(())
}

/// Create a new HTTP handle with appropriate global configuration for cargo.
pub fn http_handle() -> Result<(), String> {
    Ok(())
}

/// Determine if an http proxy exists.
///
/// Checks the following for existence, in order:
///
/// * cargo's `http.proxy`
/// * git's `http.proxy`
/// * http_proxy env var
/// * HTTP_PROXY env var
/// * https_proxy env var
/// * HTTPS_PROXY env var
pub fn http_proxy_exists() -> Result<bool, String> {
    Ok(false)
}

pub fn modify_owners(_opts: &OwnersOptions) -> Result<(), String> {
    Ok(())
}

pub fn yank(_krate: Option<String>, _version: Option<String>, _undo: bool) -> Result<(), String> {
    Ok(())
}

pub fn search(_query: &str, _limit: u8) -> Result<(), String> {
    Ok(())
}
