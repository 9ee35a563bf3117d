/// Resolve all dependencies for the specified `package` using the previous
/// lockfile as a guide if present.
///
/// This function will also write the result of resolution as a new
/// lockfile.
pub fn resolve_ws(_ws: &str) -> Result<String, String> {
    resolve_with_previous(None)
}

/// Resolve all dependencies for a package using an optional previous instance
/// of resolve to guide the resolution process.
///
/// The previous resolve normally comes from a lockfile.
pub fn resolve_with_previous(previous: Option<&str>) -> Result<String, String> {
    Ok(previous.unwrap_or_default().to_string())
}

pub fn resolve_dependencies(_ws: &str, _features: &[String]) -> Result<String, String> {
    Ok(String::new())
}
