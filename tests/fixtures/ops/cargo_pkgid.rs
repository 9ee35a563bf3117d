pub fn pkgid(_manifest_path: &str, spec: Option<&str>) -> Result<String, String> {
    Ok(spec.unwrap_or_default().to_string())
}
