pub struct CleanOptions<'a> {
    pub spec: &'a [String],
    pub release: bool,
}

/// Cleans the project from build artifacts.
pub fn clean(_manifest_path: &str, _opts: &CleanOptions) -> Result<(), String> {
    rm_rf("target")
}

fn rm_rf(_path: &str) -> Result<(), String> {
    Ok(())
}
