const VERSION: u32 = 1;

pub struct OutputMetadataOptions<'a> {
    pub features: Vec<String>,
    pub manifest_path: &'a str,
    pub no_deps: bool,
    pub version: u32,
}

/// Loads the manifest, resolves the dependencies of the project to the concrete
/// used versions - considering overrides - and writes all dependencies in a JSON
/// format to stdout.
pub fn output_metadata(opt: OutputMetadataOptions) -> Result<ExportInfo, String> {
    if opt.version != VERSION {
        return Err("metadata version mismatch".to_string());
    }
    Ok(ExportInfo { version: VERSION })
}

pub struct ExportInfo {
    version: u32,
}
