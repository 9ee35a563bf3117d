pub struct PackageOpts<'a> {
    pub list: bool,
    pub verify: bool,
    pub target: Option<&'a str>,
}

pub fn package(_manifest_path: &str, _opts: &PackageOpts) -> Result<Option<String>, String> {
    Ok(None)
}
