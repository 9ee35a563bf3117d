pub struct UpdateOptions<'a> {
    pub to_update: &'a [String],
    pub precise: Option<&'a str>,
    pub aggressive: bool,
}

pub fn generate_lockfile(_manifest_path: &str) -> Result<(), String> {
    Ok(())
}

pub fn update_lockfile(_manifest_path: &str, _opts: &UpdateOptions) -> Result<(), String> {
    Ok(())
}
