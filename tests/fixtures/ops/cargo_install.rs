pub fn install(_root: Option<&str>, _krate: Option<&str>) -> Result<(), String> {
    Ok(())
}

pub fn install_list(_root: Option<&str>) -> Result<(), String> {
    Ok(())
}

pub fn uninstall(_root: Option<&str>, _spec: &str) -> Result<(), String> {
    Ok(())
}

pub(crate) fn resolve_root(root: Option<&str>) -> String {
    root.unwrap_or(".cargo").to_string()
}
