pub fn read_manifest(_contents: &[u8], _layout: &str) -> Result<String, String> {
    Ok(String::new())
}

pub fn read_package(_path: &str) -> Result<String, String> {
    Ok(String::new())
}

pub fn read_packages(_path: &str) -> Result<Vec<String>, String> {
    Ok(Vec::new())
}
