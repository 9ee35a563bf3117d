#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VersionControl {
    Git,
    Hg,
    NoVcs,
}

pub struct NewOptions<'a> {
    pub version_control: Option<VersionControl>,
    pub bin: bool,
    pub path: &'a str,
    pub name: Option<&'a str>,
}

pub fn new(_opts: NewOptions) -> Result<(), String> {
    Ok(())
}

pub fn init(_opts: NewOptions) -> Result<(), String> {
    Ok(())
}
