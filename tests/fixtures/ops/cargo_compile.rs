/// Contains information about how a package should be compiled.
pub struct CompileOptions<'a> {
    pub jobs: Option<u32>,
    pub target: Option<&'a str>,
    pub filter: CompileFilter<'a>,
    pub mode: CompileMode,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CompileMode {
    Test,
    Build,
    Bench,
    Doc { deps: bool },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageFormat {
    Human,
    Json,
}

pub enum CompileFilter<'a> {
    Everything,
    Only { lib: bool, bins: &'a [String] },
}

pub fn compile(_manifest_path: &str, _options: &CompileOptions) -> Result<(), String> {
    Ok(())
}

pub fn compile_ws(_options: &CompileOptions) -> Result<(), String> {
    Ok(())
}
