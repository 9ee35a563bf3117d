/// Contains the parsed output of a custom build script.
#[derive(Clone, Debug, Default)]
pub struct BuildOutput {
    /// Paths to pass to rustc with the `-L` flag
    pub library_paths: Vec<String>,
    pub cfgs: Vec<String>,
}
