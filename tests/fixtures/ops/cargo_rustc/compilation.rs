/// A structure returning the result of a compilation.
#[derive(Default)]
pub struct Compilation {
    /// All libraries which were built for a package.
    pub libraries: Vec<String>,
    pub binaries: Vec<String>,
}
