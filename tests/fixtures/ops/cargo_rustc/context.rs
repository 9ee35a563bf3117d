pub struct Context<'a> {
    pub config: &'a str,
    pub compilation: super::Compilation,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Unit<'a> {
    pub pkg: &'a str,
    pub kind: super::Kind,
}
