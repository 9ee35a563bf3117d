pub struct Layout {
    root: String,
}

pub struct LayoutProxy<'a> {
    root: &'a Layout,
    primary: bool,
}

impl Layout {
    pub fn root(&self) -> &str {
        &self.root
    }
}
