#[derive(Clone, Debug)]
pub enum CommandType {
    Rustc,
    Rustdoc,
    Target(String),
    Host(String),
}

/// Prototype for a command that must be executed.
#[derive(Clone)]
pub struct CommandPrototype {
    ty: CommandType,
    args: Vec<String>,
}
