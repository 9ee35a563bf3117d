// src/commands/mod.rs
//! Command handlers for the docnav CLI

mod index;
mod registry;

pub use index::{cmd_check, cmd_generate, cmd_lookup, cmd_show};
pub use registry::{cmd_login, cmd_owner, cmd_publish, cmd_search, cmd_yank};
