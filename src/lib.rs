// src/lib.rs

//! docnav - sidebar navigation indexes for package tooling docs
//!
//! Generates, reads, and verifies the rustdoc sidebar index
//! (`sidebar-items.js`) of a module, and talks to the package registry
//! the documented tool publishes to.
//!
//! # Architecture
//!
//! - `index`: the sidebar data model, its wire formats, and diffs
//! - `extract`: public surface of a Rust module, read with `syn`
//! - `verify`: round-trip check of a committed sidebar file
//! - `registry`: crates.io-compatible v1 API client
//! - `config`: TOML configuration with environment overrides

pub mod config;
mod error;
pub mod extract;
pub mod index;
pub mod registry;
pub mod verify;

pub use config::{Config, HttpConfig, IndexConfig, RegistryConfig, registry_login};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, extract_module};
pub use index::{
    DiffEntry, IndexDiff, ItemKind, SidebarEntry, SidebarFormat, SidebarIndex, diff_indexes,
    parse_sidebar, read_sidebar_file, render_sidebar, write_sidebar, write_sidebar_file,
};
pub use registry::{Registry, RegistryError, http_handle, http_proxy_exists};
pub use verify::{VerifyReport, verify};
