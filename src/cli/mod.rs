// src/cli/mod.rs
//! CLI definitions for docnav
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Index commands:
//! - `generate` - Build a sidebar index from a module's source
//! - `check` - Verify a committed sidebar file against its module
//! - `show` / `lookup` - Read a sidebar file
//!
//! Registry commands live under `registry`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod registry;

pub use registry::RegistryCommands;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(author = "Docnav Contributors")]
#[command(version)]
#[command(about = "Generate and verify sidebar navigation indexes", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the sidebar index for a module from its source
    Generate {
        /// Module source: a .rs file or a directory with mod.rs/lib.rs
        module: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: init-call, window, json (default from config)
        #[arg(short, long)]
        format: Option<String>,

        /// Fail on re-exports that cannot be resolved from source
        #[arg(long)]
        strict: bool,
    },

    /// Check that a sidebar file matches its module's public declarations
    Check {
        /// Module source: a .rs file or a directory with mod.rs/lib.rs
        module: PathBuf,

        /// Sidebar file to verify
        index: PathBuf,

        /// Fail on re-exports that cannot be resolved from source
        #[arg(long)]
        strict: bool,
    },

    /// Print the entries of a sidebar file
    Show {
        /// Sidebar file
        index: PathBuf,

        /// Only show this kind (fn, struct, enum, ...)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Look up one entry in a sidebar file
    Lookup {
        /// Sidebar file
        index: PathBuf,

        /// Item kind (fn, struct, enum, ...)
        kind: String,

        /// Item identifier
        name: String,
    },

    /// Package registry operations
    #[command(subcommand)]
    Registry(RegistryCommands),

    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
