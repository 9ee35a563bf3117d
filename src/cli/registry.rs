// src/cli/registry.rs
//! Registry commands

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum RegistryCommands {
    /// Search the registry for crates
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },

    /// Manage crate owners
    Owner {
        /// Crate name
        krate: String,

        /// Users to invite as owners
        #[arg(short, long, value_name = "LOGIN")]
        add: Vec<String>,

        /// Users to remove from the owners
        #[arg(short, long, value_name = "LOGIN")]
        remove: Vec<String>,

        /// List current owners
        #[arg(short, long)]
        list: bool,
    },

    /// Yank a version so new lockfiles stop selecting it
    Yank {
        /// Crate name
        krate: String,

        /// Version to yank
        version: String,

        /// Undo a previous yank
        #[arg(long)]
        undo: bool,
    },

    /// Upload a packaged crate
    Publish {
        /// JSON file with the crate metadata
        metadata: PathBuf,

        /// The .crate tarball
        tarball: PathBuf,
    },

    /// Save an API token to the config file
    Login {
        /// API token
        token: String,
    },
}
