// src/main.rs

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use docnav::Config;
use docnav::config::default_config_path;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Commands, RegistryCommands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    debug!("Registry host: {}", config.registry.host);

    match cli.command {
        Some(Commands::Generate {
            module,
            output,
            format,
            strict,
        }) => commands::cmd_generate(
            &config,
            &module,
            output.as_deref(),
            format.as_deref(),
            strict,
        ),
        Some(Commands::Check {
            module,
            index,
            strict,
        }) => commands::cmd_check(&module, &index, strict),
        Some(Commands::Show { index, kind }) => commands::cmd_show(&index, kind.as_deref()),
        Some(Commands::Lookup { index, kind, name }) => commands::cmd_lookup(&index, &kind, &name),
        Some(Commands::Registry(command)) => match command {
            RegistryCommands::Search { query, limit } => {
                commands::cmd_search(&config, &query, limit)
            }
            RegistryCommands::Owner {
                krate,
                add,
                remove,
                list,
            } => commands::cmd_owner(&config, &krate, &add, &remove, list),
            RegistryCommands::Yank {
                krate,
                version,
                undo,
            } => commands::cmd_yank(&config, &krate, &version, undo),
            RegistryCommands::Publish { metadata, tarball } => {
                commands::cmd_publish(&config, &metadata, &tarball)
            }
            RegistryCommands::Login { token } => {
                let path = match cli.config {
                    Some(path) => path,
                    None => default_config_path()
                        .context("Cannot determine the config directory; pass --config")?,
                };
                commands::cmd_login(&path, &token)
            }
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "docnav", &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("docnav v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'docnav --help' for usage information");
            Ok(())
        }
    }
}
