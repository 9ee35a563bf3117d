// src/commands/registry.rs
//! Registry commands

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use docnav::registry::{NewCrate, Registry};
use docnav::{Config, http_proxy_exists};
use tracing::{debug, info};

fn open_registry(config: &Config) -> Result<Registry> {
    if http_proxy_exists(&config.http, |var| std::env::var(var).ok()) {
        debug!("HTTP proxy configured");
    }
    Ok(Registry::from_config(config)?)
}

/// Search the registry
pub fn cmd_search(config: &Config, query: &str, limit: u32) -> Result<()> {
    info!("Searching {} for '{}'", config.registry.host, query);
    let registry = open_registry(config)?;
    let (crates, total) = registry.search(query, limit)?;

    if crates.is_empty() {
        println!("No crates matching '{}'", query);
        return Ok(());
    }

    let width = crates.iter().map(|c| c.name.len() + c.max_version.len()).max().unwrap_or(0);
    for krate in &crates {
        let name = format!("{} = \"{}\"", krate.name, krate.max_version);
        let description = krate
            .description
            .as_deref()
            .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        if description.is_empty() {
            println!("{}", name);
        } else {
            println!("{:<width$}  # {}", name, description, width = width + 5);
        }
    }
    if total > crates.len() as u32 {
        println!("... and {} crates more", total - crates.len() as u32);
    }
    Ok(())
}

/// Add, remove, or list crate owners
pub fn cmd_owner(
    config: &Config,
    krate: &str,
    add: &[String],
    remove: &[String],
    list: bool,
) -> Result<()> {
    let registry = open_registry(config)?;

    if !add.is_empty() {
        let users: Vec<&str> = add.iter().map(String::as_str).collect();
        registry
            .add_owners(krate, &users)
            .with_context(|| format!("Failed to invite owners to crate {}", krate))?;
        println!("Owners added to {}: {}", krate, users.join(", "));
    }

    if !remove.is_empty() {
        let users: Vec<&str> = remove.iter().map(String::as_str).collect();
        registry
            .remove_owners(krate, &users)
            .with_context(|| format!("Failed to remove owners from crate {}", krate))?;
        println!("Owners removed from {}: {}", krate, users.join(", "));
    }

    if list || (add.is_empty() && remove.is_empty()) {
        let owners = registry
            .list_owners(krate)
            .with_context(|| format!("Failed to list owners of crate {}", krate))?;
        for owner in owners {
            match owner.name {
                Some(name) => println!("{} ({})", owner.login, name),
                None => println!("{}", owner.login),
            }
        }
    }
    Ok(())
}

/// Yank or unyank a version
pub fn cmd_yank(config: &Config, krate: &str, version: &str, undo: bool) -> Result<()> {
    let registry = open_registry(config)?;
    if undo {
        registry.unyank(krate, version)?;
        println!("Unyanked {}@{}", krate, version);
    } else {
        registry.yank(krate, version)?;
        println!("Yanked {}@{}", krate, version);
    }
    Ok(())
}

/// Publish a packaged crate
pub fn cmd_publish(config: &Config, metadata: &Path, tarball: &Path) -> Result<()> {
    let content = fs::read_to_string(metadata)
        .with_context(|| format!("Failed to read {}", metadata.display()))?;
    let krate: NewCrate = serde_json::from_str(&content)
        .with_context(|| format!("Invalid crate metadata in {}", metadata.display()))?;
    if !tarball.is_file() {
        bail!("Tarball not found: {}", tarball.display());
    }

    let registry = open_registry(config)?;
    let warnings = registry.publish(&krate, tarball)?;

    if !warnings.invalid_categories.is_empty() {
        println!("warning: invalid categories: {}", warnings.invalid_categories.join(", "));
    }
    if !warnings.invalid_badges.is_empty() {
        println!("warning: invalid badges: {}", warnings.invalid_badges.join(", "));
    }
    for other in &warnings.other {
        println!("warning: {}", other);
    }
    println!("Published {} v{}", krate.name, krate.vers);
    Ok(())
}

/// Save an API token
pub fn cmd_login(config_path: &Path, token: &str) -> Result<()> {
    docnav::registry_login(config_path, token)?;
    println!("Token saved to {}", config_path.display());
    Ok(())
}
