// src/commands/index.rs
//! Sidebar index commands

use std::path::Path;

use anyhow::{Context, Result, bail};
use docnav::{
    Config, ExtractOptions, ItemKind, SidebarFormat, SidebarIndex, extract_module,
    read_sidebar_file, verify, write_sidebar, write_sidebar_file,
};
use tracing::info;

/// Generate the sidebar index for a module
pub fn cmd_generate(
    config: &Config,
    module: &Path,
    output: Option<&Path>,
    format: Option<&str>,
    strict: bool,
) -> Result<()> {
    let format = match format {
        Some(f) => f.parse::<SidebarFormat>()?,
        None => config.index.format,
    };
    let options = ExtractOptions { strict };

    let index = extract_module(module, &options)
        .with_context(|| format!("Failed to extract {}", module.display()))?;

    match output {
        Some(path) => {
            write_sidebar_file(path, &index, format)?;
            info!("Wrote {} entries to {}", index.len(), path.display());
            println!("Generated {} ({} entries)", path.display(), index.len());
        }
        None => write_sidebar(&mut std::io::stdout().lock(), &index, format)?,
    }
    Ok(())
}

/// Verify a committed sidebar file against its module
pub fn cmd_check(module: &Path, index: &Path, strict: bool) -> Result<()> {
    let options = ExtractOptions { strict };
    let report = verify(module, index, &options)?;

    for entry in &report.diff.entries {
        println!("  {}", entry.description());
    }

    if let Some(failure) = report.failure() {
        bail!("{} is {}", index.display(), failure);
    }
    println!("{}: {}", index.display(), report.diff.summary_line());
    Ok(())
}

fn print_kind(index: &SidebarIndex, kind: ItemKind) {
    let entries = index.entries(kind);
    println!("{} ({}):", kind, entries.len());
    for entry in entries {
        if entry.summary.is_empty() {
            println!("  {}", entry.name);
        } else {
            println!("  {} - {}", entry.name, entry.summary);
        }
    }
}

/// Print the contents of a sidebar file
pub fn cmd_show(index: &Path, kind: Option<&str>) -> Result<()> {
    let (sidebar, format) = read_sidebar_file(index)?;
    info!("Read {} entries ({} format)", sidebar.len(), format);

    match kind {
        Some(kind) => print_kind(&sidebar, kind.parse()?),
        None => {
            if sidebar.is_empty() {
                println!("No entries");
            }
            for kind in sidebar.kinds() {
                print_kind(&sidebar, kind);
            }
        }
    }
    Ok(())
}

/// Look up one entry by kind and name
pub fn cmd_lookup(index: &Path, kind: &str, name: &str) -> Result<()> {
    let (sidebar, _) = read_sidebar_file(index)?;
    let kind: ItemKind = kind.parse()?;

    let Some(entry) = sidebar.find(kind, name) else {
        bail!("No {} named '{}' in {}", kind, name, index.display());
    };
    println!("{} {}", kind, entry.name);
    if !entry.summary.is_empty() {
        println!("  {}", entry.summary);
    }
    Ok(())
}
