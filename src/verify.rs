// src/verify.rs

//! Round-trip verification of a committed sidebar file
//!
//! A sidebar file is current when it lists exactly the public declarations
//! of its module and when re-rendering it reproduces the file byte-for-byte.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, extract_module};
use crate::index::{IndexDiff, SidebarFormat, diff_indexes, parse_sidebar, render_sidebar};

/// Outcome of [`verify`]
#[derive(Debug, Clone)]
pub struct VerifyReport {
    /// Differences between the source module (expected) and the file (actual)
    pub diff: IndexDiff,
    /// Whether the file is already in rendered form
    pub canonical: bool,
    /// Wrapper format detected in the file
    pub format: SidebarFormat,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.diff.is_empty() && self.canonical
    }

    /// Why the check failed, `None` when it passed
    ///
    /// Missing or stale entries take precedence over formatting.
    pub fn failure(&self) -> Option<String> {
        if !self.diff.is_empty() {
            Some(format!("out of date: {}", self.diff.summary_line()))
        } else if !self.canonical {
            Some(format!("not in canonical {} form", self.format))
        } else {
            None
        }
    }
}

/// Compare the sidebar file at `index_file` with the module at `source`
pub fn verify(source: &Path, index_file: &Path, options: &ExtractOptions) -> Result<VerifyReport> {
    let text = fs::read_to_string(index_file).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(index_file.display().to_string())
        } else {
            Error::IoError(format!("Failed to read {}: {e}", index_file.display()))
        }
    })?;

    let (recorded, format) = parse_sidebar(&text)?;
    let canonical = render_sidebar(&recorded, format)? == text;
    if !canonical {
        warn!("{} is not in canonical form", index_file.display());
    }

    let declared = extract_module(source, options)?;
    let diff = diff_indexes(&declared, &recorded);

    info!("Verified {}: {}", index_file.display(), diff.summary_line());
    Ok(VerifyReport {
        diff,
        canonical,
        format,
    })
}
