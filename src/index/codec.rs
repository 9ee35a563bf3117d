// src/index/codec.rs

//! Reading and writing sidebar-items files
//!
//! rustdoc has shipped the sidebar payload in two wrappers over time:
//!
//! - `initSidebarItems({...});` with `[name, summary]` pairs
//! - `window.SIDEBAR_ITEMS = {...};` with bare names
//!
//! Both wrap the same JSON object keyed by kind label. Rendering is
//! deterministic: kinds in label order, rows in stored order, compact JSON,
//! no trailing newline. A file produced by rustdoc therefore renders back
//! byte-for-byte after parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ItemKind, SidebarEntry, SidebarIndex};
use crate::error::{Error, Result};

const INIT_CALL_PREFIX: &str = "initSidebarItems(";
const WINDOW_PREFIX: &str = "window.SIDEBAR_ITEMS";

/// Wrapper around the JSON payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SidebarFormat {
    /// `initSidebarItems({...});`
    #[default]
    #[serde(rename = "init-call")]
    InitCall,
    /// `window.SIDEBAR_ITEMS = {...};`
    #[serde(rename = "window")]
    WindowAssignment,
    /// Bare JSON object
    #[serde(rename = "json")]
    Json,
}

impl fmt::Display for SidebarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarFormat::InitCall => write!(f, "init-call"),
            SidebarFormat::WindowAssignment => write!(f, "window"),
            SidebarFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for SidebarFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "init-call" => Ok(SidebarFormat::InitCall),
            "window" => Ok(SidebarFormat::WindowAssignment),
            "json" => Ok(SidebarFormat::Json),
            other => Err(Error::ParseError(format!(
                "Unknown sidebar format '{}' (expected init-call, window or json)",
                other
            ))),
        }
    }
}

/// A row as it appears on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(String, String),
    Name(String),
}

impl From<RawEntry> for SidebarEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Pair(name, summary) => SidebarEntry { name, summary },
            RawEntry::Name(name) => SidebarEntry {
                name,
                summary: String::new(),
            },
        }
    }
}

/// Split a sidebar file into its wrapper format and JSON payload
fn unwrap_payload(text: &str) -> Result<(&str, SidebarFormat)> {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix(INIT_CALL_PREFIX) {
        let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
        let payload = rest.strip_suffix(')').ok_or_else(|| {
            Error::ParseError("Unterminated initSidebarItems call".to_string())
        })?;
        return Ok((payload, SidebarFormat::InitCall));
    }

    if let Some(rest) = trimmed.strip_prefix(WINDOW_PREFIX) {
        let rest = rest.trim_start().strip_prefix('=').ok_or_else(|| {
            Error::ParseError("Expected '=' after window.SIDEBAR_ITEMS".to_string())
        })?;
        let rest = rest.trim();
        let payload = rest.strip_suffix(';').unwrap_or(rest).trim_end();
        return Ok((payload, SidebarFormat::WindowAssignment));
    }

    Ok((trimmed, SidebarFormat::Json))
}

/// Parse a sidebar file, detecting its wrapper format
pub fn parse_sidebar(text: &str) -> Result<(SidebarIndex, SidebarFormat)> {
    let (payload, format) = unwrap_payload(text)?;

    let raw: BTreeMap<String, Vec<RawEntry>> = serde_json::from_str(payload)
        .map_err(|e| Error::ParseError(format!("Invalid sidebar payload: {e}")))?;

    let mut index = SidebarIndex::new();
    for (label, rows) in raw {
        let kind: ItemKind = label.parse()?;
        for row in rows {
            index.insert(kind, row.into())?;
        }
    }

    debug!("Parsed {} sidebar entries ({} format)", index.len(), format);
    Ok((index, format))
}

/// Render an index in the given wrapper format
pub fn render_sidebar(index: &SidebarIndex, format: SidebarFormat) -> Result<String> {
    let payload = match format {
        SidebarFormat::WindowAssignment => {
            let map: BTreeMap<&str, Vec<&str>> = index
                .groups()
                .map(|(kind, entries)| {
                    (kind.label(), entries.iter().map(|e| e.name.as_str()).collect())
                })
                .collect();
            serde_json::to_string(&map)?
        }
        SidebarFormat::InitCall | SidebarFormat::Json => {
            let map: BTreeMap<&str, Vec<(&str, &str)>> = index
                .groups()
                .map(|(kind, entries)| {
                    let rows = entries
                        .iter()
                        .map(|e| (e.name.as_str(), e.summary.as_str()))
                        .collect();
                    (kind.label(), rows)
                })
                .collect();
            serde_json::to_string(&map)?
        }
    };

    Ok(match format {
        SidebarFormat::InitCall => format!("{INIT_CALL_PREFIX}{payload});"),
        SidebarFormat::WindowAssignment => format!("{WINDOW_PREFIX} = {payload};"),
        SidebarFormat::Json => payload,
    })
}

/// Write the rendered index to `out` exactly as rendered, with no trailing
/// newline
pub fn write_sidebar<W: Write>(out: &mut W, index: &SidebarIndex, format: SidebarFormat) -> Result<()> {
    index.validate()?;
    let rendered = render_sidebar(index, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read and parse a sidebar file from disk
pub fn read_sidebar_file(path: &Path) -> Result<(SidebarIndex, SidebarFormat)> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(path.display().to_string())
        } else {
            Error::IoError(format!("Failed to read {}: {e}", path.display()))
        }
    })?;
    parse_sidebar(&text)
}

/// Write an index to disk, replacing the file atomically
pub fn write_sidebar_file(path: &Path, index: &SidebarIndex, format: SidebarFormat) -> Result<()> {
    index.validate()?;
    let rendered = render_sidebar(index, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::IoError(format!("Failed to create directory {}: {e}", parent.display()))
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, rendered.as_bytes()).map_err(|e| {
        Error::IoError(format!("Failed to write {}: {e}", temp_path.display()))
    })?;
    fs::rename(&temp_path, path).map_err(|e| {
        Error::IoError(format!(
            "Failed to move {} to {}: {e}",
            temp_path.display(),
            path.display()
        ))
    })?;

    debug!("Wrote {} entries to {}", index.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"initSidebarItems({"enum":[["CompileMode",""],["Kind",""]],"fn":[["clean","Cleans the project from build artifacts."],["fetch","Executes `cargo fetch`."]],"struct":[["Unit",""]]});"#;

    #[test]
    fn test_write_sidebar_matches_file_bytes() {
        let (index, format) = parse_sidebar(SAMPLE).unwrap();

        let mut out = Vec::new();
        write_sidebar(&mut out, &index, format).unwrap();
        assert_eq!(out, SAMPLE.as_bytes());
        assert!(!out.ends_with(b"\n"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar-items.js");
        write_sidebar_file(&path, &index, format).unwrap();
        assert_eq!(fs::read(&path).unwrap(), out);
    }

    #[test]
    fn test_parse_init_call() {
        let (index, format) = parse_sidebar(SAMPLE).unwrap();
        assert_eq!(format, SidebarFormat::InitCall);
        assert_eq!(index.len(), 5);
        assert_eq!(index.names(ItemKind::Enum), vec!["CompileMode", "Kind"]);
        assert_eq!(
            index.find(ItemKind::Fn, "clean").unwrap().summary,
            "Cleans the project from build artifacts."
        );
    }

    #[test]
    fn test_render_is_byte_identical() {
        let (index, format) = parse_sidebar(SAMPLE).unwrap();
        assert_eq!(render_sidebar(&index, format).unwrap(), SAMPLE);
    }

    #[test]
    fn test_parse_window_assignment() {
        let text = "window.SIDEBAR_ITEMS = {\"fn\":[\"clean\",\"doc\"],\"struct\":[\"Unit\"]};\n";
        let (index, format) = parse_sidebar(text).unwrap();
        assert_eq!(format, SidebarFormat::WindowAssignment);
        assert_eq!(index.names(ItemKind::Fn), vec!["clean", "doc"]);
        assert_eq!(index.find(ItemKind::Struct, "Unit").unwrap().summary, "");
        assert_eq!(
            render_sidebar(&index, format).unwrap(),
            "window.SIDEBAR_ITEMS = {\"fn\":[\"clean\",\"doc\"],\"struct\":[\"Unit\"]};"
        );
    }

    #[test]
    fn test_parse_bare_json() {
        let (index, format) = parse_sidebar(r#"{"trait":[["Executor","A glorified callback."]]}"#).unwrap();
        assert_eq!(format, SidebarFormat::Json);
        assert!(index.contains(ItemKind::Trait, "Executor"));
    }

    #[test]
    fn test_parse_rejects_duplicate_identifier() {
        let text = r#"initSidebarItems({"fn":[["run",""],["run","again"]]});"#;
        assert!(matches!(parse_sidebar(text), Err(Error::DuplicateEntry { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let text = r#"initSidebarItems({"function":[["run",""]]});"#;
        assert!(matches!(parse_sidebar(text), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_parse_rejects_unterminated_call() {
        let text = r#"initSidebarItems({"fn":[]}"#;
        assert!(matches!(parse_sidebar(text), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_empty_kinds_are_omitted() {
        let (index, _) = parse_sidebar(r#"{"enum":[],"fn":[["run",""]]}"#).unwrap();
        assert_eq!(
            render_sidebar(&index, SidebarFormat::Json).unwrap(),
            r#"{"fn":[["run",""]]}"#
        );
    }

    #[test]
    fn test_summary_escaping() {
        let mut index = SidebarIndex::new();
        index
            .insert(ItemKind::Fn, SidebarEntry::new("quote", "Prints \"hi\"\\n"))
            .unwrap();
        let rendered = render_sidebar(&index, SidebarFormat::InitCall).unwrap();
        let (parsed, _) = parse_sidebar(&rendered).unwrap();
        assert_eq!(parsed, index);
    }

    #[test]
    fn test_format_names() {
        for format in [
            SidebarFormat::InitCall,
            SidebarFormat::WindowAssignment,
            SidebarFormat::Json,
        ] {
            assert_eq!(format.to_string().parse::<SidebarFormat>().unwrap(), format);
        }
        assert!("yaml".parse::<SidebarFormat>().is_err());
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops").join("sidebar-items.js");
        let (index, _) = parse_sidebar(SAMPLE).unwrap();

        write_sidebar_file(&path, &index, SidebarFormat::InitCall).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);

        let (read_back, format) = read_sidebar_file(&path).unwrap();
        assert_eq!(format, SidebarFormat::InitCall);
        assert_eq!(read_back, index);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_sidebar_file(&dir.path().join("missing.js"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
