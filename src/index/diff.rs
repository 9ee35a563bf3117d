// src/index/diff.rs

//! Diff computation between two sidebar indexes.
//!
//! Used to compare a committed sidebar file against the index regenerated
//! from source. Row order is ignored.

use std::collections::BTreeMap;

use super::{ItemKind, SidebarEntry, SidebarIndex};

/// A single difference between the expected and actual index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    /// Declared in the expected index but missing from the actual one
    Added { kind: ItemKind, name: String },

    /// Present in the actual index but no longer declared
    Removed { kind: ItemKind, name: String },

    /// Same identifier, different summary text
    SummaryChanged {
        kind: ItemKind,
        name: String,
        expected: String,
        actual: String,
    },
}

impl DiffEntry {
    pub fn kind(&self) -> ItemKind {
        match self {
            DiffEntry::Added { kind, .. }
            | DiffEntry::Removed { kind, .. }
            | DiffEntry::SummaryChanged { kind, .. } => *kind,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DiffEntry::Added { name, .. }
            | DiffEntry::Removed { name, .. }
            | DiffEntry::SummaryChanged { name, .. } => name,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> String {
        match self {
            DiffEntry::Added { kind, name } => format!("+ {} {}", kind, name),
            DiffEntry::Removed { kind, name } => format!("- {} {}", kind, name),
            DiffEntry::SummaryChanged {
                kind,
                name,
                expected,
                actual,
            } => format!("~ {} {}: \"{}\" -> \"{}\"", kind, name, actual, expected),
        }
    }
}

/// The result of comparing two indexes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDiff {
    pub entries: Vec<DiffEntry>,
}

impl IndexDiff {
    /// Check if the indexes list the same entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn added(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Added { .. }))
    }

    pub fn removed(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Removed { .. }))
    }

    pub fn changed(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::SummaryChanged { .. }))
    }

    /// One-line count summary
    pub fn summary_line(&self) -> String {
        if self.is_empty() {
            return "Index is up to date".to_string();
        }
        format!(
            "{} added, {} removed, {} summaries changed",
            self.added().count(),
            self.removed().count(),
            self.changed().count()
        )
    }
}

fn by_name(entries: &[SidebarEntry]) -> BTreeMap<&str, &str> {
    entries
        .iter()
        .map(|e| (e.name.as_str(), e.summary.as_str()))
        .collect()
}

/// Compare `actual` against `expected`
///
/// Entries are reported per kind in label order, then by identifier.
pub fn diff_indexes(expected: &SidebarIndex, actual: &SidebarIndex) -> IndexDiff {
    let mut entries = Vec::new();

    for kind in ItemKind::ALL {
        let want = by_name(expected.entries(kind));
        let have = by_name(actual.entries(kind));

        for (name, summary) in &want {
            match have.get(name) {
                None => entries.push(DiffEntry::Added {
                    kind,
                    name: name.to_string(),
                }),
                Some(current) if current != summary => entries.push(DiffEntry::SummaryChanged {
                    kind,
                    name: name.to_string(),
                    expected: summary.to_string(),
                    actual: current.to_string(),
                }),
                Some(_) => {}
            }
        }

        for name in have.keys().filter(|name| !want.contains_key(*name)) {
            entries.push(DiffEntry::Removed {
                kind,
                name: name.to_string(),
            });
        }
    }

    IndexDiff { entries }
}
