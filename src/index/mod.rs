// src/index/mod.rs

//! Sidebar navigation index
//!
//! A sidebar index maps rustdoc item kinds (`fn`, `struct`, `enum`, ...) to
//! an ordered list of `(identifier, summary)` rows. Documentation front ends
//! read it to build the navigation panel of a module page.
//!
//! # Example sidebar-items.js
//!
//! ```text
//! initSidebarItems({"enum":[["CompileMode",""]],"fn":[["clean","Cleans the project from build artifacts."]]});
//! ```
//!
//! Identifiers are unique within a kind. Row order is presentation only:
//! [`SidebarIndex::same_entries`] and [`diff_indexes`] ignore it.

mod codec;
mod diff;

pub use codec::{
    SidebarFormat, parse_sidebar, read_sidebar_file, render_sidebar, write_sidebar,
    write_sidebar_file,
};
pub use diff::{DiffEntry, IndexDiff, diff_indexes};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Item kinds a sidebar index can list
///
/// Variants are declared in label order so that `Ord` matches the key order
/// rustdoc writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Constant,
    Enum,
    Fn,
    Macro,
    Mod,
    Static,
    Struct,
    Trait,
    Type,
    Union,
}

impl ItemKind {
    /// All kinds, in label order
    pub const ALL: [ItemKind; 10] = [
        ItemKind::Constant,
        ItemKind::Enum,
        ItemKind::Fn,
        ItemKind::Macro,
        ItemKind::Mod,
        ItemKind::Static,
        ItemKind::Struct,
        ItemKind::Trait,
        ItemKind::Type,
        ItemKind::Union,
    ];

    /// The key rustdoc uses for this kind
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Constant => "constant",
            ItemKind::Enum => "enum",
            ItemKind::Fn => "fn",
            ItemKind::Macro => "macro",
            ItemKind::Mod => "mod",
            ItemKind::Static => "static",
            ItemKind::Struct => "struct",
            ItemKind::Trait => "trait",
            ItemKind::Type => "type",
            ItemKind::Union => "union",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ItemKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// Item identifier, unique within its kind
    pub name: String,
    /// First paragraph of the item's docs; may be empty
    pub summary: String,
}

impl SidebarEntry {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
        }
    }
}

/// Sidebar index for one module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarIndex {
    groups: BTreeMap<ItemKind, Vec<SidebarEntry>>,
}

impl SidebarIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `kind`
    ///
    /// Fails with [`Error::DuplicateEntry`] if the identifier is already
    /// listed under that kind.
    pub fn insert(&mut self, kind: ItemKind, entry: SidebarEntry) -> Result<()> {
        let group = self.groups.entry(kind).or_default();
        if group.iter().any(|e| e.name == entry.name) {
            return Err(Error::DuplicateEntry {
                kind,
                name: entry.name,
            });
        }
        group.push(entry);
        Ok(())
    }

    /// Entries listed under `kind`, in stored order
    ///
    /// Returns an empty slice for kinds the module does not export.
    pub fn entries(&self, kind: ItemKind) -> &[SidebarEntry] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a single entry
    pub fn find(&self, kind: ItemKind, name: &str) -> Option<&SidebarEntry> {
        self.entries(kind).iter().find(|e| e.name == name)
    }

    /// Check if `name` is listed under `kind`
    pub fn contains(&self, kind: ItemKind, name: &str) -> bool {
        self.find(kind, name).is_some()
    }

    /// Identifiers under `kind`, in stored order
    pub fn names(&self, kind: ItemKind) -> Vec<&str> {
        self.entries(kind).iter().map(|e| e.name.as_str()).collect()
    }

    /// Kinds that have at least one entry, in label order
    pub fn kinds(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(kind, _)| *kind)
    }

    /// Iterate `(kind, entries)` for non-empty kinds, in label order
    pub fn groups(&self) -> impl Iterator<Item = (ItemKind, &[SidebarEntry])> + '_ {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(kind, entries)| (*kind, entries.as_slice()))
    }

    /// Total number of entries across all kinds
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verify that identifiers are pairwise distinct within each kind
    pub fn validate(&self) -> Result<()> {
        for (kind, entries) in &self.groups {
            for (i, entry) in entries.iter().enumerate() {
                if entries[..i].iter().any(|e| e.name == entry.name) {
                    return Err(Error::DuplicateEntry {
                        kind: *kind,
                        name: entry.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Sort every kind by identifier
    pub fn sort(&mut self) {
        for entries in self.groups.values_mut() {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// Compare entries ignoring row order
    pub fn same_entries(&self, other: &SidebarIndex) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        left.sort();
        right.sort();
        left.groups().eq(right.groups())
    }
}
