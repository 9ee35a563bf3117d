// src/extract/mod.rs

//! Public surface extraction
//!
//! Builds a [`SidebarIndex`] from the public declarations of a Rust module
//! by parsing its source with `syn`. Both items declared in the module and
//! items re-exported from private submodules count:
//!
//! ```ignore
//! // ops/mod.rs
//! pub use self::cargo_clean::{clean, CleanOptions};
//! pub use self::registry::*;
//! mod cargo_clean;
//! mod registry;
//! ```
//!
//! Re-exports that point outside the extracted module tree (other crates,
//! `crate::` paths when the root is not the crate root) cannot be resolved
//! from source alone. They are logged and skipped, or rejected in strict
//! mode.

mod docs;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use syn::{ForeignItem, Item, ItemUse, UseTree, Visibility};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::index::{ItemKind, SidebarEntry, SidebarIndex};

/// Maximum re-export hops followed before giving up
const MAX_REEXPORT_DEPTH: usize = 32;

/// Extraction settings
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Fail on re-exports that cannot be resolved instead of skipping them
    pub strict: bool,
}

/// An item contributed to the index
#[derive(Debug, Clone)]
struct Export {
    kind: ItemKind,
    entry: SidebarEntry,
}

/// A loaded module, file-backed or inline
struct Module {
    /// Source file holding the items
    file: PathBuf,
    /// Directory where child module files live
    dir: PathBuf,
    items: Vec<Item>,
    parent: Option<usize>,
    name: String,
    /// Summary from outer and inner doc comments
    summary: String,
    crate_root: bool,
}

struct Extractor<'a> {
    options: &'a ExtractOptions,
    modules: Vec<Module>,
    children: HashMap<(usize, String), Option<usize>>,
    /// Finished glob expansions, by module
    expanded: HashMap<usize, Vec<Export>>,
    /// Modules whose glob expansion is in progress
    expanding: HashSet<usize>,
    /// Name lookups in progress
    resolving: HashSet<(usize, String)>,
}

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// Visible outside its own module, so re-exportable
fn is_exported(vis: &Visibility) -> bool {
    !matches!(vis, Visibility::Inherited)
}

/// Directory holding child module files for a module stored in `file`
fn child_dir(file: &Path) -> PathBuf {
    let parent = file.parent().map(Path::to_path_buf).unwrap_or_default();
    match file.file_stem().and_then(|s| s.to_str()) {
        Some("mod") | Some("lib") | Some("main") | None => parent,
        Some(stem) => parent.join(stem),
    }
}

fn parse_source(path: &Path) -> Result<syn::File> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(path.display().to_string())
        } else {
            Error::IoError(format!("Failed to read {}: {e}", path.display()))
        }
    })?;
    syn::parse_file(&content).map_err(|e| Error::ExtractError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// A directly declared item
///
/// Modules are excluded; their summary needs the module body.
struct Declared<'i> {
    kind: ItemKind,
    name: String,
    attrs: &'i [syn::Attribute],
    /// `None` for items that are exported regardless of visibility
    vis: Option<&'i Visibility>,
}

fn declared(item: &Item, crate_root: bool) -> Option<Declared<'_>> {
    let (kind, name, attrs, vis) = match item {
        Item::Const(i) => (ItemKind::Constant, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Enum(i) => (ItemKind::Enum, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Fn(i) => (ItemKind::Fn, i.sig.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Static(i) => (ItemKind::Static, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Struct(i) => (ItemKind::Struct, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Trait(i) => (ItemKind::Trait, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Type(i) => (ItemKind::Type, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        Item::Union(i) => (ItemKind::Union, i.ident.to_string(), &i.attrs, Some(&i.vis)),
        // Exported macro_rules! live at the crate root regardless of where
        // they are defined.
        Item::Macro(i)
            if crate_root
                && i.mac.path.is_ident("macro_rules")
                && docs::has_marker(&i.attrs, "macro_export") =>
        {
            (ItemKind::Macro, i.ident.as_ref()?.to_string(), &i.attrs, None)
        }
        _ => return None,
    };
    Some(Declared {
        kind,
        name,
        attrs: attrs.as_slice(),
        vis,
    })
}

impl<'a> Extractor<'a> {
    fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            modules: Vec::new(),
            children: HashMap::new(),
            expanded: HashMap::new(),
            expanding: HashSet::new(),
            resolving: HashSet::new(),
        }
    }

    /// Load the module at `path` (a source file or a directory with
    /// `mod.rs` or `lib.rs`)
    fn load_root(&mut self, path: &Path) -> Result<usize> {
        let file = if path.is_dir() {
            ["mod.rs", "lib.rs"]
                .iter()
                .map(|name| path.join(name))
                .find(|candidate| candidate.is_file())
                .ok_or_else(|| {
                    Error::NotFound(format!("no mod.rs or lib.rs in {}", path.display()))
                })?
        } else {
            path.to_path_buf()
        };

        let parsed = parse_source(&file)?;
        let name = match file.file_stem().and_then(|s| s.to_str()) {
            Some("mod") => file
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|s| s.to_str())
                .unwrap_or("mod")
                .to_string(),
            Some(stem) => stem.to_string(),
            None => String::new(),
        };
        let crate_root = matches!(
            file.file_name().and_then(|s| s.to_str()),
            Some("lib.rs") | Some("main.rs")
        );

        debug!("Loaded root module {} from {}", name, file.display());
        self.modules.push(Module {
            dir: child_dir(&file),
            summary: docs::summary(&parsed.attrs),
            file,
            items: parsed.items,
            parent: None,
            name,
            crate_root,
        });
        Ok(self.modules.len() - 1)
    }

    /// Resolve child module `name` of `parent`, loading its file on first use
    ///
    /// Returns `None` if `parent` declares no such module.
    fn child(&mut self, parent: usize, name: &str) -> Result<Option<usize>> {
        let key = (parent, name.to_string());
        if let Some(cached) = self.children.get(&key) {
            return Ok(*cached);
        }

        let decl = self.modules[parent].items.iter().find_map(|item| match item {
            Item::Mod(m) if m.ident == name => Some(m.clone()),
            _ => None,
        });
        let Some(decl) = decl else {
            self.children.insert(key, None);
            return Ok(None);
        };

        let parent_mod = &self.modules[parent];
        let outer_summary = docs::summary(&decl.attrs);

        let module = if let Some((_, items)) = decl.content {
            Module {
                file: parent_mod.file.clone(),
                dir: parent_mod.dir.join(name),
                items,
                parent: Some(parent),
                name: name.to_string(),
                summary: outer_summary,
                crate_root: false,
            }
        } else {
            let file = match docs::path_override(&decl.attrs) {
                Some(rel) => parent_mod
                    .file
                    .parent()
                    .map(|dir| dir.join(&rel))
                    .unwrap_or_else(|| PathBuf::from(rel)),
                None => {
                    let flat = parent_mod.dir.join(format!("{name}.rs"));
                    let nested = parent_mod.dir.join(name).join("mod.rs");
                    if flat.is_file() { flat } else { nested }
                }
            };

            let parsed = match parse_source(&file) {
                Ok(parsed) => parsed,
                Err(Error::NotFound(missing)) if !self.options.strict => {
                    warn!("Module file for '{}' not found: {}", name, missing);
                    self.children.insert(key, None);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

            let inner_summary = docs::summary(&parsed.attrs);
            Module {
                dir: child_dir(&file),
                file,
                items: parsed.items,
                parent: Some(parent),
                name: name.to_string(),
                summary: if outer_summary.is_empty() {
                    inner_summary
                } else {
                    outer_summary
                },
                crate_root: false,
            }
        };

        debug!("Loaded module {} from {}", name, module.file.display());
        self.modules.push(module);
        let id = self.modules.len() - 1;
        self.children.insert(key, Some(id));
        Ok(Some(id))
    }

    /// Walk `segments` from `module`
    fn resolve_module_path(&mut self, module: usize, segments: &[String]) -> Result<Option<usize>> {
        let mut current = module;
        for segment in segments {
            match segment.as_str() {
                "self" => {}
                "super" => match self.modules[current].parent {
                    Some(parent) => current = parent,
                    None => return Ok(None),
                },
                "crate" => {
                    if !self.modules[0].crate_root {
                        return Ok(None);
                    }
                    current = 0;
                }
                name => match self.child(current, name)? {
                    Some(child) => current = child,
                    None => return Ok(None),
                },
            }
        }
        Ok(Some(current))
    }

    fn unresolved(&self, module: usize, path: &str) -> Result<Vec<Export>> {
        let file = self.modules[module].file.display().to_string();
        if self.options.strict {
            return Err(Error::ExtractError {
                path: file,
                message: format!("cannot resolve re-export `{path}`"),
            });
        }
        warn!("Skipping unresolved re-export `{}` in {}", path, file);
        Ok(Vec::new())
    }

    /// Export a module itself, as `pub mod` or `pub use self::m::{self}`
    fn module_export(&self, module: usize, name: String) -> Export {
        Export {
            kind: ItemKind::Mod,
            entry: SidebarEntry::new(name, self.modules[module].summary.clone()),
        }
    }

    /// Everything a glob import of `module` would bring in
    ///
    /// A module already being expanded further up (a glob cycle such as
    /// `pub use super::*` in a prelude) contributes nothing the second time.
    fn exports(&mut self, module: usize, depth: usize) -> Result<Vec<Export>> {
        if let Some(done) = self.expanded.get(&module) {
            return Ok(done.clone());
        }
        if !self.expanding.insert(module) {
            debug!("Glob cycle through {}", self.modules[module].name);
            return Ok(Vec::new());
        }

        let result = self.expand(module, depth);
        self.expanding.remove(&module);
        let found = result?;
        self.expanded.insert(module, found.clone());
        Ok(found)
    }

    fn expand(&mut self, module: usize, depth: usize) -> Result<Vec<Export>> {
        if depth > MAX_REEXPORT_DEPTH {
            return Err(Error::ExtractError {
                path: self.modules[module].file.display().to_string(),
                message: "re-export chain too deep (cycle?)".to_string(),
            });
        }

        let items = self.modules[module].items.clone();
        let crate_root = self.modules[module].crate_root;
        let mut found = Vec::new();
        let mut globs = Vec::new();

        for item in &items {
            match item {
                Item::Use(u) if is_public(&u.vis) && !docs::is_hidden(&u.attrs) => {
                    if u.leading_colon.is_some() {
                        found.extend(self.unresolved(module, "::…")?);
                        continue;
                    }
                    self.resolve_use_tree(module, &u.tree, Vec::new(), depth, &mut found, &mut globs)?;
                }
                Item::Mod(m) if is_public(&m.vis) && !docs::is_hidden(&m.attrs) => {
                    let name = m.ident.to_string();
                    match self.child(module, &name)? {
                        Some(child) => found.push(self.module_export(child, name)),
                        None => found.push(Export {
                            kind: ItemKind::Mod,
                            entry: SidebarEntry::new(name, docs::summary(&m.attrs)),
                        }),
                    }
                }
                Item::ForeignMod(fm) => {
                    for foreign in &fm.items {
                        let foreign_decl = match foreign {
                            ForeignItem::Fn(f) => {
                                Some((ItemKind::Fn, f.sig.ident.to_string(), &f.attrs, &f.vis))
                            }
                            ForeignItem::Static(s) => {
                                Some((ItemKind::Static, s.ident.to_string(), &s.attrs, &s.vis))
                            }
                            _ => None,
                        };
                        if let Some((kind, name, attrs, vis)) = foreign_decl
                            && is_public(vis)
                            && !docs::is_hidden(attrs)
                        {
                            found.push(Export {
                                kind,
                                entry: SidebarEntry::new(name, docs::summary(attrs)),
                            });
                        }
                    }
                }
                other => {
                    if let Some(decl) = declared(other, crate_root)
                        && decl.vis.is_none_or(is_public)
                        && !docs::is_hidden(decl.attrs)
                    {
                        found.push(Export {
                            kind: decl.kind,
                            entry: SidebarEntry::new(decl.name, docs::summary(decl.attrs)),
                        });
                    }
                }
            }
        }

        // Explicit names shadow glob imports
        for prefix in globs {
            match self.resolve_module_path(module, &prefix)? {
                Some(target) => {
                    found.extend(self.exports(target, depth + 1)?);
                }
                _ => {
                    let path = format!("{}::*", prefix.join("::"));
                    found.extend(self.unresolved(module, &path)?);
                }
            }
        }

        Ok(found)
    }

    /// Expand one `use` tree; glob prefixes are deferred to `globs`
    fn resolve_use_tree(
        &mut self,
        module: usize,
        tree: &UseTree,
        mut prefix: Vec<String>,
        depth: usize,
        found: &mut Vec<Export>,
        globs: &mut Vec<Vec<String>>,
    ) -> Result<()> {
        match tree {
            UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.resolve_use_tree(module, &p.tree, prefix, depth, found, globs)
            }
            UseTree::Name(n) => {
                let exports = self.resolve_name(module, &prefix, &n.ident.to_string(), None, depth)?;
                found.extend(exports);
                Ok(())
            }
            UseTree::Rename(r) => {
                let exports = self.resolve_name(
                    module,
                    &prefix,
                    &r.ident.to_string(),
                    Some(r.rename.to_string()),
                    depth,
                )?;
                found.extend(exports);
                Ok(())
            }
            UseTree::Glob(_) => {
                globs.push(prefix);
                Ok(())
            }
            UseTree::Group(g) => {
                for item in &g.items {
                    self.resolve_use_tree(module, item, prefix.clone(), depth, found, globs)?;
                }
                Ok(())
            }
        }
    }

    /// Resolve `prefix::name` as seen from `module`
    fn resolve_name(
        &mut self,
        module: usize,
        prefix: &[String],
        name: &str,
        rename: Option<String>,
        depth: usize,
    ) -> Result<Vec<Export>> {
        let display = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", prefix.join("::"), name)
        };

        if name == "self" {
            let Some(target) = self.resolve_module_path(module, prefix)? else {
                return self.unresolved(module, &display);
            };
            let exported = rename.unwrap_or_else(|| self.modules[target].name.clone());
            return Ok(vec![self.module_export(target, exported)]);
        }

        let Some(target) = self.resolve_module_path(module, prefix)? else {
            return self.unresolved(module, &display);
        };
        if target == module && prefix.is_empty() {
            // `pub use name;` naming an extern crate or prelude item
            return self.unresolved(module, &display);
        }

        let mut exports = self.lookup(target, name, depth + 1)?;
        if exports.is_empty() {
            return self.unresolved(module, &display);
        }
        if let Some(rename) = rename {
            for export in &mut exports {
                export.entry.name = rename.clone();
            }
        }
        Ok(exports)
    }

    /// Items named `name` that `module` makes visible to its parent
    fn lookup(&mut self, module: usize, name: &str, depth: usize) -> Result<Vec<Export>> {
        let key = (module, name.to_string());
        if !self.resolving.insert(key.clone()) {
            return Ok(Vec::new());
        }
        let result = self.lookup_items(module, name, depth);
        self.resolving.remove(&key);
        result
    }

    fn lookup_items(&mut self, module: usize, name: &str, depth: usize) -> Result<Vec<Export>> {
        if depth > MAX_REEXPORT_DEPTH {
            return Err(Error::ExtractError {
                path: self.modules[module].file.display().to_string(),
                message: format!("re-export chain too deep resolving `{name}`"),
            });
        }

        let items = self.modules[module].items.clone();
        let crate_root = self.modules[module].crate_root;
        let mut found = Vec::new();

        for item in &items {
            match item {
                Item::Mod(m) if m.ident == name && is_exported(&m.vis) => {
                    if let Some(child) = self.child(module, name)? {
                        found.push(self.module_export(child, name.to_string()));
                    }
                }
                Item::Use(u) if is_exported(&u.vis) => {
                    found.extend(self.lookup_in_use(module, u, name, depth)?);
                }
                other => {
                    if let Some(decl) = declared(other, crate_root)
                        && decl.name == name
                        && decl.vis.is_none_or(is_exported)
                    {
                        found.push(Export {
                            kind: decl.kind,
                            entry: SidebarEntry::new(decl.name, docs::summary(decl.attrs)),
                        });
                    }
                }
            }
        }

        Ok(found)
    }

    /// Follow a re-export in `module` that provides `name`
    fn lookup_in_use(&mut self, module: usize, item: &ItemUse, name: &str, depth: usize) -> Result<Vec<Export>> {
        if item.leading_colon.is_some() {
            return Ok(Vec::new());
        }

        let mut leaves = Vec::new();
        collect_leaves(&item.tree, Vec::new(), &mut leaves);

        let mut found = Vec::new();
        for leaf in leaves {
            match leaf {
                Leaf::Named { prefix, ident, exported } if exported == name => {
                    let rename = (ident != exported).then(|| exported.clone());
                    found.extend(self.resolve_name(module, &prefix, &ident, rename, depth)?);
                }
                Leaf::Glob { prefix } => {
                    if let Some(target) = self.resolve_module_path(module, &prefix)?
                        && target != module
                    {
                        found.extend(self.lookup(target, name, depth + 1)?);
                    }
                }
                Leaf::Named { .. } => {}
            }
        }
        Ok(found)
    }
}

/// Flattened `use` tree leaf
enum Leaf {
    Named {
        prefix: Vec<String>,
        ident: String,
        exported: String,
    },
    Glob {
        prefix: Vec<String>,
    },
}

fn collect_leaves(tree: &UseTree, mut prefix: Vec<String>, out: &mut Vec<Leaf>) {
    match tree {
        UseTree::Path(p) => {
            prefix.push(p.ident.to_string());
            collect_leaves(&p.tree, prefix, out);
        }
        UseTree::Name(n) => {
            let ident = n.ident.to_string();
            let exported = if ident == "self" {
                prefix.last().cloned().unwrap_or_default()
            } else {
                ident.clone()
            };
            out.push(Leaf::Named {
                prefix,
                ident,
                exported,
            });
        }
        UseTree::Rename(r) => out.push(Leaf::Named {
            prefix,
            ident: r.ident.to_string(),
            exported: r.rename.to_string(),
        }),
        UseTree::Glob(_) => out.push(Leaf::Glob { prefix }),
        UseTree::Group(g) => {
            for item in &g.items {
                collect_leaves(item, prefix.clone(), out);
            }
        }
    }
}

/// Build the sidebar index for the module at `path`
///
/// `path` may be a `.rs` file or a directory containing `mod.rs` or
/// `lib.rs`. The result is sorted by identifier within each kind, so
/// extracting an unchanged module always yields the same index.
pub fn extract_module(path: &Path, options: &ExtractOptions) -> Result<SidebarIndex> {
    info!("Extracting public surface of {}", path.display());

    let mut extractor = Extractor::new(options);
    let root = extractor.load_root(path)?;
    let exports = extractor.exports(root, 0)?;

    let mut index = SidebarIndex::new();
    for Export { kind, entry } in exports {
        if index.contains(kind, &entry.name) {
            debug!("Ignoring shadowed {} {}", kind, entry.name);
            continue;
        }
        index.insert(kind, entry)?;
    }
    index.sort();

    info!(
        "Extracted {} entries from {} source files",
        index.len(),
        extractor
            .modules
            .iter()
            .map(|m| &m.file)
            .collect::<std::collections::HashSet<_>>()
            .len()
    );
    Ok(index)
}
