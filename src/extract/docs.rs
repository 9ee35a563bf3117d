// src/extract/docs.rs

//! Doc comment helpers

use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// Raw doc strings attached to an item, in source order
fn doc_strings(attrs: &[Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs.iter().filter_map(|attr| {
        if !attr.path().is_ident("doc") {
            return None;
        }
        match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        }
    })
}

/// First paragraph of the item's docs, one line, markdown untouched
///
/// Leading blank lines are skipped; the paragraph ends at the first blank
/// line after text.
pub fn summary(attrs: &[Attribute]) -> String {
    let text = doc_strings(attrs).collect::<Vec<_>>().join("\n");

    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        // Continuation stars inside /** */ blocks
        let line = if line == "*" {
            ""
        } else {
            line.strip_prefix("* ").unwrap_or(line)
        };

        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(line);
    }
    lines.join(" ")
}

/// `#[doc(hidden)]`
pub fn is_hidden(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("doc")
            && match &attr.meta {
                Meta::List(list) => list
                    .tokens
                    .to_string()
                    .split(',')
                    .any(|token| token.trim() == "hidden"),
                _ => false,
            }
    })
}

/// Check for a bare marker attribute such as `#[macro_export]`
pub fn has_marker(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Value of `#[path = "..."]` on a module declaration
pub fn path_override(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| {
        if !attr.path().is_ident("path") {
            return None;
        }
        match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        }
    })
}
