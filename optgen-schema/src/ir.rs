//! Intermediate representation for code generation.
//!
//! This module provides a fully resolved view of a class definition:
//! final type name, chaining decision, per-option identifiers and Rust
//! types, and the deterministic import list.

use crate::types::{ClassDef, OptionDef, OptionKind, short_type_name};
use std::collections::BTreeSet;

/// Reference to the parent class a generated handler chains to.
#[derive(Debug, Clone)]
pub struct ParentRef {
    /// Full import path of the parent type.
    pub path: String,
    /// Short type name used in the generated source.
    pub type_name: String,
}

/// Resolved class definition ready for emission.
#[derive(Debug, Clone)]
pub struct ClassIr {
    /// Generated type name (prefix + name + suffix).
    pub type_name: String,
    /// Base class name, used in generated documentation.
    pub doc_name: String,
    /// Module path of the generated type, may be empty.
    pub package: String,
    /// Parent reference, present when the definition names a superclass.
    pub parent: Option<ParentRef>,
    /// True if the three protocol methods delegate to the parent after
    /// handling the locally declared options.
    pub chains: bool,
    /// Author for the generated header.
    pub author: String,
    /// Organization for the generated header.
    pub organization: String,
    /// Resolved options in declaration order.
    pub options: Vec<OptionIr>,
}

impl ClassIr {
    /// Resolves a validated definition into the emission representation.
    #[must_use]
    pub fn from_def(def: &ClassDef) -> Self {
        let parent = def.superclass.as_ref().map(|path| ParentRef {
            path: path.clone(),
            type_name: short_type_name(path).to_string(),
        });
        let chains = parent.is_some() && !def.is_root;

        Self {
            type_name: def.type_name(),
            doc_name: def.name.clone(),
            package: def.package.clone(),
            parent,
            chains,
            author: def.author.clone(),
            organization: def.organization.clone(),
            options: def.options.iter().map(OptionIr::from_def).collect(),
        }
    }

    /// Returns the class name string compiled into the generated
    /// `class_name` method: the package-qualified type name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}::{}", self.package, self.type_name)
        }
    }

    /// Returns the sorted, deduplicated import paths the generated source
    /// needs beyond the codec itself: the chained parent class and any
    /// nested object classes with module paths.
    #[must_use]
    pub fn imports(&self) -> Vec<String> {
        let mut imports = BTreeSet::new();
        if self.chains {
            if let Some(parent) = &self.parent {
                if parent.path.contains("::") {
                    imports.insert(parent.path.clone());
                }
            }
        }
        for opt in &self.options {
            if let Some(path) = opt.kind.object_import() {
                imports.insert(path.to_string());
            }
        }
        if self.options.iter().any(|o| o.uses_pathbuf()) {
            imports.insert("std::path::PathBuf".to_string());
        }
        imports.into_iter().collect()
    }
}

/// Resolved option descriptor ready for emission.
#[derive(Debug, Clone)]
pub struct OptionIr {
    /// Original property identifier.
    pub property: String,
    /// Flag without the leading dash.
    pub flag: String,
    /// Name of the generated flag constant.
    pub constant: String,
    /// Name of the generated field and getter.
    pub field: String,
    /// Name of the generated setter.
    pub setter: String,
    /// Name of the generated default accessor.
    pub default_fn: String,
    /// Name of the generated help-text accessor.
    pub tip_text_fn: String,
    /// Value kind.
    pub kind: OptionKind,
    /// Rust type of the generated field.
    pub rust_type: String,
    /// Default expression, spliced verbatim.
    pub default_expr: String,
    /// Optional guard predicate over `value`, spliced verbatim.
    pub constraint_expr: Option<String>,
    /// Help text.
    pub help: String,
}

impl OptionIr {
    /// Resolves one option descriptor.
    #[must_use]
    pub fn from_def(opt: &OptionDef) -> Self {
        let field = to_snake_case(&opt.property);
        Self {
            property: opt.property.clone(),
            flag: opt.flag.clone(),
            constant: to_screaming_snake_case(&opt.property),
            setter: format!("set_{field}"),
            default_fn: format!("default_{field}"),
            tip_text_fn: format!("{field}_tip_text"),
            field,
            kind: opt.kind.clone(),
            rust_type: opt.kind.rust_type(),
            default_expr: opt.default_expr.clone(),
            constraint_expr: opt.constraint_expr.clone(),
            help: opt.help.clone(),
        }
    }

    /// Returns true if the generated field type involves `PathBuf`.
    #[must_use]
    pub fn uses_pathbuf(&self) -> bool {
        fn path_kind(kind: &OptionKind) -> bool {
            match kind {
                OptionKind::Path => true,
                OptionKind::Array(inner) => path_kind(inner),
                _ => false,
            }
        }
        path_kind(&self.kind)
    }
}

/// Converts a camelCase property to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a camelCase property to SCREAMING_SNAKE_CASE.
#[must_use]
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// Derives the canonical flag for a property: a hyphen at each
/// lower-to-upper case boundary, lower-cased.
#[must_use]
pub fn derive_flag(property: &str) -> String {
    let mut result = String::with_capacity(property.len() + 4);
    let mut prev_lower = false;
    for c in property.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('-');
        }
        prev_lower = c.is_lowercase();
        result.push(c.to_ascii_lowercase());
    }
    result
}
