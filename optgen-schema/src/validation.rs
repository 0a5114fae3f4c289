//! Definition validation.
//!
//! Checks the invariants the schema compiler relies on: property and flag
//! uniqueness within one definition, plausible property identifiers, and
//! the array-kind restrictions.

use crate::error::SchemaError;
use crate::types::{ClassDef, OptionKind};
use std::collections::HashSet;

/// Validates a parsed class definition.
///
/// # Errors
/// Returns [`SchemaError`] describing the first violated invariant.
pub fn validate_definition(def: &ClassDef) -> Result<(), SchemaError> {
    let mut properties = HashSet::new();
    let mut flags = HashSet::new();

    for opt in &def.options {
        if !is_property_name(&opt.property) {
            return Err(SchemaError::InvalidProperty {
                name: def.name.clone(),
                property: opt.property.clone(),
            });
        }
        if !properties.insert(opt.property.as_str()) {
            return Err(SchemaError::DuplicateProperty {
                name: def.name.clone(),
                property: opt.property.clone(),
            });
        }
        if !flags.insert(opt.flag.as_str()) {
            return Err(SchemaError::DuplicateFlag {
                name: def.name.clone(),
                flag: opt.flag.clone(),
            });
        }
        validate_kind(def, &opt.property, &opt.kind)?;
    }

    Ok(())
}

fn validate_kind(def: &ClassDef, property: &str, kind: &OptionKind) -> Result<(), SchemaError> {
    if let OptionKind::Array(inner) = kind {
        match inner.as_ref() {
            OptionKind::Array(_) => {
                return Err(SchemaError::NestedArray {
                    name: def.name.clone(),
                    property: property.to_string(),
                });
            }
            OptionKind::Flag => {
                return Err(SchemaError::FlagArray {
                    name: def.name.clone(),
                    property: property.to_string(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Returns true for identifiers starting lower-case with only
/// alphanumerics after.
fn is_property_name(property: &str) -> bool {
    let mut chars = property.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
