//! JSON class definition parser.
//!
//! Deserializes the external definition format and turns it into a
//! validated [`ClassDef`], deriving flags and resolving option kinds.

use crate::error::{ParseError, SchemaError};
use crate::ir::derive_flag;
use crate::types::{ClassDef, OPTION_HANDLER_CAPABILITY, OptionDef, OptionKind, short_type_name};
use crate::validation::validate_definition;
use serde::Deserialize;

/// Raw definition as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    name: Option<String>,
    #[serde(default)]
    package: String,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    superclass: String,
    #[serde(default)]
    implement: Vec<String>,
    author: Option<String>,
    organization: Option<String>,
    #[serde(default)]
    options: Vec<RawOption>,
}

/// Raw option descriptor as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct RawOption {
    property: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    flag: Option<String>,
    default: Option<String>,
    constraint: Option<String>,
    help: Option<String>,
}

/// Parses a JSON class definition without validating it.
///
/// # Errors
/// Returns [`ParseError`] on malformed JSON, missing required fields, or
/// an unresolvable option kind.
pub fn parse_definition(json: &str) -> Result<ClassDef, ParseError> {
    let raw: RawDefinition = serde_json::from_str(json)?;

    let name = required(raw.name, "name")?;
    let author = required(raw.author, "author")?;
    let organization = required(raw.organization, "organization")?;

    let mut options = Vec::with_capacity(raw.options.len());
    for (index, opt) in raw.options.into_iter().enumerate() {
        options.push(resolve_option(index, opt)?);
    }

    let is_root = raw
        .implement
        .iter()
        .any(|cap| short_type_name(cap) == OPTION_HANDLER_CAPABILITY);

    let superclass = if raw.superclass.is_empty() {
        None
    } else {
        Some(raw.superclass)
    };

    Ok(ClassDef {
        name,
        package: raw.package,
        prefix: raw.prefix,
        suffix: raw.suffix,
        superclass,
        implements: raw.implement,
        author,
        organization,
        options,
        is_root,
    })
}

/// Parses and validates a JSON class definition.
///
/// # Errors
/// Returns [`SchemaError`] on a parse failure or a validation failure.
pub fn load_definition(json: &str) -> Result<ClassDef, SchemaError> {
    let def = parse_definition(json)?;
    validate_definition(&def)?;
    Ok(def)
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ParseError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ParseError::MissingField { field }),
    }
}

fn resolve_option(index: usize, raw: RawOption) -> Result<OptionDef, ParseError> {
    let property = raw
        .property
        .filter(|p| !p.is_empty())
        .ok_or(ParseError::MissingOptionField {
            index,
            field: "property",
        })?;
    let type_name = raw
        .type_name
        .filter(|t| !t.is_empty())
        .ok_or(ParseError::MissingOptionField {
            index,
            field: "type",
        })?;
    let default_expr = raw.default.ok_or(ParseError::MissingOptionField {
        index,
        field: "default",
    })?;

    let kind = OptionKind::resolve(&type_name).ok_or_else(|| ParseError::UnsupportedOptionKind {
        property: property.clone(),
        type_name: type_name.clone(),
    })?;

    let flag = match raw.flag {
        Some(flag) if !flag.is_empty() => flag,
        _ => derive_flag(&property),
    };

    Ok(OptionDef {
        property,
        kind,
        flag,
        default_expr,
        constraint_expr: raw.constraint.filter(|c| !c.is_empty()),
        help: raw.help.unwrap_or_default(),
    })
}
