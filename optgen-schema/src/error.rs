//! Error types for definition parsing and validation.

use thiserror::Error;

/// Error type for class definition parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required definition field is absent.
    #[error("invalid definition: missing required field '{field}'")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// Required option descriptor field is absent.
    #[error("invalid definition: option {index} is missing required field '{field}'")]
    MissingOptionField {
        /// Zero-based position of the descriptor in the options list.
        index: usize,
        /// Field name.
        field: &'static str,
    },

    /// Descriptor type does not resolve to a known option kind.
    #[error("unsupported option kind '{type_name}' for property '{property}'")]
    UnsupportedOptionKind {
        /// Property the descriptor belongs to.
        property: String,
        /// Unresolvable type name.
        type_name: String,
    },
}

/// Error type for definition validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two descriptors share a property name.
    #[error("duplicate property '{property}' in definition '{name}'")]
    DuplicateProperty {
        /// Definition name.
        name: String,
        /// Duplicated property.
        property: String,
    },

    /// Two descriptors share a flag.
    #[error("duplicate flag '{flag}' in definition '{name}'")]
    DuplicateFlag {
        /// Definition name.
        name: String,
        /// Duplicated flag.
        flag: String,
    },

    /// Property is not a lower-case identifier.
    #[error(
        "invalid property name '{property}' in definition '{name}': must start lower-case and contain only alphanumerics"
    )]
    InvalidProperty {
        /// Definition name.
        name: String,
        /// Offending property.
        property: String,
    },

    /// Arrays of arrays are outside the supported kind set.
    #[error("nested arrays are not supported: property '{property}' in definition '{name}'")]
    NestedArray {
        /// Definition name.
        name: String,
        /// Offending property.
        property: String,
    },

    /// Boolean flags carry no value token, so repeating them is meaningless.
    #[error(
        "arrays of boolean flags are not supported: property '{property}' in definition '{name}'"
    )]
    FlagArray {
        /// Definition name.
        name: String,
        /// Offending property.
        property: String,
    },
}
