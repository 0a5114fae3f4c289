//! # Optgen Schema
//!
//! Class definition parsing and type model for the option-handler generator.
//!
//! This crate provides:
//! - JSON class definition parsing
//! - The closed set of supported option kinds
//! - Definition validation (required fields, uniqueness, kind rules)
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ClassIr, OptionIr, ParentRef};
pub use parser::{load_definition, parse_definition};
pub use types::{ClassDef, OptionDef, OptionKind};
pub use validation::validate_definition;
