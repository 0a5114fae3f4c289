//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use optgen::prelude::*;
//! ```

// Core types
pub use optgen_core::codec;
pub use optgen_core::error::CodecError;
pub use optgen_core::handler::{OptionFactory, OptionHandler, OptionSpec};
pub use optgen_core::tokens::{TokenSeq, join_command_line, split_command_line};
pub use optgen_core::value::OptionValue;

// Schema types
pub use optgen_schema::{
    ClassDef, ClassIr, OptionDef, OptionIr, OptionKind, ParseError, SchemaError,
    load_definition, parse_definition, validate_definition,
};

// Codegen types
pub use optgen_codegen::{CodegenError, Generator, generate_from_file, generate_from_json};
