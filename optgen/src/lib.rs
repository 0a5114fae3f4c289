//! # Optgen
//!
//! Schema-driven generator for option-handling code.
//!
//! Optgen turns a declarative JSON description of a class's configurable
//! parameters into Rust source implementing a three-method option
//! protocol: enumerate available options, apply a flat token sequence to
//! internal state, and serialize state back into an equivalent token
//! sequence.
//!
//! ## Quick Start
//!
//! ```
//! use optgen::codegen::generate_from_json;
//!
//! let source = generate_from_json(r#"{
//!     "name": "MySVM",
//!     "prefix": "Abstract",
//!     "author": "FracPete",
//!     "organization": "University of Waikato, Hamilton, NZ",
//!     "options": [
//!         {"property": "capacity", "type": "double", "default": "1.0",
//!          "help": "The capacity parameter."}
//!     ]
//! }"#).expect("generation failed");
//! assert!(source.contains("pub struct AbstractMySVM"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Token sequence, codec primitives, the handler contract
//! - [`schema`] - Class definition parsing, validation and IR
//! - [`codegen`] - Rust source generation from class definitions

pub mod prelude;

/// Token protocol reference implementation.
pub mod core {
    pub use optgen_core::*;
}

/// Class definition parsing and validation.
pub mod schema {
    pub use optgen_schema::*;
}

/// Source generation from class definitions.
pub mod codegen {
    pub use optgen_codegen::*;
}
