//! # Optgen Codegen
//!
//! Rust source generation from class definitions.
//!
//! This crate provides:
//! - Generation of a complete option-handling struct per class definition
//! - Per-option constants, defaults, guarded setters and help accessors
//! - The three protocol methods wired to the option codec
//! - Deterministic, byte-identical output for a fixed definition

pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::Generator;

/// Generates Rust source from a JSON class definition string.
///
/// # Arguments
/// * `json` - Class definition content
///
/// # Returns
/// Generated Rust source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let def = optgen_schema::load_definition(json)?;
    let ir = optgen_schema::ClassIr::from_def(&def);
    let generator = Generator::new(&ir);
    Ok(generator.generate())
}

/// Generates Rust source from a JSON class definition file.
///
/// # Arguments
/// * `path` - Path to the class definition file
///
/// # Returns
/// Generated Rust source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}
