//! Top-level source assembly for one class definition.

use crate::rust::{AccessorGenerator, MethodsGenerator};
use optgen_schema::ClassIr;

/// Generator producing the complete source file for one resolved class.
///
/// Output is deterministic: options are emitted in declaration order and
/// imports are sorted, so compiling the same definition twice yields
/// byte-identical source.
pub struct Generator<'a> {
    ir: &'a ClassIr,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a ClassIr) -> Self {
        Self { ir }
    }

    /// Generates the full source file.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_header());
        output.push_str(&self.generate_imports());
        output.push_str(&self.generate_struct());
        output.push_str(&self.generate_default_impl());
        output.push_str(&AccessorGenerator::new(self.ir).generate());
        output.push_str(&MethodsGenerator::new(self.ir).generate());
        output
    }

    /// Generates the file header doc comment.
    fn generate_header(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("//! Option handling for {}.\n", self.ir.doc_name));
        output.push_str("//!\n");
        output.push_str("//! Generated by optgen. Do not edit by hand; regenerate from the\n");
        output.push_str("//! class definition instead.\n");
        output.push_str("//!\n");
        output.push_str(&format!("//! Author: {}\n", self.ir.author));
        output.push_str(&format!("//! Organization: {}\n", self.ir.organization));
        output.push('\n');
        output
    }

    /// Generates the import block.
    fn generate_imports(&self) -> String {
        let mut output = String::new();
        if !self.ir.options.is_empty() {
            output.push_str("use optgen_core::codec;\n");
        }
        output.push_str("use optgen_core::{CodecError, OptionHandler, OptionSpec, TokenSeq};\n");
        for import in self.ir.imports() {
            output.push_str(&format!("use {import};\n"));
        }
        output.push('\n');
        output
    }

    /// Generates the struct definition with one field per option plus the
    /// embedded parent when chaining.
    fn generate_struct(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "/// Option handling for {}.\n",
            self.ir.doc_name
        ));
        output.push_str("#[derive(Debug, Clone)]\n");
        output.push_str(&format!("pub struct {} {{\n", self.ir.type_name));
        for opt in &self.ir.options {
            let doc = if opt.help.is_empty() {
                &opt.property
            } else {
                &opt.help
            };
            output.push_str(&format!("    /// {doc}\n"));
            output.push_str(&format!("    {}: {},\n", opt.field, opt.rust_type));
        }
        if self.ir.chains {
            if let Some(parent) = &self.ir.parent {
                output.push_str("    /// Parent handler the protocol methods chain to.\n");
                output.push_str(&format!("    base: {},\n", parent.type_name));
            }
        }
        output.push_str("}\n\n");
        output
    }

    /// Generates the `Default` impl initializing every field from its
    /// default accessor.
    fn generate_default_impl(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("impl Default for {} {{\n", self.ir.type_name));
        output.push_str("    fn default() -> Self {\n");
        output.push_str("        Self {\n");
        for opt in &self.ir.options {
            output.push_str(&format!(
                "            {}: Self::{}(),\n",
                opt.field, opt.default_fn
            ));
        }
        if self.ir.chains {
            if let Some(parent) = &self.ir.parent {
                output.push_str(&format!(
                    "            base: {}::default(),\n",
                    parent.type_name
                ));
            }
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_from_json;
    use optgen_schema::{ClassIr, parse_definition};

    const CAPACITY_JSON: &str = r#"{
        "name": "MySVM",
        "prefix": "Abstract",
        "superclass": "classifiers::AbstractClassifier",
        "author": "FracPete",
        "organization": "University of Waikato, Hamilton, NZ",
        "options": [
            {"property": "capacity", "type": "double", "default": "1.0",
             "help": "The capacity parameter."}
        ]
    }"#;

    #[test]
    fn test_generated_struct_and_default() {
        let output = generate_from_json(CAPACITY_JSON).expect("generation failed");
        assert!(output.contains("pub struct AbstractMySVM {"));
        assert!(output.contains("    capacity: f64,"));
        assert!(output.contains("    base: AbstractClassifier,"));
        assert!(output.contains("capacity: Self::default_capacity(),"));
        assert!(output.contains("base: AbstractClassifier::default(),"));
    }

    #[test]
    fn test_generated_header_and_imports() {
        let output = generate_from_json(CAPACITY_JSON).expect("generation failed");
        assert!(output.starts_with("//! Option handling for MySVM.\n"));
        assert!(output.contains("//! Author: FracPete\n"));
        assert!(output.contains("use optgen_core::codec;\n"));
        assert!(output.contains(
            "use optgen_core::{CodecError, OptionHandler, OptionSpec, TokenSeq};\n"
        ));
        assert!(output.contains("use classifiers::AbstractClassifier;\n"));
    }

    #[test]
    fn test_end_to_end_capacity_wiring() {
        // One double option, no explicit flag: the derived flag constant
        // and all four accessors must be wired through the codec.
        let json = r#"{
            "name": "Blob", "author": "a", "organization": "o",
            "options": [
                {"property": "capacity", "type": "double", "default": "1.0",
                 "help": "The capacity parameter."}
            ]
        }"#;
        let output = generate_from_json(json).expect("generation failed");
        assert!(output.contains("pub const CAPACITY: &'static str = \"capacity\";"));
        assert!(output.contains("pub fn default_capacity() -> f64 {"));
        assert!(output.contains(
            "self.set_capacity(codec::parse(tokens, Self::CAPACITY, Self::default_capacity())?);"
        ));
        assert!(output.contains("codec::add(&mut result, Self::CAPACITY, &self.capacity);"));
    }

    #[test]
    fn test_derived_flag_constant_value() {
        let json = r#"{
            "name": "X", "author": "a", "organization": "o",
            "options": [
                {"property": "multiClassStrategy", "type": "string",
                 "default": "String::new()"}
            ]
        }"#;
        let output = generate_from_json(json).expect("generation failed");
        assert!(output.contains(
            "pub const MULTI_CLASS_STRATEGY: &'static str = \"multi-class-strategy\";"
        ));
    }

    #[test]
    fn test_determinism() {
        let first = generate_from_json(CAPACITY_JSON).expect("generation failed");
        let second = generate_from_json(CAPACITY_JSON).expect("generation failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_omits_base_field() {
        let json = r#"{
            "name": "Root", "superclass": "core::Base",
            "implement": ["optgen_core::OptionHandler"],
            "author": "a", "organization": "o"
        }"#;
        let def = parse_definition(json).expect("parse failed");
        let ir = ClassIr::from_def(&def);
        let output = Generator::new(&ir).generate();
        assert!(!output.contains("base:"));
    }

    #[test]
    fn test_generate_from_file() {
        use std::io::Write as _;
        let mut file = tempfile::NamedTempFile::new().expect("tempfile failed");
        file.write_all(CAPACITY_JSON.as_bytes()).expect("write failed");
        let output = crate::generate_from_file(file.path()).expect("generation failed");
        assert!(output.contains("pub struct AbstractMySVM {"));
    }

    #[test]
    fn test_generate_from_file_missing_path() {
        let err = crate::generate_from_file(std::path::Path::new("/no/such/definition.json"))
            .unwrap_err();
        assert!(matches!(err, crate::CodegenError::Io(_)));
    }

    /// The protocol semantics the generated wiring targets, exercised
    /// against the codec with a handler shaped exactly like the emitted
    /// code for the capacity example.
    mod protocol {
        use optgen_core::codec;
        use optgen_core::{CodecError, OptionHandler, OptionSpec, TokenSeq};

        #[derive(Debug, Clone)]
        struct Blob {
            capacity: f64,
        }

        impl Blob {
            pub const CAPACITY: &'static str = "capacity";

            pub fn default_capacity() -> f64 {
                1.0
            }

            pub fn capacity(&self) -> f64 {
                self.capacity
            }

            pub fn set_capacity(&mut self, value: f64) -> bool {
                if !(value > 0.0) {
                    return false;
                }
                self.capacity = value;
                true
            }

            pub fn capacity_tip_text() -> &'static str {
                "The capacity parameter."
            }
        }

        impl Default for Blob {
            fn default() -> Self {
                Self {
                    capacity: Self::default_capacity(),
                }
            }
        }

        impl OptionHandler for Blob {
            fn class_name(&self) -> &str {
                "Blob"
            }

            fn list_options(&self) -> Vec<OptionSpec> {
                let mut result = Vec::new();
                result.push(optgen_core::help_entry(
                    Self::capacity_tip_text(),
                    &Self::default_capacity().to_string(),
                    Self::CAPACITY,
                ));
                result
            }

            fn set_options(&mut self, tokens: &mut TokenSeq) -> Result<(), CodecError> {
                self.set_capacity(codec::parse(
                    tokens,
                    Self::CAPACITY,
                    Self::default_capacity(),
                )?);
                Ok(())
            }

            fn get_options(&self) -> Vec<String> {
                let mut result = Vec::new();
                codec::add(&mut result, Self::CAPACITY, &self.capacity);
                result
            }
        }

        #[test]
        fn test_serialize_current_state() {
            let mut blob = Blob::default();
            assert!(blob.set_capacity(2.5));
            assert_eq!(blob.get_options(), vec!["-capacity", "2.5"]);
        }

        #[test]
        fn test_apply_token_sequence() {
            let mut blob = Blob::default();
            let mut tokens = TokenSeq::from_slice(&["-capacity", "2.5"]);
            blob.set_options(&mut tokens).expect("set_options failed");
            assert_eq!(blob.capacity(), 2.5);
        }

        #[test]
        fn test_empty_sequence_yields_default() {
            let mut blob = Blob::default();
            let mut tokens = TokenSeq::from_slice(&[]);
            blob.set_options(&mut tokens).expect("set_options failed");
            assert_eq!(blob.capacity(), 1.0);
        }

        #[test]
        fn test_guard_rejects_and_retains() {
            let mut blob = Blob::default();
            assert!(blob.set_capacity(2.5));
            assert!(!blob.set_capacity(-1.0));
            assert_eq!(blob.capacity(), 2.5);
        }

        #[test]
        fn test_list_options_includes_default() {
            let blob = Blob::default();
            let specs = blob.list_options();
            assert_eq!(specs.len(), 1);
            assert_eq!(specs[0].flag, "capacity");
            assert!(specs[0].description.contains("(default: 1)"));
        }
    }
}
