//! Protocol method emission.
//!
//! Emits the `OptionHandler` impl: `class_name`, `list_options`,
//! `set_options` and `get_options`, each handling the declared options in
//! declaration order before chaining to the parent when applicable.

use crate::rust::{default_display_expr, escape_str};
use optgen_schema::{ClassIr, OptionIr, OptionKind};

/// Generator for the `OptionHandler` trait impl.
pub struct MethodsGenerator<'a> {
    ir: &'a ClassIr,
}

impl<'a> MethodsGenerator<'a> {
    /// Creates a new methods generator.
    #[must_use]
    pub fn new(ir: &'a ClassIr) -> Self {
        Self { ir }
    }

    /// Generates the trait impl block.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "impl OptionHandler for {} {{\n",
            self.ir.type_name
        ));
        output.push_str(&self.generate_class_name());
        output.push('\n');
        output.push_str(&self.generate_list_options());
        output.push('\n');
        output.push_str(&self.generate_set_options());
        output.push('\n');
        output.push_str(&self.generate_get_options());
        output.push_str("}\n");
        output
    }

    fn generate_class_name(&self) -> String {
        let mut output = String::new();
        output.push_str("    fn class_name(&self) -> &str {\n");
        output.push_str(&format!(
            "        \"{}\"\n",
            escape_str(&self.ir.qualified_name())
        ));
        output.push_str("    }\n");
        output
    }

    fn generate_list_options(&self) -> String {
        let mut output = String::new();
        output.push_str("    fn list_options(&self) -> Vec<OptionSpec> {\n");

        if self.ir.options.is_empty() && !self.ir.chains {
            output.push_str("        Vec::new()\n");
            output.push_str("    }\n");
            return output;
        }

        output.push_str("        let mut result = Vec::new();\n");
        for opt in &self.ir.options {
            output.push_str(&Self::list_entry(opt));
        }
        if self.ir.chains {
            output.push_str("        result.extend(self.base.list_options());\n");
        }
        output.push_str("        result\n");
        output.push_str("    }\n");
        output
    }

    fn list_entry(opt: &OptionIr) -> String {
        if matches!(opt.kind, OptionKind::Flag) {
            format!(
                "        result.push(optgen_core::flag_entry(Self::{}(), Self::{}));\n",
                opt.tip_text_fn, opt.constant
            )
        } else {
            format!(
                "        result.push(optgen_core::help_entry(\n            Self::{}(),\n            {},\n            Self::{},\n        ));\n",
                opt.tip_text_fn,
                default_display_expr(opt),
                opt.constant
            )
        }
    }

    fn generate_set_options(&self) -> String {
        let mut output = String::new();
        let tokens_param = if self.ir.options.is_empty() && !self.ir.chains {
            "_tokens"
        } else {
            "tokens"
        };
        output.push_str(&format!(
            "    fn set_options(&mut self, {tokens_param}: &mut TokenSeq) -> Result<(), CodecError> {{\n"
        ));
        for opt in &self.ir.options {
            output.push_str(&Self::set_entry(opt));
        }
        if self.ir.chains {
            output.push_str("        self.base.set_options(tokens)?;\n");
        }
        output.push_str("        Ok(())\n");
        output.push_str("    }\n");
        output
    }

    fn set_entry(opt: &OptionIr) -> String {
        let parse_call = match &opt.kind {
            OptionKind::Flag => {
                format!("codec::parse_flag(tokens, Self::{})", opt.constant)
            }
            OptionKind::Object(_) => format!(
                "codec::parse_object(tokens, Self::{}, Self::{}())?",
                opt.constant, opt.default_fn
            ),
            OptionKind::Array(inner) if matches!(inner.as_ref(), OptionKind::Object(_)) => {
                format!(
                    "codec::parse_objects(tokens, Self::{}, Self::{}())?",
                    opt.constant, opt.default_fn
                )
            }
            OptionKind::Array(_) => format!(
                "codec::parse_all(tokens, Self::{}, Self::{}())?",
                opt.constant, opt.default_fn
            ),
            _ => format!(
                "codec::parse(tokens, Self::{}, Self::{}())?",
                opt.constant, opt.default_fn
            ),
        };
        format!("        self.{}({parse_call});\n", opt.setter)
    }

    fn generate_get_options(&self) -> String {
        let mut output = String::new();
        output.push_str("    fn get_options(&self) -> Vec<String> {\n");

        if self.ir.options.is_empty() && !self.ir.chains {
            output.push_str("        Vec::new()\n");
            output.push_str("    }\n");
            return output;
        }

        output.push_str("        let mut result = Vec::new();\n");
        for opt in &self.ir.options {
            output.push_str(&Self::get_entry(opt));
        }
        if self.ir.chains {
            output.push_str("        result.extend(self.base.get_options());\n");
        }
        output.push_str("        result\n");
        output.push_str("    }\n");
        output
    }

    fn get_entry(opt: &OptionIr) -> String {
        match &opt.kind {
            OptionKind::Flag => format!(
                "        codec::add_flag(&mut result, Self::{}, self.{});\n",
                opt.constant, opt.field
            ),
            OptionKind::Object(_) => format!(
                "        codec::add_object(&mut result, Self::{}, &self.{});\n",
                opt.constant, opt.field
            ),
            OptionKind::Array(inner) if matches!(inner.as_ref(), OptionKind::Object(_)) => {
                format!(
                    "        codec::add_objects(&mut result, Self::{}, &self.{});\n",
                    opt.constant, opt.field
                )
            }
            OptionKind::Array(_) => format!(
                "        codec::add_all(&mut result, Self::{}, &self.{});\n",
                opt.constant, opt.field
            ),
            _ => format!(
                "        codec::add(&mut result, Self::{}, &self.{});\n",
                opt.constant, opt.field
            ),
        }
    }
}
