//! Per-option constant and accessor emission.

use crate::rust::escape_str;
use optgen_schema::{ClassIr, OptionIr};

/// Generator for the inherent impl block: flag constants plus the
/// default/getter/setter/tip-text accessors of every option.
pub struct AccessorGenerator<'a> {
    ir: &'a ClassIr,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(ir: &'a ClassIr) -> Self {
        Self { ir }
    }

    /// Generates the inherent impl block, or nothing when the definition
    /// declares no options.
    #[must_use]
    pub fn generate(&self) -> String {
        if self.ir.options.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(&format!("impl {} {{\n", self.ir.type_name));

        for opt in &self.ir.options {
            output.push_str(&format!("    /// The flag for {}.\n", opt.property));
            output.push_str(&format!(
                "    pub const {}: &'static str = \"{}\";\n",
                opt.constant, opt.flag
            ));
        }

        for opt in &self.ir.options {
            output.push_str(&self.generate_default(opt));
            output.push_str(&self.generate_getter(opt));
            output.push_str(&self.generate_setter(opt));
            output.push_str(&self.generate_tip_text(opt));
        }

        output.push_str("}\n\n");
        output
    }

    /// Generates the default-value accessor.
    fn generate_default(&self, opt: &OptionIr) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "    /// The default value for {}.\n",
            opt.property
        ));
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn {}() -> {} {{\n",
            opt.default_fn, opt.rust_type
        ));
        output.push_str(&format!("        {}\n", opt.default_expr));
        output.push_str("    }\n");
        output
    }

    /// Generates the getter.
    fn generate_getter(&self, opt: &OptionIr) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "    /// Returns the current value for {}.\n",
            opt.property
        ));
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn {}(&self) -> {} {{\n",
            opt.field, opt.rust_type
        ));
        if opt.kind.is_copy() {
            output.push_str(&format!("        self.{}\n", opt.field));
        } else {
            output.push_str(&format!("        self.{}.clone()\n", opt.field));
        }
        output.push_str("    }\n");
        output
    }

    /// Generates the setter, splicing the guard predicate when present.
    fn generate_setter(&self, opt: &OptionIr) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("    /// Sets a new value for {}.\n", opt.property));
        if opt.constraint_expr.is_some() {
            output.push_str("    ///\n");
            output.push_str(
                "    /// Returns false and keeps the prior value when the guard rejects\n",
            );
            output.push_str("    /// the candidate.\n");
        }
        output.push_str(&format!(
            "    pub fn {}(&mut self, value: {}) -> bool {{\n",
            opt.setter, opt.rust_type
        ));
        if let Some(constraint) = &opt.constraint_expr {
            output.push_str(&format!("        if !({constraint}) {{\n"));
            output.push_str("            return false;\n");
            output.push_str("        }\n");
        }
        output.push_str(&format!("        self.{} = value;\n", opt.field));
        output.push_str("        true\n");
        output.push_str("    }\n");
        output
    }

    /// Generates the help-text accessor.
    fn generate_tip_text(&self, opt: &OptionIr) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "    /// Returns the help text for {}.\n",
            opt.property
        ));
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn {}() -> &'static str {{\n",
            opt.tip_text_fn
        ));
        output.push_str(&format!("        \"{}\"\n", escape_str(&opt.help)));
        output.push_str("    }\n");
        output
    }
}
