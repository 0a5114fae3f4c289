//! Rust source emission modules.

pub mod accessors;
pub mod methods;

pub use accessors::AccessorGenerator;
pub use methods::MethodsGenerator;

use optgen_schema::{OptionIr, OptionKind};

/// Escapes a string for embedding in a Rust string literal.
#[must_use]
pub fn escape_str(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}

/// Returns the expression rendering an option's default value for its
/// help entry.
#[must_use]
pub fn default_display_expr(opt: &OptionIr) -> String {
    match &opt.kind {
        OptionKind::Path => format!("&Self::{}().display().to_string()", opt.default_fn),
        OptionKind::Object(_) => {
            format!("&codec::to_command_line(&Self::{}())", opt.default_fn)
        }
        OptionKind::Array(_) => format!("&format!(\"{{:?}}\", Self::{}())", opt.default_fn),
        _ => format!("&Self::{}().to_string()", opt.default_fn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_str() {
        assert_eq!(escape_str("plain"), "plain");
        assert_eq!(escape_str(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_str("a\\b"), "a\\\\b");
        assert_eq!(escape_str("line\nbreak"), "line\\nbreak");
    }
}
