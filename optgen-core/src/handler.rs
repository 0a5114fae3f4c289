//! The option handler contract implemented by generated classes.

use crate::error::CodecError;
use crate::tokens::TokenSeq;

/// Help entry describing one available option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Flag without the leading dash.
    pub flag: String,
    /// Help text, including the default value for value-taking options.
    pub description: String,
    /// Usage synopsis, e.g. `-capacity <value>`.
    pub synopsis: String,
}

/// Builds the help entry for a value-taking option.
#[must_use]
pub fn help_entry(help: &str, default: &str, flag: &str) -> OptionSpec {
    OptionSpec {
        flag: flag.to_string(),
        description: format!("\t{help}\n\t(default: {default})"),
        synopsis: format!("-{flag} <value>"),
    }
}

/// Builds the help entry for a bare boolean flag.
#[must_use]
pub fn flag_entry(help: &str, flag: &str) -> OptionSpec {
    OptionSpec {
        flag: flag.to_string(),
        description: format!("\t{help}"),
        synopsis: format!("-{flag}"),
    }
}

/// The three-method contract every generated class implements.
///
/// `list_options`, `set_options` and `get_options` are the only surface
/// downstream code may depend on. `set_options` consumes matched tokens
/// from the shared sequence so a chained parent only sees what is left.
pub trait OptionHandler {
    /// Returns the name used to reconstruct this handler's command line.
    fn class_name(&self) -> &str;

    /// Enumerates the available options with help text and defaults.
    fn list_options(&self) -> Vec<OptionSpec>;

    /// Applies a token sequence to the handler's state.
    ///
    /// Options absent from the sequence fall back to their defaults.
    ///
    /// # Errors
    /// Returns [`CodecError`] if a matched token fails type conversion.
    fn set_options(&mut self, tokens: &mut TokenSeq) -> Result<(), CodecError>;

    /// Serializes the current state into an equivalent token sequence.
    fn get_options(&self) -> Vec<String>;
}

/// Name-based construction for handlers that appear as nested options.
///
/// This replaces runtime class lookup with a closed dispatch: the type
/// appearing in a generated field decides at compile time which names it
/// accepts.
pub trait OptionFactory: OptionHandler + Sized {
    /// Instantiates a default-configured handler for a class name, or
    /// `None` if the name is not recognized.
    fn for_name(name: &str) -> Option<Self>;
}
