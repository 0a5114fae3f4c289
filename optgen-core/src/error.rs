//! Error types for option token protocol operations.

use thiserror::Error;

/// Error type for parse and serialize operations on token sequences.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A token failed conversion to the target value type.
    #[error("malformed value '{value}' for option -{flag}: expected {expected}")]
    MalformedValue {
        /// Flag the value belonged to (no leading dash).
        flag: String,
        /// Raw token text that failed conversion.
        value: String,
        /// Name of the expected type.
        expected: &'static str,
    },

    /// A flag that requires a value was the last token in the sequence.
    #[error("no value given for option -{flag}")]
    MissingValue {
        /// Flag without a following value token.
        flag: String,
    },

    /// A command-line string ended inside a quoted region.
    #[error("unbalanced quotes in command line: {cmdline}")]
    UnbalancedQuote {
        /// Offending command-line string.
        cmdline: String,
    },

    /// An empty command-line string was supplied for a nested handler.
    #[error("empty command line supplied")]
    EmptyCommandLine,

    /// A nested handler class name did not resolve to a known handler.
    #[error("unknown handler class '{name}'")]
    UnknownClass {
        /// Class name that failed to resolve.
        name: String,
    },
}
