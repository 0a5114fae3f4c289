//! Token conversion for scalar option values.
//!
//! [`OptionValue`] defines the textual form a value takes on the token
//! sequence. Parse and serialize use the same conversion, which is what
//! makes the protocol round-trip symmetric.

use crate::error::CodecError;
use std::path::PathBuf;

/// A value that can cross the token boundary as a single text token.
pub trait OptionValue: Sized {
    /// Human-readable name of the type, used in conversion errors.
    const EXPECTED: &'static str;

    /// Converts a raw token into a value.
    ///
    /// # Errors
    /// Returns [`CodecError::MalformedValue`] if the token does not parse.
    fn from_token(flag: &str, raw: &str) -> Result<Self, CodecError>;

    /// Converts the value back into its token form.
    fn to_token(&self) -> String;
}

macro_rules! impl_numeric_option_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl OptionValue for $ty {
                const EXPECTED: &'static str = $name;

                fn from_token(flag: &str, raw: &str) -> Result<Self, CodecError> {
                    raw.trim().parse().map_err(|_| CodecError::MalformedValue {
                        flag: flag.to_string(),
                        value: raw.to_string(),
                        expected: Self::EXPECTED,
                    })
                }

                fn to_token(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_option_value! {
    i32 => "an integer",
    i64 => "a long integer",
    f32 => "a float",
    f64 => "a double",
}

impl OptionValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_token(_flag: &str, raw: &str) -> Result<Self, CodecError> {
        Ok(raw.to_string())
    }

    fn to_token(&self) -> String {
        self.clone()
    }
}

impl OptionValue for PathBuf {
    const EXPECTED: &'static str = "a path";

    fn from_token(_flag: &str, raw: &str) -> Result<Self, CodecError> {
        Ok(PathBuf::from(raw))
    }

    fn to_token(&self) -> String {
        self.display().to_string()
    }
}
