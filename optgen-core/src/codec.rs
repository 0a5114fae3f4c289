//! Parse and serialize primitives over a token sequence.
//!
//! These free functions are the operations generated code wires each of its
//! options into. Parse scans left to right for the first unconsumed
//! occurrence of a flag and falls back to the supplied default without
//! touching the sequence; serialize appends the same textual form parse
//! accepts, so `parse(serialize(v)) == v` for every supported kind.

use crate::error::CodecError;
use crate::handler::{OptionFactory, OptionHandler};
use crate::tokens::{TokenSeq, join_command_line, split_command_line};
use crate::value::OptionValue;

/// Parses a single scalar option, using the default if the flag is absent.
///
/// # Errors
/// Returns [`CodecError`] if the matched token fails conversion or the
/// flag has no following value token.
pub fn parse<T: OptionValue>(
    tokens: &mut TokenSeq,
    flag: &str,
    default: T,
) -> Result<T, CodecError> {
    match tokens.take_value(flag)? {
        Some(raw) => T::from_token(flag, &raw),
        None => Ok(default),
    }
}

/// Parses a bare boolean flag: presence yields true, absence false.
pub fn parse_flag(tokens: &mut TokenSeq, flag: &str) -> bool {
    tokens.take_flag(flag)
}

/// Parses every occurrence of a repeated scalar option in order.
///
/// No occurrence at all yields the default collection unchanged.
///
/// # Errors
/// Returns [`CodecError`] if any matched token fails conversion.
pub fn parse_all<T: OptionValue>(
    tokens: &mut TokenSeq,
    flag: &str,
    default: Vec<T>,
) -> Result<Vec<T>, CodecError> {
    let mut values = Vec::new();
    while let Some(raw) = tokens.take_value(flag)? {
        values.push(T::from_token(flag, &raw)?);
    }
    if values.is_empty() {
        Ok(default)
    } else {
        Ok(values)
    }
}

/// Instantiates a handler from a command line of the form
/// `ClassName -flag value ...` and applies its option tokens.
///
/// # Errors
/// Returns [`CodecError`] if the command line is empty or malformed, the
/// class name is not recognized, or option application fails.
pub fn from_command_line<T: OptionFactory>(cmdline: &str) -> Result<T, CodecError> {
    let parts = split_command_line(cmdline)?;
    let Some((name, rest)) = parts.split_first() else {
        return Err(CodecError::EmptyCommandLine);
    };
    let mut handler = T::for_name(name).ok_or_else(|| CodecError::UnknownClass {
        name: name.clone(),
    })?;
    let mut nested = TokenSeq::new(rest.to_vec());
    handler.set_options(&mut nested)?;
    Ok(handler)
}

/// Parses a nested option-bearing object, using the default if absent.
///
/// The raw value is treated as a nested command line: class name first,
/// then that object's own option tokens.
///
/// # Errors
/// Returns [`CodecError`] on a malformed nested command line or an
/// unrecognized class name.
pub fn parse_object<T: OptionFactory>(
    tokens: &mut TokenSeq,
    flag: &str,
    default: T,
) -> Result<T, CodecError> {
    match tokens.take_value(flag)? {
        Some(raw) => from_command_line(&raw),
        None => Ok(default),
    }
}

/// Parses every occurrence of a repeated object option in order.
///
/// # Errors
/// Returns [`CodecError`] on any malformed nested command line.
pub fn parse_objects<T: OptionFactory>(
    tokens: &mut TokenSeq,
    flag: &str,
    default: Vec<T>,
) -> Result<Vec<T>, CodecError> {
    let mut values = Vec::new();
    while let Some(raw) = tokens.take_value(flag)? {
        values.push(from_command_line(&raw)?);
    }
    if values.is_empty() {
        Ok(default)
    } else {
        Ok(values)
    }
}

/// Appends a scalar option as a `-flag value` token pair.
pub fn add<T: OptionValue>(options: &mut Vec<String>, flag: &str, value: &T) {
    options.push(format!("-{flag}"));
    options.push(value.to_token());
}

/// Appends a bare `-flag` token when the value is true, nothing otherwise.
pub fn add_flag(options: &mut Vec<String>, flag: &str, value: bool) {
    if value {
        options.push(format!("-{flag}"));
    }
}

/// Appends one `-flag value` pair per element, in order.
pub fn add_all<T: OptionValue>(options: &mut Vec<String>, flag: &str, values: &[T]) {
    for value in values {
        add(options, flag, value);
    }
}

/// Reconstructs the full command line for a handler: class name followed
/// by its serialized options, whitespace-joined with quoting.
#[must_use]
pub fn to_command_line(handler: &dyn OptionHandler) -> String {
    let mut parts = vec![handler.class_name().to_string()];
    parts.extend(handler.get_options());
    join_command_line(&parts)
}

/// Appends a nested object as `-flag` plus its reconstructed command line.
pub fn add_object(options: &mut Vec<String>, flag: &str, value: &dyn OptionHandler) {
    options.push(format!("-{flag}"));
    options.push(to_command_line(value));
}

/// Appends one `-flag`/command-line pair per object, in order.
pub fn add_objects<T: OptionHandler>(options: &mut Vec<String>, flag: &str, values: &[T]) {
    for value in values {
        add_object(options, flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::help_entry;

    /// Hand-written handler shaped exactly like generated code, used as
    /// the nested object under test.
    #[derive(Debug, Clone, PartialEq)]
    struct GaussianKernel {
        gamma: f64,
    }

    impl Default for GaussianKernel {
        fn default() -> Self {
            Self { gamma: 1.0 }
        }
    }

    impl OptionHandler for GaussianKernel {
        fn class_name(&self) -> &str {
            "GaussianKernel"
        }

        fn list_options(&self) -> Vec<crate::handler::OptionSpec> {
            vec![help_entry("The gamma parameter.", "1", "gamma")]
        }

        fn set_options(&mut self, tokens: &mut TokenSeq) -> Result<(), CodecError> {
            self.gamma = parse(tokens, "gamma", 1.0)?;
            Ok(())
        }

        fn get_options(&self) -> Vec<String> {
            let mut result = Vec::new();
            add(&mut result, "gamma", &self.gamma);
            result
        }
    }

    impl OptionFactory for GaussianKernel {
        fn for_name(name: &str) -> Option<Self> {
            (name == "GaussianKernel").then(Self::default)
        }
    }

    #[test]
    fn test_parse_falls_back_to_default() {
        let mut tokens = TokenSeq::from_slice(&[]);
        let value = parse(&mut tokens, "capacity", 1.0).expect("parse failed");
        assert_eq!(value, 1.0);
        // A default fallback never writes the flag back into the sequence.
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_scalar_round_trip() {
        let mut options = Vec::new();
        add(&mut options, "capacity", &2.5);
        assert_eq!(options, vec!["-capacity", "2.5"]);

        let mut tokens = TokenSeq::new(options);
        let value = parse(&mut tokens, "capacity", 1.0).expect("parse failed");
        assert_eq!(value, 2.5);
    }

    #[test]
    fn test_flag_round_trip() {
        let mut options = Vec::new();
        add_flag(&mut options, "debug", true);
        add_flag(&mut options, "quiet", false);
        assert_eq!(options, vec!["-debug"]);

        let mut tokens = TokenSeq::new(options);
        assert!(parse_flag(&mut tokens, "debug"));
        assert!(!parse_flag(&mut tokens, "quiet"));
    }

    #[test]
    fn test_array_round_trip() {
        let weights = vec![0.5, 1.5, 2.5];
        let mut options = Vec::new();
        add_all(&mut options, "weight", &weights);
        assert_eq!(
            options,
            vec!["-weight", "0.5", "-weight", "1.5", "-weight", "2.5"]
        );

        let mut tokens = TokenSeq::new(options);
        let parsed: Vec<f64> = parse_all(&mut tokens, "weight", Vec::new()).expect("parse failed");
        assert_eq!(parsed, weights);
    }

    #[test]
    fn test_array_default_when_absent() {
        let mut tokens = TokenSeq::from_slice(&["-other", "1"]);
        let parsed = parse_all(&mut tokens, "weight", vec![9.0]).expect("parse failed");
        assert_eq!(parsed, vec![9.0]);
    }

    #[test]
    fn test_empty_array_appends_nothing() {
        let mut options = Vec::new();
        add_all::<f64>(&mut options, "weight", &[]);
        assert!(options.is_empty());
    }

    #[test]
    fn test_non_interference_between_flags() {
        // Serialize A then B, parse B first then A: same results as the
        // declaration order, since consumption is scoped per flag.
        let mut options = Vec::new();
        add(&mut options, "alpha", &1.5);
        add(&mut options, "beta", &"x".to_string());

        let mut tokens = TokenSeq::new(options.clone());
        let beta = parse(&mut tokens, "beta", String::new()).expect("parse failed");
        let alpha = parse(&mut tokens, "alpha", 0.0).expect("parse failed");

        let mut tokens2 = TokenSeq::new(options);
        let alpha2 = parse(&mut tokens2, "alpha", 0.0).expect("parse failed");
        let beta2 = parse(&mut tokens2, "beta", String::new()).expect("parse failed");

        assert_eq!((alpha, beta), (alpha2, beta2.clone()));
        assert_eq!(alpha2, 1.5);
        assert_eq!(beta2, "x");
    }

    #[test]
    fn test_object_round_trip() {
        let kernel = GaussianKernel { gamma: 0.25 };
        let mut options = Vec::new();
        add_object(&mut options, "kernel", &kernel);
        assert_eq!(options, vec!["-kernel", "GaussianKernel -gamma 0.25"]);

        let mut tokens = TokenSeq::new(options);
        let parsed = parse_object(&mut tokens, "kernel", GaussianKernel::default())
            .expect("parse failed");
        assert_eq!(parsed, kernel);
    }

    #[test]
    fn test_object_default_when_absent() {
        let mut tokens = TokenSeq::from_slice(&[]);
        let parsed = parse_object(&mut tokens, "kernel", GaussianKernel { gamma: 3.0 })
            .expect("parse failed");
        assert_eq!(parsed.gamma, 3.0);
    }

    #[test]
    fn test_object_unknown_class() {
        let mut tokens = TokenSeq::from_slice(&["-kernel", "NoSuchKernel -gamma 1"]);
        let err = parse_object(&mut tokens, "kernel", GaussianKernel::default()).unwrap_err();
        assert!(matches!(err, CodecError::UnknownClass { .. }));
    }

    #[test]
    fn test_object_array_round_trip() {
        let kernels = vec![
            GaussianKernel { gamma: 0.5 },
            GaussianKernel { gamma: 2.0 },
        ];
        let mut options = Vec::new();
        add_objects(&mut options, "kernel", &kernels);

        let mut tokens = TokenSeq::new(options);
        let parsed: Vec<GaussianKernel> =
            parse_objects(&mut tokens, "kernel", Vec::new()).expect("parse failed");
        assert_eq!(parsed, kernels);
    }

    #[test]
    fn test_from_command_line_empty() {
        let err = from_command_line::<GaussianKernel>("   ").unwrap_err();
        assert!(matches!(err, CodecError::EmptyCommandLine));
    }

    #[test]
    fn test_malformed_value_is_fatal() {
        let mut tokens = TokenSeq::from_slice(&["-capacity", "not-a-number"]);
        let err = parse(&mut tokens, "capacity", 1.0).unwrap_err();
        assert!(matches!(err, CodecError::MalformedValue { .. }));
    }

    #[test]
    fn test_remaining_tokens_for_parent() {
        let mut tokens =
            TokenSeq::from_slice(&["-capacity", "2.5", "-seed", "42", "-debug"]);
        let _ = parse(&mut tokens, "capacity", 1.0).expect("parse failed");
        assert_eq!(tokens.remaining(), vec!["-seed", "42", "-debug"]);
    }
}
