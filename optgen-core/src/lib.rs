//! # Optgen Core
//!
//! Reference implementation of the option token protocol.
//!
//! This crate provides:
//! - Token sequence handling with explicit consumption tracking
//! - Parse/serialize primitives for every supported option kind
//! - The three-method `OptionHandler` contract implemented by generated code
//! - Command-line splitting and joining with quote awareness
//! - Error types for protocol violations

pub mod codec;
pub mod error;
pub mod handler;
pub mod tokens;
pub mod value;

pub use codec::{
    add, add_all, add_flag, add_object, add_objects, from_command_line, parse, parse_all,
    parse_flag, parse_object, parse_objects, to_command_line,
};
pub use error::CodecError;
pub use handler::{OptionFactory, OptionHandler, OptionSpec, flag_entry, help_entry};
pub use tokens::{TokenSeq, join_command_line, split_command_line};
pub use value::OptionValue;
