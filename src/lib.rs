//! A small recursive-descent JSON parser which turns a byte buffer into an owned tree of
//! [JsonValue]s.
//!
//! ```
//! use chisel_descent::{parse, JsonValue};
//!
//! let value = parse(br#"{"a":1,"b":[1,2,3]}"#).unwrap();
//! assert_eq!(value.get("a"), Some(&JsonValue::Number(1.0)));
//! assert_eq!(value.pointer("/b/2"), Some(&JsonValue::Number(3.0)));
//! ```
//!
//! Parsing is strict by default: the input must hold exactly one value, optionally surrounded by
//! whitespace. See [options::ParserOptions] for the available knobs.
use std::borrow::Cow;

pub mod coords;
pub mod errors;
pub mod options;
pub mod parser;
pub mod pointer;
pub mod scanner;
#[cfg(test)]
mod test_macros;
mod value;

pub use errors::{Error, ParserResult};
pub use options::{ParserOptions, TrailingContent};
pub use parser::dom::Parser;

/// A single key/value pair belonging to a [JsonValue::Object]
pub type Member<'a> = (Cow<'a, str>, JsonValue<'a>);

/// Basic enumeration of different Json values
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue<'a> {
    /// Ordered list of members. Duplicate keys are retained.
    Object(Vec<Member<'a>>),
    /// Array of values
    Array(Vec<JsonValue<'a>>),
    /// Decoded string value, borrowed from the input when no escapes were present
    String(Cow<'a, str>),
    /// Floating point numeric value
    Number(f64),
    /// Canonical boolean value
    Boolean(bool),
    /// Canonical null value
    Null,
}

/// Parse a complete JSON document using the default [ParserOptions]
pub fn parse(bytes: &[u8]) -> ParserResult<JsonValue<'_>> {
    Parser::default().parse_bytes(bytes)
}
