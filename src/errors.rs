//! General error types for the parser

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser
pub type ParserResult<T> = Result<T, Error>;

/// Broad classification of a parse failure
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// The input is not well-formed JSON
    Syntax,
    /// The parser ran out of a resource (nesting depth, memory) whilst building the tree
    Resource,
}

/// A global enumeration of error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details {
    /// The input ended whilst a value, string or structure was still open
    EndOfInput,
    /// A value was required but nothing recognisable was found
    ExpectedValue,
    /// An object member must start with a string key
    ExpectedKey,
    /// A key must be followed by a colon
    ExpectedColon,
    /// Something other than `,` or `]` followed an array element
    InvalidArray,
    /// Something other than `,` or `}` followed an object member
    InvalidObject,
    /// Non-whitespace content followed a complete top-level value
    TrailingContent,
    /// A backslash was followed by an unsupported character
    InvalidEscapeSequence(char),
    /// A `\u` escape without four hexadecimal digits
    InvalidUnicodeEscapeSequence,
    /// A `\u` escape decoding to a lone surrogate
    UnpairedSurrogate(u16),
    /// An unescaped control character was found inside a string
    ControlCharacterInString(u8),
    /// String content is not valid UTF-8
    NonUtf8InputDetected,
    /// A numeric token passed the grammar check but couldn't be converted
    InvalidNumericRepresentation(String),
    /// Nesting went deeper than the configured maximum
    DepthLimitExceeded(usize),
    /// Growing a container or string buffer failed
    AllocationFailure,
}

impl Details {
    /// Classify the details as either a syntax or resource failure
    pub fn category(&self) -> Category {
        match self {
            Details::DepthLimitExceeded(_) | Details::AllocationFailure => Category::Resource,
            _ => Category::Syntax,
        }
    }
}

impl Display for Details {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Details::EndOfInput => write!(f, "unexpected end of input"),
            Details::ExpectedValue => write!(f, "expected a value"),
            Details::ExpectedKey => write!(f, "expected a string key"),
            Details::ExpectedColon => write!(f, "expected ':' after key"),
            Details::InvalidArray => write!(f, "expected ',' or ']' within array"),
            Details::InvalidObject => write!(f, "expected ',' or '}}' within object"),
            Details::TrailingContent => write!(f, "trailing content after value"),
            Details::InvalidEscapeSequence(c) => write!(f, "invalid escape sequence '\\{}'", c),
            Details::InvalidUnicodeEscapeSequence => write!(f, "invalid unicode escape sequence"),
            Details::UnpairedSurrogate(unit) => write!(f, "unpaired surrogate \\u{:04x}", unit),
            Details::ControlCharacterInString(b) => {
                write!(f, "unescaped control character 0x{:02x} in string", b)
            }
            Details::NonUtf8InputDetected => write!(f, "string content is not valid utf-8"),
            Details::InvalidNumericRepresentation(repr) => {
                write!(f, "invalid numeric representation '{}'", repr)
            }
            Details::DepthLimitExceeded(limit) => {
                write!(f, "nesting depth exceeds the limit of {}", limit)
            }
            Details::AllocationFailure => write!(f, "memory allocation failed"),
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The global error code for the error
    pub details: Details,
    /// Where in the input the failure was detected
    pub coords: Coords,
}

impl Error {
    /// The absolute byte offset of the failure from the start of the input
    pub fn offset(&self) -> usize {
        self.coords.absolute
    }

    /// Shorthand for `self.details.category()`
    pub fn category(&self) -> Category {
        self.details.category()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.details, self.coords)
    }
}

impl std::error::Error for Error {}

/// Build an `Err` from a set of [Details] and a byte offset within the input of a
/// [crate::scanner::Scanner]
#[macro_export]
macro_rules! parser_error {
    ($details: expr, $scanner: expr, $offset: expr) => {
        Err($crate::errors::Error {
            details: $details,
            coords: $scanner.coords_at($offset),
        })
    };
    ($details: expr, $scanner: expr) => {
        Err($crate::errors::Error {
            details: $details,
            coords: $scanner.coords_at($scanner.position()),
        })
    };
}
