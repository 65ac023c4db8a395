//! The recursive-descent parser. Each grammar production lives in its own module and reports one
//! of three outcomes:
//! - `Ok(Match::NoMatch)`: the production's leading syntax isn't present, so the caller may try
//! an alternative. Nothing has been consumed apart from (possibly) leading whitespace.
//! - `Ok(Match::Success { .. })`: the production matched and consumed `consumed` bytes.
//! - `Err(_)`: the production committed past its opening token and then found malformed input.
//! This is never retried with another alternative.

use crate::errors::{Details, ParserResult};
use crate::parser_error;
use crate::scanner::Scanner;

/// The DOM parser and value dispatcher
pub mod dom;
/// `true`, `false` and `null`
pub(crate) mod literals;
/// Strict JSON numbers
pub(crate) mod numbers;
/// Quoted strings and escape decoding
pub(crate) mod strings;

/// The non-fatal outcome of attempting a production
#[derive(Debug, PartialEq)]
pub enum Match<T> {
    /// The production doesn't apply at the current position
    NoMatch,
    /// The production matched
    Success {
        /// The matched value
        value: T,
        /// Number of input bytes consumed
        consumed: usize,
    },
}

impl<T> Match<T> {
    /// Transform the matched value, leaving the consumed count intact
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Match<U> {
        match self {
            Match::NoMatch => Match::NoMatch,
            Match::Success { value, consumed } => Match::Success {
                value: f(value),
                consumed,
            },
        }
    }
}

/// Result type returned by every production
pub type MatchResult<T> = ParserResult<Match<T>>;

/// Append to a vector, reporting allocation failure as an error rather than aborting. Growth is
/// amortised, so repeated appends stay O(1).
pub(crate) fn push_checked<T>(
    vec: &mut Vec<T>,
    item: T,
    scanner: &Scanner,
    offset: usize,
) -> ParserResult<()> {
    if vec.len() == vec.capacity() && vec.try_reserve(1).is_err() {
        return parser_error!(Details::AllocationFailure, scanner, offset);
    }
    vec.push(item);
    Ok(())
}

/// Append a run of bytes to a buffer, reporting allocation failure as an error
pub(crate) fn extend_checked(
    buffer: &mut Vec<u8>,
    bytes: &[u8],
    scanner: &Scanner,
    offset: usize,
) -> ParserResult<()> {
    if buffer.try_reserve(bytes.len()).is_err() {
        return parser_error!(Details::AllocationFailure, scanner, offset);
    }
    buffer.extend_from_slice(bytes);
    Ok(())
}
