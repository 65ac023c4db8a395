//! The DOM parser
//!
//! Parses the supplied input and produces a complete [JsonValue] tree. The tree either comes back
//! whole, or not at all: any partially built subtree is dropped as an error propagates out of the
//! recursion.
use std::ffi::CStr;

use log::{debug, trace};

use crate::errors::{Details, ParserResult};
use crate::options::{ParserOptions, TrailingContent};
use crate::parser::literals::match_literal;
use crate::parser::numbers::match_number;
use crate::parser::strings::match_string;
use crate::parser::{push_checked, Match, MatchResult};
use crate::parser_error;
use crate::scanner::Scanner;
use crate::JsonValue;

/// Try a production, returning from the enclosing function on success. `consumed` is measured
/// from `$start` so that it includes any whitespace skipped by the dispatcher.
macro_rules! attempt {
    ($production: expr, $scanner: expr, $start: expr) => {
        if let Match::Success { value, .. } = $production? {
            return Ok(Match::Success {
                value,
                consumed: $scanner.position() - $start,
            });
        }
    };
}

/// Report a missing element: end of input if that's what we ran into, `details` otherwise
fn expected<T>(scanner: &Scanner, details: Details) -> ParserResult<T> {
    if scanner.is_at_end() {
        parser_error!(Details::EndOfInput, scanner)
    } else {
        parser_error!(details, scanner)
    }
}

/// Main JSON parser struct
#[derive(Debug, Default, Clone)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a new instance of the parser using a specific set of [ParserOptions]
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options in effect for this parser
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a complete JSON document held in a byte slice
    pub fn parse_bytes<'a>(&self, bytes: &'a [u8]) -> ParserResult<JsonValue<'a>> {
        self.parse(bytes, self.options.trailing).map(|(value, _)| value)
    }

    pub fn parse_str<'a>(&self, str: &'a str) -> ParserResult<JsonValue<'a>> {
        self.parse_bytes(str.as_bytes())
    }

    /// Parse null-terminated input. The terminator marks the end of the input.
    pub fn parse_c_str<'a>(&self, str: &'a CStr) -> ParserResult<JsonValue<'a>> {
        self.parse_bytes(str.to_bytes())
    }

    /// Parse the first value in `bytes`, ignoring whatever follows it regardless of the configured
    /// [TrailingContent] policy. Returns the value along with the number of bytes it occupied,
    /// including any leading whitespace.
    pub fn parse_prefix<'a>(&self, bytes: &'a [u8]) -> ParserResult<(JsonValue<'a>, usize)> {
        self.parse(bytes, TrailingContent::Ignore)
    }

    fn parse<'a>(
        &self,
        bytes: &'a [u8],
        trailing: TrailingContent,
    ) -> ParserResult<(JsonValue<'a>, usize)> {
        let mut scanner = Scanner::new(bytes);
        let result = self.parse_root(&mut scanner, trailing);
        if let Err(err) = &result {
            debug!("failed to parse {} bytes of input: {}", bytes.len(), err);
        }
        result
    }

    fn parse_root<'a>(
        &self,
        scanner: &mut Scanner<'a>,
        trailing: TrailingContent,
    ) -> ParserResult<(JsonValue<'a>, usize)> {
        match self.parse_value(scanner, 0)? {
            Match::Success { value, consumed } => {
                if trailing == TrailingContent::Reject {
                    scanner.skip_whitespace();
                    if !scanner.is_at_end() {
                        return parser_error!(Details::TrailingContent, scanner);
                    }
                }
                Ok((value, consumed))
            }
            Match::NoMatch => expected(scanner, Details::ExpectedValue),
        }
    }

    /// The value dispatcher. Skips leading whitespace and then tries each production in turn.
    /// `depth` is the number of arrays/objects enclosing this value.
    fn parse_value<'a>(
        &self,
        scanner: &mut Scanner<'a>,
        depth: usize,
    ) -> MatchResult<JsonValue<'a>> {
        let start = scanner.position();
        scanner.skip_whitespace();
        attempt!(match_literal(scanner), scanner, start);
        attempt!(
            match_string(scanner).map(|m| m.map(JsonValue::String)),
            scanner,
            start
        );
        attempt!(match_number(scanner), scanner, start);
        attempt!(self.parse_array(scanner, depth), scanner, start);
        attempt!(self.parse_object(scanner, depth), scanner, start);
        Ok(Match::NoMatch)
    }

    /// Bump the nesting depth on entry to an array or object
    fn enter(&self, scanner: &Scanner, depth: usize) -> ParserResult<usize> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return parser_error!(Details::DepthLimitExceeded(self.options.max_depth), scanner);
        }
        Ok(depth)
    }

    /// An array is just a list of comma separated values
    fn parse_array<'a>(
        &self,
        scanner: &mut Scanner<'a>,
        depth: usize,
    ) -> MatchResult<JsonValue<'a>> {
        let start = scanner.position();
        if scanner.peek() != Some(b'[') {
            return Ok(Match::NoMatch);
        }
        let depth = self.enter(scanner, depth)?;
        scanner.discard(1);
        trace!("array opened at {} (depth {})", start, depth);

        let mut values: Vec<JsonValue<'a>> = vec![];
        scanner.skip_whitespace();
        if scanner.peek() == Some(b']') {
            scanner.discard(1);
        } else {
            loop {
                let offset = scanner.position();
                match self.parse_value(scanner, depth)? {
                    Match::Success { value, .. } => {
                        push_checked(&mut values, value, scanner, offset)?
                    }
                    Match::NoMatch => return expected(scanner, Details::ExpectedValue),
                }
                scanner.skip_whitespace();
                let offset = scanner.position();
                match scanner.consume() {
                    Some(b',') => (),
                    Some(b']') => break,
                    Some(_) => return parser_error!(Details::InvalidArray, scanner, offset),
                    None => return parser_error!(Details::EndOfInput, scanner, offset),
                }
            }
        }

        trace!("array closed with {} values (depth {})", values.len(), depth);
        Ok(Match::Success {
            value: JsonValue::Array(values),
            consumed: scanner.position() - start,
        })
    }

    /// An object is just a list of comma separated KV pairs
    fn parse_object<'a>(
        &self,
        scanner: &mut Scanner<'a>,
        depth: usize,
    ) -> MatchResult<JsonValue<'a>> {
        let start = scanner.position();
        if scanner.peek() != Some(b'{') {
            return Ok(Match::NoMatch);
        }
        let depth = self.enter(scanner, depth)?;
        scanner.discard(1);
        trace!("object opened at {} (depth {})", start, depth);

        let mut pairs = vec![];
        scanner.skip_whitespace();
        if scanner.peek() == Some(b'}') {
            scanner.discard(1);
        } else {
            loop {
                scanner.skip_whitespace();
                let offset = scanner.position();
                let key = match match_string(scanner)? {
                    Match::Success { value, .. } => value,
                    Match::NoMatch => return expected(scanner, Details::ExpectedKey),
                };

                scanner.skip_whitespace();
                let colon = scanner.position();
                match scanner.consume() {
                    Some(b':') => (),
                    Some(_) => return parser_error!(Details::ExpectedColon, scanner, colon),
                    None => return parser_error!(Details::EndOfInput, scanner, colon),
                }

                match self.parse_value(scanner, depth)? {
                    Match::Success { value, .. } => {
                        push_checked(&mut pairs, (key, value), scanner, offset)?
                    }
                    Match::NoMatch => return expected(scanner, Details::ExpectedValue),
                }

                scanner.skip_whitespace();
                let offset = scanner.position();
                match scanner.consume() {
                    Some(b',') => (),
                    Some(b'}') => break,
                    Some(_) => return parser_error!(Details::InvalidObject, scanner, offset),
                    None => return parser_error!(Details::EndOfInput, scanner, offset),
                }
            }
        }

        trace!("object closed with {} members (depth {})", pairs.len(), depth);
        Ok(Match::Success {
            value: JsonValue::Object(pairs),
            consumed: scanner.position() - start,
        })
    }
}
