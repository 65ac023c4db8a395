use crate::parser::{Match, MatchResult};
use crate::scanner::Scanner;
use crate::JsonValue;

/// Sequence of literal characters forming a 'null' token
const NULL_SEQUENCE: &[u8] = b"null";
/// Sequence of literal characters forming a 'true' token
const TRUE_SEQUENCE: &[u8] = b"true";
/// Sequence of literal characters forming a 'false' token
const FALSE_SEQUENCE: &[u8] = b"false";

/// Match (exactly) one of the literal keywords at the current position. Never fatal.
pub fn match_literal<'a>(scanner: &mut Scanner<'a>) -> MatchResult<JsonValue<'a>> {
    for (seq, value) in [
        (TRUE_SEQUENCE, JsonValue::Boolean(true)),
        (FALSE_SEQUENCE, JsonValue::Boolean(false)),
        (NULL_SEQUENCE, JsonValue::Null),
    ] {
        if scanner.matches(seq) {
            scanner.discard(seq.len());
            return Ok(Match::Success {
                value,
                consumed: seq.len(),
            });
        }
    }
    Ok(Match::NoMatch)
}
