use crate::errors::Details;
use crate::parser::{Match, MatchResult};
use crate::parser_error;
use crate::scanner::Scanner;
use crate::JsonValue;

/// Count the run of ASCII digits at the start of `bytes`
#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest valid JSON number at the start of `bytes`, following the RFC 8259
/// grammar `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`. A fraction or exponent
/// without digits isn't part of the token, so `1.` scans as `1`.
fn scan_number(bytes: &[u8]) -> Option<usize> {
    let mut index = 0;
    if bytes.first() == Some(&b'-') {
        index += 1;
    }
    match bytes.get(index) {
        Some(b'0') => index += 1,
        Some(b'1'..=b'9') => index += 1 + count_digits(&bytes[index + 1..]),
        _ => return None,
    }
    if bytes.get(index) == Some(&b'.') {
        let digits = count_digits(&bytes[index + 1..]);
        if digits > 0 {
            index += 1 + digits;
        }
    }
    if matches!(bytes.get(index), Some(b'e') | Some(b'E')) {
        let mut exponent = index + 1;
        if matches!(bytes.get(exponent), Some(b'+') | Some(b'-')) {
            exponent += 1;
        }
        let digits = count_digits(&bytes[exponent..]);
        if digits > 0 {
            index = exponent + digits;
        }
    }
    Some(index)
}

#[cfg(not(feature = "lexical_floats"))]
#[inline]
fn to_f64(token: &[u8]) -> Option<f64> {
    fast_float::parse::<f64, _>(token).ok()
}

#[cfg(feature = "lexical_floats")]
#[inline]
fn to_f64(token: &[u8]) -> Option<f64> {
    lexical::parse::<f64, _>(token).ok()
}

/// Attempt to match on a number representation. The grammar is checked here, and the actual
/// conversion is then handed off to fast_float (or lexical), both of which would otherwise
/// accept forms that JSON doesn't allow. Values overflowing an `f64` are rejected.
pub fn match_number<'a>(scanner: &mut Scanner<'a>) -> MatchResult<JsonValue<'a>> {
    let len = match scan_number(scanner.remaining()) {
        Some(len) => len,
        None => return Ok(Match::NoMatch),
    };
    let start = scanner.position();
    let token = scanner.slice(start, start + len);
    match to_f64(token) {
        Some(value) if value.is_finite() => {
            scanner.discard(len);
            Ok(Match::Success {
                value: JsonValue::Number(value),
                consumed: len,
            })
        }
        _ => parser_error!(
            Details::InvalidNumericRepresentation(String::from_utf8_lossy(token).into_owned()),
            scanner,
            start
        ),
    }
}
