use std::borrow::Cow;

use crate::errors::{Details, ParserResult};
use crate::parser::{extend_checked, Match, MatchResult};
use crate::parser_error;
use crate::scanner::Scanner;

/// Validate a run of raw (unescaped) string content as UTF-8
fn validate_raw<'a>(scanner: &Scanner<'a>, start: usize, end: usize) -> ParserResult<&'a str> {
    match std::str::from_utf8(scanner.slice(start, end)) {
        Ok(s) => Ok(s),
        Err(err) => parser_error!(
            Details::NonUtf8InputDetected,
            scanner,
            start + err.valid_up_to()
        ),
    }
}

/// Read exactly four hex digits following `\u`. `escape_offset` is the offset of the backslash
/// and is used when reporting a malformed sequence.
fn match_hex_quad(scanner: &mut Scanner, escape_offset: usize) -> ParserResult<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let offset = scanner.position();
        let digit = match scanner.consume() {
            Some(b) => (b as char).to_digit(16),
            None => return parser_error!(Details::EndOfInput, scanner, offset),
        };
        match digit {
            Some(d) => unit = (unit << 4) | d as u16,
            None => {
                return parser_error!(
                    Details::InvalidUnicodeEscapeSequence,
                    scanner,
                    escape_offset
                )
            }
        }
    }
    Ok(unit)
}

/// Decode the remainder of a `\u` escape into a [char]. Surrogate pairs written as two
/// consecutive escapes are combined; a lone surrogate from either half of the range is an error.
fn match_unicode_escape_sequence(
    scanner: &mut Scanner,
    escape_offset: usize,
) -> ParserResult<char> {
    let unit = match_hex_quad(scanner, escape_offset)?;
    let code_point = match unit {
        0xD800..=0xDBFF => {
            if !scanner.matches(b"\\u") {
                return parser_error!(Details::UnpairedSurrogate(unit), scanner, escape_offset);
            }
            let low_offset = scanner.position();
            scanner.discard(2);
            let low = match_hex_quad(scanner, low_offset)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return parser_error!(Details::UnpairedSurrogate(unit), scanner, escape_offset);
            }
            0x10000 + (((unit as u32) - 0xD800) << 10) + ((low as u32) - 0xDC00)
        }
        0xDC00..=0xDFFF => {
            return parser_error!(Details::UnpairedSurrogate(unit), scanner, escape_offset)
        }
        _ => unit as u32,
    };
    match char::from_u32(code_point) {
        Some(c) => Ok(c),
        None => parser_error!(Details::InvalidUnicodeEscapeSequence, scanner, escape_offset),
    }
}

/// Match a valid string escape sequence, the leading backslash having already been consumed, and
/// append its decoded form to `buffer`
fn match_escape_sequence(
    scanner: &mut Scanner,
    buffer: &mut Vec<u8>,
    escape_offset: usize,
) -> ParserResult<()> {
    let offset = scanner.position();
    let decoded = match scanner.consume() {
        Some(b'"') => b'"',
        Some(b'\\') => b'\\',
        Some(b'/') => b'/',
        Some(b'b') => 0x08,
        Some(b'f') => 0x0c,
        Some(b'n') => b'\n',
        Some(b'r') => b'\r',
        Some(b't') => b'\t',
        Some(b'u') => {
            let c = match_unicode_escape_sequence(scanner, escape_offset)?;
            let mut utf8 = [0u8; 4];
            return extend_checked(
                buffer,
                c.encode_utf8(&mut utf8).as_bytes(),
                scanner,
                escape_offset,
            );
        }
        Some(other) => {
            return parser_error!(
                Details::InvalidEscapeSequence(other as char),
                scanner,
                escape_offset
            )
        }
        None => return parser_error!(Details::EndOfInput, scanner, offset),
    };
    extend_checked(buffer, &[decoded], scanner, escape_offset)
}

/// Attempts to match a quoted string, decoding any escape sequences. Strings without escapes
/// are borrowed directly from the input; a decode buffer is only allocated once the first escape
/// is seen. Once the opening quote has been consumed every problem is fatal, and the scan for the
/// closing quote never goes beyond the end of the input.
pub fn match_string<'a>(scanner: &mut Scanner<'a>) -> MatchResult<Cow<'a, str>> {
    let start = scanner.position();
    if scanner.peek() != Some(b'"') {
        return Ok(Match::NoMatch);
    }
    scanner.discard(1);

    let mut decoded: Option<Vec<u8>> = None;
    let mut run_start = scanner.position();
    let end = loop {
        let offset = scanner.position();
        match scanner.consume() {
            Some(b'"') => break offset,
            Some(b'\\') => {
                let raw = validate_raw(scanner, run_start, offset)?;
                let buffer = decoded.get_or_insert_with(Vec::new);
                extend_checked(buffer, raw.as_bytes(), scanner, run_start)?;
                match_escape_sequence(scanner, buffer, offset)?;
                run_start = scanner.position();
            }
            Some(b) if b < 0x20 => {
                return parser_error!(Details::ControlCharacterInString(b), scanner, offset)
            }
            Some(_) => (),
            None => return parser_error!(Details::EndOfInput, scanner, offset),
        }
    };

    let raw = validate_raw(scanner, run_start, end)?;
    let value = match decoded {
        None => Cow::Borrowed(raw),
        Some(mut buffer) => {
            extend_checked(&mut buffer, raw.as_bytes(), scanner, run_start)?;
            match String::from_utf8(buffer) {
                Ok(s) => Cow::Owned(s),
                Err(_) => return parser_error!(Details::NonUtf8InputDetected, scanner, start),
            }
        }
    };
    Ok(Match::Success {
        value,
        consumed: scanner.position() - start,
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::errors::Details;
    use crate::parser::strings::match_string;
    use crate::parser::Match;
    use crate::scanner::Scanner;

    fn decode(input: &[u8]) -> Cow<str> {
        let mut scanner = Scanner::new(input);
        match match_string(&mut scanner).unwrap() {
            Match::Success { value, consumed } => {
                assert_eq!(consumed, input.len());
                value
            }
            Match::NoMatch => panic!("no match for {:?}", input),
        }
    }

    fn failure(input: &[u8]) -> (Details, usize) {
        let mut scanner = Scanner::new(input);
        let err = match_string(&mut scanner).unwrap_err();
        let offset = err.offset();
        (err.details, offset)
    }

    #[test]
    fn should_borrow_strings_without_escapes() {
        let value = decode("\"héllo wörld\"".as_bytes());
        assert!(matches!(value, Cow::Borrowed("héllo wörld")));
        assert!(matches!(decode(b"\"\""), Cow::Borrowed("")));
    }

    #[test]
    fn should_decode_simple_escapes() {
        assert_eq!(decode(br#""\n""#), "\n");
        assert_eq!(decode(br#""\n""#).as_bytes(), &[0x0a]);
        assert_eq!(
            decode(br#""a\"b\\c\/d\be\ff\ng\rh\ti""#),
            "a\"b\\c/d\u{8}e\u{c}f\ng\rh\ti"
        );
    }

    #[test]
    fn should_encode_unicode_escapes_as_utf8() {
        assert_eq!(decode(br#""\u0041""#).as_bytes(), &[0x41]);
        assert_eq!(decode(br#""\u00e9""#).as_bytes(), &[0xc3, 0xa9]);
        assert_eq!(decode(br#""\u2603""#), "\u{2603}");
        assert_eq!(decode(br#""\uFFFF""#), "\u{ffff}");
        assert_eq!(decode(br#""\u0000""#).as_bytes(), &[0x00]);
    }

    #[test]
    fn should_combine_surrogate_pairs() {
        let value = decode(br#""\ud83d\ude00""#);
        assert_eq!(value, "\u{1f600}");
        assert_eq!(value.as_bytes(), &[0xf0, 0x9f, 0x98, 0x80]);
        assert_eq!(decode(br#""x\uD834\uDD1Ey""#), "x\u{1d11e}y");
    }

    #[test]
    fn should_reject_unpaired_surrogates() {
        assert_eq!(failure(br#""ab\ud83d""#), (Details::UnpairedSurrogate(0xd83d), 3));
        assert_eq!(
            failure(br#""\ud83d\u0041""#),
            (Details::UnpairedSurrogate(0xd83d), 1)
        );
        assert_eq!(failure(br#""\ude00""#), (Details::UnpairedSurrogate(0xde00), 1));
    }

    #[test]
    fn should_reject_malformed_escapes() {
        assert_eq!(failure(br#""a\x""#), (Details::InvalidEscapeSequence('x'), 2));
        assert_eq!(
            failure(br#""\u12G4""#),
            (Details::InvalidUnicodeEscapeSequence, 1)
        );
        assert_eq!(failure(br#""\u12"#), (Details::EndOfInput, 5));
    }

    #[test]
    fn should_stop_at_the_end_of_input() {
        assert_eq!(failure(b"\"unterminated"), (Details::EndOfInput, 13));
        assert_eq!(failure(b"\"trailing\\"), (Details::EndOfInput, 10));
    }

    #[test]
    fn should_reject_raw_control_characters() {
        assert_eq!(
            failure(b"\"line\nbreak\""),
            (Details::ControlCharacterInString(b'\n'), 5)
        );
    }

    #[test]
    fn should_reject_invalid_utf8() {
        assert_eq!(failure(b"\"ab\xff\""), (Details::NonUtf8InputDetected, 3));
        assert_eq!(
            failure(b"\"\\n\xc3\x28\""),
            (Details::NonUtf8InputDetected, 3)
        );
    }

    #[test]
    fn should_not_match_without_a_quote() {
        let mut scanner = Scanner::new(b"'single'");
        assert_eq!(match_string(&mut scanner).unwrap(), Match::NoMatch);
        assert_eq!(scanner.position(), 0);
    }
}
