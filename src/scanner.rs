//! Byte-level scanner with bounded lookahead. Every production in the parser works over a single
//! shared [Scanner], so positions reported in errors are always absolute offsets from the start
//! of the input rather than offsets relative to whichever production happened to fail.
//!
//! The scanner never reads past the end of the supplied slice; running out of input is reported
//! as `None` from the lookahead and consume operations.

use crate::coords::Coords;

/// Checks whether a byte is JSON whitespace (RFC 8259 only allows these four)
#[inline(always)]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// A cursor over a byte slice
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The complete input
    input: &'a [u8],
    /// Offset of the next unconsumed byte
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `input`
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, position: 0 }
    }

    /// The absolute offset of the next unconsumed byte
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Checks whether all input has been consumed
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Looks ahead in the input by a given count without consuming anything. A count of 1 is the
    /// next unconsumed byte. Returns [None] if there are insufficient bytes available.
    #[inline]
    pub fn lookahead(&self, count: usize) -> Option<u8> {
        assert!(count > 0);
        self.input.get(self.position + count - 1).copied()
    }

    /// Shorthand for `lookahead(1)`
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.lookahead(1)
    }

    /// Consume and return the next byte
    #[inline]
    pub fn consume(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        Some(b)
    }

    /// Discard the next `count` bytes, stopping at the end of the input
    #[inline]
    pub fn discard(&mut self, count: usize) {
        self.position = (self.position + count).min(self.input.len());
    }

    /// Checks whether the unconsumed input starts with `seq`
    #[inline]
    pub fn matches(&self, seq: &[u8]) -> bool {
        self.remaining().starts_with(seq)
    }

    /// Advance over any whitespace, returning the number of bytes skipped
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.position;
        while let Some(b) = self.peek() {
            if !is_whitespace(b) {
                break;
            }
            self.position += 1;
        }
        self.position - start
    }

    /// The unconsumed portion of the input
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.position..]
    }

    /// A slice of the input between two absolute offsets
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Compute the [Coords] of an absolute offset
    pub fn coords_at(&self, offset: usize) -> Coords {
        Coords::from_offset(self.input, offset)
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;

    #[test]
    fn should_handle_empty_input() {
        let mut scanner = Scanner::new(b"");
        assert!(scanner.is_at_end());
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.consume(), None);
        assert_eq!(scanner.skip_whitespace(), 0);
    }

    #[test]
    fn should_skip_json_whitespace_only() {
        let mut scanner = Scanner::new(b" \t\r\n\x0b[");
        assert_eq!(scanner.skip_whitespace(), 4);
        assert_eq!(scanner.peek(), Some(0x0b));
    }

    #[test]
    fn should_look_ahead_without_consuming() {
        let mut scanner = Scanner::new(b"123456789");
        assert_eq!(scanner.lookahead(4), Some(b'4'));
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.consume(), Some(b'1'));
        assert_eq!(scanner.lookahead(9), None);
    }

    #[should_panic]
    #[test]
    fn lookahead_bounds_check() {
        let scanner = Scanner::new(b"{}[],:");
        assert!(scanner.lookahead(34).is_none());
        let _ = scanner.lookahead(0);
    }

    #[test]
    fn should_clamp_discards_to_the_input() {
        let mut scanner = Scanner::new(b"null");
        assert!(scanner.matches(b"nu"));
        scanner.discard(10);
        assert!(scanner.is_at_end());
        assert_eq!(scanner.position(), 4);
    }
}
