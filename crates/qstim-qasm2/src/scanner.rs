//! Byte-level scanner for OpenQASM 2 source.
//!
//! The scanner never allocates for the text it reads: qubit indices are
//! copied byte for byte into the caller's buffer and mnemonics are returned
//! as slices of the input.

use crate::error::{TranslateError, TranslateResult};

/// Gate mnemonics reaching this many bytes are rejected.
pub const MAX_GATENAME_LEN: usize = 16;

/// Whitespace as understood by the scanner: tab through carriage return, and space.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, 9..=13 | b' ')
}

/// Characters allowed in a gate mnemonic.
#[inline]
pub fn is_mnemonic(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Characters that may continue an identifier after a keyword.
#[inline]
fn is_ident(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Printable ASCII as itself, anything else as `ASCII(n)`.
fn render_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        char::from(byte).to_string()
    } else {
        format!("ASCII({byte})")
    }
}

/// A read-only cursor over the input bytes.
///
/// The current line is tracked as the cursor moves, so `line` is O(1).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    /// Check if we've reached the end.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Peek at the current byte.
    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Advance past the current byte and return it.
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    /// Advance by `n` bytes, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.src.len());
        self.line += self.src[self.pos..end].iter().filter(|&&b| b == b'\n').count();
        self.pos = end;
    }

    /// 1-based line number of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Human-readable description of the current byte, for diagnostics.
    pub fn found(&self) -> String {
        match self.peek() {
            None => "end of input".into(),
            Some(b) if b.is_ascii_graphic() => format!("'{}'", b as char),
            Some(b) => render_byte(b),
        }
    }

    /// The current byte as diagnostic text without quotes, empty at the end.
    pub fn current_text(&self) -> String {
        self.peek().map(render_byte).unwrap_or_default()
    }

    /// Check if the input at the cursor starts with `literal`.
    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.src[self.pos..].starts_with(literal)
    }

    /// Check for `keyword` at the cursor as a whole word.
    pub fn at_keyword(&self, keyword: &[u8]) -> bool {
        self.starts_with(keyword)
            && !self
                .src
                .get(self.pos + keyword.len())
                .is_some_and(|&b| is_ident(b))
    }

    /// Consume `keyword` if it is at the cursor as a whole word.
    pub fn eat_keyword(&mut self, keyword: &[u8]) -> bool {
        if self.at_keyword(keyword) {
            self.advance(keyword.len());
            true
        } else {
            false
        }
    }

    /// Skip whitespace. A no-op on anything else.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.bump();
        }
    }

    /// Skip past the next newline, or to the end if there is none.
    pub fn skip_line(&mut self) {
        match self.src[self.pos..].iter().position(|&b| b == b'\n') {
            Some(offset) => {
                self.pos += offset + 1;
                self.line += 1;
            }
            None => self.pos = self.src.len(),
        }
    }

    /// Read a decimal literal terminated by `;` (left unconsumed).
    ///
    /// Only digits and a single decimal point are accepted; there is no
    /// exponent or sign support.
    pub fn read_float(&mut self) -> TranslateResult<f64> {
        self.skip_whitespace();
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.malformed_version());
        }

        let mut value = 0.0_f64;
        let mut divisor = 1.0_f64;
        let mut seen_point = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => {
                    value = value * 10.0 + f64::from(b - b'0');
                    if seen_point {
                        divisor *= 10.0;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            self.pos += 1;
        }

        self.skip_whitespace();
        if self.peek() != Some(b';') {
            return Err(self.malformed_version());
        }
        Ok(value / divisor)
    }

    /// Read a `q[<digits>]` reference, appending the digits to `out` verbatim.
    pub fn read_qubit_index(&mut self, out: &mut Vec<u8>) -> TranslateResult<()> {
        self.skip_whitespace();
        self.expect_byte(b'q', "'q'")?;
        self.expect_byte(b'[', "'['")?;

        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.malformed_qubit("a digit"));
        }
        out.extend_from_slice(&self.src[start..self.pos]);

        self.expect_byte(b']', "']'")
    }

    /// Read a gate mnemonic: the maximal run of letters and underscores.
    pub fn read_mnemonic(&mut self) -> TranslateResult<&'a [u8]> {
        let start = self.pos;
        let src = self.src;
        while self.peek().is_some_and(is_mnemonic) {
            if self.pos - start + 1 >= MAX_GATENAME_LEN {
                return Err(TranslateError::GateNameTooLong {
                    line: self.line(),
                    name: String::from_utf8_lossy(&src[start..self.pos]).into_owned(),
                });
            }
            self.pos += 1;
        }
        Ok(&src[start..self.pos])
    }

    fn expect_byte(&mut self, expected: u8, describe: &'static str) -> TranslateResult<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.malformed_qubit(describe))
        }
    }

    fn malformed_qubit(&self, expected: &'static str) -> TranslateError {
        TranslateError::MalformedQubitRef {
            line: self.line(),
            expected,
            found: self.found(),
        }
    }

    fn malformed_version(&self) -> TranslateError {
        TranslateError::MalformedVersion {
            line: self.line(),
            found: self.found(),
        }
    }
}
