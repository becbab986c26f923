//! Byte cursor over a borrowed, sentinel-terminated source.
//!
//! Reading at or past the end of the source yields [`SENTINEL`], so the
//! scanners detect end-of-input by inspecting bytes rather than comparing
//! offsets. An interior `\0` byte is indistinguishable from the sentinel and
//! ends the scan at that point.

/// End-of-input marker returned by every read past the last byte.
pub const SENTINEL: u8 = b'\0';

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Scan position of one session.
///
/// `start` marks the first byte of the lexeme being built, `current` the next
/// unread byte and `line` the 1-based line of `current`.
/// Always `start <= current <= source.len()`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Cursor<'src> {
        Cursor {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn mark_start(&mut self) {
        self.start = self.current;
    }

    /// The text between `start` and `current`.
    ///
    /// Only called once the lexeme ends on an ASCII byte or a closing quote,
    /// both of which are UTF-8 boundaries.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.source
            .as_bytes()
            .get(offset)
            .copied()
            .unwrap_or(SENTINEL)
    }

    pub fn is_at_end(&self) -> bool {
        self.peek() == SENTINEL
    }

    /// Consumes and returns the current byte. At end-of-input the sentinel is
    /// returned and the cursor stays put.
    pub fn advance(&mut self) -> u8 {
        let c = self.peek();
        if self.current < self.source.len() {
            self.current += 1;
        }
        c
    }

    pub fn peek(&self) -> u8 {
        self.byte_at(self.current)
    }

    pub fn peek_next(&self) -> u8 {
        if self.is_at_end() {
            return SENTINEL;
        }
        self.byte_at(self.current + 1)
    }

    /// Consumes the current byte only if it equals `expected`.
    pub fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Skips spaces, tabs, carriage returns, newlines and `//` comments.
    ///
    /// A comment is consumed up to, not including, its newline so that the
    /// newline branch counts the line.
    pub fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.advance();
                }
                b'/' if self.peek_next() == b'/' => {
                    while !self.is_at_end() && self.peek() != b'\n' {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    /// Consumes UTF-8 continuation bytes so a multi-byte character is never
    /// split across tokens.
    pub fn skip_continuation_bytes(&mut self) {
        while (0x80..0xC0).contains(&self.peek()) {
            self.advance();
        }
    }
}
