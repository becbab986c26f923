//! The scanning state machine.
//!
//! Each call to [`Scanner::scan_token`] skips whitespace and comments, marks
//! the start of the next lexeme, then dispatches on its first byte.

use crate::{errors::errors::ErrorImpl, MK_OPERATOR, MK_TOKEN};

use super::{
    cursor::{is_alpha, is_alphanumeric, is_digit, Cursor},
    keywords::identifier_type,
    lexer::Tokens,
    tokens::{Token, TokenKind},
};

/// One scan session over a borrowed source.
///
/// The session owns its cursor, so independent scanners never share state
/// and may run on separate threads.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Rebinds the session to a new source and restarts at line 1.
    pub fn reset(&mut self, source: &'src str) {
        self.cursor = Cursor::new(source);
    }

    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Consumes the scanner, yielding tokens up to and including `EOF`.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens::new(self)
    }

    /// Scans and returns the next token.
    ///
    /// Never fails: lexical errors are returned as [`TokenKind::Error`]
    /// tokens and the cursor is left after the offending input. Once the end
    /// of the source is reached every further call returns `EOF`.
    pub fn scan_token(&mut self) -> Token<'src> {
        self.cursor.skip_whitespace();
        self.cursor.mark_start();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::EOF);
        }

        let c = self.cursor.advance();
        if is_alpha(c) {
            return self.identifier();
        }
        if is_digit(c) {
            return self.number();
        }

        match c {
            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'[' => self.make_token(TokenKind::LeftBracket),
            b']' => self.make_token(TokenKind::RightBracket),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b';' => self.make_token(TokenKind::Semicolon),
            b'~' => self.make_token(TokenKind::Tilde),

            b'"' => self.string(),
            b'\'' => self.character(),

            b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'=' | b'!' | b'<' | b'>' => {
                self.operator(c)
            }

            _ => {
                if !c.is_ascii() {
                    self.cursor.skip_continuation_bytes();
                }
                self.error_token(ErrorImpl::UnexpectedCharacter)
            }
        }
    }

    pub(crate) fn matches(&mut self, expected: u8) -> bool {
        self.cursor.matches(expected)
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        MK_TOKEN!(
            kind,
            self.cursor.lexeme(),
            self.cursor.start(),
            self.cursor.line()
        )
    }

    fn error_token(&self, error: ErrorImpl) -> Token<'src> {
        MK_TOKEN!(
            TokenKind::Error,
            error.message(),
            self.cursor.start(),
            self.cursor.line()
        )
    }

    fn identifier(&mut self) -> Token<'src> {
        while is_alphanumeric(self.cursor.peek()) {
            self.cursor.advance();
        }

        self.make_token(identifier_type(self.cursor.lexeme()))
    }

    fn number(&mut self) -> Token<'src> {
        let mut decimal_points = 0;

        loop {
            let c = self.cursor.peek();
            if is_digit(c) {
                self.cursor.advance();
            } else if c == b'.' && is_digit(self.cursor.peek_next()) {
                decimal_points += 1;
                self.cursor.advance();
            } else {
                break;
            }
        }

        if decimal_points > 1 {
            return self.error_token(ErrorImpl::MalformedNumber);
        }

        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'src> {
        self.quoted(
            b'"',
            TokenKind::StringLiteral,
            ErrorImpl::MultiLineString,
            ErrorImpl::UnterminatedString,
        )
    }

    fn character(&mut self) -> Token<'src> {
        self.quoted(
            b'\'',
            TokenKind::CharLiteral,
            ErrorImpl::MultiLineCharacter,
            ErrorImpl::UnterminatedCharacter,
        )
    }

    /// Scans the body of a quoted literal whose opening quote was consumed.
    ///
    /// A newline inside the quotes is left unconsumed so the next call counts
    /// the line.
    fn quoted(
        &mut self,
        quote: u8,
        kind: TokenKind,
        multi_line: ErrorImpl,
        unterminated: ErrorImpl,
    ) -> Token<'src> {
        while !self.cursor.is_at_end() && self.cursor.peek() != quote {
            if self.cursor.peek() == b'\n' {
                return self.error_token(multi_line);
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return self.error_token(unterminated);
        }

        // closing quote
        self.cursor.advance();
        self.make_token(kind)
    }

    fn operator(&mut self, c: u8) -> Token<'src> {
        match c {
            b'+' => MK_OPERATOR!(self, TokenKind::Plus,
                b'+' => TokenKind::PlusPlus,
                b'=' => TokenKind::PlusEqual),
            b'-' => MK_OPERATOR!(self, TokenKind::Minus,
                b'-' => TokenKind::MinusMinus,
                b'=' => TokenKind::MinusEqual,
                b'>' => TokenKind::MinusGreater),
            b'*' => MK_OPERATOR!(self, TokenKind::Star, b'=' => TokenKind::StarEqual),
            b'/' => MK_OPERATOR!(self, TokenKind::Slash, b'=' => TokenKind::SlashEqual),
            b'%' => MK_OPERATOR!(self, TokenKind::Percent, b'=' => TokenKind::PercentEqual),
            b'&' => MK_OPERATOR!(self, TokenKind::Amper,
                b'&' => TokenKind::AmperAmper,
                b'=' => TokenKind::AmperEqual),
            b'|' => MK_OPERATOR!(self, TokenKind::Pipe,
                b'|' => TokenKind::PipePipe,
                b'=' => TokenKind::PipeEqual),
            b'^' => MK_OPERATOR!(self, TokenKind::Hat, b'=' => TokenKind::HatEqual),
            b'=' => MK_OPERATOR!(self, TokenKind::Equal, b'=' => TokenKind::EqualEqual),
            b'!' => MK_OPERATOR!(self, TokenKind::Bang, b'=' => TokenKind::BangEqual),
            b'<' => MK_OPERATOR!(self, TokenKind::Less,
                b'<' => TokenKind::LessLess,
                b'=' => TokenKind::LessEqual),
            b'>' => MK_OPERATOR!(self, TokenKind::Greater,
                b'>' => TokenKind::GreaterGreater,
                b'=' => TokenKind::GreaterEqual),
            _ => self.error_token(ErrorImpl::UnexpectedCharacter),
        }
    }
}
