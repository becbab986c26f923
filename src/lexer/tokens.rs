use std::fmt::Display;

use crate::errors::errors::ErrorImpl;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,

    Identifier,
    Number,
    StringLiteral,
    CharLiteral,

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    Tilde,

    Plus,
    PlusPlus,  // ++
    PlusEqual, // +=

    Minus,
    MinusMinus,   // --
    MinusEqual,   // -=
    MinusGreater, // ->

    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,

    Amper,
    AmperAmper, // &&
    AmperEqual,
    Pipe,
    PipePipe, // ||
    PipeEqual,
    Hat,
    HatEqual,

    Equal,      // =
    EqualEqual, // ==
    Bang,       // !
    BangEqual,  // !=

    Less,
    LessLess, // <<
    LessEqual,
    Greater,
    GreaterGreater, // >>
    GreaterEqual,

    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Float,
    For,
    Goto,
    If,
    Int,
    Long,
    Return,
    Short,
    Sizeof,
    String, // the `string` type keyword, not a literal
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Void,
    While,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Break
                | TokenKind::Case
                | TokenKind::Char
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Default
                | TokenKind::Do
                | TokenKind::Double
                | TokenKind::Else
                | TokenKind::Enum
                | TokenKind::Float
                | TokenKind::For
                | TokenKind::Goto
                | TokenKind::If
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Return
                | TokenKind::Short
                | TokenKind::Sizeof
                | TokenKind::String
                | TokenKind::Struct
                | TokenKind::Switch
                | TokenKind::Typedef
                | TokenKind::Union
                | TokenKind::Unsigned
                | TokenKind::Void
                | TokenKind::While
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical token.
///
/// `lexeme` borrows from the scanned source, except for [`TokenKind::Error`]
/// tokens where it holds the static diagnostic message. `start` is the byte
/// offset of the lexeme in the source in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub start: usize,
    pub line: u32,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() || self.kind == TokenKind::Error {
            write!(f, "{:>4} {} ({})", self.line, self.kind, self.lexeme)
        } else {
            write!(f, "{:>4} {}", self.line, self.kind)
        }
    }
}

impl<'src> Token<'src> {
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Returns the lexical error this token reports, if it is an error token.
    pub fn error(&self) -> Option<ErrorImpl> {
        if self.kind != TokenKind::Error {
            return None;
        }

        ErrorImpl::from_message(self.lexeme)
    }
}
