use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    found: Option<char>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            found: None,
        }
    }

    /// Builds an error from an error token produced while scanning `source`.
    ///
    /// Returns `None` for tokens that do not report a lexical error.
    pub fn from_token(token: &Token<'_>, source: &str, file: Rc<String>) -> Option<Self> {
        if token.kind != TokenKind::Error {
            return None;
        }

        let internal_error = token.error()?;
        let found = match internal_error {
            ErrorImpl::UnexpectedCharacter => source
                .get(token.start..)
                .and_then(|rest| rest.chars().next()),
            _ => None,
        };

        Some(Error {
            internal_error,
            position: Position {
                line: token.line,
                offset: token.start,
                file,
            },
            found,
        })
    }

    pub fn get_error(&self) -> ErrorImpl {
        self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MultiLineString => "MultiLineString",
            ErrorImpl::UnterminatedCharacter => "UnterminatedCharacter",
            ErrorImpl::MultiLineCharacter => "MultiLineCharacter",
            ErrorImpl::MalformedNumber => "MalformedNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => match self.found {
                Some(found) => ErrorTip::Suggestion(format!(
                    "Unexpected character: `{}`, it is not part of any token",
                    found
                )),
                None => ErrorTip::None,
            },
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Add a closing `\"` before the end of the file",
            )),
            ErrorImpl::MultiLineString => ErrorTip::Suggestion(String::from(
                "Strings may not span lines, close the `\"` before the line break",
            )),
            ErrorImpl::UnterminatedCharacter => ErrorTip::Suggestion(String::from(
                "Add a closing `'` before the end of the file",
            )),
            ErrorImpl::MultiLineCharacter => ErrorTip::Suggestion(String::from(
                "Characters may not span lines, close the `'` before the line break",
            )),
            ErrorImpl::MalformedNumber => ErrorTip::Suggestion(String::from(
                "A number may contain at most one `.`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.file, self.position.line, self.internal_error
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Lexical failures. The `Display` text of each variant is the message that
/// error tokens carry as their lexeme.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Not support multi-line string.")]
    MultiLineString,
    #[error("Unterminated character.")]
    UnterminatedCharacter,
    #[error("Not support multi-line character.")]
    MultiLineCharacter,
    #[error("Number contains multiple decimal points.")]
    MalformedNumber,
}

impl ErrorImpl {
    pub const ALL: [ErrorImpl; 6] = [
        ErrorImpl::UnexpectedCharacter,
        ErrorImpl::UnterminatedString,
        ErrorImpl::MultiLineString,
        ErrorImpl::UnterminatedCharacter,
        ErrorImpl::MultiLineCharacter,
        ErrorImpl::MalformedNumber,
    ];

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorImpl::UnexpectedCharacter => "Unexpected character.",
            ErrorImpl::UnterminatedString => "Unterminated string.",
            ErrorImpl::MultiLineString => "Not support multi-line string.",
            ErrorImpl::UnterminatedCharacter => "Unterminated character.",
            ErrorImpl::MultiLineCharacter => "Not support multi-line character.",
            ErrorImpl::MalformedNumber => "Number contains multiple decimal points.",
        }
    }

    pub fn from_message(message: &str) -> Option<ErrorImpl> {
        ErrorImpl::ALL
            .into_iter()
            .find(|error| error.message() == message)
    }
}
