use std::rc::Rc;

use crate::errors::errors::Error;

use super::{
    scanner::Scanner,
    tokens::{Token, TokenKind},
};

/// Iterator over a scan session, ending after the `EOF` token.
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    pub fn new(scanner: Scanner<'src>) -> Tokens<'src> {
        Tokens {
            scanner,
            finished: false,
        }
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.scanner.scan_token();
        match token.kind {
            TokenKind::EOF => self.finished = true,
            TokenKind::Error => {
                tracing::debug!(line = token.line, offset = token.start, "{}", token.lexeme)
            }
            _ => {}
        }
        tracing::trace!(kind = %token.kind, lexeme = token.lexeme, line = token.line, "scanned token");

        Some(token)
    }
}

/// Scans the whole source, stopping at the first lexical error.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token<'_>>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut tokens = vec![];

    for token in Scanner::new(source).tokens() {
        if let Some(error) = Error::from_token(&token, source, Rc::clone(&file_name)) {
            return Err(error);
        }
        tokens.push(token);
    }

    tracing::debug!(file = %file_name, count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Scans the whole source, keeping error tokens in the stream.
pub fn tokenize_all(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).tokens().collect()
}
