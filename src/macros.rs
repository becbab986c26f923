//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR!` - Resolves an operator family by one byte of lookahead
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's lexeme (a source slice or a static message)
/// * `$start` - Byte offset of the lexeme in the source
/// * `$line` - 1-based line number
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, &source[0..2], 0, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $start:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            start: $start,
            line: $line,
        }
    };
}

/// Resolves one operator family after its first byte has been consumed.
///
/// Each `byte => kind` arm is tried in order with `Scanner::matches`; the
/// first byte that matches is consumed and its kind emitted. When no arm
/// matches, the single-byte kind is emitted.
///
/// # Example
///
/// ```ignore
/// b'+' => MK_OPERATOR!(self, TokenKind::Plus,
///     b'+' => TokenKind::PlusPlus,
///     b'=' => TokenKind::PlusEqual),
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($scanner:expr, $single:expr $(, $next:literal => $kind:expr)* $(,)?) => {{
        $(
            if $scanner.matches($next) {
                $scanner.make_token($kind)
            } else
        )* {
            $scanner.make_token($single)
        }
    }};
}
