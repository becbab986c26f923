#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::{
    lexer::{tokenize, tokenize_all, Tokens},
    scanner::Scanner,
    tokens::{Token, TokenKind},
};

/// Where a diagnostic points: 1-based line, byte offset and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            line: 0,
            offset: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text (with its newline) and the
/// offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line, position - start));
        }

        start = end;
    }

    None
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: UnterminatedString (Add a closing `"` before the end of the file)
        -> main.c
           |
        20 | char *s = "abc;
           | ----------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);

    // Positions built by hand may point outside the source.
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        println!("   | {}", error.get_error());
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
