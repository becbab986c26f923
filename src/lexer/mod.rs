//! Lexical analysis module.
//!
//! This module contains the scanner that converts C-like source code
//! into a stream of tokens for a parser. It handles:
//!
//! - Whitespace and `//` comment skipping with line tracking
//! - Recognition of keywords, identifiers, numbers, strings and characters
//! - Greedy resolution of one- and two-byte operators
//! - Lexical errors reported as error tokens

pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod scanner;
pub mod tokens;
