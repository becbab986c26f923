//! Error types and error handling for the scanner.
//!
//! The scanner itself never fails: lexical problems come back as error
//! tokens. This module turns those tokens into structured errors with:
//!
//! - Source position information (file, line, byte offset)
//! - One variant per lexical failure, each with a fixed message
//! - Helpful suggestions for the user

pub mod errors;

#[cfg(test)]
mod tests;
