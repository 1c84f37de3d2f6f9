//! Lexical analysis module.
//!
//! This module supplies the token stream the parser consumes. It handles:
//!
//! - The `TokenSource` contract the parser pulls tokens through
//! - Lazy tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
