//! Error types and diagnostic collection for the parser.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - The three parse error kinds (missing token, no prefix parse
//!   function, integer conversion)
//! - The append-only `Diagnostics` collector returned alongside a program
//! - Error formatting and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
