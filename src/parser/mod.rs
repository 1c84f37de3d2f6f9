//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with
//! table-driven operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and binary operators, grouping, `if`,
//!   function literals, calls, literals)
//! - Error collection and recovery at statement boundaries
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. Both
//! tables can be extended through `Parser::nud`, `Parser::led` and
//! `Parser::stmt` without touching the core loop.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
