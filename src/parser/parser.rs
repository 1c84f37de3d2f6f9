//! Parser state and the program-level driver.
//!
//! This module contains the main Parser struct. The parser keeps exactly two
//! live tokens, `current` and `peek`, pulled one at a time from a
//! [`TokenSource`], and owns the lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostics, Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is a single mutable cursor; parse independent inputs with
/// independent parsers.
pub struct Parser<S> {
    /// Where tokens come from
    source: S,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<S>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Every diagnostic recorded so far, never cleared
    diagnostics: Diagnostics,
    /// Unclosed `{` count up to and including `current`
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser with the default grammar registered.
    ///
    /// Reads the first two tokens from `source` so that `current` and
    /// `peek` are both populated.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
        };
        parser.track_depth();
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Discards the current token, moves peek into current and refills peek.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.peek, next);
        self.track_depth();
    }

    fn track_depth(&mut self) {
        match self.current.kind {
            TokenKind::OpenCurly => self.depth += 1,
            TokenKind::CloseCurly => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Advances only if the peek token has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenKind peek must have
    /// * `construct` - What is being parsed, used in the error message
    ///
    /// # Returns
    ///
    /// The new current token, or an `ExpectedToken` error positioned at
    /// the offending token. The cursor does not move on failure.
    pub fn expect_peek(
        &mut self,
        expected_kind: TokenKind,
        construct: &'static str,
    ) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    construct,
                    expected: expected_kind,
                    found: self.peek.kind,
                    value: self.peek.value.clone(),
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Consumes a trailing token of `kind` if it is next. Used for the
    /// optional statement terminator.
    pub fn skip_optional(&mut self, kind: TokenKind) {
        if self.peek_is(kind) {
            self.advance();
        }
    }

    /// Binding power of the current token, `Default` if it has none.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Binding power of the peek token, `Default` if it has none.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<S> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// Replaces any existing registration, binding power included.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<S>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses top-level statements until `EOF`.
    ///
    /// A statement that fails to parse is dropped, its error recorded, and
    /// parsing resumes after the next `;` at the statement's own nesting
    /// level, so a failure inside a block skips the rest of that block. The
    /// returned program is best-effort: check [`Parser::errors`] before
    /// trusting it.
    ///
    /// The trailing `;` is optional on every statement, the last one
    /// included, so `return 5` parses cleanly.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_is(TokenKind::EOF) {
            let base = self.statement_depth();
            match parse_stmt(self) {
                Ok(stmt) => {
                    trace!(literal = stmt.token_literal(), "parsed statement");
                    statements.push(stmt);
                }
                Err(error) => {
                    debug!(error = %error, "skipping malformed statement");
                    self.diagnostics.push(error);
                    self.synchronize(base);
                }
            }
            self.advance();
        }

        debug!(
            statements = statements.len(),
            errors = self.diagnostics.len(),
            "parsed program"
        );

        Program { statements }
    }

    /// Nesting depth outside the current token.
    fn statement_depth(&self) -> usize {
        if self.current_is(TokenKind::OpenCurly) {
            self.depth - 1
        } else {
            self.depth
        }
    }

    /// Moves current onto the next statement boundary at nesting depth
    /// `base` or shallower: a `;`, the `}` closing back to `base` (and a `;`
    /// right after it), or `EOF`.
    fn synchronize(&mut self, base: usize) {
        loop {
            match self.current.kind {
                TokenKind::EOF => return,
                TokenKind::Semicolon if self.depth <= base => return,
                TokenKind::CloseCurly if self.depth <= base => {
                    self.skip_optional(TokenKind::Semicolon);
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Snapshot of every diagnostic message recorded so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// A parsed program together with the diagnostics produced while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Diagnostics,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    /// The program if parsing was clean, otherwise every diagnostic.
    pub fn into_result(self) -> Result<Program, Diagnostics> {
        if self.diagnostics.has_errors() {
            Err(self.diagnostics)
        } else {
            Ok(self.program)
        }
    }
}

/// Parses everything `source` yields into a [`ParseResult`].
///
/// This is the main entry point for parsing. It creates a parser with the
/// default grammar and parses all statements until EOF.
pub fn parse<S: TokenSource>(source: S) -> ParseResult {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    ParseResult {
        program,
        diagnostics: parser.into_diagnostics(),
    }
}

/// Lexes and parses a source string. `file` names the source in positions.
pub fn parse_source(source: impl Into<String>, file: Option<String>) -> ParseResult {
    parse(Lexer::new(source, file))
}
