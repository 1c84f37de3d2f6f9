use tracing::trace;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token through the statement table, falling
/// back to an expression statement. Leaves current on the statement's last
/// token.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statement, Error> {
    let kind = parser.current_token_kind();

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        trace!(kind = %kind, "dispatching statement");
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier, "let statement")?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment, "let statement")?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_optional(TokenKind::Semicolon);

    Ok(Statement::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    // `return;`, `return }` and `return<EOF>` carry no value
    let value = if parser.peek_is(TokenKind::Semicolon)
        || parser.peek_is(TokenKind::CloseCurly)
        || parser.peek_is(TokenKind::EOF)
    {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.skip_optional(TokenKind::Semicolon);

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.skip_optional(TokenKind::Semicolon);

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with current on the opening brace. Leaves current on
/// the closing brace.
pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    construct: "block",
                    expected: TokenKind::CloseCurly,
                    found: TokenKind::EOF,
                    value: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt { token, body })
}
