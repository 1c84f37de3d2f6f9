use tracing::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr, StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Pratt loop. Parses the expression starting at the current token, binding
/// infix operators while they are stronger than `bp`. Leaves current on the
/// expression's last token.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFn {
                    kind: token_kind,
                    value: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // A terminator always ends the expression; EOF has no binding power
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()).copied() {
            Some(led) => led,
            None => return Ok(left),
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        trace!(operator = %parser.current_token_kind(), bp = ?operator_bp, "binding infix");

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => Ok(Expression::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        },
        TokenKind::String => Ok(Expression::String(StringLiteral {
            value: token.value.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token.kind,
                value: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Left-associative binary operator: the right operand is parsed at the
/// operator's own binding power.
pub fn parse_binary_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen, "grouped expression")?;

    Ok(expr)
}

/// `if <condition> { ... } [else { ... }]`
pub fn parse_if_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(TokenKind::OpenCurly, "if expression")?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly, "else branch")?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// `fn(<a>, <b>, ...) { ... }`
pub fn parse_fn_literal<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen, "function literal")?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly, "function body")?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier, "function parameters")?;
        parameters.push(Identifier {
            value: token.value.clone(),
            token,
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen, "function parameters")?;

    Ok(parameters)
}

pub fn parse_call_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expression::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Expression>, Error> {
    let mut args = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(TokenKind::CloseParen, "call arguments")?;

    Ok(args)
}
