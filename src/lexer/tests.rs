//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Illegal characters and end-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenBuffer, TokenKind, TokenSource},
};
use crate::Span;

fn lex(source: &str) -> Vec<Token> {
    tokenize(source, Some("test.lang".to_string()))
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("let return fn if else true false");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar baz_123 _underscore CamelCase letter");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    // Keyword prefix does not make a keyword
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "letter");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = lex("42 0 838383");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = lex(r#""hello\nworld" "tab\there" "backslash\\" "quote\"test""#);

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex("+ - * / % == != < > <= >= = && || !");

    let expected = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEquals,
        TokenKind::GreaterEquals,
        TokenKind::Assignment,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::EOF,
    ];

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let tokens = lex("let x = 5 // this is a comment\nlet y = 10");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::Let);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = lex("let x = 42;");

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_adjacent_tokens() {
    let tokens = lex("add(x,5);");

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = lex("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let tokens = lex("\"abc");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("   \n\t ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = lex("let  foobar");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 11);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.lang");
}

#[test]
fn test_span_offsets_are_byte_offsets() {
    let source = "let s = \"héllo\"; x";
    let tokens = lex(source);

    let offset: usize = source.rfind('x').unwrap();
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].span.start.0, offset);
    assert_eq!(tokens[5].span.end.0, offset + 1);
}

#[test]
fn test_lexer_default_file_name() {
    let mut lexer = Lexer::new("x", None);
    let token = lexer.next_token();

    assert_eq!(token.span.start.1.as_str(), "shell");
}

#[test]
fn test_lexer_eof_is_idempotent() {
    let mut lexer = Lexer::new("x", Some("test.lang".to_string()));

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_buffer_replays_then_stays_at_eof() {
    let mut buffer = TokenBuffer::from(lex("a b"));

    assert_eq!(buffer.next_token().value, "a");
    assert_eq!(buffer.next_token().value, "b");
    for _ in 0..3 {
        assert_eq!(buffer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_buffer_without_eof() {
    let token = Token {
        kind: TokenKind::Identifier,
        value: "x".to_string(),
        span: Span::null(),
    };
    let mut buffer = TokenBuffer::from(vec![token]);

    assert_eq!(buffer.next_token().kind, TokenKind::Identifier);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_buffer_ignores_tokens_after_eof() {
    let mut tokens = lex("a");
    tokens.extend(lex("b"));
    let mut buffer = TokenBuffer::from(tokens);

    assert_eq!(buffer.next_token().value, "a");
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
}
