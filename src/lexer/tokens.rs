use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc, vec::IntoIter};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Integer,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    Return,
    Fn,
    If,
    Else,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

impl Token {
    pub fn eof(position: Position) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            span: Span {
                start: position.clone(),
                end: position,
            },
        }
    }
}

/// Anything the parser can pull tokens from, one at a time.
///
/// Implementations must keep returning an `EOF` token once the input is
/// exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Replays an already lexed token vector.
pub struct TokenBuffer {
    tokens: IntoIter<Token>,
    eof: Token,
    exhausted: bool,
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        let eof = tokens
            .iter()
            .find(|token| token.kind == TokenKind::EOF)
            .cloned()
            .unwrap_or_else(|| {
                let end = tokens
                    .last()
                    .map(|token| token.span.end.clone())
                    .unwrap_or_else(|| Position(0, Rc::new(String::from("<buffer>"))));
                Token::eof(end)
            });

        TokenBuffer {
            tokens: tokens.into_iter(),
            eof,
            exhausted: false,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        if self.exhausted {
            return self.eof.clone();
        }

        match self.tokens.next() {
            Some(token) if token.kind != TokenKind::EOF => token,
            _ => {
                self.exhausted = true;
                self.eof.clone()
            }
        }
    }
}
