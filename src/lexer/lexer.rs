use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull lexer over a single source string.
///
/// `pos` is the byte offset of `current`, `read_pos` the offset of the
/// character after it. `current` is `None` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    current: Option<char>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            read_pos: 0,
            current: None,
        };
        lexer.read_char();
        lexer
    }

    /// Emits the next token. Once the input is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current else {
            return Token::eof();
        };

        let token = match ch {
            '[' => self.single(TokenKind::OpenBracket, ch),
            ']' => self.single(TokenKind::CloseBracket, ch),
            '{' => self.single(TokenKind::OpenCurly, ch),
            '}' => self.single(TokenKind::CloseCurly, ch),
            '(' => self.single(TokenKind::OpenParen, ch),
            ')' => self.single(TokenKind::CloseParen, ch),
            '<' => self.single(TokenKind::Less, ch),
            '>' => self.single(TokenKind::Greater, ch),
            ',' => self.single(TokenKind::Comma, ch),
            '.' => self.single(TokenKind::Dot, ch),
            ':' => self.single(TokenKind::Colon, ch),
            ';' => self.single(TokenKind::Semicolon, ch),
            '=' if self.peek_char() == Some('=') => self.double(TokenKind::Equals, "=="),
            '=' => self.single(TokenKind::Assignment, ch),
            '!' if self.peek_char() == Some('=') => self.double(TokenKind::NotEquals, "!="),
            '!' => self.single(TokenKind::Not, ch),
            '|' => self.single(TokenKind::Pipe, ch),
            '&' => self.single(TokenKind::Ampersand, ch),
            '-' => self.single(TokenKind::Dash, ch),
            '+' => self.single(TokenKind::Plus, ch),
            '*' => self.single(TokenKind::Star, ch),
            '/' => self.single(TokenKind::Slash, ch),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let word = self.read_run(&WORD_PATTERN);
                MK_TOKEN!(lookup_ident(&word), word)
            }
            c if c.is_ascii_digit() => {
                let number = self.read_run(&NUMBER_PATTERN);
                MK_TOKEN!(TokenKind::Int, number)
            }
            _ => self.single(TokenKind::Illegal, ch),
        };

        trace!(kind = %token.kind, literal = %token.literal, "token");
        token
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    fn read_char(&mut self) {
        self.pos = self.read_pos;
        self.current = self.source[self.read_pos..].chars().next();
        if let Some(ch) = self.current {
            self.read_pos += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.read_pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while self.current.is_some_and(char::is_whitespace) {
            self.read_char();
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        self.read_char();
        MK_TOKEN!(kind, ch)
    }

    fn double(&mut self, kind: TokenKind, literal: &'static str) -> Token {
        self.read_char();
        self.read_char();
        MK_TOKEN!(kind, literal)
    }

    /// Consumes the longest match of `pattern` starting at the current character.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.pos;
        let end = pattern
            .find(&self.source[start..])
            .map_or(start, |matched| start + matched.end());

        self.read_pos = end;
        self.read_char();
        self.source[start..end].to_string()
    }
}

/// Drains a fresh lexer over `source`. The result always ends with a single `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
