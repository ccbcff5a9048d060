use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Keyword spelling to token kind, inverted from [`TokenKind::literal`].
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = TokenKind::KEYWORDS
        .iter()
        .map(|kind| (kind.literal(), *kind))
        .collect();
}

/// Resolves a scanned word to its keyword kind, or `Ident` when it is not reserved.
pub fn lookup_ident(word: &str) -> TokenKind {
    RESERVED_LOOKUP.get(word).copied().unwrap_or(TokenKind::Ident)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Ident,
    Int,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Dot,
    Colon,
    Semicolon,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Pipe,
    Ampersand,

    Dash,
    Plus,
    Star,
    Slash,

    // Reserved
    Type,
    Return,
    True,
    False,
    If,
    Else,
    Func,
    Let,
    Switch,
}

impl TokenKind {
    /// Number of kinds; sizes the parser's dispatch tables.
    pub const COUNT: usize = TokenKind::Switch as usize + 1;

    pub const KEYWORDS: [TokenKind; 9] = [
        TokenKind::Type,
        TokenKind::Return,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Func,
        TokenKind::Let,
        TokenKind::Switch,
    ];

    /// The canonical spelling of a kind. For keywords and punctuation this is
    /// the source text; literal and sentinel kinds use their category name.
    pub fn literal(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Pipe => "|",
            TokenKind::Ampersand => "&",
            TokenKind::Dash => "-",
            TokenKind::Plus => "+",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Type => "type",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Func => "func",
            TokenKind::Let => "let",
            TokenKind::Switch => "switch",
        }
    }

    pub fn is_keyword(&self) -> bool {
        Self::KEYWORDS.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::EOF,
            literal: String::new(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{} ({})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
