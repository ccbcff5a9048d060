use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A non-fatal problem recorded while parsing. The parser keeps going after
/// recording one; callers read them back through `Parser::errors`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be '{expected}', received {received}")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseError::IntegerParse { .. } => "IntegerParse",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedToken {
                expected: TokenKind::CloseParen,
                ..
            } => ErrorTip::Suggestion(String::from("did you forget a closing `)`?")),
            ParseError::UnexpectedToken {
                expected: TokenKind::OpenCurly,
                ..
            } => ErrorTip::Suggestion(String::from("blocks must be wrapped in `{ }`")),
            ParseError::UnexpectedToken { .. } => ErrorTip::None,
            ParseError::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            } => ErrorTip::Suggestion(String::from("the source contains a character Oak does not recognise")),
            ParseError::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression, did you miss a semicolon?",
                kind
            )),
            ParseError::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
