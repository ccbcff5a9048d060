//! Parser state and entry points.
//!
//! The parser pulls tokens from a `Lexer` through a two-token window
//! (`current_token` and `peek_token`) and dispatches on token kinds through
//! fixed lookup tables:
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix positions
//! - Binding powers for operator precedence
//!
//! Problems are accumulated as diagnostics; a `Program` is always produced.

use tracing::{debug, instrument};

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

pub struct Parser {
    /// Exclusively owned token source
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<ParseError>,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with every handler registered and the
    /// token window filled.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
            nud_lookup: [None; TokenKind::COUNT],
            led_lookup: [None; TokenKind::COUNT],
            binding_power_lookup: [BindingPower::Lowest; TokenKind::COUNT],
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Parses statements until `EOF`. Never fails; check [`Parser::errors`] afterwards.
    #[instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Rendered diagnostics, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn diagnostics(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Slides the token window forward by one.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the peek token is `kind`. Otherwise records a diagnostic
    /// and leaves the window where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected: kind,
                received: self.peek_token.kind,
            });
            false
        }
    }

    pub fn push_error(&mut self, error: ParseError) {
        debug!(name = error.get_error_name(), %error, "recorded diagnostic");
        self.errors.push(error);
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup[self.current_token.kind as usize]
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup[self.peek_token.kind as usize]
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup[kind as usize]
    }

    pub fn led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup[kind as usize]
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup[kind as usize] = binding_power;
        self.led_lookup[kind as usize] = Some(led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup[kind as usize] = Some(nud_fn);
    }
}

/// Lexes and parses `source` in one go.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding any diagnostics)
/// - The best-effort Program
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
