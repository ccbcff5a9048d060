use crate::{
    ast::{
        ast::Expr,
        expressions::{
            Boolean, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
            InvocationExpr, PrefixExpr,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.nud_handler(token_kind) else {
        parser.push_error(ParseError::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = nud_fn(parser);

    // Strictly greater, so equal binding powers fold to the left
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led_fn) = parser.led_handler(parser.peek_token_kind()) else {
            return left;
        };

        parser.advance();
        left = led_fn(parser, left);
    }

    left
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(ParseError::IntegerParse {
                literal: token.literal,
            });
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(Boolean {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix);

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: right.map(Box::new),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Option<Expr>) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp);

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: left.map(Box::new),
        right: right.map(Box::new),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let consequence = parse_block_stmt(parser);

    let mut alternative = None;
    if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        alternative = Some(parse_block_stmt(parser));
    }

    Some(Expr::If(IfExpr {
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let arguments = parse_function_arguments(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let body = parse_block_stmt(parser);

    Some(Expr::Function(FunctionLiteral {
        token,
        arguments,
        body,
    }))
}

/// Entered on `(`; leaves the parser on the closing `)`.
fn parse_function_arguments(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut arguments = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(arguments);
    }

    loop {
        if !parser.expect_peek(TokenKind::Ident) {
            return None;
        }
        arguments.push(Identifier::new(parser.current_token().clone()));

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(arguments)
}

pub fn parse_invocation_expr(parser: &mut Parser, function: Option<Expr>) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_invocation_arguments(parser)?;

    Some(Expr::Invocation(InvocationExpr {
        token,
        function: function.map(Box::new),
        arguments,
    }))
}

/// Entered on `(`; leaves the parser on the closing `)`.
fn parse_invocation_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut arguments = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(arguments);
    }

    parser.advance();
    arguments.extend(parse_expr(parser, BindingPower::Lowest));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.extend(parse_expr(parser, BindingPower::Lowest));
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(arguments)
}
