use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, TypeDeclStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Type => parse_type_decl_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// `type Name = ...;`
///
/// Only the name is kept. Everything after `=` up to the terminator is skipped.
// TODO: build an intersection/union type expression for `A & B | C`
pub fn parse_type_decl_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }
    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    Some(Stmt::TypeDecl(TypeDeclStmt {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    // Bare `return`
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
    if parser.current_token_is(TokenKind::Semicolon)
        || parser.peek_token_is(TokenKind::CloseCurly)
        || parser.peek_token_is(TokenKind::EOF)
    {
        return Some(Stmt::Return(ReturnStmt {
            token,
            return_value: None,
        }));
    }

    parser.advance();
    let return_value = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt {
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Entered on `{`; leaves the parser on the closing `}` (or `EOF`).
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    let mut statements = vec![];

    parser.advance();

    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { token, statements }
}
