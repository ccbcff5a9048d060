//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Type declarations and return statements
//! - Literal, prefix and infix expressions
//! - Operator precedence and associativity
//! - `if` expressions, function literals and invocations
//! - Diagnostics and recovery

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt},
    },
    errors::errors::ParseError,
    lexer::{lexer::Lexer, tokens::TokenKind},
    test_support::configure_test_tracing,
};

use super::parser::{parse, Parser};

enum Literal<'a> {
    Int(i64),
    Ident(&'a str),
    Bool(bool),
}

fn parse_clean(source: &str) -> Program {
    configure_test_tracing();

    let (parser, program) = parse(source);
    assert_eq!(parser.errors(), Vec::<String>::new(), "source: {}", source);
    program
}

fn single_expression(program: &Program) -> &Expr {
    assert_eq!(program.statements.len(), 1, "program: {}", program);
    expression_of(&program.statements[0])
}

fn expression_of(stmt: &Stmt) -> &Expr {
    match stmt {
        Stmt::Expression(ExpressionStmt {
            expression: Some(expr),
            ..
        }) => expr,
        other => panic!("expected an expression statement, received {:?}", other),
    }
}

fn assert_literal(expr: &Expr, expected: &Literal) {
    match (expr, expected) {
        (Expr::Integer(literal), Literal::Int(value)) => {
            assert_eq!(literal.value, *value);
            assert_eq!(literal.token_literal(), value.to_string());
        }
        (Expr::Identifier(ident), Literal::Ident(value)) => {
            assert_eq!(ident.value, *value);
            assert_eq!(ident.token_literal(), *value);
        }
        (Expr::Boolean(boolean), Literal::Bool(value)) => {
            assert_eq!(boolean.value, *value);
            assert_eq!(boolean.token_literal(), value.to_string());
        }
        (other, _) => panic!("unexpected literal node {:?}", other),
    }
}

fn assert_infix(expr: &Expr, left: Literal, operator: &str, right: Literal) {
    let Expr::Infix(infix) = expr else {
        panic!("expected an infix expression, received {:?}", expr);
    };

    assert_literal(infix.left.as_deref().expect("missing left operand"), &left);
    assert_eq!(infix.operator, operator);
    assert_literal(infix.right.as_deref().expect("missing right operand"), &right);
}

fn single_statement_block(block: &BlockStmt) -> &Expr {
    assert_eq!(block.len(), 1);
    expression_of(&block.statements[0])
}

#[test]
fn test_type_declaration_statements() {
    let program = parse_clean(
        "
        type ReaderWriterCloser
            = Reader
            & Writer
            & Closer;

        type ReaderWriter
            = Reader
            | Writer;
        ",
    );

    assert_eq!(program.statements.len(), 2);

    for (stmt, expected) in program.statements.iter().zip(["ReaderWriterCloser", "ReaderWriter"]) {
        assert_eq!(stmt.token_literal(), "type");

        let Stmt::TypeDecl(decl) = stmt else {
            panic!("expected a type declaration, received {:?}", stmt);
        };
        assert_eq!(decl.name.value, expected);
        assert_eq!(decl.name.token_literal(), expected);
        assert!(decl.value.is_none());
    }

    assert_eq!(program.to_string(), "type ReaderWriterCloser = ;type ReaderWriter = ;");
}

#[test]
fn test_type_declaration_requires_name_and_assignment() {
    let (parser, _) = parse("type = A;");
    assert_eq!(
        parser.diagnostics()[0],
        ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            received: TokenKind::Assignment,
        }
    );

    let (parser, _) = parse("type A B;");
    assert_eq!(
        parser.errors()[0],
        "expected next token to be '=', received IDENT"
    );
}

#[test]
fn test_type_declaration_without_terminator_stops_at_eof() {
    let (parser, program) = parse("type A = B & C");

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_return_statements() {
    let program = parse_clean(
        "
        return 5;
        return 10;
        return 1337;
        ",
    );

    assert_eq!(program.statements.len(), 3);

    for (stmt, expected) in program.statements.iter().zip([5, 10, 1337]) {
        let Stmt::Return(ret) = stmt else {
            panic!("expected a return statement, received {:?}", stmt);
        };
        assert_eq!(ret.token_literal(), "return");
        assert_literal(
            ret.return_value.as_ref().expect("missing return value"),
            &Literal::Int(expected),
        );
    }
}

#[test]
fn test_return_full_expression() {
    let program = parse_clean("return add(1, 2) * x;");

    assert_eq!(program.to_string(), "return (add(1, 2) * x);");
}

#[test]
fn test_bare_return() {
    let program = parse_clean("return; return");

    assert_eq!(program.statements.len(), 2);
    for stmt in &program.statements {
        let Stmt::Return(ret) = stmt else {
            panic!("expected a return statement, received {:?}", stmt);
        };
        assert!(ret.return_value.is_none());
    }
    assert_eq!(program.to_string(), "return ;return ;");
}

#[test]
fn test_return_binding_form_is_not_supported() {
    let (parser, program) = parse("return x = 5;");

    assert_eq!(
        parser.diagnostics(),
        &[ParseError::NoPrefixParseFn {
            kind: TokenKind::Assignment,
        }]
    );

    let Stmt::Return(ret) = &program.statements[0] else {
        panic!("expected a return statement");
    };
    assert_literal(ret.return_value.as_ref().unwrap(), &Literal::Ident("x"));
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_identifier_expression() {
    let program = parse_clean("foobar;");

    assert_literal(single_expression(&program), &Literal::Ident("foobar"));
    assert_eq!(program.token_literal(), "foobar");
}

#[test]
fn test_integer_literal_expression() {
    let program = parse_clean("5;");

    assert_literal(single_expression(&program), &Literal::Int(5));
}

#[test]
fn test_boolean_expression() {
    let program = parse_clean("true; false");

    assert_eq!(program.statements.len(), 2);
    assert_literal(expression_of(&program.statements[0]), &Literal::Bool(true));
    assert_literal(expression_of(&program.statements[1]), &Literal::Bool(false));
}

#[test]
fn test_prefix_expressions() {
    let cases = [
        ("!5;", "!", Literal::Int(5)),
        ("-15;", "-", Literal::Int(15)),
        ("!true;", "!", Literal::Bool(true)),
        ("-foo", "-", Literal::Ident("foo")),
    ];

    for (source, operator, right) in cases {
        let program = parse_clean(source);
        let Expr::Prefix(prefix) = single_expression(&program) else {
            panic!("expected a prefix expression for {}", source);
        };

        assert_eq!(prefix.operator, operator);
        assert_literal(prefix.right.as_deref().unwrap(), &right);
    }
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", 5, "+", 5),
        ("5 - 5;", 5, "-", 5),
        ("5 * 5;", 5, "*", 5),
        ("5 / 5;", 5, "/", 5),
        ("5 > 5;", 5, ">", 5),
        ("5 < 5;", 5, "<", 5),
        ("5 == 5;", 5, "==", 5),
        ("5 != 5;", 5, "!=", 5),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_clean(source);
        assert_infix(
            single_expression(&program),
            Literal::Int(left),
            operator,
            Literal::Int(right),
        );
    }

    let program = parse_clean("true != false");
    assert_infix(
        single_expression(&program),
        Literal::Bool(true),
        "!=",
        Literal::Bool(false),
    );
}

#[test]
fn test_operator_precedence_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c", "(a + (b * c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_clean(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_if_expression() {
    let program = parse_clean("if (x < y) { x }");

    let Expr::If(if_expr) = single_expression(&program) else {
        panic!("expected an if expression");
    };

    assert_infix(
        if_expr.condition.as_deref().unwrap(),
        Literal::Ident("x"),
        "<",
        Literal::Ident("y"),
    );
    assert_literal(single_statement_block(&if_expr.consequence), &Literal::Ident("x"));
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_if_else_expression() {
    let program = parse_clean("if (x < y) { x } else { y }");

    let Expr::If(if_expr) = single_expression(&program) else {
        panic!("expected an if expression");
    };

    assert_literal(single_statement_block(&if_expr.consequence), &Literal::Ident("x"));
    let alternative = if_expr.alternative.as_ref().expect("missing alternative");
    assert_literal(single_statement_block(alternative), &Literal::Ident("y"));

    assert_eq!(program.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_if_requires_parenthesised_condition() {
    let (parser, _) = parse("if x { 1 }");

    assert_eq!(
        parser.diagnostics()[0],
        ParseError::UnexpectedToken {
            expected: TokenKind::OpenParen,
            received: TokenKind::Ident,
        }
    );
}

#[test]
fn test_function_literal() {
    let program = parse_clean("func(x, y) { x + y; }");

    let Expr::Function(function) = single_expression(&program) else {
        panic!("expected a function literal");
    };

    let names: Vec<&str> = function.arguments.iter().map(|a| a.value.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);

    assert_infix(
        single_statement_block(&function.body),
        Literal::Ident("x"),
        "+",
        Literal::Ident("y"),
    );
    assert_eq!(program.to_string(), "func(x, y) (x + y)");
}

#[test]
fn test_function_arguments() {
    let cases: [(&str, &[&str]); 3] = [
        ("func() {};", &[]),
        ("func(x) {};", &["x"]),
        ("func(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let program = parse_clean(source);
        let Expr::Function(function) = single_expression(&program) else {
            panic!("expected a function literal for {}", source);
        };

        let names: Vec<&str> = function
            .arguments
            .iter()
            .map(|argument: &Identifier| argument.value.as_str())
            .collect();
        assert_eq!(names, expected);
        assert!(function.body.is_empty());
    }
}

#[test]
fn test_function_arguments_must_be_identifiers() {
    let (parser, _) = parse("func(1) {}");

    assert_eq!(
        parser.diagnostics()[0],
        ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            received: TokenKind::Int,
        }
    );
}

#[test]
fn test_invocation_expression() {
    let program = parse_clean("add(1, 2 * 3, 4 + 5);");

    let Expr::Invocation(call) = single_expression(&program) else {
        panic!("expected an invocation expression");
    };

    assert_literal(call.function.as_deref().unwrap(), &Literal::Ident("add"));
    assert_eq!(call.arguments.len(), 3);
    assert_literal(&call.arguments[0], &Literal::Int(1));
    assert_infix(&call.arguments[1], Literal::Int(2), "*", Literal::Int(3));
    assert_infix(&call.arguments[2], Literal::Int(4), "+", Literal::Int(5));
}

#[test]
fn test_invocation_of_function_literal() {
    let program = parse_clean("func(x) { x }(5)");

    let Expr::Invocation(call) = single_expression(&program) else {
        panic!("expected an invocation expression");
    };

    assert!(matches!(call.function.as_deref(), Some(Expr::Function(_))));
    assert_eq!(call.arguments.len(), 1);
    assert_eq!(program.to_string(), "func(x) x(5)");
}

#[test]
fn test_invocation_without_arguments() {
    let program = parse_clean("noop()");

    let Expr::Invocation(call) = single_expression(&program) else {
        panic!("expected an invocation expression");
    };
    assert!(call.arguments.is_empty());
}

#[test]
fn test_block_statement_keeps_source_order() {
    let program = parse_clean("if (true) { a; b; return c; }");

    let Expr::If(if_expr) = single_expression(&program) else {
        panic!("expected an if expression");
    };
    let rendered: Vec<String> = if_expr.consequence.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["a", "b", "return c;"]);
}

#[test]
fn test_unclosed_grouping_reports_close_paren() {
    let (parser, _) = parse("(1 + 2");

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be ')', received EOF".to_string()]
    );
}

#[test]
fn test_malformed_integer_reports_once_and_continues() {
    let (parser, program) = parse("99999999999999999999; 5; foo");

    assert_eq!(
        parser.diagnostics(),
        &[ParseError::IntegerParse {
            literal: "99999999999999999999".to_string(),
        }]
    );
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(
        &program.statements[0],
        Stmt::Expression(ExpressionStmt {
            expression: None,
            ..
        })
    ));
    assert_literal(expression_of(&program.statements[1]), &Literal::Int(5));
    assert_literal(expression_of(&program.statements[2]), &Literal::Ident("foo"));
}

#[test]
fn test_malformed_integer_inside_infix() {
    let (parser, program) = parse("99999999999999999999 + 1");

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "( + 1)");
}

#[test]
fn test_missing_prefix_handler_reports_kind() {
    let (parser, program) = parse(")");

    assert_eq!(
        parser.diagnostics(),
        &[ParseError::NoPrefixParseFn {
            kind: TokenKind::CloseParen,
        }]
    );
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_illegal_token_reports_missing_prefix() {
    let (parser, program) = parse("@; 1");

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for ILLEGAL found".to_string()]
    );
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_unhandled_infix_token_stops_expression() {
    let (parser, program) = parse("a | b");

    // `|` has no handlers at all, so `a` ends and `|` starts a new statement
    assert_eq!(
        parser.diagnostics(),
        &[ParseError::NoPrefixParseFn {
            kind: TokenKind::Pipe,
        }]
    );
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_parse_program_from_lexer() {
    let mut parser = Parser::new(Lexer::new("let"));
    let program = parser.parse_program();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for let found".to_string()]
    );
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_empty_program() {
    let program = parse_clean("");

    assert!(program.statements.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}
