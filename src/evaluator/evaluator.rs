use crate::{
    ast::ast::{Expr, Node, Stmt},
    object::object::Object,
};

pub fn eval<'a>(node: impl Into<Node<'a>>) -> Object {
    match node.into() {
        Node::Program(program) => eval_statements(&program.statements),
        Node::Stmt(stmt) => eval_stmt(stmt),
        Node::Expr(expr) => eval_expr(expr),
    }
}

fn eval_statements(statements: &[Stmt]) -> Object {
    statements
        .iter()
        .fold(Object::Null, |_, statement| eval_stmt(statement))
}

fn eval_stmt(stmt: &Stmt) -> Object {
    match stmt {
        Stmt::Expression(stmt) => stmt.expression.as_ref().map_or(Object::Null, eval_expr),
        _ => Object::Null,
    }
}

fn eval_expr(expr: &Expr) -> Object {
    match expr {
        Expr::Integer(literal) => Object::Integer(literal.value),
        Expr::Boolean(literal) => Object::Boolean(literal.value),
        _ => Object::Null,
    }
}
