use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_optional, Expr, Stmt},
    expressions::Identifier,
};

/// `type Name = ...;`. The right-hand side is skipped by the parser, so
/// `value` is currently always `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expr>,
}

impl TypeDeclStmt {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for TypeDeclStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        fmt_optional(f, &self.value)?;
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub return_value: Option<Expr>,
}

impl ReturnStmt {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        fmt_optional(f, &self.return_value)?;
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Option<Expr>,
}

impl ExpressionStmt {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_optional(f, &self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
