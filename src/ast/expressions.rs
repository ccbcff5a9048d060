use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_optional, join, Expr},
    statements::BlockStmt,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier {
            value: token.literal.clone(),
            token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Boolean {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// `!right` or `-right`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl PrefixExpr {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        fmt_optional(f, &self.right)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    /// The operator token
    pub token: Token,
    pub left: Option<Box<Expr>>,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl InfixExpr {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_optional(f, &self.left)?;
        write!(f, " {} ", self.operator)?;
        fmt_optional(f, &self.right)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Option<Box<Expr>>,
    pub consequence: BlockStmt,
    /// Present only when an `else` clause appeared in source.
    pub alternative: Option<BlockStmt>,
}

impl IfExpr {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if")?;
        fmt_optional(f, &self.condition)?;
        write!(f, " {}", self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub arguments: Vec<Identifier>,
    pub body: BlockStmt,
}

impl FunctionLiteral {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.token.literal,
            join(&self.arguments),
            self.body
        )
    }
}

/// `function(arguments...)`
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationExpr {
    /// The `(` token
    pub token: Token,
    pub function: Option<Box<Expr>>,
    pub arguments: Vec<Expr>,
}

impl InvocationExpr {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InvocationExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_optional(f, &self.function)?;
        write!(f, "({})", join(&self.arguments))
    }
}
