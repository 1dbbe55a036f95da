use std::fmt::Display;

use crate::tokens::tokens::Token;

use super::ast::Expr;

// LEAVES

/// Name Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NameExpr {
    pub value: String,
}

impl Display for NameExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operator applied to a single operand, rendered `op(operand)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.operator.value, self.right)
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions, rendered `(left)op(right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){}({})", self.left, self.operator.value, self.right)
    }
}

/// Call Expression
/// Represents a call in the AST, rendered `(callee)(arg0,arg1,...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})(", self.callee)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}
