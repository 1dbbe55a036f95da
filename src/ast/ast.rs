use std::fmt::Display;

use super::expressions::{BinaryExpr, CallExpr, NameExpr, PrefixExpr};

/// Expression Types
///
/// Fieldless tags for the expression variants, for callers that only care
/// about which kind of node they hold.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Name,
    Prefix,
    Binary,
    Call,
}

/// Expression
///
/// Every node owns its children outright, so a parsed expression is always a
/// tree. Rendering through `Display` produces the fully parenthesized form,
/// e.g. `a - b * c` renders as `(a)-((b)*(c))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(NameExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Name(_) => ExprType::Name,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Name(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Binary(expr) => Display::fmt(expr, f),
            Expr::Call(expr) => Display::fmt(expr, f),
        }
    }
}

impl From<NameExpr> for Expr {
    fn from(expr: NameExpr) -> Self {
        Expr::Name(expr)
    }
}

impl From<PrefixExpr> for Expr {
    fn from(expr: PrefixExpr) -> Self {
        Expr::Prefix(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<CallExpr> for Expr {
    fn from(expr: CallExpr) -> Self {
        Expr::Call(expr)
    }
}
