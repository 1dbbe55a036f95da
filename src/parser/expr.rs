use tracing::{debug, trace};

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, NameExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
};

/// Parses an expression whose infix operators all bind at least as tightly
/// as `min_bp`.
///
/// Operands on the right of an operator are parsed with a threshold one above
/// that operator's power, so an operator of the same power is left for the
/// enclosing loop and equal powers group to the left.
pub fn parse_expr(parser: &mut Parser, min_bp: u8) -> Result<Expr, Error> {
    // First parse NUD
    let position = parser.get_position();
    let token = parser.advance();
    let Some(nud_fn) = parser.get_grammar().lookup_prefix(token.kind) else {
        debug!(
            error = "UnexpectedToken",
            position = position.0,
            "no prefix handler for {}",
            token.kind
        );
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value,
                kind: token.kind,
            },
            position,
        ));
    };

    trace!(kind = %token.kind, min_bp, position = position.0, "prefix");
    let mut left = nud_fn(parser, token)?;

    // While there is a LED for the current token and it binds tightly enough, keep extending lhs
    while let Some(led_fn) = parser.get_grammar().lookup_infix(parser.current_token_kind()) {
        if parser.binding_power_of_next() < min_bp {
            break;
        }

        let operator = parser.advance();
        trace!(kind = %operator.kind, min_bp, position = parser.get_position().0, "infix");
        left = led_fn(parser, left, operator)?;
    }

    Ok(left)
}

pub fn parse_name_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::from(NameExpr { value: token.value }))
}

/// Unary operators bind the operand at their own table power plus one, so
/// `--a` nests as `-(-(a))`.
pub fn parse_prefix_expr(parser: &mut Parser, operator: Token) -> Result<Expr, Error> {
    let bp = binding_power(operator.kind);
    let right = parse_expr(parser, bp + 1)?;

    Ok(Expr::from(PrefixExpr {
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Expr, Error> {
    let expr = parser.parse_expression()?;
    parser.expect(TokenKind::RightParen)?;

    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, operator: Token) -> Result<Expr, Error> {
    let bp = binding_power(operator.kind);
    // Left associative. Parsing the rhs at `bp` instead would make it right associative.
    let right = parse_expr(parser, bp + 1)?;

    Ok(Expr::from(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Parses the argument list after the opening paren of a call.
///
/// Arguments are separated by commas, and a trailing comma before the
/// closing paren is allowed. Anything else after an argument is an
/// `ExpectedToken` error for the closing paren.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _token: Token) -> Result<Expr, Error> {
    let mut arguments = vec![];

    loop {
        if parser.match_token(TokenKind::RightParen) {
            break;
        }

        arguments.push(parse_expr(parser, BindingPower::Default.power())?);

        if !parser.match_token(TokenKind::Comma) {
            parser.expect(TokenKind::RightParen)?;
            break;
        }
    }

    Ok(Expr::from(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}
