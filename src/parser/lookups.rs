use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    tokens::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser};

/// Binding powers, weakest first. The discriminants are the numeric powers
/// the parser compares against.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Sum = 2,
    Product = 3,
    Call = 4,
    Prefix = 5,
}

impl BindingPower {
    pub fn power(self) -> u8 {
        self as u8
    }
}

pub type NUDHandler = fn(&mut Parser<'_>, Token) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, Token) -> Result<Expr, Error>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    pub static ref BINDING_POWER_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Name, BindingPower::Default);
        map.insert(TokenKind::Bang, BindingPower::Prefix);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Star, BindingPower::Product);

        map.insert(TokenKind::LeftParen, BindingPower::Call);
        map
    };

    /// The standard operator set, built once and shared by every parser
    /// created through `Parser::new`.
    pub static ref STANDARD_GRAMMAR: Grammar = Grammar::standard();
}

/// Looks up the binding power of a token kind. Kinds missing from the table
/// bind at `BindingPower::Default`.
pub fn binding_power(kind: TokenKind) -> u8 {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Default)
        .power()
}

/// Parselet registry.
///
/// Maps token kinds to the handlers invoked when that kind shows up at the
/// start of an expression (NUD) or after an already parsed left operand
/// (LED). Registering a kind twice replaces the earlier handler.
#[derive(Clone, Default)]
pub struct Grammar {
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
}

impl Grammar {
    /// Creates an empty grammar. Nothing parses until handlers are registered.
    pub fn new() -> Self {
        Grammar::default()
    }

    /// Creates a grammar with names, grouping, the unary operators
    /// `+ - ! ~`, the binary operators `+ - / *` and calls registered.
    pub fn standard() -> Self {
        let mut grammar = Grammar::new();

        // Literals and grouping
        grammar.register_prefix(TokenKind::Name, parse_name_expr);
        grammar.register_prefix(TokenKind::LeftParen, parse_grouping_expr);

        // Unary
        grammar.register_prefix(TokenKind::Plus, parse_prefix_expr);
        grammar.register_prefix(TokenKind::Minus, parse_prefix_expr);
        grammar.register_prefix(TokenKind::Bang, parse_prefix_expr);
        grammar.register_prefix(TokenKind::Tilde, parse_prefix_expr);

        // Additive and multiplicative
        grammar.register_infix(TokenKind::Plus, parse_binary_expr);
        grammar.register_infix(TokenKind::Minus, parse_binary_expr);
        grammar.register_infix(TokenKind::Slash, parse_binary_expr);
        grammar.register_infix(TokenKind::Star, parse_binary_expr);

        grammar.register_infix(TokenKind::LeftParen, parse_call_expr);

        grammar
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn register_prefix(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn register_infix(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    pub fn lookup_prefix(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn lookup_infix(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }
}
