//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and its cursor primitives.
//! The parser uses a Pratt parser approach: NUD handlers start an
//! expression, LED handlers extend an already parsed left operand, and
//! binding powers decide which operator claims an operand.
//!
//! The handlers come from a [`Grammar`]; `Parser::new` uses the shared
//! standard grammar, `Parser::with_grammar` takes any other.

use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{binding_power, BindingPower, Grammar, STANDARD_GRAMMAR},
};

static EOF_TOKEN: Token = Token {
    kind: TokenKind::EOF,
    value: String::new(),
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the cursor into it, and the grammar
/// whose handlers drive parsing. The grammar is only borrowed, so one grammar
/// can serve any number of parsers.
pub struct Parser<'g> {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Prefix and infix handler lookups
    grammar: &'g Grammar,
}

impl Parser<'static> {
    /// Creates a new Parser over the standard grammar.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, without a trailing EOF token
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_grammar(tokens, &STANDARD_GRAMMAR)
    }
}

impl<'g> Parser<'g> {
    /// Creates a new Parser that dispatches through `grammar`.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, without a trailing EOF token
    /// * `grammar` - The handler registry to parse with
    pub fn with_grammar(tokens: Vec<Token>, grammar: &'g Grammar) -> Self {
        Parser {
            tokens,
            pos: 0,
            grammar,
        }
    }

    /// Returns the current token without advancing, or the EOF token once
    /// the stream is exhausted.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// At the end of the stream this returns the EOF token and leaves the
    /// cursor where it is.
    pub fn advance(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => Token::eof(),
        }
    }

    /// Consumes the current token if it is of the given kind.
    ///
    /// # Returns
    ///
    /// Returns true if a token was consumed. The cursor does not move otherwise.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error positioned at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.peek();
        if token.kind != expected_kind {
            let error = Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                    token: token.value.clone(),
                },
                self.get_position(),
            );
            debug!(
                error = error.get_error_name(),
                position = self.pos,
                "expected {}, found {}",
                expected_kind,
                token.kind
            );
            return Err(error);
        }

        Ok(self.advance())
    }

    /// Returns the binding power of the current token.
    pub fn binding_power_of_next(&self) -> u8 {
        binding_power(self.current_token_kind())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the grammar this parser dispatches through.
    pub fn get_grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    /// Parses one complete expression.
    ///
    /// Tokens left over after the expression are not consumed and not
    /// reported; use [`parse`] when the whole stream must be one expression.
    pub fn parse_expression(&mut self) -> Result<Expr, Error> {
        parse_expr(self, BindingPower::Default.power())
    }
}

/// Parses a token stream that must hold exactly one expression, using the
/// standard grammar.
///
/// # Returns
///
/// The expression, or an `UnexpectedToken` error for the first token left
/// over once the expression is complete.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Error> {
    parse_with_grammar(tokens, &STANDARD_GRAMMAR)
}

/// Same as [`parse`], dispatching through `grammar`.
pub fn parse_with_grammar(tokens: Vec<Token>, grammar: &Grammar) -> Result<Expr, Error> {
    let mut parser = Parser::with_grammar(tokens, grammar);
    let expr = parser.parse_expression()?;

    if parser.has_tokens() {
        let token = parser.peek();
        debug!(position = parser.pos, "trailing token {} after expression", token.kind);
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                kind: token.kind,
            },
            parser.get_position(),
        ));
    }

    Ok(expr)
}
