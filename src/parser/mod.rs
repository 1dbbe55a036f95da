//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a single expression. It uses a Pratt parser with proper operator
//! precedence and handles:
//!
//! - Names, and unary operators in prefix position
//! - Left associative binary operators
//! - Parenthesized grouping
//! - Calls with comma separated arguments
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! registered in a `Grammar`, with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
