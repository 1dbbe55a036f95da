#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod tokens;

/// Index of a token in the stream handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);
