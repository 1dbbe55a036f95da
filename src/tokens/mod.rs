//! Token model consumed by the parser.
//!
//! Tokenization itself happens upstream; this module only defines the
//! shape of what the parser receives:
//!
//! - `TokenKind`, the closed set of token categories
//! - `Token`, a category paired with its literal text

pub mod tokens;
