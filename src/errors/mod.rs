//! Error types and error handling for the parser.
//!
//! This module defines the errors a parse can fail with. It includes:
//!
//! - Error structures carrying the token index where parsing stopped
//! - The two syntax error variants the parser raises
//! - Error names and suggestions for presenting errors to users

pub mod errors;
