//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Token streams are usually written out by hand in tests and by callers
//! that own their own lexer, so this keeps them short.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text, anything `Into<String>`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Name, "a");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::tokens::tokens::Token {
            kind: $kind,
            value: ::std::string::String::from($value),
        }
    };
}
