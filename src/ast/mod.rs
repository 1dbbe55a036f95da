/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` sum type and its kind tags
/// - expressions: The node structs each `Expr` variant wraps, and their rendering
pub mod ast;
pub mod expressions;
