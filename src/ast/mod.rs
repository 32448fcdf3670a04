/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree handed to the resolver
///
/// Submodules:
/// - ast: The `Stmt` and `Expr` sum types and node identities
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs
pub mod ast;
pub mod expressions;
pub mod statements;
