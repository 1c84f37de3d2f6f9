/// AST (Abstract Syntax Tree) module
/// Contains all node shapes the parser builds
///
/// Submodules:
/// - ast: Program and the closed Statement / Expression enums
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants and blocks
pub mod ast;
pub mod expressions;
pub mod statements;
