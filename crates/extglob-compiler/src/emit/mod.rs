//! Code generation: AST to an anchored regex in the selected dialect.
//!
//! - `*` and `?` become classes that exclude the configured separators
//! - `**` becomes an unrestricted `.*` (the program runs with the `s` flag)
//! - groups become capturing groups, quantified per their kind
//!
//! Walks the tree with an explicit work stack.

mod generator;


use extglob_core::EngineKind;

use crate::error::CodegenError;
use crate::parser::Ast;

use generator::Generator;

/// Emits the program for `ast` in `dialect`.
///
/// Fails only when the tree uses something the dialect cannot express,
/// which `analyze::select_engine` rules out.
pub fn generate(ast: &Ast, dialect: EngineKind, separators: &[char]) -> Result<String, CodegenError> {
    Generator::new(ast, dialect, separators).run()
}
