//! Extended-glob compiler: scanner, parser, analyzer, and regex emitter.
//!
//! This crate turns a glob pattern into an engine-ready [`Program`]:
//! - `parser` - lexer and arena AST construction
//! - `analyze` - engine dialect selection
//! - `emit` - regex generation for the selected dialect
//! - `diagnostics` - annotated error rendering
//! - `error` - per-stage error types

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod parser;

#[cfg(test)]
mod compile_tests;

pub use analyze::select_engine;
pub use emit::generate;
pub use error::{CodegenError, CompileError, LexError, LexErrorKind, ParseError};
pub use extglob_core::{EngineKind, Program};
pub use parser::{Ast, is_meta_char, lex, parse};

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Compiles `pattern` into a regex program for the engine it needs.
///
/// `*` and `?` never match any character in `separators`; `**` matches
/// across them. The output is a pure function of the inputs.
pub fn compile(pattern: &str, separators: &[char]) -> Result<Program> {
    let ast = parse(pattern)?;
    let engine = select_engine(&ast);
    let regex = generate(&ast, engine, separators)?;

    tracing::debug!(pattern, engine = %engine, program = %regex, "compiled glob");

    Ok(Program::new(regex, engine))
}
