//! Scanning and parsing of glob patterns.
//!
//! - `lexeme` - Logos character-level lexemes
//! - `lexer` - context-aware scanner producing [`Token`]s
//! - `core` / `grammar` - token stream to [`Ast`]
//! - `ast` - arena-backed syntax tree

pub mod ast;
mod core;
mod grammar;
mod lexeme;
pub mod lexer;

#[cfg(test)]
mod lexer_tests;

pub use ast::{Ast, CharClass, Group, GroupKind, Node, SeqId, Sequence};
pub use core::Parser;
pub use lexer::{Token, TokenKind, is_meta_char, lex, token_text};

use crate::error::CompileError;

/// Scans and parses `source` into an [`Ast`].
pub fn parse(source: &str) -> Result<Ast, CompileError> {
    let tokens = lex(source)?;
    Ok(Parser::new(&tokens).parse()?)
}
