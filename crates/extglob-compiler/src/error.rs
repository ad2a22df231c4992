//! Error types for every compilation stage.

use extglob_core::{EngineError, EngineKind};
use rowan::TextRange;

use crate::parser::GroupKind;

/// What went wrong while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    #[error("character class is empty")]
    EmptyClass,

    #[error("unterminated character class")]
    UnterminatedClass,

    #[error("unterminated group")]
    UnterminatedGroup,

    #[error("unmatched `)`")]
    UnmatchedGroupClose,

    #[error("unrecognized input")]
    UnrecognizedInput,

    #[error("pattern is longer than {} bytes", u32::MAX)]
    PatternTooLong,
}

/// Malformed pattern text, located by byte span.
///
/// Spans are `u32` offsets, so patterns longer than `u32::MAX` bytes are
/// rejected whole with [`LexErrorKind::PatternTooLong`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} at byte {}", .kind, u32::from(.range.start()))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub range: TextRange,
}

impl LexError {
    pub fn new(kind: LexErrorKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        u32::from(self.range.start()) as usize
    }
}

/// Token sequence that does not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found} (token {token_index})")]
pub struct ParseError {
    pub token_index: usize,
    pub range: TextRange,
    pub expected: String,
    pub found: String,
}

impl ParseError {
    pub fn new(
        token_index: usize,
        range: TextRange,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            token_index,
            range,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// The AST asks for something the selected dialect cannot express.
///
/// Unreachable when the engine was chosen by `analyze::select_engine`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    #[error("{kind:?} group cannot be expressed in the {dialect} dialect")]
    UnsupportedGroup { kind: GroupKind, dialect: EngineKind },

    #[error("character class without ranges")]
    EmptyClass,

    #[error("character class range {lo:?}-{hi:?} is reversed")]
    ReversedRange { lo: char, hi: char },
}

/// Any failure while turning a pattern into a matcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("invalid pattern: {0}")]
    Lex(#[from] LexError),

    #[error("invalid pattern: {0}")]
    Parse(#[from] ParseError),

    #[error("internal code generation error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("internal engine error: {0}")]
    Engine(#[from] EngineError),
}

impl CompileError {
    /// Source span the error points at, when it has one.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            CompileError::Lex(err) if err.kind == LexErrorKind::PatternTooLong => None,
            CompileError::Lex(err) => Some(err.range),
            CompileError::Parse(err) => Some(err.range),
            CompileError::Codegen(_) | CompileError::Engine(_) => None,
        }
    }
}
