#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the extglob compiler and its engines.
//!
//! - [`EngineKind`]: which execution engine a compiled program needs
//! - [`Program`]: the compiler's final output, a pattern string plus its engine
//! - [`EngineError`]: an engine refused to build a program

use std::fmt;

use serde::Serialize;


/// Execution engine dialect required by a compiled program.
///
/// `Basic` programs run on a linear-time automaton without capture support.
/// `Extended` programs need an engine that reports capturing groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Basic,
    Extended,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Basic => "basic",
            EngineKind::Extended => "extended",
        }
    }

    /// Whether engines of this kind report capturing groups beyond the whole match.
    pub fn supports_captures(self) -> bool {
        matches!(self, EngineKind::Extended)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled program: the generated pattern and the engine it was generated for.
///
/// Immutable once built. The pattern is anchored at both ends, so engines
/// only ever need to test whole-string matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Program {
    pattern: String,
    engine: EngineKind,
}

impl Program {
    pub fn new(pattern: impl Into<String>, engine: EngineKind) -> Self {
        Self {
            pattern: pattern.into(),
            engine,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn engine(&self) -> EngineKind {
        self.engine
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pattern, self.engine)
    }
}

/// An execution engine rejected a generated program.
///
/// Generated programs are well-formed by construction, so this points at a
/// generator/engine contract bug or an exceeded engine size limit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{engine} engine rejected `{pattern}`: {message}")]
pub struct EngineError {
    pub engine: EngineKind,
    pub pattern: String,
    pub message: String,
}

impl EngineError {
    pub fn new(engine: EngineKind, pattern: impl Into<String>, message: impl ToString) -> Self {
        Self {
            engine,
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }
}
