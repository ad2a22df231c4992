//! Execution engines for compiled glob programs.
//!
//! The compiler only decides which dialect a program needs; this crate
//! binds a program to a matcher for that dialect:
//! - `basic` - lazy automaton, linear time, no captures
//! - `extended` - capturing matcher (PikeVM or bounded backtracker)
//!
//! Both are `regex-automata` meta regexes. Neither determinizes up front,
//! so building is linear in the program size.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod basic;
mod extended;
mod stack;

#[cfg(test)]
mod stack_tests;

use std::fmt;

use regex_automata::meta;
use regex_automata::nfa::thompson::WhichCaptures;
use regex_automata::util::syntax;

pub use basic::BasicEngine;
pub use extended::ExtendedEngine;
pub use extglob_core::{EngineError, EngineKind};

/// A matcher bound to one compiled program.
///
/// Implementations are immutable after construction and safe to share
/// between threads. Programs are anchored, so every search is a
/// whole-string test.
pub trait Engine: fmt::Debug + Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Whether the whole of `input` matches.
    fn match_whole(&self, input: &str) -> bool;

    /// Group 0 is the whole match, followed by one entry per capturing
    /// group. Empty when `input` does not match.
    fn groups(&self, input: &str) -> Vec<String>;
}

/// Resource limits applied when building engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Heap cap of the compiled automaton in bytes (`None`: engine default).
    pub(crate) size_limit: Option<usize>,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the automaton size cap.
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn get_size_limit(&self) -> Option<usize> {
        self.size_limit
    }
}

/// Builds the engine of `kind` for `pattern`.
pub fn build(kind: EngineKind, pattern: &str, limits: &Limits) -> Result<Box<dyn Engine>, EngineError> {
    let engine = stack::with_nesting_stack(pattern, || -> Result<Box<dyn Engine>, EngineError> {
        let engine: Box<dyn Engine> = match kind {
            EngineKind::Basic => Box::new(BasicEngine::new(pattern, limits)?),
            EngineKind::Extended => Box::new(ExtendedEngine::new(pattern, limits)?),
        };
        Ok(engine)
    })
    .map_err(|err| EngineError::new(kind, pattern, err))??;

    tracing::trace!(engine = %kind, pattern, "built engine");
    Ok(engine)
}

/// Meta regex for an anchored program.
///
/// The syntax nest limit is lifted: glob groups nest without bound. The
/// full DFA is disabled since determinizing can be exponential in the
/// program size; the lazy DFA and the NFA engines cover every search.
fn meta_regex(
    kind: EngineKind,
    pattern: &str,
    captures: WhichCaptures,
    limits: &Limits,
) -> Result<meta::Regex, EngineError> {
    let mut config = meta::Config::new().which_captures(captures).dfa(false);
    if let Some(limit) = limits.size_limit {
        config = config.nfa_size_limit(Some(limit));
    }

    meta::Regex::builder()
        .configure(config)
        .syntax(syntax::Config::new().nest_limit(u32::MAX))
        .build(pattern)
        .map_err(|e| EngineError::new(kind, pattern, e))
}
