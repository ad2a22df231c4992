//! The matcher facade: a compiled program bound to its engine.

use std::fmt;
use std::sync::Arc;

use extglob_core::{EngineKind, Program};
use extglob_engine::Engine;

use crate::Result;
use crate::config::Config;

/// A compiled glob pattern.
///
/// Cheap to clone and safe to share between threads; matching never fails.
#[derive(Clone, Debug)]
pub struct Glob {
    source: String,
    program: Program,
    engine: Arc<dyn Engine>,
}

impl Glob {
    /// Compiles `pattern`; `*` and `?` will not match any of `separators`.
    pub fn new(pattern: &str, separators: &[char]) -> Result<Self> {
        Self::builder(pattern).separators(separators).build()
    }

    /// Like [`Glob::new`], but panics on an invalid pattern.
    ///
    /// Meant for patterns known at compile time.
    pub fn must_compile(pattern: &str, separators: &[char]) -> Self {
        match Self::new(pattern, separators) {
            Ok(glob) => glob,
            Err(err) => panic!("extglob: compiling {pattern:?}: {err}"),
        }
    }

    pub fn builder(pattern: &str) -> GlobBuilder<'_> {
        GlobBuilder::new(pattern)
    }

    /// Whether the whole of `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        self.engine.match_whole(input)
    }

    /// The whole match followed by every group's text, outer groups first.
    ///
    /// Empty when `input` does not match. Groups that took no part in the
    /// match yield `""`. Patterns without groups return the whole match only.
    pub fn captures(&self, input: &str) -> Vec<String> {
        self.engine.groups(input)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.program.engine()
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Builder for a [`Glob`] with non-default [`Config`].
#[derive(Clone, Debug)]
pub struct GlobBuilder<'p> {
    pattern: &'p str,
    config: Config,
}

impl<'p> GlobBuilder<'p> {
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn separators(mut self, separators: &[char]) -> Self {
        self.config.separators = separators.to_vec();
        self
    }

    /// Programs whose automaton outgrows `limit` bytes fail to build.
    pub fn size_limit(mut self, limit: usize) -> Self {
        self.config.size_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Glob> {
        let program = extglob_compiler::compile(self.pattern, &self.config.separators)?;
        let engine = extglob_engine::build(program.engine(), program.pattern(), &self.config.limits())?;

        Ok(Glob {
            source: self.pattern.to_string(),
            program,
            engine: Arc::from(engine),
        })
    }
}
