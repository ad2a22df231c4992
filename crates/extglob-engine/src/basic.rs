//! Linear-time engine without captures.

use regex_automata::meta::Regex;
use regex_automata::nfa::thompson::WhichCaptures;
use regex_automata::{Anchored, Input};

use extglob_core::{EngineError, EngineKind};

use crate::{Engine, Limits, meta_regex};

/// Meta regex tracking only the overall match, which keeps every search on
/// the lazy DFA or the PikeVM.
#[derive(Debug, Clone)]
pub struct BasicEngine {
    regex: Regex,
}

impl BasicEngine {
    pub fn new(pattern: &str, limits: &Limits) -> Result<Self, EngineError> {
        let regex = meta_regex(EngineKind::Basic, pattern, WhichCaptures::Implicit, limits)?;
        Ok(Self { regex })
    }
}

impl Engine for BasicEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Basic
    }

    fn match_whole(&self, input: &str) -> bool {
        self.regex.is_match(Input::new(input).anchored(Anchored::Yes))
    }

    fn groups(&self, input: &str) -> Vec<String> {
        if self.match_whole(input) {
            vec![input.to_string()]
        } else {
            Vec::new()
        }
    }
}
