//! Engine with capturing groups.

use regex_automata::meta::Regex;
use regex_automata::nfa::thompson::WhichCaptures;
use regex_automata::{Anchored, Input};

use extglob_core::{EngineError, EngineKind};

use crate::{Engine, Limits, meta_regex};

/// Two views of one program.
///
/// Capture-tracking search state grows with states times groups, so
/// whole-string tests run on a regex that tracks only the overall match.
/// The capturing regex is touched only when groups are asked for.
#[derive(Debug, Clone)]
pub struct ExtendedEngine {
    matcher: Regex,
    captures: Regex,
}

impl ExtendedEngine {
    pub fn new(pattern: &str, limits: &Limits) -> Result<Self, EngineError> {
        let kind = EngineKind::Extended;
        let matcher = meta_regex(kind, pattern, WhichCaptures::Implicit, limits)?;
        let captures = meta_regex(kind, pattern, WhichCaptures::All, limits)?;
        Ok(Self { matcher, captures })
    }
}

impl Engine for ExtendedEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Extended
    }

    fn match_whole(&self, input: &str) -> bool {
        self.matcher.is_match(Input::new(input).anchored(Anchored::Yes))
    }

    /// Groups that did not take part in the match come back as `""`.
    fn groups(&self, input: &str) -> Vec<String> {
        if !self.match_whole(input) {
            return Vec::new();
        }

        let mut caps = self.captures.create_captures();
        self.captures
            .search_captures(&Input::new(input).anchored(Anchored::Yes), &mut caps);
        if !caps.is_match() {
            return Vec::new();
        }

        (0..caps.group_len())
            .map(|index| {
                caps.get_group(index)
                    .map_or_else(String::new, |span| input[span.range()].to_string())
            })
            .collect()
    }
}
