//! Feature analysis: picks the engine dialect a pattern needs.
//!
//! Grouping and alternation (with capture) only exist in the extended
//! dialect; everything else is expressible in the basic automaton dialect.

use extglob_core::EngineKind;

use crate::parser::{Ast, Node};

#[cfg(test)]
mod analyze_tests;

/// Visits every node once and returns the engine the tree requires.
///
/// Pure function of tree shape: equal trees always get the same answer.
pub fn select_engine(ast: &Ast) -> EngineKind {
    let needs_groups = ast
        .sequences()
        .flat_map(|(_, seq)| &seq.children)
        .any(|node| match node {
            Node::Group(_) => true,
            Node::Literal(_) | Node::AnyOne | Node::AnySequence { .. } | Node::CharClass(_) => {
                false
            }
        });

    if needs_groups {
        EngineKind::Extended
    } else {
        EngineKind::Basic
    }
}
