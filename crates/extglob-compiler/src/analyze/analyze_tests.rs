use extglob_core::EngineKind;

use super::select_engine;
use crate::parser::parse;

fn engine(input: &str) -> EngineKind {
    select_engine(&parse(input).expect("pattern should parse"))
}

#[test]
fn plain_patterns_are_basic() {
    for pattern in ["", "abc", "*.rs", "**/x", "?", "[a-z]*", r"\(literal\)", "a,b|c"] {
        assert_eq!(engine(pattern), EngineKind::Basic, "{pattern}");
    }
}

#[test]
fn any_group_is_extended() {
    for pattern in ["(a)", "x@(a|b)", "*(a)", "+(a)", "?(a)", "[ab]?(c)"] {
        assert_eq!(engine(pattern), EngineKind::Extended, "{pattern}");
    }
}

#[test]
fn deterministic() {
    let pattern = "a*(b|c)[d-f]";
    assert_eq!(engine(pattern), engine(pattern));
}
