use crate::stack::{nesting_depth, with_nesting_stack};

#[test]
fn depth_of_flat_program() {
    assert_eq!(nesting_depth("(?s)^abc$"), 1);
    assert_eq!(nesting_depth(""), 0);
}

#[test]
fn depth_counts_nested_groups() {
    assert_eq!(nesting_depth("(?s)^(a|((?:b)*))c$"), 3);
}

#[test]
fn depth_skips_escaped_parens() {
    assert_eq!(nesting_depth(r"(?s)^\(\(\(a\)$"), 1);
    assert_eq!(nesting_depth(r"(?s)^\\((a))$"), 2);
}

#[test]
fn shallow_build_runs_inline() {
    let caller = std::thread::current().id();
    let ran_on = with_nesting_stack("(?s)^a$", || std::thread::current().id()).unwrap();
    assert_eq!(ran_on, caller);
}

#[test]
fn deep_build_runs_on_helper_thread() {
    let pattern = format!("{}a{}", "(".repeat(1_000), ")".repeat(1_000));
    let name = with_nesting_stack(&pattern, || {
        std::thread::current().name().map(str::to_owned)
    })
    .unwrap();
    assert_eq!(name.as_deref(), Some("extglob-build"));
}
