use extglob_core::EngineKind;

use crate::compile;
use crate::error::{CompileError, LexErrorKind};

#[test]
fn simple_pattern_uses_basic_engine() {
    let program = compile("*.txt", &['/']).unwrap();
    assert_eq!(program.engine(), EngineKind::Basic);
    assert_eq!(program.pattern(), r"(?s)^[^\x{2F}]*\.txt$");
}

#[test]
fn group_uses_extended_engine() {
    let program = compile("@(foo|bar)baz", &[]).unwrap();
    assert_eq!(program.engine(), EngineKind::Extended);
    assert_eq!(program.pattern(), "(?s)^(foo|bar)baz$");
}

#[test]
fn group_anywhere_selects_extended() {
    let program = compile("[ab]*x?(y)", &['/']).unwrap();
    assert_eq!(program.engine(), EngineKind::Extended);
}

#[test]
fn empty_pattern() {
    let program = compile("", &[]).unwrap();
    assert_eq!(program.engine(), EngineKind::Basic);
    assert_eq!(program.pattern(), "(?s)^$");
}

#[test]
fn compilation_is_deterministic() {
    let patterns = ["a*b", "**/?.rs", "+(a|b)[!c-e]", r"\@(x)"];
    for pattern in patterns {
        let first = compile(pattern, &['/', '.']).unwrap();
        let second = compile(pattern, &['/', '.']).unwrap();
        assert_eq!(first, second, "{pattern}");
    }
}

#[test]
fn escaped_group_opener() {
    let program = compile(r"\@(x)", &[]);
    // the escaped `@` leaves a bare `(` group behind
    assert_eq!(program.unwrap().engine(), EngineKind::Extended);

    let program = compile(r"\@\(x\)", &[]).unwrap();
    assert_eq!(program.engine(), EngineKind::Basic);
    assert_eq!(program.pattern(), r"(?s)^@\(x\)$");
}

#[test]
fn lex_errors_propagate() {
    let Err(CompileError::Lex(err)) = compile("@(foo", &[]) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::UnterminatedGroup);
    assert_eq!(err.offset(), 0);

    let Err(CompileError::Lex(err)) = compile(r"foo\", &[]) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::DanglingEscape);
    assert_eq!(err.offset(), 3);

    let Err(CompileError::Lex(err)) = compile("[]", &[]) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::EmptyClass);
}

#[test]
fn parse_errors_propagate() {
    let err = compile("[z-a]", &[]).unwrap_err();
    let CompileError::Parse(parse) = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(parse.token_index, 1);
    assert_eq!(
        err.to_string(),
        "invalid pattern: expected range with its lower bound first, found literal 'z' (token 1)"
    );
}

#[test]
fn error_display() {
    let err = compile("ab)", &[]).unwrap_err();
    assert_eq!(err.to_string(), "invalid pattern: unmatched `)` at byte 2");
}
