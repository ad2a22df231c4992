use crate::error::LexErrorKind;
use crate::parser::ast::GroupKind;
use crate::parser::lexer::{TokenKind, is_meta_char, lex, text_size, token_text};

fn snapshot(input: &str) -> String {
    let tokens = lex(input).expect("pattern should scan");
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input)
        .expect("pattern should scan")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn lex_error(input: &str) -> (LexErrorKind, usize) {
    let err = lex(input).expect_err("pattern should not scan");
    (err.kind, err.offset())
}

#[test]
fn wildcards() {
    insta::assert_snapshot!(snapshot("a*b**c?"), @r#"
    Literal('a') "a"
    AnySequence "*"
    Literal('b') "b"
    AnySequenceAll "**"
    Literal('c') "c"
    AnyOne "?"
    EndOfInput ""
    "#);
}

#[test]
fn star_run_is_greedy() {
    assert_eq!(
        kinds("***"),
        vec![
            TokenKind::AnySequenceAll,
            TokenKind::AnySequence,
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn group_openers() {
    insta::assert_snapshot!(snapshot("(a)@(b)*(c)+(d)?(e)"), @r#"
    GroupOpen(OneOf) "("
    Literal('a') "a"
    GroupClose ")"
    GroupOpen(OneOf) "@("
    Literal('b') "b"
    GroupClose ")"
    GroupOpen(ZeroOrMore) "*("
    Literal('c') "c"
    GroupClose ")"
    GroupOpen(OneOrMore) "+("
    Literal('d') "d"
    GroupClose ")"
    GroupOpen(ZeroOrOne) "?("
    Literal('e') "e"
    GroupClose ")"
    EndOfInput ""
    "#);
}

#[test]
fn double_star_before_paren_is_globstar_then_group() {
    assert_eq!(
        kinds("**(a)"),
        vec![
            TokenKind::AnySequenceAll,
            TokenKind::GroupOpen(GroupKind::OneOf),
            TokenKind::Literal('a'),
            TokenKind::GroupClose,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn alternators_only_inside_groups() {
    insta::assert_snapshot!(snapshot("a,b|@(c,d|e)"), @r#"
    Literal('a') "a"
    Literal(',') ","
    Literal('b') "b"
    Literal('|') "|"
    GroupOpen(OneOf) "@("
    Literal('c') "c"
    Alternator ","
    Literal('d') "d"
    Alternator "|"
    Literal('e') "e"
    GroupClose ")"
    EndOfInput ""
    "#);
}

#[test]
fn lone_at_and_plus_are_literals() {
    assert_eq!(
        kinds("a@b+c"),
        vec![
            TokenKind::Literal('a'),
            TokenKind::Literal('@'),
            TokenKind::Literal('b'),
            TokenKind::Literal('+'),
            TokenKind::Literal('c'),
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn escapes() {
    insta::assert_snapshot!(snapshot(r"\*\(\\x"), @r#"
    EscapedLiteral('*') "\\*"
    EscapedLiteral('(') "\\("
    EscapedLiteral('\\') "\\\\"
    Literal('x') "x"
    EndOfInput ""
    "#);
}

#[test]
fn class_with_range_and_negation() {
    insta::assert_snapshot!(snapshot("[!a-cx]"), @r#"
    ClassOpen "["
    ClassNegate "!"
    Literal('a') "a"
    ClassRangeDash "-"
    Literal('c') "c"
    Literal('x') "x"
    ClassClose "]"
    EndOfInput ""
    "#);
}

#[test]
fn class_edge_dashes_are_literal() {
    assert_eq!(
        kinds("[-a-]"),
        vec![
            TokenKind::ClassOpen,
            TokenKind::Literal('-'),
            TokenKind::Literal('a'),
            TokenKind::Literal('-'),
            TokenKind::ClassClose,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn class_members_lose_special_meaning() {
    insta::assert_snapshot!(snapshot("[?*(,|!]"), @r#"
    ClassOpen "["
    Literal('?') "?"
    Literal('*') "*"
    Literal('(') "("
    Literal(',') ","
    Literal('|') "|"
    Literal('!') "!"
    ClassClose "]"
    EndOfInput ""
    "#);
}

#[test]
fn class_splits_multi_char_lexemes() {
    let tokens = lex("[**]").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Literal('*'));
    assert_eq!(tokens[2].kind, TokenKind::Literal('*'));
    assert_eq!(token_text("[**]", &tokens[1]), "*");
    assert_eq!(token_text("[**]", &tokens[2]), "*");
}

#[test]
fn class_escapes() {
    assert_eq!(
        kinds(r"[\]\-]"),
        vec![
            TokenKind::ClassOpen,
            TokenKind::EscapedLiteral(']'),
            TokenKind::EscapedLiteral('-'),
            TokenKind::ClassClose,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn stray_bracket_close_is_literal() {
    assert_eq!(
        kinds("a]"),
        vec![
            TokenKind::Literal('a'),
            TokenKind::Literal(']'),
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn multibyte_spans() {
    let source = "é[ü]";
    let tokens = lex(source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Literal('é'));
    assert_eq!(token_text(source, &tokens[2]), "ü");
    assert_eq!(u32::from(tokens.last().unwrap().span.start()), 6);
}

#[test]
fn errors() {
    assert_eq!(lex_error(r"foo\"), (LexErrorKind::DanglingEscape, 3));
    assert_eq!(lex_error("a[]"), (LexErrorKind::EmptyClass, 1));
    assert_eq!(lex_error("[!]"), (LexErrorKind::EmptyClass, 0));
    assert_eq!(lex_error("x[abc"), (LexErrorKind::UnterminatedClass, 1));
    assert_eq!(lex_error(r"[a\"), (LexErrorKind::DanglingEscape, 2));
    assert_eq!(lex_error("@(foo"), (LexErrorKind::UnterminatedGroup, 0));
    assert_eq!(lex_error("(a@(b)"), (LexErrorKind::UnterminatedGroup, 0));
    assert_eq!(lex_error("a(b+(c"), (LexErrorKind::UnterminatedGroup, 3));
    assert_eq!(lex_error("ab)"), (LexErrorKind::UnmatchedGroupClose, 2));
}

#[test]
fn offsets_fit_span_positions() {
    assert_eq!(u32::from(text_size(0).unwrap()), 0);
    assert_eq!(u32::from(text_size(u32::MAX as usize).unwrap()), u32::MAX);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn offsets_past_u32_are_rejected() {
    let err = text_size(u32::MAX as usize + 1).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::PatternTooLong);
    assert_eq!(err.offset(), 0);

    let err = text_size(usize::MAX).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::PatternTooLong);
}

#[test]
fn empty_pattern() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
}

#[test]
fn meta_chars() {
    for c in r"*?\[]()@+|,!-".chars() {
        assert!(is_meta_char(c), "{c:?} should be meta");
    }
    for c in "az09/._ {}".chars() {
        assert!(!is_meta_char(c), "{c:?} should not be meta");
    }
}
