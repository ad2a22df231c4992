//! Raw lexemes of the glob language.
//!
//! Logos recognizes character-level units only. Whether a lexeme is a
//! wildcard, a class member or a plain literal depends on the class and
//! group context, which the scanner in `lexer.rs` tracks on top of this.

use logos::Logos;

use super::ast::GroupKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// Defined before `Star` and `StarParen`; `**(` is `**` then `(`.
    #[token("**")]
    DoubleStar,

    #[token("*(")]
    StarParen,

    #[token("*")]
    Star,

    #[token("?(")]
    QuestionParen,

    #[token("?")]
    Question,

    #[token("@(")]
    AtParen,

    #[token("+(")]
    PlusParen,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("!")]
    Bang,

    #[token("-")]
    Dash,

    #[token("|")]
    Pipe,

    #[token(",")]
    Comma,

    /// Backslash plus the character it escapes.
    #[regex(r"\\(.|\n)")]
    Escape,

    /// Backslash with nothing after it.
    #[token("\\")]
    Backslash,

    /// Any other single character, including a lone `@` or `+`.
    #[regex(r"[^*?()\[\]!|,\\-]")]
    Char,
}

impl Lexeme {
    /// Group kind opened by this lexeme, if it is a group opener.
    pub fn group_kind(self) -> Option<GroupKind> {
        match self {
            Lexeme::ParenOpen | Lexeme::AtParen => Some(GroupKind::OneOf),
            Lexeme::StarParen => Some(GroupKind::ZeroOrMore),
            Lexeme::PlusParen => Some(GroupKind::OneOrMore),
            Lexeme::QuestionParen => Some(GroupKind::ZeroOrOne),
            _ => None,
        }
    }
}
