//! Scanner for glob patterns.
//!
//! Produces span-based tokens from the raw Logos lexemes. The scanner owns
//! the context Logos cannot see:
//! - inside `[...]` wildcards, group openers and alternators are plain members
//! - `!` right after `[` negates, `-` is a range dash only between two members
//! - `,` and `|` separate alternatives only while a group is open
//!
//! Malformed input (dangling escape, empty or unterminated class, unbalanced
//! group) stops the scan with a [`LexError`].

use std::fmt;
use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::ast::GroupKind;
use super::lexeme::Lexeme;
use crate::error::{LexError, LexErrorKind};

/// Token: classified kind + the span it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    EscapedLiteral(char),
    /// `?`
    AnyOne,
    /// `*`
    AnySequence,
    /// `**`
    AnySequenceAll,
    ClassOpen,
    ClassClose,
    ClassNegate,
    ClassRangeDash,
    GroupOpen(GroupKind),
    GroupClose,
    /// `|` or `,` inside a group.
    Alternator,
    EndOfInput,
}

impl TokenKind {
    /// Character carried by literal tokens.
    pub fn literal(self) -> Option<char> {
        match self {
            TokenKind::Literal(c) | TokenKind::EscapedLiteral(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(c) | TokenKind::EscapedLiteral(c) => write!(f, "literal {c:?}"),
            TokenKind::AnyOne => f.write_str("`?`"),
            TokenKind::AnySequence => f.write_str("`*`"),
            TokenKind::AnySequenceAll => f.write_str("`**`"),
            TokenKind::ClassOpen => f.write_str("`[`"),
            TokenKind::ClassClose => f.write_str("`]`"),
            TokenKind::ClassNegate => f.write_str("`!`"),
            TokenKind::ClassRangeDash => f.write_str("range `-`"),
            TokenKind::GroupOpen(kind) => write!(f, "`{}`", kind.opener()),
            TokenKind::GroupClose => f.write_str("`)`"),
            TokenKind::Alternator => f.write_str("alternator"),
            TokenKind::EndOfInput => f.write_str("end of pattern"),
        }
    }
}

/// Whether `c` has a meaning of its own somewhere in the glob grammar.
///
/// Escaping every such character with `\` turns any text into a pattern
/// that matches exactly that text.
pub fn is_meta_char(c: char) -> bool {
    matches!(
        c,
        '*' | '?' | '\\' | '[' | ']' | '(' | ')' | '@' | '+' | '|' | ',' | '!' | '-'
    )
}

/// Byte offset as a span position. Fails past `u32::MAX`.
pub(crate) fn text_size(offset: usize) -> Result<TextSize, LexError> {
    u32::try_from(offset)
        .map(TextSize::from)
        .map_err(|_| LexError::new(LexErrorKind::PatternTooLong, TextRange::default()))
}

fn range_to_text_range(range: Range<usize>) -> Result<TextRange, LexError> {
    Ok(TextRange::new(text_size(range.start)?, text_size(range.end)?))
}

/// Tokenizes a pattern. The last token is always `EndOfInput`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    text_size(source.len())?;
    Scanner::new(source).run()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

#[derive(Debug, Clone, Copy)]
struct OpenClass {
    span: TextRange,
    members: usize,
    /// Nothing scanned since `[` yet.
    fresh: bool,
}

struct Scanner<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, Lexeme>,
    tokens: Vec<Token>,
    /// Spans of group openers not closed yet, innermost last.
    groups: Vec<TextRange>,
    class: Option<OpenClass>,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: Lexeme::lexer(source),
            tokens: Vec::new(),
            groups: Vec::new(),
            class: None,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(next) = self.lexer.next() {
            let span = range_to_text_range(self.lexer.span())?;
            let Ok(lexeme) = next else {
                return Err(LexError::new(LexErrorKind::UnrecognizedInput, span));
            };
            match self.class.take() {
                Some(class) => self.class = self.class_lexeme(class, lexeme, span)?,
                None => self.lexeme(lexeme, span)?,
            }
        }

        if let Some(class) = self.class {
            return Err(LexError::new(LexErrorKind::UnterminatedClass, class.span));
        }
        if let Some(&open) = self.groups.last() {
            return Err(LexError::new(LexErrorKind::UnterminatedGroup, open));
        }

        let eof = text_size(self.source.len())?;
        self.push(TokenKind::EndOfInput, TextRange::empty(eof));
        tracing::trace!(tokens = self.tokens.len(), "scanned pattern");
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, span: TextRange) {
        self.tokens.push(Token::new(kind, span));
    }

    /// Character `skip` chars into the current lexeme.
    fn char_at(&self, skip: usize, span: TextRange) -> Result<char, LexError> {
        self.lexer
            .slice()
            .chars()
            .nth(skip)
            .ok_or_else(|| LexError::new(LexErrorKind::UnrecognizedInput, span))
    }

    fn lexeme(&mut self, lexeme: Lexeme, span: TextRange) -> Result<(), LexError> {
        if let Some(kind) = lexeme.group_kind() {
            self.groups.push(span);
            self.push(TokenKind::GroupOpen(kind), span);
            return Ok(());
        }

        let kind = match lexeme {
            Lexeme::DoubleStar => TokenKind::AnySequenceAll,
            Lexeme::Star => TokenKind::AnySequence,
            Lexeme::Question => TokenKind::AnyOne,
            Lexeme::ParenClose => {
                if self.groups.pop().is_none() {
                    return Err(LexError::new(LexErrorKind::UnmatchedGroupClose, span));
                }
                TokenKind::GroupClose
            }
            Lexeme::BracketOpen => {
                self.class = Some(OpenClass {
                    span,
                    members: 0,
                    fresh: true,
                });
                TokenKind::ClassOpen
            }
            Lexeme::Pipe | Lexeme::Comma if !self.groups.is_empty() => TokenKind::Alternator,
            Lexeme::Escape => TokenKind::EscapedLiteral(self.char_at(1, span)?),
            Lexeme::Backslash => {
                return Err(LexError::new(LexErrorKind::DanglingEscape, span));
            }
            _ => TokenKind::Literal(self.char_at(0, span)?),
        };
        self.push(kind, span);
        Ok(())
    }

    /// Scans one lexeme inside `[...]`. Returns the class state, or `None`
    /// once the class is closed.
    fn class_lexeme(
        &mut self,
        mut class: OpenClass,
        lexeme: Lexeme,
        span: TextRange,
    ) -> Result<Option<OpenClass>, LexError> {
        let fresh = std::mem::replace(&mut class.fresh, false);

        match lexeme {
            Lexeme::BracketClose => {
                if class.members == 0 {
                    let span = class.span.cover(span);
                    return Err(LexError::new(LexErrorKind::EmptyClass, span));
                }
                self.push(TokenKind::ClassClose, span);
                return Ok(None);
            }
            Lexeme::Bang if fresh => self.push(TokenKind::ClassNegate, span),
            Lexeme::Dash => {
                let last = self.lexer.remainder().starts_with(']');
                if class.members == 0 || last {
                    self.push(TokenKind::Literal('-'), span);
                    class.members += 1;
                } else {
                    self.push(TokenKind::ClassRangeDash, span);
                }
            }
            Lexeme::Escape => {
                let c = self.char_at(1, span)?;
                self.push(TokenKind::EscapedLiteral(c), span);
                class.members += 1;
            }
            Lexeme::Backslash => {
                return Err(LexError::new(LexErrorKind::DanglingEscape, span));
            }
            _ => {
                // Multi-character lexemes such as `**` or `@(` are plain members here.
                let start = u32::from(span.start()) as usize;
                let text = self.lexer.slice();
                for (offset, c) in text.char_indices() {
                    let at = start + offset;
                    let char_span = range_to_text_range(at..at + c.len_utf8())?;
                    self.tokens.push(Token::new(TokenKind::Literal(c), char_span));
                    class.members += 1;
                }
            }
        }

        Ok(Some(class))
    }
}
