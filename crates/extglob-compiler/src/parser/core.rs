//! Parser state and low-level token access.
//!
//! Group nesting is tracked with an explicit frame stack instead of native
//! recursion, so the nesting depth is bounded only by memory.

use rowan::TextRange;

use super::ast::{AstBuilder, GroupKind, Node, SeqId};
use super::lexer::{Token, TokenKind};
use crate::error::ParseError;

/// A group whose closing `)` has not been seen yet.
#[derive(Debug)]
pub(super) struct Frame {
    pub kind: GroupKind,
    /// Token index of the opener, for error messages.
    pub open: usize,
    pub alternatives: Vec<SeqId>,
    /// Nodes of the enclosing sequence, resumed when the group closes.
    pub parent: Vec<Node>,
}

pub struct Parser<'t> {
    pub(super) tokens: &'t [Token],
    /// Current position in `tokens`. Monotonically increases.
    pub(super) pos: usize,
    pub(super) builder: AstBuilder,
    pub(super) frames: Vec<Frame>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: AstBuilder::default(),
            frames: Vec::new(),
        }
    }

    /// Kind of the token `lookahead` positions ahead. Past the end of the
    /// stream every position reads as `EndOfInput`.
    pub(super) fn nth(&self, lookahead: usize) -> TokenKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(TokenKind::EndOfInput, |t| t.kind)
    }

    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    pub(super) fn span_of(&self, index: usize) -> TextRange {
        match self.tokens.get(index) {
            Some(token) => token.span,
            None => self
                .tokens
                .last()
                .map_or_else(|| TextRange::empty(0.into()), |t| TextRange::empty(t.span.end())),
        }
    }

    /// Consumes the current token, returning its index and kind.
    /// Never advances past the end of the stream.
    pub(super) fn bump(&mut self) -> (usize, TokenKind) {
        let index = self.pos;
        let kind = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        (index, kind)
    }

    pub(super) fn error_at(&self, index: usize, expected: impl Into<String>) -> ParseError {
        let found = self
            .tokens
            .get(index)
            .map_or(TokenKind::EndOfInput, |t| t.kind);
        ParseError::new(index, self.span_of(index), expected, found.to_string())
    }
}
