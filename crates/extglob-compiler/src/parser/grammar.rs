//! Grammar productions.
//!
//! ```text
//! pattern      := { term }
//! term         := '*' | '**' | '?' | class | group | literal | '\' any-char
//! class        := '[' ['!'] class-body ']'
//! group        := group-open pattern-list ')'
//! pattern-list := pattern { ( ',' | '|' ) pattern }
//! ```

use std::mem;

use super::ast::{Ast, CharClass, Group, Node};
use super::core::{Frame, Parser};
use super::lexer::TokenKind;
use crate::error::ParseError;

impl Parser<'_> {
    /// Parses the whole token stream into an [`Ast`].
    ///
    /// `parse_sequence` and `parse_group` are folded into one loop: a group
    /// opener pushes a [`Frame`] holding the enclosing sequence, an alternator
    /// completes one alternative, and `)` pops the frame back into its parent.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let mut current: Vec<Node> = Vec::new();

        loop {
            let (index, kind) = self.bump();
            match kind {
                TokenKind::Literal(c) | TokenKind::EscapedLiteral(c) => {
                    current.push(Node::Literal(c));
                }
                TokenKind::AnyOne => current.push(Node::AnyOne),
                TokenKind::AnySequence => current.push(Node::AnySequence {
                    across_separators: false,
                }),
                TokenKind::AnySequenceAll => current.push(Node::AnySequence {
                    across_separators: true,
                }),
                TokenKind::ClassOpen => {
                    let class = self.parse_class(index)?;
                    current.push(Node::CharClass(class));
                }
                TokenKind::GroupOpen(kind) => {
                    self.frames.push(Frame {
                        kind,
                        open: index,
                        alternatives: Vec::new(),
                        parent: mem::take(&mut current),
                    });
                }
                TokenKind::Alternator => {
                    let Some(frame) = self.frames.last_mut() else {
                        return Err(self.error_at(index, "term outside of a group"));
                    };
                    let alt = self.builder.alloc(mem::take(&mut current));
                    frame.alternatives.push(alt);
                }
                TokenKind::GroupClose => {
                    let Some(mut frame) = self.frames.pop() else {
                        return Err(self.error_at(index, "term or end of pattern"));
                    };
                    let alt = self.builder.alloc(mem::take(&mut current));
                    frame.alternatives.push(alt);
                    current = frame.parent;
                    current.push(Node::Group(Group {
                        kind: frame.kind,
                        alternatives: frame.alternatives,
                    }));
                }
                TokenKind::EndOfInput => {
                    if let Some(frame) = self.frames.last() {
                        let expected = format!("`)` closing the group at token {}", frame.open);
                        return Err(self.error_at(index, expected));
                    }
                    break;
                }
                TokenKind::ClassClose | TokenKind::ClassNegate | TokenKind::ClassRangeDash => {
                    return Err(self.error_at(index, "term"));
                }
            }
        }

        let ast = self.builder.finish(current);
        tracing::trace!(sequences = ast.sequences().count(), "parsed pattern");
        Ok(ast)
    }

    /// Parses a class body after its `[` (token `open`) up to and including `]`.
    fn parse_class(&mut self, open: usize) -> Result<CharClass, ParseError> {
        let mut ranges = Vec::new();
        let negated = self.at(TokenKind::ClassNegate);
        if negated {
            self.bump();
        }

        loop {
            let (index, kind) = self.bump();
            match kind {
                TokenKind::ClassClose => break,
                TokenKind::Literal(lo) | TokenKind::EscapedLiteral(lo) => {
                    let hi = match (self.current(), self.nth(1).literal()) {
                        (TokenKind::ClassRangeDash, Some(hi)) => {
                            self.bump();
                            self.bump();
                            hi
                        }
                        _ => lo,
                    };
                    if lo > hi {
                        return Err(self.error_at(index, "range with its lower bound first"));
                    }
                    ranges.push((lo, hi));
                }
                // A dash without a member on both sides is just `-`.
                TokenKind::ClassRangeDash => ranges.push(('-', '-')),
                TokenKind::EndOfInput => {
                    let expected = format!("`]` closing the class at token {open}");
                    return Err(self.error_at(index, expected));
                }
                _ => return Err(self.error_at(index, "class member or `]`")),
            }
        }

        if ranges.is_empty() {
            return Err(self.error_at(open, "non-empty character class"));
        }

        Ok(CharClass { ranges, negated })
    }
}
