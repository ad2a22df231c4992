//! Abstract syntax tree for glob patterns.
//!
//! Sequences live in a per-pattern arena and are referenced by [`SeqId`].
//! Every id is owned by exactly one group alternative (or is the root), so the
//! arena still describes a strict tree; it just never needs the call stack
//! to build, walk or drop one, however deeply groups nest.

use std::fmt::{self, Write};

/// Index of a [`Sequence`] in its [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeqId(u32);

impl SeqId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `(...)` or `@(...)`
    OneOf,
    /// `?(...)`
    ZeroOrOne,
    /// `*(...)`
    ZeroOrMore,
    /// `+(...)`
    OneOrMore,
}

impl GroupKind {
    /// Source text that opens a group of this kind.
    pub fn opener(self) -> &'static str {
        match self {
            GroupKind::OneOf => "@(",
            GroupKind::ZeroOrOne => "?(",
            GroupKind::ZeroOrMore => "*(",
            GroupKind::OneOrMore => "+(",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(char),
    /// One character that is not a separator.
    AnyOne,
    AnySequence {
        across_separators: bool,
    },
    CharClass(CharClass),
    Group(Group),
}

/// Inclusive character ranges. Single characters are `(c, c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub ranges: Vec<(char, char)>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    pub alternatives: Vec<SeqId>,
}

/// Concatenation of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    sequences: Vec<Sequence>,
    root: SeqId,
}

impl Ast {
    pub fn root_id(&self) -> SeqId {
        self.root
    }

    pub fn root(&self) -> &Sequence {
        self.sequence(self.root)
    }

    pub fn sequence(&self, id: SeqId) -> &Sequence {
        &self.sequences[id.index()]
    }

    /// All sequences, in the order they were completed.
    pub fn sequences(&self) -> impl Iterator<Item = (SeqId, &Sequence)> {
        self.sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| (SeqId(i as u32), seq))
    }

    /// Indented tree dump, one node per line.
    pub fn dump(&self) -> String {
        enum Item<'a> {
            Seq(SeqId),
            Node(&'a Node),
        }

        let mut out = String::new();
        let mut stack = vec![(Item::Seq(self.root), 0usize)];

        while let Some((item, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match item {
                Item::Seq(id) => {
                    out.push_str(&indent);
                    out.push_str("Sequence\n");
                    let children = &self.sequence(id).children;
                    stack.extend(children.iter().rev().map(|n| (Item::Node(n), depth + 1)));
                }
                Item::Node(node) => {
                    let _ = writeln!(out, "{indent}{node}");
                    if let Node::Group(group) = node {
                        let alts = group.alternatives.iter().rev();
                        stack.extend(alts.map(|&alt| (Item::Seq(alt), depth + 1)));
                    }
                }
            }
        }

        out
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(c) => write!(f, "Literal {c:?}"),
            Node::AnyOne => f.write_str("AnyOne"),
            Node::AnySequence {
                across_separators: false,
            } => f.write_str("AnySequence"),
            Node::AnySequence {
                across_separators: true,
            } => f.write_str("AnySequenceAll"),
            Node::CharClass(class) => {
                f.write_str("CharClass ")?;
                if class.negated {
                    f.write_str("!")?;
                }
                f.write_str("[")?;
                for (i, &(lo, hi)) in class.ranges.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    if lo == hi {
                        write!(f, "{lo:?}")?;
                    } else {
                        write!(f, "{lo:?}-{hi:?}")?;
                    }
                }
                f.write_str("]")
            }
            Node::Group(group) => write!(f, "Group {:?}", group.kind),
        }
    }
}

/// Builds an [`Ast`] bottom-up: children are allocated before their parents.
#[derive(Debug, Default)]
pub(crate) struct AstBuilder {
    sequences: Vec<Sequence>,
}

impl AstBuilder {
    /// Sequences past the root each follow a group opener or alternator, so
    /// ids stay below the pattern length, which the lexer caps at
    /// `u32::MAX` bytes.
    pub fn alloc(&mut self, children: Vec<Node>) -> SeqId {
        let id = SeqId(self.sequences.len() as u32);
        self.sequences.push(Sequence { children });
        id
    }

    pub fn finish(mut self, root: Vec<Node>) -> Ast {
        let root = self.alloc(root);
        Ast {
            sequences: self.sequences,
            root,
        }
    }
}
