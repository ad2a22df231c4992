//! Regex generation for both engine dialects.

use extglob_core::EngineKind;

use crate::error::CodegenError;
use crate::parser::{Ast, CharClass, GroupKind, Node, SeqId};

/// Pending output, processed from the top of the stack.
enum Work<'a> {
    Seq(SeqId),
    Node(&'a Node),
    Text(&'static str),
}

pub(super) struct Generator<'a> {
    ast: &'a Ast,
    dialect: EngineKind,
    separators: &'a [char],
    out: String,
}

impl<'a> Generator<'a> {
    pub fn new(ast: &'a Ast, dialect: EngineKind, separators: &'a [char]) -> Self {
        Self {
            ast,
            dialect,
            separators,
            out: String::new(),
        }
    }

    pub fn run(mut self) -> Result<String, CodegenError> {
        let ast = self.ast;
        let mut stack = vec![Work::Seq(ast.root_id())];

        self.out.push_str("(?s)^");
        while let Some(work) = stack.pop() {
            match work {
                Work::Text(text) => self.out.push_str(text),
                Work::Seq(id) => {
                    let children = &ast.sequence(id).children;
                    stack.extend(children.iter().rev().map(Work::Node));
                }
                Work::Node(node) => self.node(node, &mut stack)?,
            }
        }
        self.out.push('$');

        Ok(self.out)
    }

    fn node(&mut self, node: &'a Node, stack: &mut Vec<Work<'a>>) -> Result<(), CodegenError> {
        match node {
            Node::Literal(c) => self.literal(*c),
            Node::AnyOne => self.not_separator(),
            Node::AnySequence {
                across_separators: false,
            } => {
                self.not_separator();
                self.out.push('*');
            }
            Node::AnySequence {
                across_separators: true,
            } => self.out.push_str(".*"),
            Node::CharClass(class) => self.class(class)?,
            Node::Group(group) => {
                if !self.dialect.supports_captures() {
                    return Err(CodegenError::UnsupportedGroup {
                        kind: group.kind,
                        dialect: self.dialect,
                    });
                }
                let (open, close) = group_delimiters(group.kind);
                self.out.push_str(open);
                stack.push(Work::Text(close));
                for (i, &alt) in group.alternatives.iter().enumerate().rev() {
                    stack.push(Work::Seq(alt));
                    if i > 0 {
                        stack.push(Work::Text("|"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Escapes `c` for the regex syntax both dialects share.
    fn literal(&mut self, c: char) {
        let mut buf = [0u8; 4];
        regex_syntax::escape_into(c.encode_utf8(&mut buf), &mut self.out);
    }

    /// One character that is not a separator.
    fn not_separator(&mut self) {
        if self.separators.is_empty() {
            self.out.push('.');
            return;
        }
        self.out.push_str("[^");
        for &sep in self.separators {
            push_class_char(&mut self.out, sep);
        }
        self.out.push(']');
    }

    fn class(&mut self, class: &CharClass) -> Result<(), CodegenError> {
        if class.ranges.is_empty() {
            return Err(CodegenError::EmptyClass);
        }

        self.out.push('[');
        if class.negated {
            self.out.push('^');
        }
        for &(lo, hi) in &class.ranges {
            if lo > hi {
                return Err(CodegenError::ReversedRange { lo, hi });
            }
            push_class_char(&mut self.out, lo);
            if lo != hi {
                self.out.push('-');
                push_class_char(&mut self.out, hi);
            }
        }
        self.out.push(']');
        Ok(())
    }
}

/// Every group captures; quantified groups capture the whole repetition.
fn group_delimiters(kind: GroupKind) -> (&'static str, &'static str) {
    match kind {
        GroupKind::OneOf => ("(", ")"),
        GroupKind::ZeroOrOne => ("((?:", ")?)"),
        GroupKind::ZeroOrMore => ("((?:", ")*)"),
        GroupKind::OneOrMore => ("((?:", ")+)"),
    }
}

/// Writes a class member. Anything but word characters goes out as a
/// `\x{..}` escape, which both dialects read as a literal inside `[...]`.
fn push_class_char(out: &mut String, c: char) {
    if c.is_ascii_alphanumeric() || c == '_' {
        out.push(c);
    } else {
        out.push_str(&format!("\\x{{{:X}}}", c as u32));
    }
}
