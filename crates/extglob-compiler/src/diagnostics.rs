//! Rendering compile errors against their pattern.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::CompileError;

impl CompileError {
    /// Renders the error as an annotated snippet of `source`.
    ///
    /// Errors without a source span (internal codegen/engine failures)
    /// render as a plain `error:` line.
    pub fn render(&self, source: &str) -> String {
        let message = self.to_string();
        let Some(range) = self.range() else {
            return format!("error: {message}");
        };

        let start: usize = range.start().into();
        let end: usize = range.end().into();
        // For zero-width spans, extend to at least 1 char for visibility
        let end = if start == end {
            (start + 1).min(source.len())
        } else {
            end
        };

        let label = match self {
            CompileError::Lex(err) => err.kind.to_string(),
            CompileError::Parse(err) => format!("expected {}", err.expected),
            CompileError::Codegen(_) | CompileError::Engine(_) => message.clone(),
        };

        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(&label));
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];

        Renderer::plain().render(&report).to_string()
    }
}
