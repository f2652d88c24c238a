//! Code generation context and state.
//!
//! The `CodegenContext` holds the backend namespace, the generator options
//! and the output buffer for one module.

use dragon_diagnostic::{CodegenError, MalformedConstruct, UnsupportedFeature};
use dragon_ir::Span;

use crate::CodegenOptions;

/// Code generation context.
pub struct CodegenContext<'a> {
    /// Failure namespace, e.g. `generator/cpp`.
    namespace: &'a str,
    options: CodegenOptions,
    /// Generated code output.
    output: String,
    /// Number of lines written so far.
    lines: usize,
}

impl<'a> CodegenContext<'a> {
    pub fn new(namespace: &'a str, options: CodegenOptions) -> Self {
        Self {
            namespace,
            options,
            output: String::with_capacity(1024),
            lines: 0,
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace
    }

    #[inline]
    pub fn escape_strings(&self) -> bool {
        self.options.escape_strings
    }

    /// Write a line to output, followed by a newline.
    pub fn writeln(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
        self.lines += 1;
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        self.lines = 0;
        std::mem::take(&mut self.output)
    }

    /// Failure for a node the `category` rule has no case for.
    pub fn unsupported(
        &self,
        category: &'static str,
        node_kind: &'static str,
        span: Span,
    ) -> CodegenError {
        UnsupportedFeature::new(self.namespace, category, node_kind, span).into()
    }

    /// Failure for a node whose shape the `category` position forbids.
    pub fn malformed(
        &self,
        category: &'static str,
        node_kind: &'static str,
        expected: &'static str,
        span: Span,
    ) -> CodegenError {
        MalformedConstruct::new(self.namespace, category, node_kind, expected, span).into()
    }
}
