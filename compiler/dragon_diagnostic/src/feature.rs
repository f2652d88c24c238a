//! Typed code generation failures.
//!
//! A failure names the backend (`namespace`, e.g. `generator/cpp`), the rule
//! that had no answer (`category`, e.g. `bin_op/operator`) and the node kind
//! it was given (e.g. `FloorDiv`). The three parts join into the path shown in
//! messages: `generator/cpp/bin_op/operator/FloorDiv`.

use dragon_ir::Span;
use thiserror::Error;

use crate::{AbortCode, Diagnostic, ErrorCode};

/// A node variant, operator or literal kind with no generation rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Feature not yet supported: {namespace}/{category}/{node_kind}")]
pub struct UnsupportedFeature {
    pub namespace: String,
    pub category: &'static str,
    pub node_kind: &'static str,
    /// Finer-grained kind, e.g. the literal kind of a `Constant`.
    pub detail: Option<&'static str>,
    pub span: Span,
}

impl UnsupportedFeature {
    pub fn new(
        namespace: impl Into<String>,
        category: &'static str,
        node_kind: &'static str,
        span: Span,
    ) -> Self {
        UnsupportedFeature {
            namespace: namespace.into(),
            category,
            node_kind,
            detail: None,
            span,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// A node in a position that structurally requires a different shape, such
/// as a subscripted type annotation where a bare name is required.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("Malformed construct: {namespace}/{category}/{node_kind}")]
pub struct MalformedConstruct {
    pub namespace: String,
    pub category: &'static str,
    pub node_kind: &'static str,
    /// What the position requires, e.g. `"Name"`.
    pub expected: &'static str,
    pub span: Span,
}

impl MalformedConstruct {
    pub fn new(
        namespace: impl Into<String>,
        category: &'static str,
        node_kind: &'static str,
        expected: &'static str,
        span: Span,
    ) -> Self {
        MalformedConstruct {
            namespace: namespace.into(),
            category,
            node_kind,
            expected,
            span,
        }
    }
}

/// Any failure produced by a code generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFeature),
    #[error(transparent)]
    Malformed(#[from] MalformedConstruct),
}

impl CodegenError {
    /// The generation rule that failed.
    pub fn category(&self) -> &'static str {
        match self {
            CodegenError::Unsupported(e) => e.category,
            CodegenError::Malformed(e) => e.category,
        }
    }

    /// The node kind the rule was given.
    pub fn node_kind(&self) -> &'static str {
        match self {
            CodegenError::Unsupported(e) => e.node_kind,
            CodegenError::Malformed(e) => e.node_kind,
        }
    }

    /// The backend namespace, e.g. `generator/cpp`.
    pub fn namespace(&self) -> &str {
        match self {
            CodegenError::Unsupported(e) => &e.namespace,
            CodegenError::Malformed(e) => &e.namespace,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            CodegenError::Unsupported(e) => e.span,
            CodegenError::Malformed(e) => e.span,
        }
    }

    /// Exit status for this failure class.
    pub fn abort_code(&self) -> AbortCode {
        match self {
            CodegenError::Unsupported(_) => AbortCode::UnsupportedFeature,
            CodegenError::Malformed(_) => AbortCode::MalformedConstruct,
        }
    }

    /// Convert to a span-carrying diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            CodegenError::Unsupported(e) => {
                let subject = e.detail.unwrap_or(e.node_kind);
                Diagnostic::error(ErrorCode::E5001)
                    .with_message(self.to_string())
                    .with_note(format!(
                        "the `{}` rule has no case for `{subject}`",
                        e.category
                    ))
            }
            CodegenError::Malformed(e) => Diagnostic::error(ErrorCode::E5002)
                .with_message(self.to_string())
                .with_note(format!("expected `{}`, found `{}`", e.expected, e.node_kind)),
        };
        let span = self.span();
        if span.is_dummy() {
            diag
        } else {
            diag.with_label(span, format!("`{}` cannot be generated here", self.node_kind()))
        }
    }
}
