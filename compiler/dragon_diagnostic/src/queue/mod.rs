//! Diagnostic queue for collecting several diagnostics before reporting.
//!
//! Used by the collect-all generation mode. Features:
//! - Error limit, with a single `E9002` note once the limit is hit
//! - Deduplication of identical diagnostics
//! - Stable source order (by primary span, insertion order for ties)

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// A config with no limits.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating and ordering diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    /// Errors rejected because the limit was reached.
    overflow: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a queue with a custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            overflow: 0,
            config,
        }
    }

    /// Add a diagnostic. Returns `false` if it was dropped (duplicate or over
    /// the error limit).
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.config.deduplicate && self.diagnostics.contains(&diagnostic) {
            return false;
        }
        if diagnostic.is_error() {
            if self.limit_reached() {
                self.overflow += 1;
                return false;
            }
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// Whether the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain the queue in source order.
    ///
    /// If errors were dropped by the limit, a trailing `E9002` note says how
    /// many.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.primary_span().map(|s| s.start));
        if self.overflow > 0 {
            out.push(
                Diagnostic::warning(ErrorCode::E9002).with_message(format!(
                    "{} more error{} not shown",
                    self.overflow,
                    if self.overflow == 1 { "" } else { "s" }
                )),
            );
        }
        self.error_count = 0;
        self.warning_count = 0;
        self.overflow = 0;
        out
    }
}

#[cfg(test)]
mod tests;
