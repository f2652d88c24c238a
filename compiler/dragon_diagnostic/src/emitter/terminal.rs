//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When
//! the source text is attached, labels are rendered as `path:line:col` with
//! the offending line and a caret underline.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text attached to an emitter for line/column rendering.
struct SourceContext {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source the diagnostics' spans point into.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceContext {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// Label without source: `  --> 4..6: message`.
    fn write_bare_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {}: ", label.span);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    /// Label with source:
    ///
    /// ```text
    ///   --> main.py:1:14
    ///    |
    ///  1 | x: int = 10 // 3
    ///    |             ^^ message
    /// ```
    fn write_source_label(&mut self, label: &Label) {
        let Some(ctx) = self.source.as_ref() else {
            self.write_bare_label(label);
            return;
        };
        let (line, col) = ctx.lines.offset_to_line_col(&ctx.text, label.span.start);
        let line_text = ctx.lines.line_text(&ctx.text, line).unwrap_or("").to_string();
        let location = format!("{}:{line}:{col}", ctx.path);

        // Underline stays on the first line of a multi-line span.
        let available = line_text.chars().count().saturating_sub(col as usize - 1);
        let width = ctx
            .text
            .get(label.span.start as usize..label.span.end as usize)
            .map_or(1, |t| t.chars().count())
            .clamp(1, available.max(1));

        let gutter = " ".repeat(line.to_string().len());
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "{gutter}{marker} {location}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(col as usize - 1));
        let underline = if label.is_primary { "^" } else { "-" }.repeat(width);
        let color = Self::label_color(label);
        self.write_colored(&underline, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_source_label(label);
            } else {
                self.write_bare_label(label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
