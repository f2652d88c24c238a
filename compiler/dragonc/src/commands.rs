//! The transpile command: parse, generate, write.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dragon_codegen::generator_for;
use dragon_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use dragon_diagnostic::queue::DiagnosticQueue;
use tracing::{debug, info};

use crate::cli::Options;
use crate::DriverError;

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `--ast`: the tree dump, to be printed.
    Dumped(String),
    /// Generated code was written to `path`.
    Written { path: PathBuf, bytes: usize },
}

/// Transpile `source` according to `options`.
///
/// Nothing is written unless every statement generated.
#[tracing::instrument(level = "debug", skip_all)]
pub fn transpile(options: &Options, source: &str) -> Result<Outcome, DriverError> {
    let module = dragon_parse::parse(source)?;
    debug!(statements = module.len(), "parsed");

    if options.ast {
        return Ok(Outcome::Dumped(dragon_ir::dump(&module)));
    }

    let format = options.resolved_format();
    let path = options.resolved_output(&format);
    let generator = generator_for(&format, options.codegen_options())
        .ok_or_else(|| DriverError::UnknownFormat {
            format: format.clone(),
        })?;

    let result = generator.generate(&module);
    if result.has_errors() {
        return Err(DriverError::Generation(result.errors));
    }

    fs::write(&path, &result.code).map_err(|source| DriverError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), %format, "wrote output");
    Ok(Outcome::Written {
        bytes: result.code.len(),
        path,
    })
}

/// Emit a failure's diagnostics, in source order, followed by a summary
/// when there is more than one error. Returns the number of errors shown.
pub fn report<W: Write>(emitter: &mut TerminalEmitter<W>, error: &DriverError) -> usize {
    let mut queue = DiagnosticQueue::new();
    for diagnostic in error.diagnostics() {
        queue.add(diagnostic);
    }
    let errors = queue.error_count();
    let warnings = queue.warning_count();

    emitter.emit_all(&queue.flush());
    if errors > 1 {
        emitter.emit_summary(errors, warnings);
    }
    emitter.flush();
    errors
}

#[cfg(test)]
mod tests;
