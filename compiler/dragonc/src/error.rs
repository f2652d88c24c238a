//! Driver errors and their exit statuses.

use std::io;
use std::path::PathBuf;

use dragon_codegen::{CodegenError, TargetFormat};
use dragon_diagnostic::{AbortCode, Diagnostic, ErrorCode};
use dragon_parse::ParseError;
use thiserror::Error;

/// Any failure of a transpile run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown output format `{format}`")]
    UnknownFormat { format: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Every generation failure, in source order. Never empty.
    #[error("code generation failed with {} error(s)", .0.len())]
    Generation(Vec<CodegenError>),
}

impl DriverError {
    /// Exit status: the first generation failure's, the syntax status for
    /// parse errors, the generic status otherwise.
    pub fn abort_code(&self) -> AbortCode {
        match self {
            DriverError::Read { .. }
            | DriverError::Write { .. }
            | DriverError::UnknownFormat { .. } => AbortCode::Unknown,
            DriverError::Parse(_) => AbortCode::Syntax,
            DriverError::Generation(errors) => errors
                .first()
                .map_or(AbortCode::Unknown, CodegenError::abort_code),
        }
    }

    /// Message for the `[Error 0x...]` abort line.
    pub fn abort_message(&self) -> String {
        match self {
            DriverError::Generation(errors) => errors
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
            _ => self.to_string(),
        }
    }

    /// Span-aware diagnostics for stderr.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            DriverError::Read { .. } | DriverError::Write { .. } => {
                vec![Diagnostic::error(ErrorCode::E8001).with_message(self.to_string())]
            }
            DriverError::UnknownFormat { .. } => vec![Diagnostic::error(ErrorCode::E8002)
                .with_message(self.to_string())
                .with_note(format!(
                    "supported formats: {}",
                    TargetFormat::ALL
                        .into_iter()
                        .map(TargetFormat::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))],
            DriverError::Parse(error) => vec![error.to_diagnostic()],
            DriverError::Generation(errors) => {
                errors.iter().map(CodegenError::to_diagnostic).collect()
            }
        }
    }
}
