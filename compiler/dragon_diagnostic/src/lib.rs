//! Diagnostic and abort channel.
//!
//! Every phase reports failures through this crate:
//! - [`ErrorCode`] for searchability (`E5001`, ...)
//! - [`Diagnostic`] with labeled spans and notes, rendered by
//!   [`emitter::TerminalEmitter`]
//! - [`UnsupportedFeature`] / [`MalformedConstruct`], the typed failures of
//!   code generation, bundled as [`CodegenError`]
//! - [`AbortCode`] and [`abort`], the process-ending path with fixed exit
//!   statuses, used only by the driver
//! - [`queue::DiagnosticQueue`] for reporting several failures at once

mod abort;
mod diagnostic;
pub mod emitter;
mod error_code;
mod feature;
pub mod queue;
pub mod span_utils;

pub use abort::{abort, abort_message, AbortCode};
pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use feature::{CodegenError, MalformedConstruct, UnsupportedFeature};
