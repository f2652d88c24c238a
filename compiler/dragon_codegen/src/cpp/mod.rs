//! C++ backend.
//!
//! Each statement becomes one line ending in `;`. Identifiers are emitted
//! verbatim and no type information is consulted: annotations are copied
//! into declaration position as written.

mod expr;
mod stmt;

use dragon_ir::Module;
use tracing::{debug, trace};

use crate::context::CodegenContext;
use crate::{CodeGenerator, CodegenError, CodegenOptions, CodegenResult, TargetFormat};

use stmt::emit_stmt;

/// C++ code generator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CppGenerator {
    options: CodegenOptions,
}

impl CppGenerator {
    pub fn new(options: CodegenOptions) -> Self {
        CppGenerator { options }
    }
}

impl CodeGenerator for CppGenerator {
    fn target_format(&self) -> TargetFormat {
        TargetFormat::Cpp
    }

    fn options(&self) -> CodegenOptions {
        self.options
    }

    #[tracing::instrument(level = "debug", skip_all, fields(statements = module.len()))]
    fn generate_module(&self, module: &Module) -> Result<String, CodegenError> {
        let namespace = self.namespace();
        let mut ctx = CodegenContext::new(&namespace, self.options);
        for stmt in &module.body {
            let line = emit_stmt(&ctx, stmt)?;
            trace!(%line, "statement generated");
            ctx.writeln(&line);
        }
        debug!(lines = ctx.lines_written(), "module generated");
        Ok(ctx.take_output())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(statements = module.len()))]
    fn generate_collecting(&self, module: &Module) -> CodegenResult {
        let namespace = self.namespace();
        let mut ctx = CodegenContext::new(&namespace, self.options);
        let mut errors = Vec::new();
        for stmt in &module.body {
            match emit_stmt(&ctx, stmt) {
                Ok(line) => ctx.writeln(&line),
                Err(error) => {
                    debug!(%error, "statement failed");
                    errors.push(error);
                }
            }
        }
        debug!(
            lines = ctx.lines_written(),
            failures = errors.len(),
            "module generated"
        );
        CodegenResult {
            code: ctx.take_output(),
            errors,
        }
    }
}
