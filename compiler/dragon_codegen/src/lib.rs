//! Code Generation Backend for Dragonsnake
//!
//! Turns a parsed [`Module`] into target-language source text. The only
//! backend today is C++ ([`CppGenerator`]).
//!
//! # Architecture
//!
//! ```text
//!      Module
//!        ↓
//!   CodeGenerator      (one rule per node kind, exhaustive matches)
//!        ↓
//!   Result<String, CodegenError>   fail-fast
//!   CodegenResult                  collect-all
//! ```
//!
//! Generation never exits the process. A node with no rule yields a typed
//! [`CodegenError`]; turning that into an exit status is the driver's job.

mod context;
pub mod cpp;
pub mod names;

use std::fmt;

use dragon_ir::Module;

pub use context::CodegenContext;
pub use cpp::CppGenerator;
pub use dragon_diagnostic::{CodegenError, MalformedConstruct, UnsupportedFeature};
pub use names::resolve_variable_name;

/// Output formats with a generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    Cpp,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 1] = [TargetFormat::Cpp];

    /// Look up a format by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == name)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TargetFormat::Cpp => "cpp",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a generator does when a statement fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Stop at the first failing statement. No partial output.
    #[default]
    FailFast,
    /// Generate every statement and report every failure.
    CollectAll,
}

/// Generator settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodegenOptions {
    /// Escape `\`, `"` and control characters in string literals. Off by
    /// default: string contents are emitted verbatim.
    pub escape_strings: bool,
    pub policy: FailurePolicy,
}

/// Result of code generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodegenResult {
    /// Generated code. Under fail-fast this is empty when `errors` is not.
    pub code: String,
    /// Failures in source order.
    pub errors: Vec<CodegenError>,
}

impl CodegenResult {
    /// Create a successful result with generated code.
    pub fn success(code: String) -> Self {
        Self {
            code,
            errors: Vec::new(),
        }
    }

    /// Create a failed result with no code.
    pub fn failure(error: CodegenError) -> Self {
        Self {
            code: String::new(),
            errors: vec![error],
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Convert into the fail-fast shape: the code, or the first failure.
    pub fn into_result(self) -> Result<String, CodegenError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.code),
        }
    }
}

/// A backend that turns a module into source text.
pub trait CodeGenerator {
    fn target_format(&self) -> TargetFormat;

    fn options(&self) -> CodegenOptions;

    /// Namespace used in failure paths, e.g. `generator/cpp`.
    fn namespace(&self) -> String {
        format!("generator/{}", self.target_format())
    }

    /// Generate the whole module, stopping at the first failure.
    fn generate_module(&self, module: &Module) -> Result<String, CodegenError>;

    /// Generate every statement, keeping successful text and all failures.
    fn generate_collecting(&self, module: &Module) -> CodegenResult;

    /// Generate according to the configured [`FailurePolicy`].
    fn generate(&self, module: &Module) -> CodegenResult {
        match self.options().policy {
            FailurePolicy::FailFast => match self.generate_module(module) {
                Ok(code) => CodegenResult::success(code),
                Err(error) => CodegenResult::failure(error),
            },
            FailurePolicy::CollectAll => self.generate_collecting(module),
        }
    }
}

/// Pick the generator for a format name. `None` if the format is unknown.
pub fn generator_for(format: &str, options: CodegenOptions) -> Option<Box<dyn CodeGenerator>> {
    match TargetFormat::from_name(format)? {
        TargetFormat::Cpp => Some(Box::new(CppGenerator::new(options))),
    }
}

/// Generate C++ for a module with default options.
///
/// ```
/// use dragon_ir::{BinaryOp, Expr, Module, Stmt};
///
/// let module = Module::new(vec![Stmt::ann_assign(
///     Expr::name("x"),
///     Expr::name("int"),
///     Expr::binary(Expr::int(1), BinaryOp::Add, Expr::int(2)),
/// )]);
/// assert_eq!(dragon_codegen::generate_cpp(&module).unwrap(), "int x = 1 + 2;\n");
/// ```
pub fn generate_cpp(module: &Module) -> Result<String, CodegenError> {
    CppGenerator::default().generate_module(module)
}
