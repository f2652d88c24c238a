//! Command-line parsing.

use std::path::{Path, PathBuf};

use dragon_codegen::{CodegenOptions, FailurePolicy};
use thiserror::Error;

pub const USAGE: &str = "\
Usage: dragonsnake <input_files>... [options] -o <output_file>

Dragonsnake Python-to-C++ Transpiler

Options:
  -f, --format <fmt>   Output format (default: output file extension, else cpp)
  -o, --output <path>  Output file (default: main.cpp for cpp, program.exe for exe)
      --ast            Print the parsed syntax tree and exit
      --keep-going     Report every generation failure, not just the first
      --escape-strings Escape quotes, backslashes and control characters in strings
  -V, --verbose        Debug logging (RUST_LOG overrides)
      --debug          Hierarchical trace output
  -h, --help           Print this help
      --version        Print the version";

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Transpile(Options),
    Help,
    Version,
}

/// Options for a transpile run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub inputs: Vec<PathBuf>,
    pub ast: bool,
    pub debug: bool,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub keep_going: bool,
    pub escape_strings: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("`{flag}` requires a value")]
    MissingValue { flag: String },
    #[error("unknown option `{flag}`")]
    UnknownFlag { flag: String },
    #[error("no input files")]
    NoInputs,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        // `--flag=value` and `--flag value` are both accepted.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value)),
            _ => (arg.clone(), None),
        };
        let mut value = |flag: &str| match inline {
            Some(v) => Ok(v.to_string()),
            None => args.next().ok_or_else(|| CliError::MissingValue {
                flag: flag.to_string(),
            }),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--version" => return Ok(Command::Version),
            "--ast" => options.ast = true,
            "--debug" => options.debug = true,
            "-V" | "--verbose" => options.verbose = true,
            "--keep-going" => options.keep_going = true,
            "--escape-strings" => options.escape_strings = true,
            "-f" | "--format" => options.format = Some(value(&flag)?),
            "-o" | "--output" => options.output = Some(PathBuf::from(value(&flag)?)),
            _ if flag.starts_with('-') => return Err(CliError::UnknownFlag { flag: arg }),
            _ => options.inputs.push(PathBuf::from(arg)),
        }
    }

    if options.inputs.is_empty() {
        return Err(CliError::NoInputs);
    }
    Ok(Command::Transpile(options))
}

impl Options {
    /// The output format: `--format`, else the output file's extension,
    /// else `cpp`.
    pub fn resolved_format(&self) -> String {
        if let Some(format) = self.format.as_deref().filter(|f| !f.is_empty()) {
            return format.to_string();
        }
        self.output
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .unwrap_or("cpp")
            .to_string()
    }

    /// The output path: `--output`, else the default for `format`.
    pub fn resolved_output(&self, format: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output(format)))
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            escape_strings: self.escape_strings,
            policy: if self.keep_going {
                FailurePolicy::CollectAll
            } else {
                FailurePolicy::FailFast
            },
        }
    }
}

/// Default output file name for a format.
pub fn default_output(format: &str) -> &'static str {
    match format {
        "exe" => "program.exe",
        "cpp" => "main.cpp",
        _ => "program",
    }
}
