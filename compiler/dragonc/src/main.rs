//! Dragonsnake CLI
//!
//! Python-to-C++ transpiler.

use std::io::IsTerminal;

use dragon_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use dragon_diagnostic::{abort, Diagnostic, ErrorCode};
use dragonc::cli::{parse_args, Command, Options, USAGE};
use dragonc::{init_tracing, input, report, transpile, DriverError, Outcome};

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(error) => {
            let mut emitter = stderr_emitter();
            emitter.emit(&Diagnostic::error(ErrorCode::E8003).with_message(error.to_string()));
            emitter.flush();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Version => println!("dragonsnake {}", env!("CARGO_PKG_VERSION")),
        Command::Transpile(options) => run(&options),
    }
}

fn run(options: &Options) {
    init_tracing(options.verbose, options.debug);

    let source = match input::load_sources(&options.inputs) {
        Ok(source) => source,
        Err(error) => fail(&error, stderr_emitter()),
    };

    match transpile(options, &source) {
        Ok(Outcome::Dumped(tree)) => println!("{tree}"),
        Ok(Outcome::Written { path, bytes }) => {
            tracing::debug!(path = %path.display(), bytes, "done");
        }
        Err(error) => {
            let emitter = stderr_emitter().with_source(input::source_name(&options.inputs), source);
            fail(&error, emitter);
        }
    }
}

fn stderr_emitter() -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
}

fn fail(error: &DriverError, mut emitter: TerminalEmitter<std::io::Stderr>) -> ! {
    report(&mut emitter, error);
    abort(error.abort_code(), &error.abort_message())
}
