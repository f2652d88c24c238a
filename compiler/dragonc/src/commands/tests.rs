#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use pretty_assertions::assert_eq;

use dragon_diagnostic::emitter::ColorMode;
use dragon_diagnostic::{abort_message, AbortCode};

use super::*;

fn options_for(output: &Path) -> Options {
    Options {
        inputs: vec![PathBuf::from("main.py")],
        output: Some(output.to_path_buf()),
        ..Options::default()
    }
}

fn render(error: &DriverError, source: &str) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.py", source);
    report(&mut emitter, error);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_writes_generated_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let source = "x: int = 1 + 2\ny: float = 2 ** 3\nprint(1, 2)\nflag: bool = True";

    let outcome = transpile(&options_for(&out), source).unwrap();

    let expected = "int x = 1 + 2;\nfloat y = pow(2, 3);\nprint(1, 2);\nbool flag = true;\n";
    assert_eq!(
        outcome,
        Outcome::Written {
            path: out.clone(),
            bytes: expected.len()
        }
    );
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn test_ast_mode_dumps_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let options = Options {
        ast: true,
        ..options_for(&out)
    };

    let Outcome::Dumped(tree) = transpile(&options, "pass").unwrap() else {
        panic!("expected a dump");
    };
    assert_eq!(tree, "Module(\n    body=[\n        Pass()])");
    assert!(!out.exists());
}

#[test]
fn test_ast_mode_ignores_format() {
    let options = Options {
        ast: true,
        format: Some("nope".to_string()),
        ..Options::default()
    };
    assert!(matches!(
        transpile(&options, "x: int = 1"),
        Ok(Outcome::Dumped(_))
    ));
}

#[test]
fn test_generation_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");

    let err = transpile(&options_for(&out), "x: int = 1\ny: int = 10 // 3").unwrap_err();

    assert!(!out.exists());
    assert_eq!(err.abort_code(), AbortCode::UnsupportedFeature);
    assert_eq!(
        abort_message(err.abort_code(), &err.abort_message()),
        "[Error 0x111eed42] Feature not yet supported: generator/cpp/bin_op/operator/FloorDiv"
    );
}

#[test]
fn test_malformed_annotation_status() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");

    let err = transpile(&options_for(&out), "x: typing.Any = 1").unwrap_err();
    assert_eq!(err.abort_code(), AbortCode::MalformedConstruct);
    assert_eq!(
        err.abort_message(),
        "Malformed construct: generator/cpp/ann_assign/annotation/Attribute"
    );
}

#[test]
fn test_keep_going_reports_every_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let options = Options {
        keep_going: true,
        ..options_for(&out)
    };

    let err = transpile(&options, "pass\nx: int = 1\ny: int = 7 % 2").unwrap_err();

    assert!(!out.exists());
    let DriverError::Generation(errors) = &err else {
        panic!("expected generation errors, got {err:?}");
    };
    let kinds: Vec<_> = errors.iter().map(|e| e.node_kind()).collect();
    assert_eq!(kinds, vec!["Pass", "Mod"]);
    assert_eq!(err.abort_code(), AbortCode::UnsupportedFeature);
    assert_eq!(
        err.abort_message(),
        "Feature not yet supported: generator/cpp/statement/Pass"
    );
}

#[test]
fn test_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("program.exe");

    let err = transpile(&options_for(&out), "print(1)").unwrap_err();

    assert!(matches!(&err, DriverError::UnknownFormat { format } if format == "exe"));
    assert_eq!(err.abort_code(), AbortCode::Unknown);
    assert!(!out.exists());
    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics[0].code, dragon_diagnostic::ErrorCode::E8002);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("program.exe");
    let options = Options {
        format: Some("cpp".to_string()),
        ..options_for(&out)
    };

    transpile(&options, "print(1)").unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "print(1);\n");
}

#[test]
fn test_escape_strings_option() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let options = Options {
        escape_strings: true,
        ..options_for(&out)
    };

    transpile(&options, r#"print("a\tb")"#).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "print(\"a\\tb\");\n");
}

#[test]
fn test_syntax_errors_use_syntax_status() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");

    for source in ["x = (1", "if x:", "x = $", "  x = 1", r"x = '\x4'"] {
        let err = transpile(&options_for(&out), source).unwrap_err();
        assert!(matches!(err, DriverError::Parse(_)), "{source}: {err:?}");
        assert_eq!(err.abort_code(), AbortCode::Syntax);
    }
    assert!(!out.exists());
}

#[test]
fn test_out_of_subset_constructs_reach_the_generator() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");

    let cases = [
        ("def f(): pass", "statement/FunctionDef"),
        ("if x:\n    y: int = 1", "statement/If"),
        ("x: bool = 1 < 2", "expression/Compare"),
        ("x: bool = a and b", "expression/BoolOp"),
        ("d: dict = {}", "expression/Dict"),
        ("x: int", "expression/NoneType"),
    ];
    for (source, feature) in cases {
        let err = transpile(&options_for(&out), source).unwrap_err();
        assert_eq!(err.abort_code(), AbortCode::UnsupportedFeature, "{source}");
        assert_eq!(
            abort_message(err.abort_code(), &err.abort_message()),
            format!("[Error 0x111eed42] Feature not yet supported: generator/cpp/{feature}")
        );
    }
    assert!(!out.exists());
}

#[test]
fn test_escapes_and_big_integers_are_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");

    let source = "s: str = \"\\012\\x41\"\nn: int = 99999999999999999999";
    transpile(&options_for(&out), source).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "str s = \"\nA\";\nint n = 99999999999999999999;\n"
    );
}

#[test]
fn test_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing_dir").join("main.cpp");

    let err = transpile(&options_for(&out), "print(1)").unwrap_err();
    assert!(matches!(err, DriverError::Write { .. }));
    assert_eq!(err.abort_code(), AbortCode::Unknown);
    assert_eq!(
        err.diagnostics()[0].code,
        dragon_diagnostic::ErrorCode::E8001
    );
}

#[test]
fn test_report_points_into_source() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let source = "x: int = 10 // 3";

    let err = transpile(&options_for(&out), source).unwrap_err();
    let text = render(&err, source);

    assert!(text.starts_with(
        "error[E5001]: Feature not yet supported: generator/cpp/bin_op/operator/FloorDiv\n"
    ));
    assert!(text.contains(" --> main.py:1:10\n"), "{text}");
    assert!(text.contains("1 | x: int = 10 // 3\n"), "{text}");
    assert!(!text.contains("aborting"), "{text}");
}

#[test]
fn test_report_summarizes_several_errors() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("main.cpp");
    let options = Options {
        keep_going: true,
        ..options_for(&out)
    };
    let source = "pass\npass\nx: int = 1 << 2";

    let err = transpile(&options, source).unwrap_err();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.py", source);
    assert_eq!(report(&mut emitter, &err), 3);

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.ends_with("error: aborting due to 3 previous errors\n"), "{text}");
}
