#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use dragon_diagnostic::ErrorCode;
use dragon_ir::{dump, BinaryOp, Constant, Expr, ExprKind, Stmt, StmtKind, UnaryOp};

use super::*;

fn body(source: &str) -> Vec<Stmt> {
    parse(source).unwrap().body
}

fn single(source: &str) -> Stmt {
    let mut stmts = body(source);
    assert_eq!(stmts.len(), 1, "expected one statement in {source:?}");
    stmts.remove(0)
}

fn expr(source: &str) -> Expr {
    match single(source).kind {
        StmtKind::Expr(e) => e,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn error(source: &str) -> ParseError {
    parse(source).unwrap_err()
}

/// Compare trees ignoring spans, via the dump.
fn same_tree(source: &str, expected: Vec<Stmt>) {
    assert_eq!(dump(&parse(source).unwrap()), dump(&Module::new(expected)));
}

#[test]
fn test_annotated_assignment() {
    same_tree(
        "x: int = 1 + 2",
        vec![Stmt::ann_assign(
            Expr::name("x"),
            Expr::name("int"),
            Expr::binary(Expr::int(1), BinaryOp::Add, Expr::int(2)),
        )],
    );
}

#[test]
fn test_power_and_call_statements() {
    same_tree(
        "y: float = 2 ** 3\nprint(1, 2)\nflag: bool = True",
        vec![
            Stmt::ann_assign(
                Expr::name("y"),
                Expr::name("float"),
                Expr::binary(Expr::int(2), BinaryOp::Pow, Expr::int(3)),
            ),
            Stmt::expr(Expr::call(Expr::name("print"), vec![Expr::int(1), Expr::int(2)])),
            Stmt::ann_assign(Expr::name("flag"), Expr::name("bool"), Expr::bool(true)),
        ],
    );
}

#[test]
fn test_statement_spans() {
    let stmts = body("x: int = 1\nprint(x)");
    assert_eq!(stmts[0].span, Span::new(0, 10));
    assert_eq!(stmts[1].span, Span::new(11, 19));
    let StmtKind::Expr(call) = &stmts[1].kind else {
        panic!("expected call statement");
    };
    assert_eq!(call.span, Span::new(11, 19));
}

#[test]
fn test_precedence() {
    // 1 + 2 * 3 - 4 == (1 + (2 * 3)) - 4
    assert_eq!(
        dump(&Module::new(vec![Stmt::expr(expr("1 + 2 * 3 - 4"))])),
        dump(&Module::new(vec![Stmt::expr(Expr::binary(
            Expr::binary(
                Expr::int(1),
                BinaryOp::Add,
                Expr::binary(Expr::int(2), BinaryOp::Mult, Expr::int(3)),
            ),
            BinaryOp::Sub,
            Expr::int(4),
        ))]))
    );
}

#[test]
fn test_bitwise_precedence() {
    let e = expr("a | b ^ c & d << 1");
    let ExprKind::BinOp { op, right, .. } = e.kind else {
        panic!("expected BinOp");
    };
    assert_eq!(op, BinaryOp::BitOr);
    let ExprKind::BinOp { op, .. } = right.kind else {
        panic!("expected BinOp");
    };
    assert_eq!(op, BinaryOp::BitXor);
}

#[test]
fn test_power_is_right_associative_and_binds_tighter_than_unary() {
    same_tree(
        "-2 ** 3 ** 2",
        vec![Stmt::expr(Expr::unary(
            UnaryOp::USub,
            Expr::binary(
                Expr::int(2),
                BinaryOp::Pow,
                Expr::binary(Expr::int(3), BinaryOp::Pow, Expr::int(2)),
            ),
        ))],
    );
    same_tree(
        "2 ** -1",
        vec![Stmt::expr(Expr::binary(
            Expr::int(2),
            BinaryOp::Pow,
            Expr::unary(UnaryOp::USub, Expr::int(1)),
        ))],
    );
}

#[test]
fn test_operators_map_to_ast_names() {
    let cases = [
        ("a / b", BinaryOp::Div),
        ("a // b", BinaryOp::FloorDiv),
        ("a % b", BinaryOp::Mod),
        ("a @ b", BinaryOp::MatMult),
        ("a >> b", BinaryOp::RShift),
        ("a & b", BinaryOp::BitAnd),
    ];
    for (source, expected) in cases {
        let ExprKind::BinOp { op, .. } = expr(source).kind else {
            panic!("expected BinOp for {source}");
        };
        assert_eq!(op, expected, "{source}");
    }
}

#[test]
fn test_not_and_invert() {
    same_tree(
        "not ~x",
        vec![Stmt::expr(Expr::unary(
            UnaryOp::Not,
            Expr::unary(UnaryOp::Invert, Expr::name("x")),
        ))],
    );
}

#[test]
fn test_attribute_call_chain() {
    same_tree(
        "math.sqrt(2.0)",
        vec![Stmt::expr(Expr::call(
            Expr::attribute(Expr::name("math"), "sqrt"),
            vec![Expr::float(2.0)],
        ))],
    );
}

#[test]
fn test_calls_without_and_with_trailing_comma() {
    same_tree(
        "f()\ng(1,)",
        vec![
            Stmt::expr(Expr::call(Expr::name("f"), vec![])),
            Stmt::expr(Expr::call(Expr::name("g"), vec![Expr::int(1)])),
        ],
    );
}

#[test]
fn test_constants() {
    same_tree(
        "None\n'a' \"b\"\nb'x' b'y'\n3.5",
        vec![
            Stmt::expr(Expr::constant(Constant::None)),
            Stmt::expr(Expr::str("ab")),
            Stmt::expr(Expr::constant(Constant::Bytes(b"xy".to_vec()))),
            Stmt::expr(Expr::float(3.5)),
        ],
    );
}

#[test]
fn test_lists_and_tuples() {
    same_tree(
        "x = [1, 2]\ny = 1, 2\nz = ()\nw = (1,)\nv = (1)",
        vec![
            Stmt::assign(vec![Expr::name("x")], Expr::list(vec![Expr::int(1), Expr::int(2)])),
            Stmt::assign(vec![Expr::name("y")], Expr::tuple(vec![Expr::int(1), Expr::int(2)])),
            Stmt::assign(vec![Expr::name("z")], Expr::tuple(vec![])),
            Stmt::assign(vec![Expr::name("w")], Expr::tuple(vec![Expr::int(1)])),
            Stmt::assign(vec![Expr::name("v")], Expr::int(1)),
        ],
    );
}

#[test]
fn test_chained_and_augmented_assignment() {
    let stmts = body("a = b = 1\nc += 2");
    let StmtKind::Assign { targets, value } = &stmts[0].kind else {
        panic!("expected Assign");
    };
    assert_eq!(targets.len(), 2);
    assert_eq!(value.kind, ExprKind::Constant(Constant::Int(1)));
    let StmtKind::AugAssign { op, .. } = &stmts[1].kind else {
        panic!("expected AugAssign");
    };
    assert_eq!(*op, BinaryOp::Add);
}

#[test]
fn test_semicolons_and_pass() {
    let stmts = body("pass; x = 1;\npass");
    let kinds: Vec<&str> = stmts.iter().map(Stmt::kind_name).collect();
    assert_eq!(kinds, vec!["Pass", "Assign", "Pass"]);
}

#[test]
fn test_empty_source() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("# nothing\n\n").unwrap().is_empty());
}

#[test]
fn test_annotation_without_value() {
    let stmt = single("x: int");
    assert_eq!(stmt.span, Span::new(0, 6));
    let StmtKind::AnnAssign { value, .. } = &stmt.kind else {
        panic!("expected AnnAssign, got {:?}", stmt.kind);
    };
    assert_eq!(*value, None);
    same_tree(
        "x: int; y: float = 1.5",
        vec![
            Stmt::declare(Expr::name("x"), Expr::name("int")),
            Stmt::ann_assign(Expr::name("y"), Expr::name("float"), Expr::float(1.5)),
        ],
    );
}

fn kinds(source: &str) -> Vec<&'static str> {
    body(source).iter().map(Stmt::kind_name).collect()
}

#[test]
fn test_compound_statements_are_opaque() {
    assert_eq!(kinds("def f(): pass"), vec!["FunctionDef"]);
    assert_eq!(kinds("if x:\n    pass"), vec!["If"]);
    assert_eq!(kinds("class C:\n    x: int = 1\n\ny: int = 2"), vec!["ClassDef", "AnnAssign"]);
    assert_eq!(kinds("async def f():\n    await g()"), vec!["AsyncFunctionDef"]);
    assert_eq!(kinds("@cache\n@wraps(g)\ndef f(): pass"), vec!["FunctionDef"]);
    assert_eq!(kinds("with open(p) as f: pass"), vec!["With"]);
}

#[test]
fn test_compound_statement_spans_cover_every_clause() {
    let source = "if a:\n    x = 1\nelif b:\n    if c:\n        pass\nelse: y = 2\nz = 3";
    let stmts = body(source);
    assert_eq!(
        stmts.iter().map(Stmt::kind_name).collect::<Vec<_>>(),
        vec!["If", "Assign"]
    );
    assert_eq!(stmts[0].kind, StmtKind::Unsupported("If"));
    assert_eq!(stmts[0].span, Span::new(0, 58));
    assert_eq!(&source[58..], "\nz = 3");

    let stmts = body("try:\n    f()\nexcept E:\n    pass\nfinally:\n    g()\nwhile x:\n    pass");
    assert_eq!(
        stmts.iter().map(Stmt::kind_name).collect::<Vec<_>>(),
        vec!["Try", "While"]
    );
}

#[test]
fn test_keyword_statements_are_opaque() {
    assert_eq!(
        kinds("import os; from a import b\nreturn 1\ndel x\nraise E\nassert x, 'm'"),
        vec!["Import", "ImportFrom", "Return", "Delete", "Raise", "Assert"]
    );
    assert_eq!(
        kinds("global a; nonlocal b; break; continue"),
        vec!["Global", "Nonlocal", "Break", "Continue"]
    );
}

/// Kind of the value in `x: t = <value>`.
fn value_kind(value: &str) -> &'static str {
    match single(&format!("x: t = {value}")).kind {
        StmtKind::AnnAssign {
            value: Some(value), ..
        } => value.kind_name(),
        other => panic!("expected AnnAssign, got {other:?}"),
    }
}

#[test]
fn test_expressions_outside_the_tree_are_opaque() {
    let cases = [
        ("1 < 2", "Compare"),
        ("a is not None", "Compare"),
        ("a not in b", "Compare"),
        ("0 < a <= 9", "Compare"),
        ("{}", "Dict"),
        ("{1: 2, **d}", "Dict"),
        ("{**d}", "Dict"),
        ("{1, 2}", "Set"),
        ("{lambda: 1}", "Set"),
        ("{k: v for k, v in d}", "DictComp"),
        ("{x for x in y}", "SetComp"),
        ("[x for x in y if x]", "ListComp"),
        ("(x for x in y)", "GeneratorExp"),
        ("a and b", "BoolOp"),
        ("a or b and c", "BoolOp"),
        ("a if b else c", "IfExp"),
        ("lambda a, b=(1, 2): a", "Lambda"),
        ("f'{x}'", "JoinedStr"),
        ("'a' f'{b}'", "JoinedStr"),
        ("a[0]", "Subscript"),
        ("a[1:2, ::3]", "Subscript"),
        ("(yield)", "Yield"),
        ("(y := 1)", "NamedExpr"),
    ];
    for (value, expected) in cases {
        assert_eq!(value_kind(value), expected, "{value}");
    }
}

#[test]
fn test_opaque_operands_keep_their_context() {
    // `not` binds looser than a comparison.
    let e = expr("not a == b");
    let ExprKind::UnaryOp { op, operand } = e.kind else {
        panic!("expected UnaryOp");
    };
    assert_eq!(op, UnaryOp::Not);
    assert_eq!(operand.kind, ExprKind::Unsupported("Compare"));

    // Subscripts stay assignable; generators stay call arguments.
    assert_eq!(single("a[0] = 1").kind_name(), "Assign");
    let e = expr("sum(x for x in y)");
    let ExprKind::Call { args, .. } = e.kind else {
        panic!("expected Call");
    };
    assert_eq!(args[0].kind, ExprKind::Unsupported("GeneratorExp"));
    assert_eq!(expr("await f()").kind, ExprKind::Unsupported("Await"));
}

#[test]
fn test_opaque_expression_spans() {
    let e = expr("x < y and z");
    assert_eq!(e.span, Span::new(0, 11));
    let e = expr("f(1)[2]");
    assert_eq!(e.span, Span::new(0, 7));
    assert_eq!(expr("{1: 2}").span, Span::new(0, 6));
}

#[test]
fn test_big_integers_and_ellipsis() {
    same_tree(
        "99999999999999999999\n...",
        vec![
            Stmt::expr(Expr::constant(Constant::BigInt(
                "99999999999999999999".to_string(),
            ))),
            Stmt::expr(Expr::constant(Constant::Ellipsis)),
        ],
    );
}

#[test]
fn test_indentation_errors() {
    let err = error("  x = 1");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedIndent);
    assert_eq!(err.code(), ErrorCode::E1005);
    assert_eq!(err.span, Span::new(0, 2));

    let err = error("if x:\ny = 1");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIndentedBlock);
    assert_eq!(err.code(), ErrorCode::E1005);
    assert_eq!(err.span, Span::new(6, 7));

    assert_eq!(error("if x:").kind, ParseErrorKind::ExpectedIndentedBlock);
}

#[test]
fn test_malformed_opaque_constructs() {
    assert_eq!(error("if x").to_string(), "expected `:`, found end of line");
    assert_eq!(error("@cache\nx = 1").code(), ErrorCode::E1001);
    assert_eq!(error("x = a if b").to_string(), "expected `else`, found end of line");
    assert_eq!(error("x = {1: 2").code(), ErrorCode::E1003);
    assert_eq!(error("x = lambda a").code(), ErrorCode::E1001);
}

#[test]
fn test_unsupported_syntax() {
    for source in ["f(x=1)", "f(*args)", "x := 1", "x -> y"] {
        let err = error(source);
        assert_eq!(err.code(), ErrorCode::E1004, "{source}: {err}");
    }
}

#[test]
fn test_unsupported_message() {
    assert_eq!(error("f(x=1)").to_string(), "keyword argument is not supported");
    assert_eq!(error("x := 1").to_string(), "`:=` is not supported");
}

#[test]
fn test_expected_expression() {
    let err = error("x = ");
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.to_string(), "expected an expression, found end of line");
}

#[test]
fn test_unexpected_token() {
    let err = error("print 1");
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_string(), "expected `;` or end of line, found integer `1`");
}

#[test]
fn test_unclosed_delimiter() {
    let err = error("print(1, 2");
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedDelimiter {
            open: "(",
            opened_at: Span::new(5, 6),
        }
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_invalid_targets() {
    assert_eq!(error("1 = x").to_string(), "cannot assign to literal");
    assert_eq!(error("f() = x").to_string(), "cannot assign to function call");
    assert_eq!(error("a < b = x").to_string(), "cannot assign to comparison");
    assert_eq!(error("{} = x").to_string(), "cannot assign to dict literal");
    assert_eq!(
        error("a, b: int = 1").to_string(),
        "only single target (not tuple) can be annotated"
    );
    assert_eq!(
        error("a, b += 1").to_string(),
        "'tuple' is an illegal expression for augmented assignment"
    );
}

#[test]
fn test_attribute_annotation_target_parses() {
    let stmt = single("self.x: int = 1");
    assert_eq!(stmt.kind_name(), "AnnAssign");
}

#[test]
fn test_mixed_literals() {
    let err = error("'a' b'b' 'c'");
    assert_eq!(err.kind, ParseErrorKind::MixedLiterals);
    assert_eq!(err.span, Span::new(0, 12));
    assert_eq!(error("b'a' f'b'").kind, ParseErrorKind::MixedLiterals);
}

#[test]
fn test_lex_errors_pass_through() {
    let err = error("if x:\n    a = 1\n  b = 2");
    assert_eq!(err.code(), ErrorCode::E0004);
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0004);
    assert_eq!(error(r"x = '\N{DASH}'").code(), ErrorCode::E0005);
}

#[test]
fn test_nesting_limit() {
    let deep = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(error(&deep).kind, ParseErrorKind::NestingTooDeep);
    let ok = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert_eq!(expr(&ok).kind, ExprKind::Constant(Constant::Int(1)));
}
