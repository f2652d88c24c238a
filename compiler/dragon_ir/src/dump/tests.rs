use pretty_assertions::assert_eq;

use super::*;
use crate::{BinaryOp, Constant, Expr, Stmt};

#[test]
fn dumps_annotated_assignment() {
    let module = Module::new(vec![Stmt::ann_assign(
        Expr::name("x"),
        Expr::name("int"),
        Expr::binary(Expr::int(1), BinaryOp::Add, Expr::int(2)),
    )]);

    let expected = "\
Module(
    body=[
        AnnAssign(
            target=Name(id='x', ctx=Store()),
            annotation=Name(id='int', ctx=Load()),
            value=BinOp(
                left=Constant(value=1),
                op=Add(),
                right=Constant(value=2)),
            simple=1)])";
    assert_eq!(dump(&module), expected);
}

#[test]
fn dumps_call_statement() {
    let module = Module::new(vec![Stmt::expr(Expr::call(
        Expr::name("print"),
        vec![Expr::str("hi"), Expr::bool(true)],
    ))]);

    let expected = "\
Module(
    body=[
        Expr(
            value=Call(
                func=Name(id='print', ctx=Load()),
                args=[
                    Constant(value='hi'),
                    Constant(value=True)]))])";
    assert_eq!(dump(&module), expected);
}

#[test]
fn dumps_empty_module_and_pass() {
    assert_eq!(dump(&Module::default()), "Module()");
    assert_eq!(
        dump(&Module::new(vec![Stmt::pass()])),
        "Module(\n    body=[\n        Pass()])"
    );
}

#[test]
fn omits_empty_call_arguments() {
    let module = Module::new(vec![Stmt::expr(Expr::call(Expr::name("f"), vec![]))]);
    let expected = "\
Module(
    body=[
        Expr(
            value=Call(
                func=Name(id='f', ctx=Load())))])";
    assert_eq!(dump(&module), expected);
}

#[test]
fn omits_missing_annotated_value() {
    let module = Module::new(vec![Stmt::declare(Expr::name("x"), Expr::name("int"))]);
    let expected = "\
Module(
    body=[
        AnnAssign(
            target=Name(id='x', ctx=Store()),
            annotation=Name(id='int', ctx=Load()),
            simple=1)])";
    assert_eq!(dump(&module), expected);
}

#[test]
fn unsupported_nodes_dump_by_name() {
    let module = Module::new(vec![
        Stmt::unsupported("If"),
        Stmt::expr(Expr::unsupported("Compare")),
    ]);
    let expected = "\
Module(
    body=[
        If(),
        Expr(value=Compare())])";
    assert_eq!(dump(&module), expected);
}

#[test]
fn repr_of_strings_follows_quote_rules() {
    assert_eq!(str_repr("plain"), "'plain'");
    assert_eq!(str_repr("it's"), "\"it's\"");
    assert_eq!(str_repr("both ' and \""), "'both \\' and \"'");
    assert_eq!(str_repr("tab\there\n"), "'tab\\there\\n'");
    assert_eq!(str_repr("back\\slash"), "'back\\\\slash'");
}

#[test]
fn repr_of_other_constants() {
    assert_eq!(constant_repr(&Constant::None), "None");
    assert_eq!(constant_repr(&Constant::Bool(false)), "False");
    assert_eq!(constant_repr(&Constant::float(2.0)), "2.0");
    assert_eq!(constant_repr(&Constant::Bytes(b"a\x00'".to_vec())), "b\"a\\x00'\"");
    assert_eq!(constant_repr(&Constant::Bytes(b"ab".to_vec())), "b'ab'");
    assert_eq!(
        constant_repr(&Constant::BigInt("99999999999999999999".to_string())),
        "99999999999999999999"
    );
    assert_eq!(constant_repr(&Constant::Ellipsis), "Ellipsis");
}
