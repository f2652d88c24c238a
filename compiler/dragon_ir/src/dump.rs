//! Human-readable tree dump.
//!
//! Renders a [`Module`] in the layout of Python 3.13's `ast.dump(node,
//! indent=4)`: empty lists and absent optional fields are left out, and
//! nodes with at most three simple fields stay on one line. Fields this tree
//! does not model (`keywords`, `kind`, `type_comment`) are always empty and
//! so never printed. Constructs outside the subset are kept only as their
//! class name and dump as `If()`, `Compare()`, ... The driver's `--ast` mode
//! prints this.

use crate::ast::{Constant, Expr, ExprKind, Module, Stmt, StmtKind};

const INDENT: &str = "    ";

/// Intermediate form: every syntax node becomes a named record of fields.
enum Node {
    Ast {
        name: &'static str,
        fields: Vec<(&'static str, Node)>,
    },
    List(Vec<Node>),
    Atom(String),
}

/// Load/store context of a name-like expression.
#[derive(Copy, Clone)]
enum Ctx {
    Load,
    Store,
}

impl Ctx {
    fn node(self) -> Node {
        let name = match self {
            Ctx::Load => "Load",
            Ctx::Store => "Store",
        };
        Node::Ast {
            name,
            fields: Vec::new(),
        }
    }
}

/// Dump a module in Python 3.13 `ast.dump(indent=4)` format.
pub fn dump(module: &Module) -> String {
    let node = Node::Ast {
        name: "Module",
        fields: vec![(
            "body",
            Node::List(module.body.iter().map(stmt_node).collect()),
        )],
    };
    format_node(&node, 0).0
}

fn unit(name: &'static str) -> Node {
    Node::Ast {
        name,
        fields: Vec::new(),
    }
}

fn stmt_node(stmt: &Stmt) -> Node {
    let name = stmt.kind_name();
    let fields = match &stmt.kind {
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } => {
            let simple = i32::from(target.as_name().is_some());
            let mut fields = vec![
                ("target", expr_node(target, Ctx::Store)),
                ("annotation", expr_node(annotation, Ctx::Load)),
            ];
            if let Some(value) = value {
                fields.push(("value", expr_node(value, Ctx::Load)));
            }
            fields.push(("simple", Node::Atom(simple.to_string())));
            fields
        }
        StmtKind::Expr(value) => vec![("value", expr_node(value, Ctx::Load))],
        StmtKind::Assign { targets, value } => vec![
            (
                "targets",
                Node::List(targets.iter().map(|t| expr_node(t, Ctx::Store)).collect()),
            ),
            ("value", expr_node(value, Ctx::Load)),
        ],
        StmtKind::AugAssign { target, op, value } => vec![
            ("target", expr_node(target, Ctx::Store)),
            ("op", unit(op.kind_name())),
            ("value", expr_node(value, Ctx::Load)),
        ],
        StmtKind::Pass | StmtKind::Unsupported(_) => Vec::new(),
    };
    Node::Ast { name, fields }
}

fn expr_node(expr: &Expr, ctx: Ctx) -> Node {
    let name = expr.kind_name();
    let fields = match &expr.kind {
        ExprKind::BinOp { left, op, right } => vec![
            ("left", expr_node(left, Ctx::Load)),
            ("op", unit(op.kind_name())),
            ("right", expr_node(right, Ctx::Load)),
        ],
        ExprKind::UnaryOp { op, operand } => vec![
            ("op", unit(op.kind_name())),
            ("operand", expr_node(operand, Ctx::Load)),
        ],
        ExprKind::Call { func, args } => vec![
            ("func", expr_node(func, Ctx::Load)),
            (
                "args",
                Node::List(args.iter().map(|a| expr_node(a, Ctx::Load)).collect()),
            ),
        ],
        ExprKind::Constant(value) => vec![("value", Node::Atom(constant_repr(value)))],
        ExprKind::Name(id) => vec![("id", Node::Atom(str_repr(id))), ("ctx", ctx.node())],
        ExprKind::Attribute { value, attr } => vec![
            ("value", expr_node(value, Ctx::Load)),
            ("attr", Node::Atom(str_repr(attr))),
            ("ctx", ctx.node()),
        ],
        ExprKind::List(elts) | ExprKind::Tuple(elts) => vec![
            (
                "elts",
                Node::List(elts.iter().map(|e| expr_node(e, ctx)).collect()),
            ),
            ("ctx", ctx.node()),
        ],
        ExprKind::Unsupported(_) => Vec::new(),
    };
    Node::Ast { name, fields }
}

/// Format a node at a nesting level; returns the text and whether it is
/// "simple" (allowed inline in a compact parent).
fn format_node(node: &Node, level: usize) -> (String, bool) {
    let level = level + 1;
    let prefix = format!("\n{}", INDENT.repeat(level));
    let sep = format!(",\n{}", INDENT.repeat(level));

    match node {
        Node::Ast { name, fields } => {
            let mut all_simple = true;
            let args: Vec<String> = fields
                .iter()
                .filter(|(_, value)| !matches!(value, Node::List(items) if items.is_empty()))
                .map(|(field, value)| {
                    let (text, simple) = format_node(value, level);
                    all_simple &= simple;
                    format!("{field}={text}")
                })
                .collect();
            if all_simple && args.len() <= 3 {
                (format!("{name}({})", args.join(", ")), args.is_empty())
            } else {
                (format!("{name}({prefix}{})", args.join(&sep)), false)
            }
        }
        Node::List(items) => {
            if items.is_empty() {
                return ("[]".to_string(), true);
            }
            let parts: Vec<String> = items.iter().map(|i| format_node(i, level).0).collect();
            (format!("[{prefix}{}]", parts.join(&sep)), false)
        }
        Node::Atom(text) => (text.clone(), true),
    }
}

fn constant_repr(value: &Constant) -> String {
    match value {
        Constant::Bool(true) => "True".to_string(),
        Constant::Bool(false) => "False".to_string(),
        Constant::Int(n) => n.to_string(),
        Constant::BigInt(digits) => digits.clone(),
        Constant::Float(bits) => crate::format_float(f64::from_bits(*bits)),
        Constant::Str(s) => str_repr(s),
        Constant::None => "None".to_string(),
        Constant::Bytes(bytes) => bytes_repr(bytes),
        Constant::Ellipsis => "Ellipsis".to_string(),
    }
}

/// Quote a string the way the source language's `repr()` does: single quotes
/// unless the text contains a single quote and no double quote.
fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn bytes_repr(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(char::from(quote));
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(char::from(b));
            }
            0x20..=0x7e => out.push(char::from(b)),
            b => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push(char::from(quote));
    out
}

#[cfg(test)]
mod tests;
