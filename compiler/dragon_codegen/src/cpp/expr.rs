//! Expression Code Generation
//!
//! Generates C++ code for expressions.

use dragon_ir::{format_float, BinaryOp, Constant, Expr, ExprKind, Span};

use crate::context::CodegenContext;
use crate::{CodegenError, UnsupportedFeature};

/// Generate C++ code for an expression.
pub(super) fn emit_expr(ctx: &CodegenContext<'_>, expr: &Expr) -> Result<String, CodegenError> {
    match &expr.kind {
        ExprKind::BinOp { left, op, right } => emit_binary_op(ctx, left, *op, right, expr.span),
        ExprKind::Call { func, args } => emit_call(ctx, func, args),
        ExprKind::Constant(value) => emit_constant(ctx, value, expr),
        ExprKind::Name(_) => emit_name(ctx, expr),
        ExprKind::UnaryOp { .. }
        | ExprKind::Attribute { .. }
        | ExprKind::List(_)
        | ExprKind::Tuple(_)
        | ExprKind::Unsupported(_) => {
            Err(ctx.unsupported("expression", expr.kind_name(), expr.span))
        }
    }
}

/// Identifier rule: a bare name, emitted verbatim.
pub(super) fn emit_name(ctx: &CodegenContext<'_>, expr: &Expr) -> Result<String, CodegenError> {
    match &expr.kind {
        ExprKind::Name(name) => Ok(name.clone()),
        _ => Err(ctx.unsupported("name", expr.kind_name(), expr.span)),
    }
}

/// Emit a binary operation. Both operands are generated before the operator
/// is looked at.
fn emit_binary_op(
    ctx: &CodegenContext<'_>,
    left: &Expr,
    op: BinaryOp,
    right: &Expr,
    span: Span,
) -> Result<String, CodegenError> {
    let left = emit_expr(ctx, left)?;
    let right = emit_expr(ctx, right)?;
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mult | BinaryOp::Div => {
            Ok(format!("{left} {} {right}", op.as_symbol()))
        }
        BinaryOp::Pow => Ok(format!("pow({left}, {right})")),
        BinaryOp::FloorDiv
        | BinaryOp::Mod
        | BinaryOp::MatMult
        | BinaryOp::LShift
        | BinaryOp::RShift
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::BitAnd => Err(ctx.unsupported("bin_op/operator", op.kind_name(), span)),
    }
}

/// Emit a call. The callee must be a bare name; arity is not checked.
fn emit_call(
    ctx: &CodegenContext<'_>,
    func: &Expr,
    args: &[Expr],
) -> Result<String, CodegenError> {
    let callee = emit_name(ctx, func)?;
    let args = args
        .iter()
        .map(|arg| emit_expr(ctx, arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{callee}({})", args.join(", ")))
}

/// Emit a literal. Unsupported literals are reported as the `Constant` node,
/// with the literal kind kept as detail.
fn emit_constant(
    ctx: &CodegenContext<'_>,
    value: &Constant,
    expr: &Expr,
) -> Result<String, CodegenError> {
    match value {
        Constant::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Constant::Int(n) => Ok(n.to_string()),
        Constant::BigInt(digits) => Ok(digits.clone()),
        Constant::Float(bits) => Ok(format_float(f64::from_bits(*bits))),
        Constant::Str(s) if ctx.escape_strings() => Ok(emit_string_literal(s)),
        Constant::Str(s) => Ok(format!("\"{s}\"")),
        Constant::None | Constant::Bytes(_) | Constant::Ellipsis => Err(UnsupportedFeature::new(
            ctx.namespace(),
            "constant",
            expr.kind_name(),
            expr.span,
        )
        .with_detail(value.kind_name())
        .into()),
    }
}

/// Quote a string as a C++ literal, escaping what the literal cannot hold.
///
/// Control characters without a short escape use three-digit octal, which
/// cannot swallow a following digit the way `\x` would.
fn emit_string_literal(s: &str) -> String {
    let escaped: String = s
        .chars()
        .flat_map(|c| match c {
            '\\' => vec!['\\', '\\'],
            '"' => vec!['\\', '"'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            '\0' => vec!['\\', '0'],
            c if c.is_ascii_control() => format!("\\{:03o}", u32::from(c)).chars().collect(),
            c => vec![c],
        })
        .collect();

    format!("\"{escaped}\"")
}
