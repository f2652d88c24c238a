//! Statement Code Generation

use dragon_ir::{Expr, Span, Stmt, StmtKind};

use super::expr::emit_expr;
use crate::context::CodegenContext;
use crate::CodegenError;

/// Generate one statement, including its trailing `;`.
pub(super) fn emit_stmt(ctx: &CodegenContext<'_>, stmt: &Stmt) -> Result<String, CodegenError> {
    match &stmt.kind {
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } => emit_ann_assign(ctx, target, annotation, value.as_ref(), stmt.span),
        StmtKind::Expr(expr) => Ok(format!("{};", emit_expr(ctx, expr)?)),
        StmtKind::Assign { .. }
        | StmtKind::AugAssign { .. }
        | StmtKind::Pass
        | StmtKind::Unsupported(_) => {
            Err(ctx.unsupported("statement", stmt.kind_name(), stmt.span))
        }
    }
}

/// `target: annotation = value` becomes `annotation target = value;`.
///
/// Parts are generated target, value, annotation; the first fault in that
/// order is the one reported. A declaration without a value fails as an
/// expression of kind `NoneType`.
fn emit_ann_assign(
    ctx: &CodegenContext<'_>,
    target: &Expr,
    annotation: &Expr,
    value: Option<&Expr>,
    span: Span,
) -> Result<String, CodegenError> {
    let target = bare_name(ctx, "ann_assign/target", target)?;
    let value = match value {
        Some(value) => emit_expr(ctx, value)?,
        None => return Err(ctx.unsupported("expression", "NoneType", span)),
    };
    let annotation = bare_name(ctx, "ann_assign/annotation", annotation)?;
    Ok(format!("{annotation} {target} = {value};"))
}

fn bare_name<'e>(
    ctx: &CodegenContext<'_>,
    category: &'static str,
    expr: &'e Expr,
) -> Result<&'e str, CodegenError> {
    expr.as_name()
        .ok_or_else(|| ctx.malformed(category, expr.kind_name(), "Name", expr.span))
}
