//! Lowering - Transform the parse tree into the semantic tree
//!
//! This module handles the lowering transformations:
//! - Parenthesized expressions → their inner expression
//! - Abstractions → `Abs` with a synthetic `Var` node for the binder
//! - Type declarations → symbol table entries (no expression is produced)

use tracing::debug;

use crate::ast::expression::Expression;
use crate::ast::types::TypeExpr;
use crate::ast::{Submission, TypeDeclaration};
use crate::core::{CoreArena, CoreTree, CoreType, NodeId};
use crate::types::SymbolTable;

/// Lower a submission.
///
/// Expressions come back as a semantic tree. Type declarations are recorded
/// in `symbols` under the canonical string of the declared expression and
/// produce no tree.
pub fn desugar_submission(submission: Submission, symbols: &mut SymbolTable) -> Option<CoreTree> {
    match submission {
        Submission::Expression(expr) => Some(desugar_tree(expr)),
        Submission::TypeDeclaration(decl) => {
            desugar_declaration(decl, symbols);
            None
        }
    }
}

/// Lower a single expression into a fresh arena
pub fn desugar_tree(expr: Expression) -> CoreTree {
    let mut arena = CoreArena::new();
    let root = desugar_expr(&mut arena, expr);
    arena.finish(root)
}

fn desugar_declaration(decl: TypeDeclaration, symbols: &mut SymbolTable) {
    let declared = desugar_tree(decl.expr);
    let name = declared.to_string();
    let ty = desugar_type(decl.ty).type_to_str();

    debug!(name = %name, ty = %ty, "declared type");
    if let Some(previous) = symbols.declare(name.clone(), ty) {
        debug!(name = %name, previous = %previous, "replaced earlier declaration");
    }
}

pub fn desugar_expr(arena: &mut CoreArena, expr: Expression) -> NodeId {
    match expr {
        Expression::Variable(id) => arena.var(id.value),
        Expression::Number(num) => arena.num(num.value),
        Expression::Parenthesized(parens) => desugar_expr(arena, *parens.inner),
        Expression::Operator(op) => arena.op(op.symbol),
        Expression::Abstraction(abs) => {
            let body = desugar_expr(arena, *abs.body);
            arena.abs(abs.param.value, body)
        }
        Expression::Application(app) => {
            let function = desugar_expr(arena, *app.function);
            let argument = desugar_expr(arena, *app.argument);
            arena.app(function, argument)
        }
    }
}

pub fn desugar_type(ty: TypeExpr) -> CoreType {
    match ty {
        TypeExpr::Variable(id) => CoreType::var(id.value),
        TypeExpr::Arrow(arrow) => CoreType::arrow(arrow.from.value, desugar_type(*arrow.to)),
    }
}
