use crate::core::{CoreExpr, CoreTree, NodeId};

use super::error::{Diagnostic, WalkError};
use super::scratch::AuxTable;
use super::symbols::SymbolTable;
use super::walk::{Walk, WalkContext};

/// First walk: label every node with a type, without checking anything.
///
/// Leaves get their declared type, or the letter already bound to their name
/// in `aux`, or a fresh letter that is then bound in `aux`. Abstraction and
/// application nodes get a fresh letter that is only shown, never stored.
pub fn export_semantic_tree(
    tree: &CoreTree,
    symbols: &SymbolTable,
    aux: &mut AuxTable,
) -> Result<Walk, WalkError> {
    let mut exporter = SemanticExporter {
        tree,
        ctx: WalkContext::new(symbols, aux),
    };
    exporter.visit(tree.root(), None)?;
    Ok(exporter.ctx.finish())
}

struct SemanticExporter<'a> {
    tree: &'a CoreTree,
    ctx: WalkContext<'a>,
}

impl SemanticExporter<'_> {
    fn visit(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<(), WalkError> {
        let tree = self.tree;
        self.ctx.link(parent, id);

        match tree.node(id) {
            CoreExpr::Var { name } => {
                let ty = self.ctx.resolve(name)?;
                self.ctx.emit(id, format!("{}\n{}", name, ty));
            }
            CoreExpr::Num { value } => {
                let ty = self.ctx.resolve(value)?;
                self.ctx.emit(id, format!("{}\n{}", value, ty));
            }
            CoreExpr::Op { operator } => {
                let key = format!("({})", operator);
                let ty = self.ctx.resolve(&key)?;
                self.ctx.emit(id, format!("{}\n{}", key, ty));
            }
            CoreExpr::Abs { bound, body } => {
                let letter = self.ctx.fresh_letter()?;
                self.ctx.emit(id, format!("λ\n{}", letter));
                self.visit(*bound, Some(id))?;
                self.visit(*body, Some(id))?;
            }
            CoreExpr::App { function, argument } => {
                let letter = self.ctx.fresh_letter()?;
                self.ctx.emit(id, format!("@\n{}", letter));
                self.visit(*function, Some(id))?;
                self.visit(*argument, Some(id))?;
            }
            CoreExpr::Unknown { kind } => {
                self.ctx.report(Diagnostic::unknown_node_kind(kind, id));
                self.ctx.emit(id, "unknown".to_string());
            }
        }

        Ok(())
    }
}
