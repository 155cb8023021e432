//! # Type Tree Walk
//!
//! Second walk over the semantic tree. It reuses the auxiliary table left by
//! the semantic walk and labels every node with a type built from the base
//! type `N`:
//!
//! | Node | Label |
//! |------|-------|
//! | undeclared `Var` / `Num` | `N` |
//! | undeclared `Op` | `(N -> (N -> N))` |
//! | `Abs` | `(N -> N)` |
//! | `App` of an operator to a number | depends on which of the two are declared |
//! | `App` of an operator to anything else | the operator's type |
//! | any other `App` | `N` |
//!
//! Declared names always show their declared type. A name is only resolved
//! once per walk; later occurrences reuse the result without touching the
//! letter generator or the auxiliary table.
//!
//! Mismatches are reported as [`Diagnostic::TypeMismatch`] and never stop the
//! walk.

use std::collections::HashSet;

use crate::core::{CoreExpr, CoreTree, NodeId};

use super::error::{Diagnostic, WalkError};
use super::scratch::AuxTable;
use super::symbols::SymbolTable;
use super::walk::{Walk, WalkContext};
use super::{ABSTRACTION_TYPE, BASE_TYPE, BINARY_OPERATOR_TYPE};

pub fn export_type_tree(
    tree: &CoreTree,
    symbols: &SymbolTable,
    aux: &mut AuxTable,
) -> Result<Walk, WalkError> {
    let mut exporter = TypeTreeExporter {
        tree,
        ctx: WalkContext::new(symbols, aux),
        processed: HashSet::new(),
    };
    exporter.visit(tree.root(), None)?;
    Ok(exporter.ctx.finish())
}

fn arrow(from: &str, to: &str) -> String {
    format!("({} -> {})", from, to)
}

/// First alphabetic character of a type string, used as the operand type of
/// an operator. Only meaningful for single-letter type names.
fn operand_letter(ty: &str) -> String {
    ty.chars()
        .find(|c| c.is_alphabetic())
        .map(String::from)
        .unwrap_or_else(|| BASE_TYPE.to_string())
}

struct TypeTreeExporter<'a> {
    tree: &'a CoreTree,
    ctx: WalkContext<'a>,
    processed: HashSet<String>,
}

impl TypeTreeExporter<'_> {
    fn visit(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<(), WalkError> {
        let tree = self.tree;
        self.ctx.link(parent, id);

        let node = tree.node(id);
        let label = match node {
            CoreExpr::Var { name } => self.leaf(name)?,
            CoreExpr::Num { value } => self.leaf(value)?,
            CoreExpr::Op { operator } => self.operator(operator)?,
            CoreExpr::Abs { bound, .. } => self.abstraction(id, *bound)?,
            CoreExpr::App { function, argument } => self.application(id, *function, *argument)?,
            CoreExpr::Unknown { kind } => {
                self.ctx.report(Diagnostic::unknown_node_kind(kind, id));
                "unknown".to_string()
            }
        };
        self.ctx.emit(id, label);

        match node {
            CoreExpr::Abs { bound, body } => {
                self.visit(*bound, Some(id))?;
                self.visit(*body, Some(id))?;
            }
            CoreExpr::App { function, argument } => {
                self.visit(*function, Some(id))?;
                self.visit(*argument, Some(id))?;
            }
            _ => {}
        }

        Ok(())
    }

    fn leaf(&mut self, name: &str) -> Result<String, WalkError> {
        let ty = if self.processed.contains(name) {
            self.ctx
                .declared(name)
                .unwrap_or_else(|| BASE_TYPE.to_string())
        } else {
            self.processed.insert(name.to_string());
            match self.ctx.declared(name) {
                Some(ty) => ty,
                None => {
                    // Whatever letter the name had is now known to be the base type
                    self.ctx.settle(name, BASE_TYPE)?;
                    BASE_TYPE.to_string()
                }
            }
        };
        Ok(format!("{}\n{}", name, ty))
    }

    fn operator(&mut self, operator: &str) -> Result<String, WalkError> {
        let key = format!("({})", operator);
        let ty = match self.ctx.declared(&key) {
            Some(ty) => ty,
            None => {
                self.ctx.settle(&key, BINARY_OPERATOR_TYPE)?;
                BINARY_OPERATOR_TYPE.to_string()
            }
        };
        Ok(format!("{}\n{}", key, ty))
    }

    /// Bound variables are assumed to be of the base type
    fn abstraction(&mut self, id: NodeId, bound: NodeId) -> Result<String, WalkError> {
        let tree = self.tree;
        let letter = self.ctx.fresh_letter()?;

        if let CoreExpr::Var { name } = tree.node(bound) {
            if let Some(declared) = self.ctx.declared(name) {
                if declared != BASE_TYPE {
                    self.ctx
                        .report(Diagnostic::type_mismatch(BASE_TYPE, declared, id));
                }
            }
        }

        self.ctx.record(letter, ABSTRACTION_TYPE);
        Ok(format!("λ\n{}", ABSTRACTION_TYPE))
    }

    fn application(
        &mut self,
        id: NodeId,
        function: NodeId,
        argument: NodeId,
    ) -> Result<String, WalkError> {
        let tree = self.tree;
        let letter = self.ctx.fresh_letter()?;

        let (shown, recorded) = match (tree.node(function), tree.node(argument)) {
            (CoreExpr::Op { operator }, CoreExpr::Num { value }) => {
                let key = format!("({})", operator);
                let op_ty = self.ctx.resolve(&key)?;
                let operand = operand_letter(&op_ty);
                let arg_ty = self.ctx.resolve(value)?;

                let op_declared = self.ctx.symbols.contains(&key);
                let arg_declared = self.ctx.symbols.contains(value);
                match (op_declared, arg_declared) {
                    (true, true) => {
                        if operand != arg_ty {
                            self.ctx
                                .report(Diagnostic::type_mismatch(&operand, arg_ty, id));
                        }
                        let ty = arrow(&operand, &operand);
                        (ty.clone(), ty)
                    }
                    (true, false) => {
                        if operand != BASE_TYPE {
                            self.ctx
                                .report(Diagnostic::type_mismatch(&operand, BASE_TYPE, id));
                        }
                        let ty = arrow(&operand, &operand);
                        (ty.clone(), ty)
                    }
                    (false, true) => {
                        let shown = arrow(BASE_TYPE, &arg_ty);
                        if arg_ty != BASE_TYPE {
                            self.ctx
                                .report(Diagnostic::type_mismatch(BASE_TYPE, arg_ty, id));
                        }
                        (shown, arrow(BASE_TYPE, BASE_TYPE))
                    }
                    (false, false) => {
                        let ty = arrow(BASE_TYPE, BASE_TYPE);
                        (ty.clone(), ty)
                    }
                }
            }
            (CoreExpr::Op { operator }, _) => {
                let op_ty = self.ctx.resolve(&format!("({})", operator))?;
                (op_ty.clone(), op_ty)
            }
            _ => (BASE_TYPE.to_string(), BASE_TYPE.to_string()),
        };

        self.ctx.record(letter, recorded);
        Ok(format!("@\n{}", shown))
    }
}
