//! # Core AST - Semantic Tree After Lowering
//!
//! The semantic tree is what the two exporters walk. It has exactly five
//! expression forms; parentheses are gone and infix operators are already
//! plain applications of an operator node.
//!
//! ```text
//! Parser → Parse Tree (ast) → Lowering (desugar) → [CORE AST] → Exporters (types)
//! ```
//!
//! Nodes are stored in an arena ([`CoreArena`]) and refer to their children
//! through [`NodeId`] handles handed out when the node is allocated. The
//! handle doubles as the node identifier in the rendered graph, so it is
//! unique per node within a tree and the same for every walk over it.
//!
//! ## Canonical strings
//!
//! [`CoreTree::expr_to_str`] and [`CoreType::type_to_str`] produce the
//! strings used as symbol table keys and values. They are structural, not
//! pretty-printers:
//!
//! ```text
//! Var x          → x
//! Num 3          → 3
//! Op +           → (+)
//! Abs x (Var x)  → \x -> x
//! App f x        → f x          (no parentheses added)
//! TypeArrow N N  → (N -> N)
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Handle of a node inside a [`CoreArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Serialized the same way the graph refers to it (`n3`)
impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreExpr {
    Var { name: String },
    Num { value: String },
    Op { operator: String },
    /// `bound` always points at a `Var` node
    Abs { bound: NodeId, body: NodeId },
    App { function: NodeId, argument: NodeId },
    /// Never produced by lowering; the exporters report it and render a
    /// placeholder.
    Unknown { kind: String },
}

impl CoreExpr {
    pub fn kind(&self) -> &str {
        match self {
            CoreExpr::Var { .. } => "Var",
            CoreExpr::Num { .. } => "Num",
            CoreExpr::Op { .. } => "Op",
            CoreExpr::Abs { .. } => "Abs",
            CoreExpr::App { .. } => "App",
            CoreExpr::Unknown { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoreArena {
    nodes: Vec<CoreExpr>,
}

impl CoreArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, expr: CoreExpr) -> NodeId {
        self.nodes.push(expr);
        NodeId(self.nodes.len() - 1)
    }

    pub fn var(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(CoreExpr::Var { name: name.into() })
    }

    pub fn num(&mut self, value: impl Into<String>) -> NodeId {
        self.alloc(CoreExpr::Num {
            value: value.into(),
        })
    }

    pub fn op(&mut self, operator: impl Into<String>) -> NodeId {
        self.alloc(CoreExpr::Op {
            operator: operator.into(),
        })
    }

    /// Allocate an abstraction together with the `Var` node for its binder
    pub fn abs(&mut self, bound: impl Into<String>, body: NodeId) -> NodeId {
        let bound = self.var(bound);
        self.alloc(CoreExpr::Abs { bound, body })
    }

    pub fn app(&mut self, function: NodeId, argument: NodeId) -> NodeId {
        self.alloc(CoreExpr::App { function, argument })
    }

    pub fn get(&self, id: NodeId) -> &CoreExpr {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn expr_to_str(&self, id: NodeId) -> String {
        match self.get(id) {
            CoreExpr::Var { name } => name.clone(),
            CoreExpr::Num { value } => value.clone(),
            CoreExpr::Op { operator } => format!("({})", operator),
            CoreExpr::Abs { bound, body } => match self.get(*bound) {
                CoreExpr::Var { name } => format!("\\{} -> {}", name, self.expr_to_str(*body)),
                _ => "unknown_expr".to_string(),
            },
            CoreExpr::App { function, argument } => format!(
                "{} {}",
                self.expr_to_str(*function),
                self.expr_to_str(*argument)
            ),
            CoreExpr::Unknown { .. } => "unknown_expr".to_string(),
        }
    }

    /// Close the arena over `root`
    pub fn finish(self, root: NodeId) -> CoreTree {
        CoreTree { arena: self, root }
    }
}

/// A semantic expression tree: an arena plus the handle of its root
#[derive(Debug, Clone)]
pub struct CoreTree {
    arena: CoreArena,
    root: NodeId,
}

impl CoreTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &CoreExpr {
        self.arena.get(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn expr_to_str(&self, id: NodeId) -> String {
        self.arena.expr_to_str(id)
    }
}

impl fmt::Display for CoreTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr_to_str(self.root))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreType {
    Var { name: String },
    /// The left side is always a named type variable
    Arrow { from: String, to: Box<CoreType> },
    Unknown,
}

impl CoreType {
    pub fn var(name: impl Into<String>) -> Self {
        CoreType::Var { name: name.into() }
    }

    pub fn arrow(from: impl Into<String>, to: CoreType) -> Self {
        CoreType::Arrow {
            from: from.into(),
            to: Box::new(to),
        }
    }

    pub fn type_to_str(&self) -> String {
        match self {
            CoreType::Var { name } => name.clone(),
            CoreType::Arrow { from, to } => format!("({} -> {})", from, to.type_to_str()),
            CoreType::Unknown => "unknown_type".to_string(),
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_to_str())
    }
}
