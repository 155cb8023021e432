use indexmap::IndexMap;
use serde::Serialize;

/// Declared types, keyed by the canonical string of the declared expression.
///
/// Entries only come from `expr :: type` submissions and are never removed.
/// Iteration follows declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    bindings: IndexMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration, returning the type it replaced (if any).
    /// A re-declared name keeps its original position.
    pub fn declare(&mut self, name: impl Into<String>, ty: impl Into<String>) -> Option<String> {
        self.bindings.insert(name.into(), ty.into())
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.bindings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
