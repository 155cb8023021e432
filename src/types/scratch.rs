use indexmap::IndexMap;
use serde::Serialize;

/// Auxiliary type table shared by the two walks over one expression.
///
/// Keys are names (`x`, `3`, `(+)`) or type letters handed out during a walk;
/// values are letters, arrow types or the base type `N`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuxTable {
    entries: IndexMap<String, String>,
}

impl AuxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, ty: impl Into<String>) {
        self.entries.insert(key.into(), ty.into());
    }

    /// Remove an entry while keeping the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
