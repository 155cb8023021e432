use serde::Serialize;
use tracing::{debug, warn};

use crate::core::NodeId;
use crate::render::GraphDescription;

use super::error::{Diagnostic, WalkError};
use super::letters::LetterGenerator;
use super::scratch::AuxTable;
use super::symbols::SymbolTable;

/// Result of one completed walk
#[derive(Debug, Clone, Default, Serialize)]
pub struct Walk {
    pub graph: GraphDescription,
    pub diagnostics: Vec<Diagnostic>,
}

/// Mutable state threaded through one walk: the tables it reads and writes,
/// its own letter generator, and the output being built.
pub(crate) struct WalkContext<'a> {
    pub symbols: &'a SymbolTable,
    aux: &'a mut AuxTable,
    letters: LetterGenerator,
    walk: Walk,
}

impl<'a> WalkContext<'a> {
    pub fn new(symbols: &'a SymbolTable, aux: &'a mut AuxTable) -> Self {
        Self {
            symbols,
            aux,
            letters: LetterGenerator::new(),
            walk: Walk::default(),
        }
    }

    pub fn fresh_letter(&mut self) -> Result<String, WalkError> {
        self.letters.next_letter()
    }

    pub fn declared(&self, name: &str) -> Option<String> {
        self.symbols.lookup(name).map(str::to_string)
    }

    /// Declared type, else the auxiliary binding, else a fresh letter that
    /// becomes the auxiliary binding.
    pub fn resolve(&mut self, name: &str) -> Result<String, WalkError> {
        if let Some(ty) = self.symbols.lookup(name) {
            return Ok(ty.to_string());
        }
        if let Some(ty) = self.aux.get(name) {
            return Ok(ty.to_string());
        }
        let letter = self.fresh_letter()?;
        debug!(name, letter = %letter, "assigned type letter");
        self.aux.insert(name, letter.clone());
        Ok(letter)
    }

    /// Replace the auxiliary binding of `name` by `letter -> ty`, where
    /// `letter` is the one `name` was bound to (or a fresh one).
    pub fn settle(&mut self, name: &str, ty: &str) -> Result<(), WalkError> {
        let letter = match self.aux.remove(name) {
            Some(letter) => letter,
            None => self.fresh_letter()?,
        };
        self.aux.insert(letter, ty);
        Ok(())
    }

    pub fn record(&mut self, letter: String, ty: impl Into<String>) {
        self.aux.insert(letter, ty);
    }

    pub fn link(&mut self, parent: Option<NodeId>, child: NodeId) {
        if let Some(parent) = parent {
            self.walk.graph.add_edge(parent, child);
        }
    }

    pub fn emit(&mut self, id: NodeId, label: String) {
        self.walk.graph.add_node(id, label);
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!(node = %diagnostic.node(), "{}", diagnostic);
        self.walk.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> Walk {
        self.walk
    }
}
