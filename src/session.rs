//! One user session: a symbol table that lives across submissions, and the
//! pipeline that runs for each submitted line.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::desugar::desugar_submission;
use crate::parser::{ParseError, parse_source};
use crate::types::{
    AuxTable, Diagnostic, SymbolTable, Walk, WalkError, export_semantic_tree, export_type_tree,
};

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The parser rejected the input; nothing else ran
    #[error("invalid expression ({} syntax error(s))", errors.len())]
    Syntax { errors: Vec<ParseError> },
}

/// Everything one accepted submission produced
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Canonical form of the analyzed expression; `None` for declarations
    pub expression: Option<String>,
    pub semantic: Option<Result<Walk, WalkError>>,
    pub types: Option<Result<Walk, WalkError>>,
    /// Auxiliary table as left by the type tree walk
    pub aux: AuxTable,
}

impl Report {
    pub fn is_declaration(&self) -> bool {
        self.expression.is_none()
    }

    pub fn semantic_walk(&self) -> Option<&Walk> {
        self.semantic.as_ref().and_then(|walk| walk.as_ref().ok())
    }

    pub fn type_walk(&self) -> Option<&Walk> {
        self.types.as_ref().and_then(|walk| walk.as_ref().ok())
    }

    /// Diagnostics from both walks, semantic walk first
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.semantic_walk()
            .into_iter()
            .chain(self.type_walk())
            .flat_map(|walk| walk.diagnostics.iter())
    }

    /// The whole report as one JSON document, together with the symbol
    /// table it was produced against
    pub fn to_json(&self, symbols: &SymbolTable) -> Result<String, serde_json::Error> {
        let document = ReportDocument {
            expression: self.expression.as_deref(),
            semantic_tree: self.semantic.as_ref().map(WalkDocument::from),
            type_tree: self.types.as_ref().map(WalkDocument::from),
            symbols,
            aux: (!self.is_declaration()).then_some(&self.aux),
        };
        serde_json::to_string_pretty(&document)
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    expression: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    semantic_tree: Option<WalkDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_tree: Option<WalkDocument<'a>>,
    symbols: &'a SymbolTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    aux: Option<&'a AuxTable>,
}

/// A finished walk, or the reason it was aborted
#[derive(Serialize)]
#[serde(untagged)]
enum WalkDocument<'a> {
    Finished(&'a Walk),
    Aborted { error: String },
}

impl<'a> From<&'a Result<Walk, WalkError>> for WalkDocument<'a> {
    fn from(walk: &'a Result<Walk, WalkError>) -> Self {
        match walk {
            Ok(walk) => WalkDocument::Finished(walk),
            Err(err) => WalkDocument::Aborted {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    symbols: SymbolTable,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Run one line of input through the whole pipeline.
    ///
    /// Declarations extend the symbol table. Expressions are walked twice
    /// with a fresh auxiliary table; each walk gets its own letters, and a
    /// walk that runs out of letters does not prevent the other one.
    pub fn submit(&mut self, input: &str) -> Result<Report, SessionError> {
        let (submission, errors) = parse_source(input);
        if !errors.is_empty() {
            info!(input, errors = errors.len(), "submission rejected");
            return Err(SessionError::Syntax { errors });
        }
        let submission = submission.ok_or_else(|| SessionError::Syntax {
            errors: vec![ParseError::new("empty input")],
        })?;

        let Some(tree) = desugar_submission(submission, &mut self.symbols) else {
            info!(input, symbols = self.symbols.len(), "declaration accepted");
            return Ok(Report::default());
        };
        info!(expression = %tree, nodes = tree.len(), "analyzing expression");

        let mut aux = AuxTable::new();
        let semantic = export_semantic_tree(&tree, &self.symbols, &mut aux);
        if let Err(err) = &semantic {
            warn!("semantic tree walk aborted: {}", err);
        }
        let types = export_type_tree(&tree, &self.symbols, &mut aux);
        if let Err(err) = &types {
            warn!("type tree walk aborted: {}", err);
        }

        Ok(Report {
            expression: Some(tree.to_string()),
            semantic: Some(semantic),
            types: Some(types),
            aux,
        })
    }
}
