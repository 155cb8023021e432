//! Type labelling of the semantic tree
//!
//! - [`letters`]: single-letter type variables
//! - [`symbols`]: declared types, kept for the whole session
//! - [`scratch`]: auxiliary table shared by the two walks of one expression
//! - [`semantic`]: first walk, plain labelling
//! - [`typetree`]: second walk, propagation and mismatch checks

pub mod error;
pub mod letters;
pub mod scratch;
pub mod semantic;
pub mod symbols;
pub mod typetree;
mod walk;

pub use error::{Diagnostic, WalkError};
pub use letters::LetterGenerator;
pub use scratch::AuxTable;
pub use semantic::export_semantic_tree;
pub use symbols::SymbolTable;
pub use typetree::export_type_tree;
pub use walk::Walk;

/// Base type: "numeric-like, nothing more is known"
pub const BASE_TYPE: &str = "N";

/// Label given to every abstraction by the type tree walk
pub const ABSTRACTION_TYPE: &str = "(N -> N)";

/// Default signature of an undeclared operator
pub const BINARY_OPERATOR_TYPE: &str = "(N -> (N -> N))";
