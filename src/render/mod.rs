//! Output for the tree and table descriptions
//!
//! - `graph`: node/edge description of a walked tree, emitted as Graphviz DOT
//!   or JSON
//! - `table`: two-column text tables for the symbol and auxiliary tables

pub mod graph;
pub mod table;

pub use graph::{GraphDescription, GraphEdge, GraphNode, escape_html};
pub use table::render_table;

/// How a report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Graphviz source with HTML-like labels, tables as text
    #[default]
    Dot,
    /// One JSON document per submission: both trees, both tables and the
    /// diagnostics
    Json,
}
