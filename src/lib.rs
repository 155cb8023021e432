//! # Hinner - Semantic and Type Trees for a Small Lambda Calculus
//!
//! Hinner reads one line at a time: either an expression such as `\x -> (+) x 1`
//! or a type declaration such as `(+) :: N -> (N -> N)`. Declarations extend a
//! symbol table that lives for the whole session. Expressions are turned into
//! two labelled trees, ready to be drawn with Graphviz:
//!
//! - the **semantic tree**, where every node carries a type letter or its
//!   declared type;
//! - the **type tree**, where types are pushed through abstractions,
//!   applications and operators and local mismatches are reported.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Input line (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Parse Tree (ast::Submission)        syntax errors ⇒ rejected
//!     ↓
//! [Lowering] → Semantic Tree (core::CoreTree)    declarations ⇒ symbol table
//!     ↓
//! [Semantic walk] → GraphDescription + auxiliary table
//!     ↓
//! [Type tree walk] → GraphDescription + diagnostics
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Not a unifier
//! The type tree walk is a labelling heuristic. Every bound variable is
//! assumed to be of the base type `N`, undeclared operators default to
//! `(N -> (N -> N))`, and there is no unification or generalization.
//!
//! ### Arena-backed semantic tree
//! Semantic nodes live in an arena and are addressed by [`core::NodeId`]. The
//! same handle identifies a node in both rendered trees.
//!
//! ### Explicit session state
//! The symbol table belongs to a [`session::Session`]; the auxiliary table and
//! the letter generator belong to a single walk. Nothing is global.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Combinator-based parser producing the parse tree
//! - [`ast`] - Parse tree definitions
//! - [`core`] - Semantic tree and canonical strings
//! - [`desugar`] - Lowering from parse tree to semantic tree
//! - [`types`] - Symbol table, auxiliary table and the two walks
//! - [`render`] - Graphviz/JSON output and text tables
//! - [`session`] - Per-session pipeline
//! - [`repl`] - Interactive front end
//!
//! ## Example
//!
//! ```no_run
//! use hinner::session::Session;
//!
//! let mut session = Session::new();
//! session.submit("(+) :: N -> (N -> N)").unwrap();
//! let report = session.submit("(+) 3").unwrap();
//! let tree = report.type_walk().unwrap();
//! println!("{}", tree.graph.to_dot());
//! ```

pub mod ast;
pub mod core;
pub mod desugar;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod repl;
pub mod session;
pub mod types;
