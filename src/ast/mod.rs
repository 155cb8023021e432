//! Concrete parse tree produced by the parser.
//!
//! The tree keeps every syntactic form the user typed, including
//! parenthesized sub-expressions, and each node remembers its source span.
//! The builder in [`crate::desugar`] lowers it into the semantic tree.

pub mod expression;
pub mod types;

use lachs::Span;

use expression::Expression;
use types::TypeExpr;

/// One line of user input: either an expression to analyze or a type
/// declaration that extends the symbol table.
#[derive(Debug, Clone)]
pub enum Submission {
    Expression(Expression),
    TypeDeclaration(TypeDeclaration),
}

/// `expr :: type`
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub expr: Expression,
    pub ty: TypeExpr,
    pub position: Span,
}
