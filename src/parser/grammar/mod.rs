//! Grammar for the expression language
//!
//! - `literal`: identifiers, numbers, operator symbols
//! - `expression`: abstractions, applications, infix operators
//! - `types`: type annotations on the right of `::`

mod expression;
mod literal;
mod types;

pub use expression::{atom, expression};
pub use literal::{ident, number, operator};
pub use types::type_expr;

use crate::ast::{Submission, TypeDeclaration};

use super::combinators::{BoxedParser, expect_double_colon, optional};
use super::state::{ParseError, ParseState, Parser};

/// submission := expression ["::" type_expr]
pub fn submission() -> BoxedParser<Submission> {
    BoxedParser::new(move |state: &mut ParseState| {
        let expr = expression().parse(state)?;

        match optional(expect_double_colon() * type_expr()).parse(state)? {
            Some(ty) => {
                let position = expr.position();
                Ok(Submission::TypeDeclaration(TypeDeclaration {
                    expr,
                    ty,
                    position,
                }))
            }
            None => Ok(Submission::Expression(expr)),
        }
    })
}

/// Parse a complete submission from the token stream
/// Returns the parsed submission (if any) along with all collected errors
pub fn parse(state: &mut ParseState) -> (Option<Submission>, Vec<ParseError>) {
    let result = submission().parse(state);

    let submission = match result {
        Ok(sub) if state.has_next() => {
            let err = match state.get_furthest_error() {
                Some(furthest) if furthest.position.is_some() => furthest.clone(),
                _ => state.error_here("unexpected token"),
            };
            state.collect_error(err);
            Some(sub)
        }
        Ok(sub) => Some(sub),
        Err(err) => {
            let err = state.get_furthest_error().cloned().unwrap_or(err);
            state.collect_error(err);
            None
        }
    };

    let errors = state.take_errors();
    (submission, errors)
}
