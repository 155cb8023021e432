//! Type annotation parsers

use crate::ast::types::{TypeArrow, TypeExpr};

use crate::parser::combinators::{BoxedParser, expect_arrow, expect_lparen, expect_rparen};
use crate::parser::state::{ParseState, Parser};

use super::literal::ident;

/// arrow_type := ident "->" type_expr
fn arrow_type() -> BoxedParser<TypeExpr> {
    BoxedParser::new(move |state: &mut ParseState| {
        let from = (ident() - expect_arrow()).parse(state)?;
        let to = type_expr().parse(state)?;
        Ok(TypeExpr::Arrow(TypeArrow {
            position: from.position.merge(&type_position(&to)),
            from,
            to: Box::new(to),
        }))
    })
}

fn type_position(ty: &TypeExpr) -> lachs::Span {
    match ty {
        TypeExpr::Variable(id) => id.position.clone(),
        TypeExpr::Arrow(arrow) => arrow.position.clone(),
    }
}

/// type_expr := "(" type_expr ")" | arrow_type | ident
pub fn type_expr() -> BoxedParser<TypeExpr> {
    BoxedParser::new(move |state: &mut ParseState| {
        let grouped = expect_lparen() * type_expr() - expect_rparen();
        let variable = ident() >> TypeExpr::Variable;

        (grouped | arrow_type() | variable).label("type").parse(state)
    })
}
