use lachs::Span;

use super::expression::Ident;

#[derive(Debug, Clone)]
pub enum TypeExpr {
    Variable(Ident),
    Arrow(TypeArrow),
}

/// `from -> to`. The left side is always a bare type name.
#[derive(Debug, Clone)]
pub struct TypeArrow {
    pub from: Ident,
    pub to: Box<TypeExpr>,
    pub position: Span,
}
