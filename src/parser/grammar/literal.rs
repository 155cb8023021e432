//! Leaf parsers: identifiers, numbers and operator symbols

use crate::ast::expression::{Ident, Number, Operator};
use crate::lexer::Token;

use crate::parser::combinators::{BoxedParser, expect_operator};
use crate::parser::state::{ParseError, ParseState, Parser};

/// Parse an identifier
pub fn ident() -> BoxedParser<Ident> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(_)) => match state.advance() {
            Some(Token::Ident(id)) => Ok(Ident {
                value: id.value,
                position: id.position,
            }),
            _ => unreachable!(),
        },
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("identifier")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("identifier");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a numeric literal, keeping its text
pub fn number() -> BoxedParser<Number> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Number(_)) => match state.advance() {
            Some(Token::Number(num)) => Ok(Number {
                value: num.value,
                position: num.position,
            }),
            _ => unreachable!(),
        },
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("number")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("number");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a bare operator symbol: `+`, `-`, `*` or `/`
pub fn operator() -> BoxedParser<Operator> {
    expect_operator()
        >> |tok: Token| Operator {
            symbol: tok.operator_symbol().unwrap_or_default().to_string(),
            position: tok.pos(),
        }
}
