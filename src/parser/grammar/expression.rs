//! Expression parsers

use crate::ast::expression::{
    Abstraction, Application, Expression, Operator, Parenthesized,
};

use crate::parser::combinators::{
    BoxedParser, expect_arrow, expect_backslash, expect_lparen, expect_rparen, many,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{ident, number, operator};

/// operator_section := "(" operator ")"
pub fn operator_section() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_lparen().parse(state)?.pos();
        let op = operator().parse(state)?;
        let end = expect_rparen().parse(state)?.pos();
        Ok(Expression::Operator(Operator {
            symbol: op.symbol,
            position: start.merge(&end),
        }))
    })
}

/// parenthesized := "(" expression ")"
pub fn parenthesized() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_lparen().parse(state)?.pos();
        let inner = expression().parse(state)?;
        let end = expect_rparen().parse(state)?.pos();
        Ok(Expression::Parenthesized(Parenthesized {
            inner: Box::new(inner),
            position: start.merge(&end),
        }))
    })
}

/// abstraction := "\" ident "->" expression
pub fn abstraction() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_backslash().parse(state)?.pos();
        let param = (ident() - expect_arrow()).parse(state)?;
        let body = expression().parse(state)?;
        let position = start.merge(&body.position());
        Ok(Expression::Abstraction(Abstraction {
            param,
            body: Box::new(body),
            position,
        }))
    })
}

/// atom := operator_section | parenthesized | abstraction | ident | number
pub fn atom() -> BoxedParser<Expression> {
    let variable = ident() >> Expression::Variable;
    let literal = number() >> Expression::Number;

    // The section has to be tried before the general parenthesized form
    (operator_section() | parenthesized() | abstraction() | variable | literal).label("expression")
}

fn apply(function: Expression, argument: Expression) -> Expression {
    let position = function.position().merge(&argument.position());
    Expression::Application(Application {
        function: Box::new(function),
        argument: Box::new(argument),
        position,
    })
}

/// application := atom atom*
///
/// Juxtaposition associates to the left: `f x y` is `(f x) y`.
pub fn application() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let head = atom().parse(state)?;
        let args = many(atom()).parse(state)?;
        Ok(args.into_iter().fold(head, apply))
    })
}

/// expression := application (operator application)*
///
/// `a + b` becomes the same tree as `(+) a b`.
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut left = application().parse(state)?;

        loop {
            let pos = state.position();
            let op = match operator().parse(state) {
                Ok(op) => op,
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            };
            let right = application().parse(state)?;
            left = apply(apply(Expression::Operator(op), left), right);
        }

        Ok(left)
    })
}
