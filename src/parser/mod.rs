mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};

use crate::ast::Submission;
use crate::lexer::Token;

/// Lex and parse one line of input.
///
/// A lexer failure is reported as a single syntax error, so the length of the
/// returned error list is the syntax error count of the submission.
pub fn parse_source(input: &str) -> (Option<Submission>, Vec<ParseError>) {
    let tokens = match Token::lex(input) {
        Ok(tokens) => tokens,
        Err(err) => return (None, vec![ParseError::new(err.to_string())]),
    };
    let mut state = ParseState::new(tokens);
    parse(&mut state)
}
