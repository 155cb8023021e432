use std::fmt;

use lachs::Span;

use crate::lexer::Token;

#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub position: Option<Span>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: Vec::new(),
            found: None,
            position: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }

    fn summary(&self) -> String {
        let mut msg = self.message.clone();
        match self.expected.as_slice() {
            [] => {}
            [only] => msg.push_str(&format!(", expected {}", only)),
            [init @ .., last] => {
                msg.push_str(&format!(", expected {} or {}", init.join(", "), last))
            }
        }
        if let Some(found) = &self.found {
            msg.push_str(&format!(", found {}", found));
        }
        msg
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.summary();
        match &self.position {
            Some(span) if !span.source.is_empty() => write!(f, "{}", span.to_string(&msg)),
            _ => write!(f, "Syntax error: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    furthest: Option<(usize, ParseError)>,
    errors: Vec<ParseError>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
            errors: Vec::new(),
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember a failed attempt. Only the error that got furthest into the
    /// token stream is kept; alternatives failing at the same token merge
    /// their expectations.
    pub fn record_error(&mut self, err: ParseError) {
        let index = self.index;
        if let Some((furthest_index, furthest)) = &mut self.furthest {
            if *furthest_index > index {
                return;
            }
            if *furthest_index == index {
                for expected in err.expected {
                    if !furthest.expected.contains(&expected) {
                        furthest.expected.push(expected);
                    }
                }
                return;
            }
        }
        self.furthest = Some((index, err));
    }

    pub fn get_furthest_error(&self) -> Option<&ParseError> {
        self.furthest.as_ref().map(|(_, err)| err)
    }

    /// Build an error pointing at the current token (or the end of input)
    pub fn error_here(&self, msg: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::new(msg).found(tok.describe()).at(tok.pos()),
            None => ParseError::new(msg),
        }
    }

    pub fn collect_error(&mut self, err: ParseError) {
        self.errors.push(err);
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
