use lachs::Span;

#[derive(Debug, Clone)]
pub enum Expression {
    Variable(Ident),
    Number(Number),
    Parenthesized(Parenthesized),
    Operator(Operator),
    Abstraction(Abstraction),
    Application(Application),
}

impl Expression {
    pub fn position(&self) -> Span {
        match self {
            Expression::Variable(inner) => inner.position.clone(),
            Expression::Number(inner) => inner.position.clone(),
            Expression::Parenthesized(inner) => inner.position.clone(),
            Expression::Operator(inner) => inner.position.clone(),
            Expression::Abstraction(inner) => inner.position.clone(),
            Expression::Application(inner) => inner.position.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

/// Numeric literal, kept as the text the user typed
#[derive(Debug, Clone)]
pub struct Number {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct Parenthesized {
    pub inner: Box<Expression>,
    pub position: Span,
}

/// Operator section such as `(+)`, or the operator of an infix expression
#[derive(Debug, Clone)]
pub struct Operator {
    pub symbol: String,
    pub position: Span,
}

/// `\param -> body`
#[derive(Debug, Clone)]
pub struct Abstraction {
    pub param: Ident,
    pub body: Box<Expression>,
    pub position: Span,
}

/// `function argument`
#[derive(Debug, Clone)]
pub struct Application {
    pub function: Box<Expression>,
    pub argument: Box<Expression>,
    pub position: Span,
}
