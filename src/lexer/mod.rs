use lachs::Span;

#[lachs::token]
pub enum Token {
    #[literal("[a-zA-Z][a-zA-Z0-9_']*")]
    Ident,
    #[literal("[0-9]+")]
    Number,
    #[terminal("::")]
    DoubleColon,
    #[terminal("\\")]
    Backslash,
    #[terminal("->")]
    Arrow,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Ident(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
            Token::DoubleColon(inner) => inner.position.clone(),
            Token::Backslash(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::Plus(inner) => inner.position.clone(),
            Token::Minus(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Slash(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// The operator symbol, if this token is one of the arithmetic operators
    pub fn operator_symbol(&self) -> Option<&'static str> {
        match self {
            Token::Plus(_) => Some("+"),
            Token::Minus(_) => Some("-"),
            Token::Star(_) => Some("*"),
            Token::Slash(_) => Some("/"),
            _ => None,
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Number(inner) => format!("number '{}'", inner.value),
            Token::DoubleColon(_) => "'::'".to_string(),
            Token::Backslash(_) => "'\\'".to_string(),
            Token::Arrow(_) => "'->'".to_string(),
            Token::Plus(_) => "'+'".to_string(),
            Token::Minus(_) => "'-'".to_string(),
            Token::Star(_) => "'*'".to_string(),
            Token::Slash(_) => "'/'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}
