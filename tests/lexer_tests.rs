use hinner::lexer::Token;

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("x foo N Bool").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "x"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "foo"));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "N"));
    assert!(matches!(&tokens[3], Token::Ident(i) if i.value == "Bool"));
}

#[test]
fn lex_numbers() {
    let tokens = Token::lex("3 42 0").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Number(n) if n.value == "3"));
    assert!(matches!(&tokens[1], Token::Number(n) if n.value == "42"));
    assert!(matches!(&tokens[2], Token::Number(n) if n.value == "0"));
}

#[test]
fn lex_operators() {
    let tokens = Token::lex("+ - * /").unwrap();
    assert_eq!(tokens.len(), 4);
    let symbols: Vec<_> = tokens.iter().filter_map(Token::operator_symbol).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);
}

#[test]
fn lex_arrow_is_not_minus() {
    let tokens = Token::lex("a->b - c").unwrap();
    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[1], Token::Arrow(_)));
    assert!(matches!(tokens[3], Token::Minus(_)));
}

#[test]
fn lex_lambda() {
    let tokens = Token::lex(r#"\x -> x"#).unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Backslash(_)));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "x"));
    assert!(matches!(tokens[2], Token::Arrow(_)));
    assert!(matches!(&tokens[3], Token::Ident(i) if i.value == "x"));
}

#[test]
fn lex_type_declaration() {
    let tokens = Token::lex("(+) :: N -> (N -> N)").unwrap();
    assert_eq!(tokens.len(), 12);
    assert!(matches!(tokens[0], Token::LParen(_)));
    assert!(matches!(tokens[1], Token::Plus(_)));
    assert!(matches!(tokens[2], Token::RParen(_)));
    assert!(matches!(tokens[3], Token::DoubleColon(_)));
    assert!(matches!(tokens[11], Token::RParen(_)));
}

#[test]
fn describe_tokens() {
    let tokens = Token::lex("x 3 ::").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'x'");
    assert_eq!(tokens[1].describe(), "number '3'");
    assert_eq!(tokens[2].describe(), "'::'");
}
