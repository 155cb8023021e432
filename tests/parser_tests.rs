use hinner::ast::Submission;
use hinner::ast::expression::Expression;
use hinner::ast::types::TypeExpr;
use hinner::parser::parse_source;

fn parse_ok(input: &str) -> Submission {
    let (submission, errors) = parse_source(input);
    if !errors.is_empty() {
        panic!("parsing failed: {}", errors[0]);
    }
    submission.expect("parsing failed: no submission")
}

fn parse_expr(input: &str) -> Expression {
    match parse_ok(input) {
        Submission::Expression(expr) => expr,
        Submission::TypeDeclaration(_) => panic!("expected an expression"),
    }
}

fn syntax_errors(input: &str) -> usize {
    parse_source(input).1.len()
}

#[test]
fn parse_variable() {
    assert!(matches!(parse_expr("x"), Expression::Variable(id) if id.value == "x"));
}

#[test]
fn parse_number() {
    assert!(matches!(parse_expr("42"), Expression::Number(n) if n.value == "42"));
}

#[test]
fn parse_operator_section() {
    assert!(matches!(parse_expr("(+)"), Expression::Operator(op) if op.symbol == "+"));
    assert!(matches!(parse_expr("(*)"), Expression::Operator(op) if op.symbol == "*"));
}

#[test]
fn parse_parenthesized() {
    if let Expression::Parenthesized(p) = parse_expr("(x)") {
        assert!(matches!(*p.inner, Expression::Variable(ref id) if id.value == "x"));
    } else {
        panic!("expected parenthesized expression");
    }
}

#[test]
fn parse_application_is_left_associative() {
    if let Expression::Application(outer) = parse_expr("f x y") {
        assert!(matches!(*outer.argument, Expression::Variable(ref id) if id.value == "y"));
        if let Expression::Application(inner) = *outer.function {
            assert!(matches!(*inner.function, Expression::Variable(ref id) if id.value == "f"));
            assert!(matches!(*inner.argument, Expression::Variable(ref id) if id.value == "x"));
        } else {
            panic!("expected nested application");
        }
    } else {
        panic!("expected application");
    }
}

#[test]
fn parse_abstraction_body_extends_right() {
    if let Expression::Abstraction(abs) = parse_expr(r#"\x -> f x"#) {
        assert_eq!(abs.param.value, "x");
        assert!(matches!(*abs.body, Expression::Application(_)));
    } else {
        panic!("expected abstraction");
    }
}

#[test]
fn parse_infix_as_operator_application() {
    if let Expression::Application(outer) = parse_expr("x + 1") {
        assert!(matches!(*outer.argument, Expression::Number(ref n) if n.value == "1"));
        if let Expression::Application(inner) = *outer.function {
            assert!(matches!(*inner.function, Expression::Operator(ref op) if op.symbol == "+"));
            assert!(matches!(*inner.argument, Expression::Variable(ref id) if id.value == "x"));
        } else {
            panic!("expected operator application");
        }
    } else {
        panic!("expected application");
    }
}

#[test]
fn parse_simple_declaration() {
    if let Submission::TypeDeclaration(decl) = parse_ok("x :: N") {
        assert!(matches!(decl.expr, Expression::Variable(ref id) if id.value == "x"));
        assert!(matches!(decl.ty, TypeExpr::Variable(ref id) if id.value == "N"));
    } else {
        panic!("expected type declaration");
    }
}

#[test]
fn parse_arrow_declaration() {
    if let Submission::TypeDeclaration(decl) = parse_ok("(+) :: N -> (N -> N)") {
        assert!(matches!(decl.expr, Expression::Operator(_)));
        if let TypeExpr::Arrow(arrow) = decl.ty {
            assert_eq!(arrow.from.value, "N");
            assert!(matches!(*arrow.to, TypeExpr::Arrow(ref inner) if inner.from.value == "N"));
        } else {
            panic!("expected arrow type");
        }
    } else {
        panic!("expected type declaration");
    }
}

#[test]
fn parse_declaration_of_abstraction() {
    if let Submission::TypeDeclaration(decl) = parse_ok(r#"\x -> x :: N -> N"#) {
        assert!(matches!(decl.expr, Expression::Abstraction(_)));
        assert!(matches!(decl.ty, TypeExpr::Arrow(_)));
    } else {
        panic!("expected type declaration");
    }
}

#[test]
fn reject_empty_input() {
    assert_eq!(syntax_errors(""), 1);
}

#[test]
fn reject_unfinished_abstraction() {
    assert_eq!(syntax_errors(r#"\x ->"#), 1);
}

#[test]
fn reject_unclosed_parenthesis() {
    assert_eq!(syntax_errors("(x"), 1);
}

#[test]
fn reject_trailing_token() {
    let (_, errors) = parse_source("x )");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].found.as_deref(), Some("')'"));
}

#[test]
fn reject_arrow_with_compound_left_side() {
    assert_eq!(syntax_errors("f :: (N -> N) -> N"), 1);
}

#[test]
fn reject_missing_type() {
    assert_eq!(syntax_errors("x ::"), 1);
}
