use hinner::ast::Submission;
use hinner::core::{CoreExpr, CoreTree};
use hinner::desugar::desugar_submission;
use hinner::parser::parse_source;
use hinner::types::SymbolTable;

/// Parse and lower one line against the given symbol table
fn lower(input: &str, symbols: &mut SymbolTable) -> Option<CoreTree> {
    let (submission, errors) = parse_source(input);
    assert!(errors.is_empty(), "parsing failed: {}", errors[0]);
    let submission: Submission = submission.expect("no submission");
    desugar_submission(submission, symbols)
}

fn lower_expr(input: &str) -> CoreTree {
    lower(input, &mut SymbolTable::new()).expect("expected an expression")
}

#[test]
fn parentheses_disappear() {
    let tree = lower_expr("(((x)))");
    assert_eq!(tree.len(), 1);
    assert!(matches!(tree.node(tree.root()), CoreExpr::Var { name } if name == "x"));
}

#[test]
fn leaves_keep_their_text() {
    let tree = lower_expr("007");
    assert!(matches!(tree.node(tree.root()), CoreExpr::Num { value } if value == "007"));
    assert_eq!(tree.to_string(), "007");

    let tree = lower_expr("(-)");
    assert!(matches!(tree.node(tree.root()), CoreExpr::Op { operator } if operator == "-"));
    assert_eq!(tree.to_string(), "(-)");
}

#[test]
fn abstraction_gets_a_binder_node() {
    let tree = lower_expr(r#"\x -> x"#);
    match tree.node(tree.root()) {
        CoreExpr::Abs { bound, body } => {
            assert!(matches!(tree.node(*bound), CoreExpr::Var { name } if name == "x"));
            assert!(matches!(tree.node(*body), CoreExpr::Var { name } if name == "x"));
            assert_ne!(bound, body);
        }
        other => panic!("expected abstraction, got {:?}", other),
    }
    assert_eq!(tree.to_string(), "\\x -> x");
}

#[test]
fn application_keeps_function_first() {
    let tree = lower_expr("f 3");
    match tree.node(tree.root()) {
        CoreExpr::App { function, argument } => {
            assert!(matches!(tree.node(*function), CoreExpr::Var { name } if name == "f"));
            assert!(matches!(tree.node(*argument), CoreExpr::Num { value } if value == "3"));
        }
        other => panic!("expected application, got {:?}", other),
    }
}

#[test]
fn canonical_form_drops_grouping() {
    assert_eq!(lower_expr("f (g x)").to_string(), "f g x");
    assert_eq!(lower_expr("(f g) x").to_string(), "f g x");
    assert_eq!(lower_expr("x + 1").to_string(), "(+) x 1");
    assert_eq!(lower_expr(r#"\y -> (*) y 2"#).to_string(), "\\y -> (*) y 2");
}

#[test]
fn declaration_fills_symbol_table() {
    let mut symbols = SymbolTable::new();
    assert!(lower("x :: N", &mut symbols).is_none());
    assert!(lower("(+) :: N -> (N -> N)", &mut symbols).is_none());
    assert!(lower("f x :: Bool", &mut symbols).is_none());
    assert!(lower(r#"\x -> x :: N -> N"#, &mut symbols).is_none());

    assert_eq!(symbols.lookup("x"), Some("N"));
    assert_eq!(symbols.lookup("(+)"), Some("(N -> (N -> N))"));
    assert_eq!(symbols.lookup("f x"), Some("Bool"));
    assert_eq!(symbols.lookup("\\x -> x"), Some("(N -> N)"));
}

#[test]
fn parenthesized_type_is_unwrapped() {
    let mut symbols = SymbolTable::new();
    lower("y :: (N)", &mut symbols);
    lower("g :: ((N -> N))", &mut symbols);
    assert_eq!(symbols.lookup("y"), Some("N"));
    assert_eq!(symbols.lookup("g"), Some("(N -> N)"));
}

#[test]
fn expressions_leave_symbol_table_alone() {
    let mut symbols = SymbolTable::new();
    lower("x :: N", &mut symbols);
    assert!(lower("f x", &mut symbols).is_some());
    assert_eq!(symbols.len(), 1);
}
