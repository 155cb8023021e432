use hinner::core::{CoreArena, CoreExpr, CoreTree};
use hinner::types::{AuxTable, Diagnostic, SymbolTable, WalkError, export_semantic_tree};

fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn labels(walk: &hinner::types::Walk) -> Vec<&str> {
    walk.graph.nodes.iter().map(|n| n.label.as_str()).collect()
}

/// `\x -> x`
fn identity() -> CoreTree {
    let mut arena = CoreArena::new();
    let body = arena.var("x");
    let root = arena.abs("x", body);
    arena.finish(root)
}

/// `(+) 3`
fn plus_three() -> CoreTree {
    let mut arena = CoreArena::new();
    let plus = arena.op("+");
    let three = arena.num("3");
    let root = arena.app(plus, three);
    arena.finish(root)
}

#[test]
fn identity_shares_letter_between_occurrences() {
    let tree = identity();
    let symbols = SymbolTable::new();
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(labels(&walk), vec!["λ\na", "x\nb", "x\nb"]);
    assert_eq!(walk.graph.children_of(tree.root()), vec!["n1", "n0"]);
    assert_eq!(aux.entries(), entries(&[("x", "b")]));
    assert!(walk.diagnostics.is_empty());
}

#[test]
fn declared_names_show_their_type() {
    let tree = identity();
    let mut symbols = SymbolTable::new();
    symbols.declare("x", "Bool");
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(labels(&walk), vec!["λ\na", "x\nBool", "x\nBool"]);
    assert!(aux.is_empty());
}

#[test]
fn operators_are_keyed_with_parentheses() {
    let tree = plus_three();
    let mut symbols = SymbolTable::new();
    symbols.declare("(+)", "(N -> (N -> N))");
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(labels(&walk), vec!["@\na", "(+)\n(N -> (N -> N))", "3\nb"]);
    assert_eq!(aux.entries(), entries(&[("3", "b")]));
}

#[test]
fn undeclared_application_gets_letters_in_preorder() {
    let tree = plus_three();
    let symbols = SymbolTable::new();
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(labels(&walk), vec!["@\na", "(+)\nb", "3\nc"]);
    assert_eq!(aux.entries(), entries(&[("(+)", "b"), ("3", "c")]));
    assert_eq!(walk.graph.edges.len(), 2);
}

#[test]
fn running_out_of_letters_aborts() {
    let mut arena = CoreArena::new();
    let mut root = arena.var("v1");
    for i in 2..=14 {
        let arg = arena.var(format!("v{}", i));
        root = arena.app(root, arg);
    }
    let tree = arena.finish(root);
    assert_eq!(tree.len(), 27);

    let symbols = SymbolTable::new();
    let mut aux = AuxTable::new();
    let result = export_semantic_tree(&tree, &symbols, &mut aux);

    assert_eq!(result.unwrap_err(), WalkError::LettersExhausted);
    // every letter but the last one was bound before the abort
    assert_eq!(aux.len(), 13);
    assert_eq!(aux.get("v13"), Some("z"));
    assert!(!aux.contains("v14"));
}

#[test]
fn unknown_node_is_reported() {
    let mut arena = CoreArena::new();
    let x = arena.var("x");
    let unknown = arena.alloc(CoreExpr::Unknown {
        kind: "Let".to_string(),
    });
    let root = arena.app(unknown, x);
    let tree = arena.finish(root);

    let symbols = SymbolTable::new();
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(labels(&walk), vec!["@\na", "unknown", "x\nb"]);
    assert_eq!(
        walk.diagnostics,
        vec![Diagnostic::unknown_node_kind("Let", unknown)]
    );
    assert_eq!(walk.diagnostics[0].to_string(), "Unknown node type: Let");
}

#[test]
fn dot_output_escapes_labels() {
    let tree = identity();
    let symbols = SymbolTable::new();
    let mut aux = AuxTable::new();
    let walk = export_semantic_tree(&tree, &symbols, &mut aux).unwrap();

    assert_eq!(
        walk.graph.to_dot(),
        "digraph {\n  n2 [label=<λ<br/>a>];\n  n1 [label=<x<br/>b>];\n  n0 [label=<x<br/>b>];\n  n2 -> n1;\n  n2 -> n0;\n}"
    );
}
