use wrapgen_core::{Declaration, DeclarationGraph, QualifiedName};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::resolve::{DeclIndex, Resolution};

fn graph() -> DeclarationGraph {
    DeclarationGraph::new([
        Declaration::structure("Outer")
            .with_nested(Declaration::structure("Inner").with_nested(Declaration::structure("Leaf")))
            .with_nested(Declaration::structure("Shared")),
        Declaration::structure("Shared"),
        Declaration::structure("Box")
            .with_generic_param("T")
            .with_nested(Declaration::structure("Content")),
    ])
}

fn path(s: &str) -> QualifiedName {
    QualifiedName::from(s)
}

fn found(resolution: Resolution<'_>) -> String {
    match resolution {
        Resolution::Found(path, _) => path.to_string(),
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn lookup_prefers_innermost_scope() {
    let graph = graph();
    let mut diagnostics = Diagnostics::new();
    let index = DeclIndex::build(&graph, &mut diagnostics);
    assert!(diagnostics.is_empty());

    let name = QualifiedName::from("Shared");
    assert_eq!(found(index.resolve(&path("Outer.Inner"), &name)), "Outer.Shared");
    assert_eq!(found(index.resolve(&path("Outer"), &name)), "Outer.Shared");
    assert_eq!(found(index.resolve(&QualifiedName::root(), &name)), "Shared");
}

#[test]
fn qualified_reference_from_nested_scope() {
    let graph = graph();
    let mut diagnostics = Diagnostics::new();
    let index = DeclIndex::build(&graph, &mut diagnostics);

    let leaf = index.resolve(&path("Outer.Inner.Leaf"), &path("Inner.Leaf"));
    assert_eq!(found(leaf), "Outer.Inner.Leaf");
    assert_eq!(
        index.resolve(&path("Shared"), &path("Leaf")),
        Resolution::Missing
    );
}

#[test]
fn generic_declarations_and_their_contents_are_excluded() {
    let graph = graph();
    let mut diagnostics = Diagnostics::new();
    let index = DeclIndex::build(&graph, &mut diagnostics);

    assert_eq!(index.resolve(&QualifiedName::root(), &path("Box")), Resolution::Excluded);
    assert_eq!(
        index.resolve(&QualifiedName::root(), &path("Box.Content")),
        Resolution::Excluded
    );
    assert!(!index.is_wrappable(&path("Box.Content")));

    let top: Vec<String> = index.top_level().map(|(p, _)| p.to_string()).collect();
    assert_eq!(top, ["Outer", "Shared"]);
    let all: Vec<String> = index.top_level_paths().map(ToString::to_string).collect();
    assert_eq!(all, ["Outer", "Shared", "Box"]);
}

#[test]
fn failure_propagates_to_nested_declarations() {
    let graph = graph();
    let mut diagnostics = Diagnostics::new();
    let mut index = DeclIndex::build(&graph, &mut diagnostics);

    index.mark_failed(&path("Outer"));
    assert_eq!(
        index.resolve(&QualifiedName::root(), &path("Outer.Inner.Leaf")),
        Resolution::Failed(path("Outer.Inner.Leaf"))
    );
    assert!(!index.is_wrappable(&path("Outer.Shared")));
    assert!(index.is_wrappable(&path("Shared")));
}

#[test]
fn first_duplicate_wins() {
    let first = Declaration::structure("Point").with_generic_param("T");
    let graph = DeclarationGraph::new([first, Declaration::class("Point")]);
    let mut diagnostics = Diagnostics::new();
    let index = DeclIndex::build(&graph, &mut diagnostics);

    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics.as_slice()[0];
    assert_eq!(d.kind(), DiagnosticKind::DuplicateDeclaration);
    assert_eq!(
        d.to_string(),
        "error in `Point`: `Point` is declared more than once (conflicts with declaration `Point`)"
    );

    assert!(index.is_indexed(&path("Point"), &graph.declarations[0]));
    assert!(!index.is_indexed(&path("Point"), &graph.declarations[1]));
    assert_eq!(index.resolve(&QualifiedName::root(), &path("Point")), Resolution::Excluded);
}
