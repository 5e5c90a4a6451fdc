use wrapgen_core::{QualifiedName, TypeRef};

use super::{Diagnostic, DiagnosticKind, Diagnostics, NameSource};

#[test]
fn kind_fallback_and_custom_messages() {
    let kind = DiagnosticKind::UnresolvedType;
    assert_eq!(kind.message(None), "unresolved type reference");
    assert_eq!(kind.message(Some("Missing")), "`Missing` is not declared");
}

#[test]
fn builder_emits_with_context() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnresolvedType, QualifiedName::from("Shape"))
        .member("area")
        .message("Meters")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics.as_slice()[0];
    assert_eq!(d.kind(), DiagnosticKind::UnresolvedType);
    assert_eq!(d.declaration().to_string(), "Shape");
    assert_eq!(d.member(), Some("area"));
    assert_eq!(
        d.to_string(),
        "error in `Shape` (member `area`): `Meters` is not declared"
    );
}

#[test]
fn related_source_is_rendered() {
    let d = Diagnostic::new(
        DiagnosticKind::TupleNameCollision,
        QualifiedName::from("Pairs"),
    )
    .with_detail("Tuple_IntString_Bool")
    .with_related(NameSource::TupleShape(TypeRef::unlabeled_tuple([
        TypeRef::named("IntString"),
        TypeRef::named("Bool"),
    ])));

    assert_eq!(
        d.to_string(),
        "error in `Pairs`: tuple wrapper name `Tuple_IntString_Bool` is already taken \
         (conflicts with tuple shape `(IntString, Bool)`)"
    );
}

#[test]
fn counts_and_filters() {
    let mut diagnostics = Diagnostics::new();
    assert!(!diagnostics.has_errors());
    diagnostics
        .report(DiagnosticKind::DuplicateDeclaration, QualifiedName::from("A"))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnresolvedType, QualifiedName::from("B"))
        .emit();

    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(diagnostics.of_kind(DiagnosticKind::UnresolvedType).len(), 1);
    assert_eq!(
        diagnostics.render(),
        "error in `A`: duplicate declaration\nerror in `B`: unresolved type reference"
    );
}

#[test]
fn name_source_display() {
    assert_eq!(
        NameSource::Declaration(QualifiedName::from("Foo")).to_string(),
        "declaration `Foo`"
    );
    assert_eq!(
        NameSource::Wrapper(QualifiedName::from("Foo.Bar")).to_string(),
        "wrapper of `Foo.Bar`"
    );
}
