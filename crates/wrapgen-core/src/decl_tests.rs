use crate::{DeclKind, Declaration, Initializer, Member, Mutability, Param, TypeRef};

fn person() -> Declaration {
    Declaration::structure("MyPerson")
        .with_member(Member::property(
            "age",
            TypeRef::named("Int"),
            Mutability::StoredMutable,
        ))
        .with_member(Member::property(
            "name",
            TypeRef::named("String"),
            Mutability::StoredConstant,
        ))
        .with_member(Member::property(
            "summary",
            TypeRef::named("String"),
            Mutability::ReadOnlyComputed,
        ))
        .with_member(
            Member::property("count", TypeRef::named("Int"), Mutability::StoredMutable)
                .into_static(),
        )
}

#[test]
fn mutability_flags() {
    assert!(Mutability::StoredMutable.is_stored());
    assert!(Mutability::StoredMutable.is_settable());
    assert!(Mutability::StoredConstant.is_stored());
    assert!(!Mutability::StoredConstant.is_settable());
    assert!(!Mutability::ReadWriteComputed.is_stored());
    assert!(Mutability::ReadWriteComputed.is_settable());
    assert!(!Mutability::ReadOnlyComputed.is_settable());
}

#[test]
fn stored_properties_skip_computed_and_static() {
    let decl = person();
    let names: Vec<_> = decl.stored_properties().map(|(m, _)| m.name.as_str()).collect();
    assert_eq!(names, ["age", "name"]);
}

#[test]
fn struct_without_initializers_gets_memberwise() {
    let decl = person();
    let inits = decl.effective_initializers();
    assert_eq!(inits.len(), 1);
    assert!(inits[0].implicit);
    assert_eq!(
        inits[0].params,
        vec![
            Param::new("age", TypeRef::named("Int")),
            Param::new("name", TypeRef::named("String")),
        ]
    );
}

#[test]
fn explicit_initializer_suppresses_memberwise() {
    let decl = person().with_initializer(Initializer::new([Param::new(
        "age",
        TypeRef::named("Int"),
    )]));
    let inits = decl.effective_initializers();
    assert_eq!(inits.len(), 1);
    assert!(!inits[0].implicit);
}

#[test]
fn classes_get_no_memberwise() {
    let decl = Declaration::class("Counter").with_member(Member::property(
        "value",
        TypeRef::named("Int"),
        Mutability::StoredMutable,
    ));
    assert_eq!(decl.kind, DeclKind::Class);
    assert!(decl.effective_initializers().is_empty());
}

#[test]
fn empty_struct_gets_empty_memberwise() {
    let decl = Declaration::structure("Empty");
    let inits = decl.effective_initializers();
    assert_eq!(inits.len(), 1);
    assert!(inits[0].params.is_empty());
}

#[test]
fn generic_markers() {
    let decl = Declaration::structure("Box").with_generic_param("T");
    assert!(decl.is_generic());
    let method = Member::method("map", [], TypeRef::Void).with_generic_param("U");
    assert!(method.is_generic());
    assert!(!Member::method("run", [], TypeRef::Void).is_generic());
}
