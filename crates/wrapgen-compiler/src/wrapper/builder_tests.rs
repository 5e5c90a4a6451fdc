use wrapgen_core::{
    DeclKind, Declaration, DeclarationGraph, Initializer, Member, Mutability, Param,
    QualifiedName, TypeRef,
};

use crate::Config;
use crate::diagnostics::Diagnostics;
use crate::filter::{Filter, Strategy};
use crate::namespace::Namespace;
use crate::resolve::DeclIndex;
use crate::test_utils::{getter, int, labeled, stored, string, tuple, tuple_test, unlabeled};
use crate::tuples::TupleTable;

use super::{
    TupleWrapperDecl, WrappedType, WrapperBuilder, WrapperDecl, WrapperInit, WrapperMemberKind,
    WrapperParam,
};

fn build_first(
    graph: &DeclarationGraph,
    config: &Config,
) -> (WrapperDecl, Vec<TupleWrapperDecl>) {
    let mut diagnostics = Diagnostics::new();
    let index = DeclIndex::build(graph, &mut diagnostics);
    let decl = &graph.declarations[0];
    let filtered = Filter::new(&index)
        .filter(&QualifiedName::single(decl.name.clone()), decl, &mut Vec::new())
        .unwrap();

    let mut tuples = TupleTable::new(config.tuple_prefix.clone());
    tuples
        .register_all(filtered.tuple_shapes(), &Namespace::new())
        .unwrap();
    let builder = WrapperBuilder::new(config, &tuples);
    (builder.build(&filtered), builder.build_tuples())
}

fn wrapper_type(original: &str, wrapper: &str) -> WrappedType {
    WrappedType::Wrapper {
        original: QualifiedName::from(original),
        wrapper: QualifiedName::from(wrapper),
    }
}

#[test]
fn empty_declaration_gets_adoption_only() {
    let graph = DeclarationGraph::new([Declaration::class("Token")]);
    let (wrapper, tuples) = build_first(&graph, &Config::new());

    assert_eq!(wrapper.name, "TokenWrapper");
    assert_eq!(wrapper.kind, DeclKind::Class);
    assert_eq!(wrapper.initializers, [WrapperInit::Adopt]);
    assert!(wrapper.members.is_empty());
    assert!(tuples.is_empty());
}

#[test]
fn forwarding_initializers_follow_adoption() {
    let graph = DeclarationGraph::new([Declaration::structure("Range")
        .with_member(stored("lower", int()))
        .with_initializer(Initializer::new([
            Param::new("from", int()),
            Param::new("to", int()),
        ]))
        .with_initializer(Initializer::new([Param::new("single", int())]))]);
    let (wrapper, _) = build_first(&graph, &Config::new());

    let lists: Vec<Vec<&str>> = wrapper
        .forwarding_initializers()
        .map(|params| params.iter().map(|p| p.name.as_str()).collect())
        .collect();
    assert_eq!(wrapper.initializers[0], WrapperInit::Adopt);
    assert_eq!(lists, [vec!["from", "to"], vec!["single"]]);
}

#[test]
fn nested_wrappers_are_qualified_through_parents() {
    let (wrapper, _) = build_first(&DeclarationGraph::new([tuple_test()]), &Config::new());

    let nested = wrapper.nested_wrapper("NestedTupleTestWrapper").unwrap();
    assert_eq!(nested.path.to_string(), "TupleTestWrapper.NestedTupleTestWrapper");
    assert_eq!(nested.original.to_string(), "TupleTest.NestedTupleTest");
    assert_eq!(nested.initializers, [WrapperInit::Adopt]);
}

#[test]
fn wrapper_typed_signatures_name_both_sides() {
    let graph = DeclarationGraph::new([
        Declaration::class("Library")
            .with_member(Member::method(
                "lend",
                [Param::new("book", TypeRef::named("Book"))],
                TypeRef::optional(TypeRef::qualified(["Book", "Receipt"])),
            ))
            .with_member(
                Member::property("catalog", TypeRef::named("Book"), Mutability::ReadOnlyComputed)
                    .into_static(),
            ),
        Declaration::class("Book").with_nested(Declaration::class("Receipt")),
    ]);
    let (wrapper, _) = build_first(&graph, &Config::new());

    let lend = wrapper.member("lend").unwrap();
    assert_eq!(lend.strategy, Strategy::WrapperWrapped);
    assert_eq!(
        lend.kind,
        WrapperMemberKind::Method {
            params: vec![WrapperParam {
                name: "book".to_string(),
                ty: wrapper_type("Book", "BookWrapper"),
            }],
            returns: WrappedType::Optional {
                inner: Box::new(wrapper_type("Book.Receipt", "BookWrapper.ReceiptWrapper")),
            },
        }
    );

    let catalog = wrapper.member("catalog").unwrap();
    assert!(catalog.is_static);
    assert_eq!(
        catalog.kind,
        WrapperMemberKind::Property {
            ty: wrapper_type("Book", "BookWrapper"),
            settable: false,
        }
    );
}

#[test]
fn tuple_wrappers_expose_positional_and_labeled_accessors() {
    let graph = DeclarationGraph::new([Declaration::class("Mixer").with_member(getter(
        "mix",
        TypeRef::tuple([
            unlabeled(int()),
            labeled("value", string()),
            unlabeled(tuple([int(), string()])),
        ]),
    ))]);
    let (wrapper, tuples) = build_first(&graph, &Config::new());

    let mix = wrapper.member("mix").unwrap();
    assert_eq!(mix.strategy, Strategy::TupleWrapped);

    let outer = tuples
        .iter()
        .find(|t| t.name == "Tuple_Int_value_String_IntString")
        .unwrap();
    assert_eq!(outer.wrapped_type.to_string(), "(Int, value: String, (Int, String))");
    assert_eq!(outer.accessor_names(), ["_0", "value", "_2"]);

    let selectors: Vec<&str> = outer.accessors.iter().map(|a| a.element.as_str()).collect();
    assert_eq!(selectors, ["0", "value", "2"]);

    let nested = outer.accessor("_2").unwrap();
    assert_eq!(nested.strategy, Strategy::TupleWrapped);
    assert_eq!(
        nested.ty,
        WrappedType::Tuple {
            wrapper: "Tuple_Int_String".to_string(),
            raw: tuple([int(), string()]),
        }
    );
    assert!(tuples.iter().any(|t| t.name == "Tuple_Int_String"));
}

#[test]
fn configured_names() {
    let config = Config::new().wrapper_suffix("Objc").tuple_prefix("Pair");
    let graph = DeclarationGraph::new([
        Declaration::class("Grid").with_member(getter("size", tuple([int(), int()]))),
    ]);
    let (wrapper, tuples) = build_first(&graph, &config);

    assert_eq!(wrapper.name, "GridObjc");
    assert_eq!(tuples.len(), 1);
    assert_eq!(tuples[0].name, "Pair_Int_Int");
}
