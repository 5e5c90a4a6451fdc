//! Test utilities and declaration fixtures.

use wrapgen_core::{
    Declaration, DeclarationGraph, Initializer, Member, Mutability, Param, TupleElement, TypeRef,
};

use crate::{Config, Diagnostics, GeneratedModule, generate, render};

/// Generate with default settings, panicking on any diagnostic.
pub fn expect_module(declarations: impl IntoIterator<Item = Declaration>) -> GeneratedModule {
    let graph = DeclarationGraph::new(declarations);
    let generation = generate(&graph, &Config::new());
    if generation.diagnostics.has_errors() {
        panic!(
            "expected clean generation, got:\n{}",
            generation.diagnostics.render()
        );
    }
    generation.module
}

/// Generate with default settings, panicking if nothing was reported.
pub fn expect_diagnostics(
    declarations: impl IntoIterator<Item = Declaration>,
) -> (GeneratedModule, Diagnostics) {
    let graph = DeclarationGraph::new(declarations);
    let generation = generate(&graph, &Config::new());
    assert!(
        generation.diagnostics.has_errors(),
        "expected diagnostics, got none"
    );
    (generation.module, generation.diagnostics)
}

/// Generate and render with the preamble used by the Swift fixtures.
pub fn expect_swift(declarations: impl IntoIterator<Item = Declaration>) -> String {
    let module = expect_module(declarations);
    render::render_swift(
        &module,
        &render::Config::new().preamble("// Test preamble text"),
    )
}

pub fn int() -> TypeRef {
    TypeRef::named("Int")
}

pub fn string() -> TypeRef {
    TypeRef::named("String")
}

pub fn bool_() -> TypeRef {
    TypeRef::named("Bool")
}

pub fn double() -> TypeRef {
    TypeRef::named("Double")
}

pub fn tuple(types: impl IntoIterator<Item = TypeRef>) -> TypeRef {
    TypeRef::unlabeled_tuple(types)
}

pub fn labeled(label: &str, ty: TypeRef) -> TupleElement {
    TupleElement::labeled(label, ty)
}

pub fn unlabeled(ty: TypeRef) -> TupleElement {
    TupleElement::unlabeled(ty)
}

pub fn getter(name: &str, returns: TypeRef) -> Member {
    Member::method(name, [], returns)
}

pub fn stored(name: &str, ty: TypeRef) -> Member {
    Member::property(name, ty, Mutability::StoredMutable)
}

/// Class returning one tuple shape per method, with a nested class.
pub fn tuple_test() -> Declaration {
    let nested = Declaration::class("NestedTupleTest").with_member(getter(
        "getNestedTuple",
        tuple([int(), tuple([string(), bool_()])]),
    ));

    Declaration::class("TupleTest")
        .with_member(getter("getCoordinates", tuple([int(), int()])))
        .with_member(getter(
            "getLabeledTuple",
            TypeRef::tuple([labeled("id", int()), labeled("name", string())]),
        ))
        .with_member(getter(
            "getAllLabeledTuple",
            TypeRef::tuple([
                labeled("x", int()),
                labeled("y", int()),
                labeled("z", string()),
            ]),
        ))
        .with_member(getter(
            "getDeeplyNestedTuple",
            tuple([int(), tuple([string(), tuple([bool_(), double()])])]),
        ))
        .with_member(getter(
            "getRepeatedNestedTuple",
            tuple([tuple([int(), string()]), tuple([int(), string()])]),
        ))
        .with_member(getter(
            "getLargeTuple",
            tuple([int(), int(), int(), int(), int()]),
        ))
        .with_member(getter(
            "getMixedTuple",
            TypeRef::tuple([
                unlabeled(int()),
                labeled("value", string()),
                unlabeled(bool_()),
            ]),
        ))
        .with_member(getter("getNothing", tuple([])))
        .with_member(getter("getSingleValue", tuple([int()])))
        .with_nested(nested)
}

/// Struct with an operator next to ordinary members.
pub fn vec2() -> Declaration {
    Declaration::structure("Vec2")
        .with_member(stored("x", double()))
        .with_member(stored("y", double()))
        .with_member(
            Member::operator(
                "+",
                [
                    Param::new("lhs", TypeRef::named("Vec2")),
                    Param::new("rhs", TypeRef::named("Vec2")),
                ],
                TypeRef::named("Vec2"),
            )
            .into_static(),
        )
        .with_initializer(Initializer::new([
            Param::new("x", double()),
            Param::new("y", double()),
        ]))
}

/// Structs exercising explicit, implicit, static, and computed members.
pub fn initializer_structs() -> Vec<Declaration> {
    vec![
        Declaration::structure("MyCustomStruct")
            .with_member(stored("data", int()))
            .with_initializer(Initializer::new([Param::new("value", int())])),
        Declaration::structure("MyStaticStruct")
            .with_member(stored("defaultName", string()).into_static())
            .with_member(stored("name", string())),
        Declaration::structure("MyComputedStruct")
            .with_member(stored("lastName", string()))
            .with_member(stored("firstName", string()))
            .with_member(Member::property(
                "fullName",
                string(),
                Mutability::ReadOnlyComputed,
            )),
        Declaration::structure("MyConfig")
            .with_member(stored("count", int()))
            .with_member(stored("title", string()))
            .with_member(stored("enabled", bool_())),
        Declaration::structure("MyPerson")
            .with_member(stored("age", int()))
            .with_member(stored("name", string())),
    ]
}
