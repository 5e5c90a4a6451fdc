//! Canonical names for tuple shapes.
//!
//! A shape `(Int, value: String, (Bool, Double))` is named
//! `Tuple_Int_value_String_BoolDouble`: one `_`-separated segment per element,
//! a label adds its own segment before the type, and a nested tuple collapses
//! into a single flattened token with labels dropped.

use crate::filter::BridgedType;

use super::TupleShape;

/// Top-level name of `shape` under `prefix`.
pub(crate) fn canonical_name(prefix: &str, shape: &TupleShape) -> String {
    let mut name = prefix.to_string();
    for element in shape.elements() {
        name.push('_');
        if let Some(label) = &element.label {
            name.push_str(label);
            name.push('_');
        }
        name.push_str(&type_token(&element.ty));
    }
    name
}

/// Separator-free fragment for `ty` inside an enclosing tuple name.
pub(crate) fn type_token(ty: &BridgedType) -> String {
    match ty {
        BridgedType::Void => "Void".to_string(),
        BridgedType::Primitive(name) => name.clone(),
        BridgedType::Wrapper { path, .. } => path.concatenated(),
        BridgedType::Tuple(shape) => flattened_token(shape),
        BridgedType::Optional(inner) => format!("Optional{}", type_token(inner)),
    }
}

/// `(String, (Bool, Double))` → `StringBoolDouble`.
fn flattened_token(shape: &TupleShape) -> String {
    shape.elements().iter().map(|e| type_token(&e.ty)).collect()
}
