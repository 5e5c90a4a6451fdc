//! Signature types after compatibility resolution.

use serde::Serialize;
use wrapgen_core::{PrimitiveKind, QualifiedName, TupleElement, TypeRef};

use crate::tuples::TupleShape;

/// How a value is converted when crossing between wrapper and original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Passed through unchanged.
    Simple,
    /// Wrapped in a tuple wrapper on the way out, unwrapped on the way in.
    TupleWrapped,
    /// Wrapped in another declaration's wrapper on the way out, unwrapped on the way in.
    WrapperWrapped,
}

/// A type known to be representable in the wrapper surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BridgedType {
    Void,
    /// Passthrough primitive, by bare name.
    Primitive(String),
    /// A declaration that gets its own wrapper, by qualified path.
    ///
    /// Protocols are held as existentials (`any P`).
    Wrapper {
        path: QualifiedName,
        existential: bool,
    },
    Tuple(TupleShape),
    /// Optional of an object-bridged type.
    Optional(Box<BridgedType>),
}

impl BridgedType {
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Void | Self::Primitive(_) => Strategy::Simple,
            Self::Wrapper { .. } => Strategy::WrapperWrapped,
            Self::Tuple(_) => Strategy::TupleWrapped,
            Self::Optional(inner) => inner.strategy(),
        }
    }

    /// Whether the exposed form is an object reference and can therefore be optional.
    pub fn is_object_bridged(&self) -> bool {
        match self {
            Self::Primitive(name) => PrimitiveKind::of(name) == Some(PrimitiveKind::Bridged),
            Self::Wrapper { .. } | Self::Tuple(_) => true,
            Self::Void | Self::Optional(_) => false,
        }
    }

    /// The original type this bridged type stands for.
    pub fn to_type_ref(&self) -> TypeRef {
        match self {
            Self::Void => TypeRef::Void,
            Self::Primitive(name) => TypeRef::named(name.clone()),
            Self::Wrapper { path, existential } => {
                let nominal = TypeRef::Nominal(path.clone());
                if *existential {
                    TypeRef::existential(nominal)
                } else {
                    nominal
                }
            }
            Self::Tuple(shape) => TypeRef::Tuple(
                shape
                    .elements()
                    .iter()
                    .map(|e| TupleElement {
                        label: e.label.clone(),
                        ty: e.ty.to_type_ref(),
                    })
                    .collect(),
            ),
            Self::Optional(inner) => TypeRef::optional(inner.to_type_ref()),
        }
    }

    /// Every tuple shape inside this type, outermost first.
    pub fn tuple_shapes(&self) -> Vec<&TupleShape> {
        let mut out = Vec::new();
        self.collect_tuple_shapes(&mut out);
        out
    }

    fn collect_tuple_shapes<'s>(&'s self, out: &mut Vec<&'s TupleShape>) {
        match self {
            Self::Void | Self::Primitive(_) | Self::Wrapper { .. } => {}
            Self::Optional(inner) => inner.collect_tuple_shapes(out),
            Self::Tuple(shape) => {
                out.push(shape);
                for element in shape.elements() {
                    element.ty.collect_tuple_shapes(out);
                }
            }
        }
    }
}
