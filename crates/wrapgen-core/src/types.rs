//! Type references used in member and initializer signatures.
//!
//! A `TypeRef` is a value: two references are the same type exactly when they
//! compare equal. Tuple identity therefore includes element order and labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QualifiedName;

/// Reference to a type from a signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Named type, possibly qualified by enclosing declarations.
    Nominal(QualifiedName),
    /// Structural tuple. Order and labels are significant.
    Tuple(Vec<TupleElement>),
    Optional(Box<TypeRef>),
    /// `any P` for a protocol `P`.
    Existential(Box<TypeRef>),
    /// Closure type. Never representable in wrappers.
    Function {
        params: Vec<TypeRef>,
        returns: Box<TypeRef>,
    },
    #[default]
    Void,
}

/// One `(label?, type)` slot of a tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// How a primitive crosses the interop boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Passed by value; has no nullable form.
    Scalar,
    /// Bridged to an object type; may be optional.
    Bridged,
}

impl PrimitiveKind {
    /// Classify a bare type name, `None` if it is not a passthrough primitive.
    pub fn of(name: &str) -> Option<Self> {
        match name {
            "Int" | "Int8" | "Int16" | "Int32" | "Int64" | "UInt" | "UInt8" | "UInt16"
            | "UInt32" | "UInt64" | "Float" | "Double" | "Bool" => Some(Self::Scalar),
            "String" => Some(Self::Bridged),
            _ => None,
        }
    }
}

impl TypeRef {
    /// Unqualified nominal type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Nominal(QualifiedName::single(name))
    }

    /// Nominal type qualified by its enclosing declarations.
    pub fn qualified<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Nominal(QualifiedName::new(segments))
    }

    pub fn tuple(elements: impl IntoIterator<Item = TupleElement>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Tuple of unlabeled elements.
    pub fn unlabeled_tuple(types: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Tuple(types.into_iter().map(TupleElement::unlabeled).collect())
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn existential(inner: TypeRef) -> Self {
        Self::Existential(Box::new(inner))
    }

    pub fn function(params: impl IntoIterator<Item = TypeRef>, returns: TypeRef) -> Self {
        Self::Function {
            params: params.into_iter().collect(),
            returns: Box::new(returns),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Primitive classification of an unqualified nominal type.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Nominal(name) if name.len() == 1 => PrimitiveKind::of(name.last()),
            _ => None,
        }
    }

    /// Collapse spellings that denote the same type.
    ///
    /// `()` and `Void` become `Void`; `(T)` becomes `T`.
    pub fn normalized(&self) -> TypeRef {
        match self {
            Self::Nominal(name) if name.len() == 1 && name.last() == "Void" => Self::Void,
            Self::Nominal(_) | Self::Void => self.clone(),
            Self::Tuple(elements) => match elements.as_slice() {
                [] => Self::Void,
                [only] if only.label.is_none() => only.ty.normalized(),
                _ => Self::Tuple(
                    elements
                        .iter()
                        .map(|e| TupleElement {
                            label: e.label.clone(),
                            ty: e.ty.normalized(),
                        })
                        .collect(),
                ),
            },
            Self::Optional(inner) => Self::optional(inner.normalized()),
            Self::Existential(inner) => Self::existential(inner.normalized()),
            Self::Function { params, returns } => Self::Function {
                params: params.iter().map(TypeRef::normalized).collect(),
                returns: Box::new(returns.normalized()),
            },
        }
    }
}

impl TupleElement {
    pub fn unlabeled(ty: TypeRef) -> Self {
        Self { label: None, ty }
    }

    pub fn labeled(label: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            label: Some(label.into()),
            ty,
        }
    }
}

/// Source spelling, e.g. `(Int, value: String)?`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal(name) => write!(f, "{name}"),
            Self::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(label) = &element.label {
                        write!(f, "{label}: ")?;
                    }
                    write!(f, "{}", element.ty)?;
                }
                f.write_str(")")
            }
            Self::Optional(inner) => match inner.as_ref() {
                Self::Function { .. } | Self::Existential(_) => write!(f, "({inner})?"),
                _ => write!(f, "{inner}?"),
            },
            Self::Existential(inner) => write!(f, "any {inner}"),
            Self::Function { params, returns } => {
                f.write_str("(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {returns}")
            }
            Self::Void => f.write_str("Void"),
        }
    }
}
