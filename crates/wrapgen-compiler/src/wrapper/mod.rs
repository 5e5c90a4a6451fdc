//! Generated declarations.
//!
//! This is the fully resolved model handed to a renderer: every type is
//! either passed through, a wrapper of an original declaration, or a
//! synthesized tuple wrapper.

mod builder;

#[cfg(test)]
mod builder_tests;

use serde::Serialize;
use wrapgen_core::{DeclKind, QualifiedName, TypeRef};

pub use builder::WrapperBuilder;

use crate::filter::Strategy;

/// A type as it appears in a generated signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WrappedType {
    Void,
    Primitive {
        name: String,
    },
    /// Exposed as `wrapper`, stored as `original`.
    Wrapper {
        original: QualifiedName,
        wrapper: QualifiedName,
    },
    /// Exposed as the tuple wrapper `wrapper`, stored as the raw tuple `raw`.
    Tuple {
        wrapper: String,
        raw: TypeRef,
    },
    Optional {
        inner: Box<WrappedType>,
    },
}

impl WrappedType {
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Void | Self::Primitive { .. } => Strategy::Simple,
            Self::Wrapper { .. } => Strategy::WrapperWrapped,
            Self::Tuple { .. } => Strategy::TupleWrapped,
            Self::Optional { inner } => inner.strategy(),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Name of the type on the `@objc` side, e.g. `TupleTestWrapper.NestedTupleTestWrapper?`.
    pub fn exposed(&self) -> String {
        match self {
            Self::Void => "Void".to_string(),
            Self::Primitive { name } => name.clone(),
            Self::Wrapper { wrapper, .. } => wrapper.to_string(),
            Self::Tuple { wrapper, .. } => wrapper.clone(),
            Self::Optional { inner } => format!("{}?", inner.exposed()),
        }
    }
}

/// Forwarding wrapper around one original declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrapperDecl {
    /// Unqualified wrapper name, e.g. `NestedTupleTestWrapper`.
    pub name: String,
    /// Wrapper path through enclosing wrappers.
    pub path: QualifiedName,
    /// Path of the wrapped declaration.
    pub original: QualifiedName,
    pub kind: DeclKind,
    pub initializers: Vec<WrapperInit>,
    pub members: Vec<WrapperMember>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<WrapperDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WrapperInit {
    /// Takes ownership of an existing original instance.
    Adopt,
    /// Constructs a new original instance with the same parameter list.
    Forward {
        params: Vec<WrapperParam>,
        implicit: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrapperParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: WrappedType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrapperMember {
    pub name: String,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub strategy: Strategy,
    #[serde(flatten)]
    pub kind: WrapperMemberKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum WrapperMemberKind {
    Property {
        #[serde(rename = "type")]
        ty: WrappedType,
        settable: bool,
    },
    Method {
        params: Vec<WrapperParam>,
        returns: WrappedType,
    },
}

impl WrapperMember {
    /// Key that orders same-named members: properties first, then methods by labels.
    pub(crate) fn signature_key(&self) -> String {
        match &self.kind {
            WrapperMemberKind::Property { .. } => String::new(),
            WrapperMemberKind::Method { params, .. } => {
                let labels: String = params.iter().map(|p| format!("{}:", p.name)).collect();
                format!("({labels})")
            }
        }
    }
}

/// Wrapper class for one tuple shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TupleWrapperDecl {
    pub name: String,
    /// The raw tuple type held by the wrapper.
    pub wrapped_type: TypeRef,
    pub accessors: Vec<TupleAccessor>,
}

/// Read-write accessor for one tuple element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TupleAccessor {
    /// `_N` for an unlabeled element, otherwise the label.
    pub name: String,
    /// Element selector on the raw tuple: the label, or the position.
    pub element: String,
    #[serde(rename = "type")]
    pub ty: WrappedType,
    pub strategy: Strategy,
}

/// One top-level declaration of the generated module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum GeneratedDecl {
    Wrapper(WrapperDecl),
    Tuple(TupleWrapperDecl),
}

impl GeneratedDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Wrapper(w) => &w.name,
            Self::Tuple(t) => &t.name,
        }
    }

    pub fn as_wrapper(&self) -> Option<&WrapperDecl> {
        match self {
            Self::Wrapper(w) => Some(w),
            Self::Tuple(_) => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleWrapperDecl> {
        match self {
            Self::Tuple(t) => Some(t),
            Self::Wrapper(_) => None,
        }
    }
}

impl WrapperDecl {
    pub fn member(&self, name: &str) -> Option<&WrapperMember> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn nested_wrapper(&self, name: &str) -> Option<&WrapperDecl> {
        self.nested.iter().find(|n| n.name == name)
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    /// Forwarding initializers, without the adoption initializer.
    pub fn forwarding_initializers(&self) -> impl Iterator<Item = &[WrapperParam]> {
        self.initializers.iter().filter_map(|init| match init {
            WrapperInit::Adopt => None,
            WrapperInit::Forward { params, .. } => Some(params.as_slice()),
        })
    }
}

impl TupleWrapperDecl {
    pub fn accessor(&self, name: &str) -> Option<&TupleAccessor> {
        self.accessors.iter().find(|a| a.name == name)
    }

    pub fn accessor_names(&self) -> Vec<&str> {
        self.accessors.iter().map(|a| a.name.as_str()).collect()
    }
}
