//! Declarations: named types with members, initializers, and nested types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Kind of a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// Value type (`struct`).
    Struct,
    /// Reference type (`class`).
    Class,
    Protocol,
}

/// A named source-level type definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub initializers: Vec<Initializer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Declaration>,
}

/// A property, method, or operator of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<String>,
    #[serde(flatten)]
    pub kind: MemberKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum MemberKind {
    Property {
        #[serde(rename = "type")]
        ty: TypeRef,
        mutability: Mutability,
    },
    Method {
        #[serde(default)]
        params: Vec<Param>,
        #[serde(default)]
        returns: TypeRef,
    },
    /// Custom operator implementation; `Member::name` holds the operator symbol.
    Operator {
        #[serde(default)]
        params: Vec<Param>,
        #[serde(default)]
        returns: TypeRef,
    },
}

/// Property access and storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutability {
    /// Computed with a getter only.
    ReadOnlyComputed,
    /// Computed with a getter and a setter.
    ReadWriteComputed,
    /// Stored `var`.
    StoredMutable,
    /// Stored `let`.
    StoredConstant,
}

impl Mutability {
    pub fn is_stored(self) -> bool {
        matches!(self, Self::StoredMutable | Self::StoredConstant)
    }

    pub fn is_settable(self) -> bool {
        matches!(self, Self::ReadWriteComputed | Self::StoredMutable)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    #[serde(default)]
    pub params: Vec<Param>,
    /// Synthesized memberwise initializer rather than one written in source.
    #[serde(default)]
    pub implicit: bool,
}

impl Initializer {
    pub fn new(params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            params: params.into_iter().collect(),
            implicit: false,
        }
    }
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            generic_params: Vec::new(),
            members: Vec::new(),
            initializers: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Struct, name)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    pub fn protocol(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Protocol, name)
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializers.push(initializer);
        self
    }

    pub fn with_nested(mut self, nested: Declaration) -> Self {
        self.nested.push(nested);
        self
    }

    pub fn with_generic_param(mut self, param: impl Into<String>) -> Self {
        self.generic_params.push(param.into());
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }

    /// Stored instance properties in declaration order.
    pub fn stored_properties(&self) -> impl Iterator<Item = (&Member, &TypeRef)> {
        self.members.iter().filter_map(|m| match &m.kind {
            MemberKind::Property { ty, mutability } if !m.is_static && mutability.is_stored() => {
                Some((m, ty))
            }
            _ => None,
        })
    }

    /// Initializers callable on this declaration.
    ///
    /// Declared initializers win. A struct that declares none gets the
    /// memberwise initializer over its stored instance properties.
    pub fn effective_initializers(&self) -> Cow<'_, [Initializer]> {
        if !self.initializers.is_empty() || self.kind != DeclKind::Struct {
            return Cow::Borrowed(&self.initializers);
        }

        let params = self
            .stored_properties()
            .map(|(member, ty)| Param::new(member.name.clone(), ty.clone()))
            .collect();
        Cow::Owned(vec![Initializer {
            params,
            implicit: true,
        }])
    }
}

impl Member {
    fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            generic_params: Vec::new(),
            kind,
        }
    }

    pub fn property(name: impl Into<String>, ty: TypeRef, mutability: Mutability) -> Self {
        Self::new(name, MemberKind::Property { ty, mutability })
    }

    pub fn method(
        name: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
        returns: TypeRef,
    ) -> Self {
        Self::new(
            name,
            MemberKind::Method {
                params: params.into_iter().collect(),
                returns,
            },
        )
    }

    pub fn operator(
        symbol: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
        returns: TypeRef,
    ) -> Self {
        Self::new(
            symbol,
            MemberKind::Operator {
                params: params.into_iter().collect(),
                returns,
            },
        )
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_generic_param(mut self, param: impl Into<String>) -> Self {
        self.generic_params.push(param.into());
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }
}
