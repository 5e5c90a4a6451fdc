//! Tuple synthesizer.
//!
//! `@objc` has no structural tuples, so every distinct tuple shape reachable
//! from a surviving signature gets its own wrapper class. Shapes nested in
//! other shapes are registered as independent entries. The table is scoped
//! to one generation pass.

mod naming;


use std::collections::HashMap;

use indexmap::IndexMap;
use wrapgen_core::{TupleElement, TypeRef};

use crate::diagnostics::NameSource;
use crate::filter::BridgedType;
use crate::namespace::Namespace;

use naming::canonical_name;

/// Ordered `(label?, type)` elements of a bridged tuple.
///
/// Two shapes are the same tuple type exactly when they compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleShape(Vec<ShapeElement>);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeElement {
    pub label: Option<String>,
    pub ty: BridgedType,
}

impl TupleShape {
    pub fn new(elements: Vec<ShapeElement>) -> Self {
        Self(elements)
    }

    pub fn elements(&self) -> &[ShapeElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw tuple type this shape stands for.
    pub fn to_type_ref(&self) -> TypeRef {
        TypeRef::Tuple(
            self.0
                .iter()
                .map(|e| TupleElement {
                    label: e.label.clone(),
                    ty: e.ty.to_type_ref(),
                })
                .collect(),
        )
    }

    /// Accessor for the element at `position`: its label, or `_N` by absolute position.
    pub fn accessor_name(&self, position: usize) -> String {
        match self.0.get(position).and_then(|e| e.label.as_ref()) {
            Some(label) => label.clone(),
            None => format!("_{position}"),
        }
    }
}

/// A canonical name that is already taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleCollision {
    pub name: String,
    pub owner: NameSource,
}

/// Deduplicated tuple shapes and their canonical names.
#[derive(Clone, Debug)]
pub struct TupleTable {
    prefix: String,
    shapes: IndexMap<TupleShape, String>,
    names: HashMap<String, TupleShape>,
}

impl TupleTable {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            shapes: IndexMap::new(),
            names: HashMap::new(),
        }
    }

    pub fn canonical_name(&self, shape: &TupleShape) -> String {
        canonical_name(&self.prefix, shape)
    }

    pub fn name_of(&self, shape: &TupleShape) -> Option<&str> {
        self.shapes.get(shape).map(String::as_str)
    }

    pub fn contains(&self, shape: &TupleShape) -> bool {
        self.shapes.contains_key(shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Registered shapes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&TupleShape, &str)> {
        self.shapes.iter().map(|(shape, name)| (shape, name.as_str()))
    }

    /// Register every shape or none of them.
    ///
    /// Known shapes are skipped. A new shape whose name is owned by something
    /// in `namespace`, by another registered shape, or by another shape in the
    /// same batch rejects the whole batch. Returns the number of new shapes.
    pub fn register_all<'s>(
        &mut self,
        shapes: impl IntoIterator<Item = &'s TupleShape>,
        namespace: &Namespace,
    ) -> Result<usize, TupleCollision> {
        let mut staged: IndexMap<String, &TupleShape> = IndexMap::new();

        for shape in shapes {
            if self.shapes.contains_key(shape) {
                continue;
            }
            let name = self.canonical_name(shape);
            if let Some(existing) = staged.get(&name) {
                if *existing == shape {
                    continue;
                }
                return Err(Self::collision(name, existing));
            }
            if let Some(owner) = namespace.owner(&name) {
                return Err(TupleCollision {
                    name,
                    owner: owner.clone(),
                });
            }
            if let Some(existing) = self.names.get(&name) {
                return Err(Self::collision(name, existing));
            }
            staged.insert(name, shape);
        }

        let added = staged.len();
        for (name, shape) in staged {
            tracing::debug!(name = %name, shape = %shape.to_type_ref(), "synthesized tuple wrapper");
            self.names.insert(name.clone(), shape.clone());
            self.shapes.insert(shape.clone(), name);
        }
        Ok(added)
    }

    fn collision(name: String, owner: &TupleShape) -> TupleCollision {
        TupleCollision {
            name,
            owner: NameSource::TupleShape(owner.to_type_ref()),
        }
    }
}
