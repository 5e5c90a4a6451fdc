//! Ordering and emission of the generated module.
//!
//! The canonical order depends only on names, never on the order in which
//! declarations were presented:
//! - top-level declarations by name (byte order)
//! - inside a wrapper: adoption initializer, forwarding initializers in
//!   declared order, members by name, nested wrappers by name
//! - inside a tuple wrapper: accessors by name


use serde::Serialize;

use crate::wrapper::{GeneratedDecl, TupleWrapperDecl, WrapperDecl, WrapperInit, WrapperMember};

/// The complete, canonically ordered output of one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedModule {
    declarations: Vec<GeneratedDecl>,
}

impl GeneratedModule {
    /// Collect and order wrappers and tuple wrappers.
    pub fn new(wrappers: Vec<WrapperDecl>, tuples: Vec<TupleWrapperDecl>) -> Self {
        let mut declarations: Vec<GeneratedDecl> = wrappers
            .into_iter()
            .map(|mut w| {
                order_wrapper(&mut w);
                GeneratedDecl::Wrapper(w)
            })
            .chain(tuples.into_iter().map(|mut t| {
                t.accessors.sort_by(|a, b| a.name.cmp(&b.name));
                GeneratedDecl::Tuple(t)
            }))
            .collect();
        declarations.sort_by(|a, b| a.name().cmp(b.name()));
        Self { declarations }
    }

    pub fn declarations(&self) -> &[GeneratedDecl] {
        &self.declarations
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedDecl> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Top-level names in emission order.
    pub fn names(&self) -> Vec<&str> {
        self.declarations.iter().map(GeneratedDecl::name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedDecl> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    pub fn wrapper(&self, name: &str) -> Option<&WrapperDecl> {
        self.get(name).and_then(GeneratedDecl::as_wrapper)
    }

    pub fn tuple(&self, name: &str) -> Option<&TupleWrapperDecl> {
        self.get(name).and_then(GeneratedDecl::as_tuple)
    }

    pub fn wrappers(&self) -> impl Iterator<Item = &WrapperDecl> {
        self.declarations.iter().filter_map(GeneratedDecl::as_wrapper)
    }

    pub fn tuples(&self) -> impl Iterator<Item = &TupleWrapperDecl> {
        self.declarations.iter().filter_map(GeneratedDecl::as_tuple)
    }

    /// Pretty-printed JSON for renderers outside this crate.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a GeneratedModule {
    type Item = &'a GeneratedDecl;
    type IntoIter = std::slice::Iter<'a, GeneratedDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

fn order_wrapper(wrapper: &mut WrapperDecl) {
    // Stable: forwarding initializers keep their declared order.
    wrapper
        .initializers
        .sort_by_key(|init| !matches!(init, WrapperInit::Adopt));
    wrapper.members.sort_by(compare_members);
    wrapper.nested.sort_by(|a, b| a.name.cmp(&b.name));
    for nested in &mut wrapper.nested {
        order_wrapper(nested);
    }
}

fn compare_members(a: &WrapperMember, b: &WrapperMember) -> std::cmp::Ordering {
    a.name
        .cmp(&b.name)
        .then(a.is_static.cmp(&b.is_static))
        .then_with(|| a.signature_key().cmp(&b.signature_key()))
}
