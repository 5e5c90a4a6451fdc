//! Names visible at the top level of the generated module.

use std::collections::HashMap;

use crate::diagnostics::NameSource;

/// Owner of every taken top-level name.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    owners: HashMap<String, NameSource>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `name` for `source`, returning the current owner if it is already taken.
    pub fn claim(&mut self, name: impl Into<String>, source: NameSource) -> Result<(), NameSource> {
        let name = name.into();
        if let Some(owner) = self.owners.get(&name) {
            return Err(owner.clone());
        }
        self.owners.insert(name, source);
        Ok(())
    }

    /// Record `name` as taken by `source` unless it already is.
    pub fn reserve(&mut self, name: impl Into<String>, source: NameSource) {
        self.owners.entry(name.into()).or_insert(source);
    }

    pub fn owner(&self, name: &str) -> Option<&NameSource> {
        self.owners.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
