//! Declaration index and nominal type lookup.
//!
//! Lookup follows lexical nesting: a name used inside `Outer.Inner` is tried
//! as `Outer.Inner.Name`, then `Outer.Name`, then `Name`.

use indexmap::IndexMap;
use wrapgen_core::{Declaration, DeclarationGraph, QualifiedName};

use crate::diagnostics::{DiagnosticKind, Diagnostics, NameSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Wrappable,
    /// Generic, or nested inside a generic declaration.
    Excluded,
    /// Wrapper generation for this declaration (or an ancestor) was aborted.
    Failed,
}

#[derive(Clone, Debug)]
struct Entry<'a> {
    decl: &'a Declaration,
    status: Status,
}

/// Outcome of looking up a nominal type.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    Found(QualifiedName, &'a Declaration),
    Excluded,
    Failed(QualifiedName),
    Missing,
}

/// Every declaration in a graph, keyed by qualified path.
#[derive(Clone, Debug, Default)]
pub struct DeclIndex<'a> {
    entries: IndexMap<QualifiedName, Entry<'a>>,
}

impl<'a> DeclIndex<'a> {
    /// Index `graph`, reporting declarations whose path is already taken.
    ///
    /// The first declaration at a path wins; later ones and their nested
    /// declarations are not indexed.
    pub fn build(graph: &'a DeclarationGraph, diagnostics: &mut Diagnostics) -> Self {
        let mut index = Self::default();
        for decl in &graph.declarations {
            index.insert(&QualifiedName::root(), decl, false, diagnostics);
        }
        index
    }

    fn insert(
        &mut self,
        scope: &QualifiedName,
        decl: &'a Declaration,
        inside_generic: bool,
        diagnostics: &mut Diagnostics,
    ) {
        let path = scope.child(decl.name.clone());
        if self.entries.contains_key(&path) {
            diagnostics
                .report(DiagnosticKind::DuplicateDeclaration, path.clone())
                .message(path.to_string())
                .related_to(NameSource::Declaration(path))
                .emit();
            return;
        }

        let excluded = inside_generic || decl.is_generic();
        let status = if excluded {
            Status::Excluded
        } else {
            Status::Wrappable
        };
        self.entries.insert(path.clone(), Entry { decl, status });

        for nested in &decl.nested {
            self.insert(&path, nested, excluded, diagnostics);
        }
    }

    /// Look up `name` as written inside the declaration at `scope`.
    pub fn resolve(&self, scope: &QualifiedName, name: &QualifiedName) -> Resolution<'a> {
        for depth in (0..=scope.len()).rev() {
            let candidate = scope.prefix(depth).join(name);
            let Some(entry) = self.entries.get(&candidate) else {
                continue;
            };
            return match entry.status {
                Status::Wrappable => Resolution::Found(candidate, entry.decl),
                Status::Excluded => Resolution::Excluded,
                Status::Failed => Resolution::Failed(candidate),
            };
        }
        Resolution::Missing
    }

    /// The declaration indexed at exactly `path`.
    pub fn get(&self, path: &QualifiedName) -> Option<&'a Declaration> {
        self.entries.get(path).map(|entry| entry.decl)
    }

    /// Whether `decl` is the declaration indexed at `path` (not a shadowed duplicate).
    pub fn is_indexed(&self, path: &QualifiedName, decl: &Declaration) -> bool {
        self.get(path).is_some_and(|indexed| std::ptr::eq(indexed, decl))
    }

    pub fn is_wrappable(&self, path: &QualifiedName) -> bool {
        self.entries
            .get(path)
            .is_some_and(|entry| entry.status == Status::Wrappable)
    }

    /// Mark `path` and everything nested in it as failed.
    pub fn mark_failed(&mut self, path: &QualifiedName) {
        for (candidate, entry) in self.entries.iter_mut() {
            if candidate.segments().starts_with(path.segments()) {
                entry.status = Status::Failed;
            }
        }
    }

    /// Wrappable top-level declarations in source order.
    pub fn top_level(&self) -> impl Iterator<Item = (&QualifiedName, &'a Declaration)> + '_ {
        self.entries
            .iter()
            .filter(|(path, entry)| path.len() == 1 && entry.status == Status::Wrappable)
            .map(|(path, entry)| (path, entry.decl))
    }

    /// Paths of every indexed top-level declaration, whatever its status.
    pub fn top_level_paths(&self) -> impl Iterator<Item = &QualifiedName> + '_ {
        self.entries.keys().filter(|path| path.len() == 1)
    }
}
