//! Structured generation failures.
//!
//! Every failure names the declaration whose wrapper was aborted, so a caller
//! can report all of them from one run instead of stopping at the first.

mod message;

#[cfg(test)]
mod tests;

use serde::Serialize;
use wrapgen_core::QualifiedName;

pub use message::{Diagnostic, DiagnosticKind, NameSource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    diagnostic: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Start a diagnostic against `declaration` with the kind's default message.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        declaration: QualifiedName,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            diagnostic: Diagnostic::new(kind, declaration),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.0.extend(other);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.0.len()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.0.iter().filter(|d| d.kind == kind).collect()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    /// One line per diagnostic.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DiagnosticBuilder<'_> {
    /// Provide detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, detail: impl AsRef<str>) -> Self {
        self.diagnostic = self.diagnostic.with_detail(detail);
        self
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.with_member(name);
        self
    }

    pub fn related_to(mut self, source: NameSource) -> Self {
        self.diagnostic = self.diagnostic.with_related(source);
        self
    }

    pub fn emit(self) {
        self.diagnostics.0.push(self.diagnostic);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
