//! Qualified declaration paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dot-separated path to a declaration, outermost segment first.
///
/// `Outer.Inner` is stored as `["Outer", "Inner"]`. The empty path denotes
/// module scope and is only used as a lookup starting point.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct QualifiedName(Vec<String>);

impl QualifiedName {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Module scope.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Innermost segment, or `""` for module scope.
    pub fn last(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }

    /// Path of the enclosing declaration, `None` at module scope.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Append every segment of `other` to this path.
    pub fn join(&self, other: &QualifiedName) -> Self {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        Self(segments)
    }

    /// Prefix of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Segments concatenated with no separator (`Outer.Inner` → `OuterInner`).
    pub fn concatenated(&self) -> String {
        self.0.concat()
    }

    /// Apply `f` to every segment.
    pub fn map_segments(&self, f: impl Fn(&str) -> String) -> Self {
        Self(self.0.iter().map(|s| f(s)).collect())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for QualifiedName {
    fn from(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self(path.split('.').map(str::to_owned).collect())
    }
}

impl From<String> for QualifiedName {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.to_string()
    }
}
