use std::fmt;

use serde::Serialize;
use wrapgen_core::{QualifiedName, TypeRef};

/// Failure kinds, ordered from module-wide to member-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    // Name clashes in the emitted module
    DuplicateDeclaration,
    WrapperNameCollision,
    TupleNameCollision,

    // Signature resolution
    UnresolvedType,
    DependencyFailed,
}

impl DiagnosticKind {
    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::DuplicateDeclaration => "duplicate declaration",
            Self::WrapperNameCollision => "wrapper name collides with an existing name",
            Self::TupleNameCollision => "tuple wrapper name collides with an existing name",
            Self::UnresolvedType => "unresolved type reference",
            Self::DependencyFailed => "depends on a declaration whose wrapper failed",
        }
    }

    /// Template with a `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateDeclaration => "`{}` is declared more than once".to_string(),
            Self::WrapperNameCollision => "wrapper name `{}` is already taken".to_string(),
            Self::TupleNameCollision => "tuple wrapper name `{}` is already taken".to_string(),
            Self::UnresolvedType => "`{}` is not declared".to_string(),
            Self::DependencyFailed => {
                "`{}` has no wrapper because its generation failed".to_string()
            }
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// The other party of a name clash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    /// An original declaration, by qualified path.
    Declaration(QualifiedName),
    /// The wrapper generated for a declaration.
    Wrapper(QualifiedName),
    /// The tuple wrapper generated for a shape.
    TupleShape(TypeRef),
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration(path) => write!(f, "declaration `{path}`"),
            Self::Wrapper(path) => write!(f, "wrapper of `{path}`"),
            Self::TupleShape(shape) => write!(f, "tuple shape `{shape}`"),
        }
    }
}

/// One structured generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// Declaration whose wrapper was aborted.
    pub(crate) declaration: QualifiedName,
    pub(crate) member: Option<String>,
    pub(crate) related: Option<NameSource>,
    pub(crate) message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, declaration: QualifiedName) -> Self {
        Self {
            kind,
            declaration,
            member: None,
            related: None,
            message: kind.fallback_message().to_string(),
        }
    }

    pub(crate) fn with_member(mut self, name: impl Into<String>) -> Self {
        self.member = Some(name.into());
        self
    }

    pub(crate) fn with_related(mut self, source: NameSource) -> Self {
        self.related = Some(source);
        self
    }

    pub(crate) fn with_detail(mut self, detail: impl AsRef<str>) -> Self {
        self.message = self.kind.message(Some(detail.as_ref()));
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn declaration(&self) -> &QualifiedName {
        &self.declaration
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn related(&self) -> Option<&NameSource> {
        self.related.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error in `{}`", self.declaration)?;
        if let Some(member) = &self.member {
            write!(f, " (member `{member}`)")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(related) = &self.related {
            write!(f, " (conflicts with {related})")?;
        }
        Ok(())
    }
}
