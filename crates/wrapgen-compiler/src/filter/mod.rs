//! Compatibility filter.
//!
//! Decides which members and initializers of a declaration can cross the
//! `@objc` boundary, and how. Constructs with no counterpart there
//! (operators, generics, closures, optional scalars) are dropped without a
//! diagnostic. A nominal reference that names nothing is an error.

mod bridged;


use wrapgen_core::{
    DeclKind, Declaration, Initializer, Member, MemberKind, Param, QualifiedName, TypeRef,
};

pub use bridged::{BridgedType, Strategy};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::resolve::{DeclIndex, Resolution};
use crate::tuples::{ShapeElement, TupleShape};

/// A declaration reduced to its wrappable surface.
#[derive(Clone, Debug)]
pub struct FilteredDecl<'a> {
    pub path: QualifiedName,
    pub decl: &'a Declaration,
    pub initializers: Vec<FilteredInit>,
    pub members: Vec<FilteredMember<'a>>,
    pub nested: Vec<FilteredDecl<'a>>,
}

#[derive(Clone, Debug)]
pub struct FilteredMember<'a> {
    pub member: &'a Member,
    pub signature: Signature,
    pub strategy: Strategy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signature {
    Property { ty: BridgedType, settable: bool },
    Method { params: Vec<FilteredParam>, returns: BridgedType },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredParam {
    pub name: String,
    pub ty: BridgedType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredInit {
    pub params: Vec<FilteredParam>,
    pub implicit: bool,
}

/// Why a type could not be bridged.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BridgeError {
    Missing(QualifiedName),
    Failed(QualifiedName),
}

impl BridgeError {
    fn into_diagnostic(self, declaration: &QualifiedName, member: &str) -> Diagnostic {
        match self {
            Self::Missing(name) => {
                Diagnostic::new(DiagnosticKind::UnresolvedType, declaration.clone())
                    .with_member(member)
                    .with_detail(name.to_string())
            }
            Self::Failed(path) => {
                Diagnostic::new(DiagnosticKind::DependencyFailed, declaration.clone())
                    .with_member(member)
                    .with_detail(path.to_string())
            }
        }
    }
}

/// `Ok(None)` means the type is silently unrepresentable.
type Bridged<T> = Result<Option<T>, BridgeError>;

impl Signature {
    /// Return type decides; a simple return defers to the first non-simple parameter.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Property { ty, .. } => ty.strategy(),
            Self::Method { params, returns } => match returns.strategy() {
                Strategy::Simple => params
                    .iter()
                    .map(|p| p.ty.strategy())
                    .find(|s| *s != Strategy::Simple)
                    .unwrap_or(Strategy::Simple),
                other => other,
            },
        }
    }

    pub fn types(&self) -> Vec<&BridgedType> {
        match self {
            Self::Property { ty, .. } => vec![ty],
            Self::Method { params, returns } => params
                .iter()
                .map(|p| &p.ty)
                .chain(std::iter::once(returns))
                .collect(),
        }
    }
}

impl FilteredDecl<'_> {
    /// Every signature type of this declaration and its nested declarations.
    pub fn signature_types(&self) -> Vec<&BridgedType> {
        let mut out: Vec<&BridgedType> = Vec::new();
        for init in &self.initializers {
            out.extend(init.params.iter().map(|p| &p.ty));
        }
        for member in &self.members {
            out.extend(member.signature.types());
        }
        for nested in &self.nested {
            out.extend(nested.signature_types());
        }
        out
    }

    /// Tuple shapes reachable from any signature, outermost first, with repeats.
    pub fn tuple_shapes(&self) -> Vec<&TupleShape> {
        self.signature_types()
            .into_iter()
            .flat_map(BridgedType::tuple_shapes)
            .collect()
    }
}

/// Classifies declarations against the current state of a [`DeclIndex`].
pub struct Filter<'i, 'a> {
    index: &'i DeclIndex<'a>,
}

impl<'i, 'a> Filter<'i, 'a> {
    pub fn new(index: &'i DeclIndex<'a>) -> Self {
        Self { index }
    }

    /// Filter the declaration at `path` and everything nested in it.
    ///
    /// An error in one of this declaration's own signatures aborts it. A
    /// nested declaration that fails is left out and its diagnostic is pushed
    /// to `nested_failures`; the enclosing declaration survives.
    pub fn filter(
        &self,
        path: &QualifiedName,
        decl: &'a Declaration,
        nested_failures: &mut Vec<Diagnostic>,
    ) -> Result<FilteredDecl<'a>, Diagnostic> {
        let mut members = Vec::new();
        for member in &decl.members {
            if let Some(filtered) = self.filter_member(path, decl, member)? {
                members.push(filtered);
            }
        }

        let initializers = self.filter_initializers(path, decl)?;

        let mut nested = Vec::new();
        for child in &decl.nested {
            let child_path = path.child(child.name.clone());
            // Shadowed duplicates, generic and failed declarations get no wrapper.
            if !self.index.is_indexed(&child_path, child)
                || !self.index.is_wrappable(&child_path)
            {
                continue;
            }
            match self.filter(&child_path, child, nested_failures) {
                Ok(filtered) => nested.push(filtered),
                Err(diagnostic) => nested_failures.push(diagnostic),
            }
        }

        Ok(FilteredDecl {
            path: path.clone(),
            decl,
            initializers,
            members,
            nested,
        })
    }

    fn filter_initializers(
        &self,
        path: &QualifiedName,
        decl: &Declaration,
    ) -> Result<Vec<FilteredInit>, Diagnostic> {
        if decl.kind == DeclKind::Protocol {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for init in decl.effective_initializers().iter() {
            let label = initializer_label(init);
            let params = self
                .bridge_params(path, &init.params)
                .map_err(|e| e.into_diagnostic(path, &label))?;
            match params {
                Some(params) => out.push(FilteredInit {
                    params,
                    implicit: init.implicit,
                }),
                None => {
                    tracing::trace!(declaration = %path, initializer = %label, "dropping initializer")
                }
            }
        }
        Ok(out)
    }

    fn filter_member(
        &self,
        path: &QualifiedName,
        decl: &Declaration,
        member: &'a Member,
    ) -> Result<Option<FilteredMember<'a>>, Diagnostic> {
        if member.is_generic() {
            tracing::trace!(declaration = %path, member = %member.name, "dropping generic member");
            return Ok(None);
        }
        if member.is_static && decl.kind == DeclKind::Protocol {
            tracing::trace!(declaration = %path, member = %member.name, "dropping protocol static member");
            return Ok(None);
        }

        let signature = match &member.kind {
            MemberKind::Operator { .. } => {
                tracing::trace!(declaration = %path, member = %member.name, "dropping operator");
                return Ok(None);
            }
            MemberKind::Property { ty, mutability } => {
                let ty = self
                    .bridge(path, ty)
                    .map_err(|e| e.into_diagnostic(path, &member.name))?;
                match ty {
                    Some(ty) if ty != BridgedType::Void => Some(Signature::Property {
                        ty,
                        settable: mutability.is_settable(),
                    }),
                    _ => None,
                }
            }
            MemberKind::Method { params, returns } => {
                let bridged = self
                    .bridge_method(path, params, returns)
                    .map_err(|e| e.into_diagnostic(path, &member.name))?;
                bridged.map(|(params, returns)| Signature::Method { params, returns })
            }
        };

        let Some(signature) = signature else {
            tracing::trace!(declaration = %path, member = %member.name, "dropping member incompatible with @objc");
            return Ok(None);
        };
        let strategy = signature.strategy();
        Ok(Some(FilteredMember {
            member,
            signature,
            strategy,
        }))
    }

    fn bridge_method(
        &self,
        scope: &QualifiedName,
        params: &[Param],
        returns: &TypeRef,
    ) -> Bridged<(Vec<FilteredParam>, BridgedType)> {
        // Resolve both sides before deciding so an error is never masked by a drop.
        let params = self.bridge_params(scope, params);
        let returns = self.bridge(scope, returns);
        match (params?, returns?) {
            (Some(params), Some(returns)) => Ok(Some((params, returns))),
            _ => Ok(None),
        }
    }

    fn bridge_params(
        &self,
        scope: &QualifiedName,
        params: &[Param],
    ) -> Bridged<Vec<FilteredParam>> {
        let mut out = Vec::with_capacity(params.len());
        let mut compatible = true;
        for param in params {
            match self.bridge(scope, &param.ty)? {
                Some(ty) if ty != BridgedType::Void => out.push(FilteredParam {
                    name: param.name.clone(),
                    ty,
                }),
                _ => compatible = false,
            }
        }
        Ok(compatible.then_some(out))
    }

    /// Bridge a signature type written inside the declaration at `scope`.
    fn bridge(&self, scope: &QualifiedName, ty: &TypeRef) -> Bridged<BridgedType> {
        self.bridge_normalized(scope, &ty.normalized())
    }

    fn bridge_normalized(&self, scope: &QualifiedName, ty: &TypeRef) -> Bridged<BridgedType> {
        match ty {
            TypeRef::Void => Ok(Some(BridgedType::Void)),
            TypeRef::Function { .. } => Ok(None),
            TypeRef::Existential(inner) => self.bridge_normalized(scope, inner),
            TypeRef::Nominal(name) => {
                if ty.primitive_kind().is_some() {
                    return Ok(Some(BridgedType::Primitive(name.last().to_string())));
                }
                match self.index.resolve(scope, name) {
                    Resolution::Found(path, decl) => Ok(Some(BridgedType::Wrapper {
                        path,
                        existential: decl.kind == DeclKind::Protocol,
                    })),
                    Resolution::Excluded => Ok(None),
                    Resolution::Failed(path) => Err(BridgeError::Failed(path)),
                    Resolution::Missing => Err(BridgeError::Missing(name.clone())),
                }
            }
            TypeRef::Optional(inner) => {
                let Some(inner) = self.bridge_normalized(scope, inner)? else {
                    return Ok(None);
                };
                if !inner.is_object_bridged() {
                    return Ok(None);
                }
                Ok(Some(BridgedType::Optional(Box::new(inner))))
            }
            TypeRef::Tuple(elements) => {
                let mut shape = Vec::with_capacity(elements.len());
                let mut compatible = true;
                for element in elements {
                    match self.bridge_normalized(scope, &element.ty)? {
                        Some(ty) if ty != BridgedType::Void => shape.push(ShapeElement {
                            label: element.label.clone(),
                            ty,
                        }),
                        _ => compatible = false,
                    }
                }
                Ok(compatible.then(|| BridgedType::Tuple(TupleShape::new(shape))))
            }
        }
    }
}

/// `init(x:y:)`.
fn initializer_label(init: &Initializer) -> String {
    let labels: String = init.params.iter().map(|p| format!("{}:", p.name)).collect();
    format!("init({labels})")
}
