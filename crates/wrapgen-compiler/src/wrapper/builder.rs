//! Builds forwarding wrappers from filtered declarations.

use crate::Config;
use crate::filter::{BridgedType, FilteredDecl, FilteredMember, FilteredParam, Signature};
use crate::tuples::{TupleShape, TupleTable};

use super::{
    TupleAccessor, TupleWrapperDecl, WrappedType, WrapperDecl, WrapperInit, WrapperMember,
    WrapperMemberKind, WrapperParam,
};

/// Turns filtered declarations and registered tuple shapes into wrappers.
///
/// Every tuple shape reached by a filtered signature must already be in the
/// table; the builder only looks names up.
pub struct WrapperBuilder<'c> {
    config: &'c Config,
    tuples: &'c TupleTable,
}

impl<'c> WrapperBuilder<'c> {
    pub fn new(config: &'c Config, tuples: &'c TupleTable) -> Self {
        Self { config, tuples }
    }

    /// Wrapper for `filtered` and, recursively, its nested declarations.
    ///
    /// Members keep declaration order; see [`crate::emit`] for sorting.
    pub fn build(&self, filtered: &FilteredDecl<'_>) -> WrapperDecl {
        let original = filtered.path.clone();

        let mut initializers = vec![WrapperInit::Adopt];
        initializers.extend(filtered.initializers.iter().map(|init| WrapperInit::Forward {
            params: self.params(&init.params),
            implicit: init.implicit,
        }));

        let members = filtered.members.iter().map(|m| self.member(m)).collect();
        let nested = filtered.nested.iter().map(|n| self.build(n)).collect();

        WrapperDecl {
            name: self.config.wrapper_name(original.last()),
            path: self.config.wrapper_path(&original),
            original,
            kind: filtered.decl.kind,
            initializers,
            members,
            nested,
        }
    }

    /// Wrapper class for the registered `shape`, accessors in element order.
    pub fn build_tuple(&self, shape: &TupleShape) -> TupleWrapperDecl {
        let accessors = shape
            .elements()
            .iter()
            .enumerate()
            .map(|(position, element)| {
                let ty = self.lower(&element.ty);
                TupleAccessor {
                    name: shape.accessor_name(position),
                    element: element
                        .label
                        .clone()
                        .unwrap_or_else(|| position.to_string()),
                    strategy: ty.strategy(),
                    ty,
                }
            })
            .collect();

        TupleWrapperDecl {
            name: self.tuples.ensure_name(shape).to_string(),
            wrapped_type: shape.to_type_ref(),
            accessors,
        }
    }

    /// Tuple wrappers for every shape in the table.
    pub fn build_tuples(&self) -> Vec<TupleWrapperDecl> {
        self.tuples
            .iter()
            .map(|(shape, _)| self.build_tuple(shape))
            .collect()
    }

    fn member(&self, filtered: &FilteredMember<'_>) -> WrapperMember {
        let kind = match &filtered.signature {
            Signature::Property { ty, settable } => WrapperMemberKind::Property {
                ty: self.lower(ty),
                settable: *settable,
            },
            Signature::Method { params, returns } => WrapperMemberKind::Method {
                params: self.params(params),
                returns: self.lower(returns),
            },
        };
        WrapperMember {
            name: filtered.member.name.clone(),
            is_static: filtered.member.is_static,
            strategy: filtered.strategy,
            kind,
        }
    }

    fn params(&self, params: &[FilteredParam]) -> Vec<WrapperParam> {
        params
            .iter()
            .map(|p| WrapperParam {
                name: p.name.clone(),
                ty: self.lower(&p.ty),
            })
            .collect()
    }

    pub(crate) fn lower(&self, ty: &BridgedType) -> WrappedType {
        match ty {
            BridgedType::Void => WrappedType::Void,
            BridgedType::Primitive(name) => WrappedType::Primitive { name: name.clone() },
            BridgedType::Wrapper { path, .. } => WrappedType::Wrapper {
                original: path.clone(),
                wrapper: self.config.wrapper_path(path),
            },
            BridgedType::Tuple(shape) => WrappedType::Tuple {
                wrapper: self.tuples.ensure_name(shape).to_string(),
                raw: shape.to_type_ref(),
            },
            BridgedType::Optional(inner) => WrappedType::Optional {
                inner: Box::new(self.lower(inner)),
            },
        }
    }
}
