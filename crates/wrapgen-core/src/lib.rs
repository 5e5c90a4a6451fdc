//! Declaration model for wrapgen.
//!
//! This crate holds the parsed view of a Swift module that wrapper generation
//! consumes:
//! - `decl` - declarations, members, initializers
//! - `types` - type references in signatures
//! - `name` - qualified declaration paths
//! - `graph` - the top-level declaration set and its JSON form

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod decl;
pub mod graph;
pub mod name;
pub mod types;

#[cfg(test)]
mod decl_tests;

pub use decl::{DeclKind, Declaration, Initializer, Member, MemberKind, Mutability, Param};
pub use graph::{DeclarationGraph, GraphError};
pub use name::QualifiedName;
pub use types::{PrimitiveKind, TupleElement, TypeRef};
