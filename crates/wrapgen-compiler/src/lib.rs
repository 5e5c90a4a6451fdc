//! wrapgen compiler: `@objc` forwarding wrappers from a Swift declaration model.
//!
//! This crate provides the generation pipeline:
//! - `resolve` - declaration index and nominal type lookup
//! - `filter` - compatibility filter and forwarding strategies
//! - `tuples` - tuple shape synthesis and canonical naming
//! - `wrapper` - generated declarations and the wrapper builder
//! - `emit` - canonical ordering of the generated module
//! - `render` - Swift source rendering
//! - `diagnostics` - error reporting
//!
//! # Example
//!
//! ```
//! use wrapgen_compiler::{generate, render, Config};
//! use wrapgen_core::{Declaration, DeclarationGraph, Member, Mutability, TypeRef};
//!
//! let point = Declaration::structure("Point")
//!     .with_member(Member::property("x", TypeRef::named("Double"), Mutability::StoredMutable));
//! let graph = DeclarationGraph::new(vec![point]);
//!
//! let module = generate(&graph, &Config::new()).into_result().expect("valid graph");
//! assert_eq!(module.names(), ["PointWrapper"]);
//!
//! let swift = render::render_swift(&module, &render::Config::new());
//! assert!(swift.contains("@objc public class PointWrapper: NSObject {"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod filter;
pub mod namespace;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod tuples;
pub mod wrapper;

mod invariants;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, NameSource};
pub use emit::GeneratedModule;
pub use pipeline::{Generation, generate};
pub use wrapper::{GeneratedDecl, TupleWrapperDecl, WrappedType, WrapperDecl};

/// Errors that can occur during wrapper generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("wrapper generation failed with {} errors", .0.error_count())]
    GenerationFailed(Diagnostics),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
