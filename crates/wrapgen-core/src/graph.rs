//! The declaration graph handed over by an external parser.
//!
//! JSON uses snake_case tags; nominal type paths are dot-separated strings.
//!
//! ```
//! use wrapgen_core::DeclarationGraph;
//!
//! let graph = DeclarationGraph::from_json(r#"{
//!     "declarations": [{
//!         "name": "Vec2",
//!         "kind": "struct",
//!         "members": [
//!             { "name": "x", "member": "property", "type": { "nominal": "Double" }, "mutability": "stored_mutable" }
//!         ]
//!     }]
//! }"#).unwrap();
//! assert_eq!(graph.declarations.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::Declaration;

/// Error while loading a declaration graph.
#[derive(Debug)]
pub enum GraphError {
    Json(serde_json::Error),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

/// Top-level declarations of one module, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationGraph {
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl DeclarationGraph {
    pub fn new(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(GraphError::Json)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(GraphError::Json)
    }
}
