//! Configuration types for Swift rendering.

/// Configuration for Swift rendering.
#[derive(Clone, Debug)]
pub struct Config {
    /// Text emitted verbatim before the import, e.g. a license comment
    pub(crate) preamble: Option<String>,
    /// Module imported at the top of the file
    pub(crate) import: String,
    /// Spaces per nesting level
    pub(crate) indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preamble: None,
            import: "Foundation".to_string(),
            indent: 2,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preamble emitted at the top of the file.
    pub fn preamble(mut self, value: impl Into<String>) -> Self {
        self.preamble = Some(value.into());
        self
    }

    /// Set the imported module.
    pub fn import(mut self, value: impl Into<String>) -> Self {
        self.import = value.into();
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn indent(mut self, value: usize) -> Self {
        self.indent = value;
        self
    }
}
