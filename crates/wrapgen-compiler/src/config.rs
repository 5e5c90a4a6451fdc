//! Generation settings.

use wrapgen_core::QualifiedName;

/// Configuration for wrapper generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Appended to every original declaration name
    pub(crate) wrapper_suffix: String,
    /// Leading segment of every tuple wrapper name
    pub(crate) tuple_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrapper_suffix: "Wrapper".to_string(),
            tuple_prefix: "Tuple".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix that turns `Foo` into `FooWrapper`.
    pub fn wrapper_suffix(mut self, value: impl Into<String>) -> Self {
        self.wrapper_suffix = value.into();
        self
    }

    /// Set the prefix of synthesized tuple wrapper names.
    pub fn tuple_prefix(mut self, value: impl Into<String>) -> Self {
        self.tuple_prefix = value.into();
        self
    }

    pub(crate) fn wrapper_name(&self, name: &str) -> String {
        format!("{name}{}", self.wrapper_suffix)
    }

    /// `Outer.Inner` → `OuterWrapper.InnerWrapper`.
    pub(crate) fn wrapper_path(&self, original: &QualifiedName) -> QualifiedName {
        original.map_segments(|segment| self.wrapper_name(segment))
    }
}
