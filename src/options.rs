//! Configuration options for SCL serialization.
//!
//! ## Examples
//!
//! ```rust
//! use serde_scl::{dumps_with_options, loads, SclOptions};
//!
//! let tree = loads("db :: class { port :: num { 5432 } }").unwrap();
//! let text = dumps_with_options(&tree, SclOptions::new().with_indent(2)).unwrap();
//! assert_eq!(text, "db :: class {\n  port :: num { 5432 }\n}\n");
//! ```

/// Configuration options for SCL serialization.
///
/// Controls the number of spaces per nesting level of `class` bodies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SclOptions {
    pub indent: usize,
}

impl Default for SclOptions {
    fn default() -> Self {
        SclOptions { indent: 4 }
    }
}

impl SclOptions {
    /// Creates default options (4-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_scl::SclOptions;
    ///
    /// let options = SclOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
