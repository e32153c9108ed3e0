//! Configuration options for outline marshalling.
//!
//! The emitted format is fixed; the only formatting knob is the indentation
//! unit, the number of spaces added per nesting level. dae configs use
//! 4-space indentation by convention, which is the default here.
//!
//! ## Examples
//!
//! ```rust
//! use dae_outline::MarshalOptions;
//!
//! // dae convention: 4 spaces per level
//! let options = MarshalOptions::new();
//! assert_eq!(options.indent, 4);
//!
//! // Tighter output
//! let options = MarshalOptions::new().with_indent(2);
//! assert_eq!(options.indent, 2);
//! ```

/// Configuration options for outline marshalling.
///
/// Controls the indentation unit applied per nesting depth. Tabs are never
/// emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Number of spaces per depth level.
    pub indent: usize,
}

impl Default for MarshalOptions {
    fn default() -> Self {
        MarshalOptions { indent: 4 }
    }
}

impl MarshalOptions {
    /// Creates default options (4-space indentation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dae_outline::MarshalOptions;
    ///
    /// let options = MarshalOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dae_outline::MarshalOptions;
    ///
    /// let options = MarshalOptions::new().with_indent(8);
    /// assert_eq!(options.indent, 8);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
