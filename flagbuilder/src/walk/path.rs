//! Human-readable locations inside a walked value.

use std::fmt;

/// Dotted and indexed location of a node, such as `.kubelet.labels[env]`.
///
/// The root is the empty path. Paths exist for diagnostics only; nothing
/// parses them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Returns the path of the traversal root.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Appends a struct field segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagbuilder::FieldPath;
    ///
    /// let path = FieldPath::root().field("kubelet").index(2).key("env");
    /// assert_eq!(path.as_str(), ".kubelet[2][env]");
    /// ```
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Appends a sequence index segment.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Appends a map key segment.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}[{key}]", self.0))
    }

    /// Borrows the rendered path.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}
