//! Per-field flag metadata.
//!
//! A [`FieldAnnotation`] is the structured form of the `#[flag(...)]`
//! attribute. The derive macro builds one per field; hand-written
//! [`Walk`](crate::Walk) implementations construct them directly.

/// Flag name that excludes a field and its whole subtree.
pub const EXCLUDE: &str = "-";

/// Static flag metadata attached to a struct field.
///
/// # Examples
///
/// ```rust
/// use flagbuilder::{FieldAnnotation, FlagName};
///
/// let verbosity = FieldAnnotation::new("v").with_empty("0");
/// assert_eq!(verbosity.flag(), FlagName::Named("v"));
/// assert_eq!(verbosity.flag_empty(), "0");
/// assert_eq!(FieldAnnotation::EXCLUDED.flag(), FlagName::Excluded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldAnnotation {
    flag: &'static str,
    flag_empty: &'static str,
}

/// Interpretation of an annotation's flag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagName<'a> {
    /// No flag for this field; its children are still searched.
    Unset,
    /// Never emit a flag for this field or anything beneath it.
    Excluded,
    /// Emit `--<name>=<value>`.
    Named(&'a str),
}

impl FieldAnnotation {
    /// Annotation for a field that carries no flag but may hold flagged children.
    pub const UNSET: Self = Self::new("");

    /// Annotation for a field hidden from flag generation.
    pub const EXCLUDED: Self = Self::new(EXCLUDE);

    /// Creates an annotation with the given flag name and an empty sentinel of `""`.
    #[must_use]
    pub const fn new(flag: &'static str) -> Self {
        Self {
            flag,
            flag_empty: "",
        }
    }

    /// Sets the sentinel that suppresses the flag when the rendered value equals it.
    #[must_use]
    pub const fn with_empty(mut self, flag_empty: &'static str) -> Self {
        self.flag_empty = flag_empty;
        self
    }

    /// Classifies the raw flag name.
    #[must_use]
    pub fn flag(&self) -> FlagName<'static> {
        match self.flag {
            "" => FlagName::Unset,
            EXCLUDE => FlagName::Excluded,
            name => FlagName::Named(name),
        }
    }

    /// Returns the empty sentinel.
    #[must_use]
    pub const fn flag_empty(&self) -> &'static str {
        self.flag_empty
    }
}
