//! Error types produced while rendering flags and parsing durations.

use thiserror::Error;

/// Convenience alias for results returned by the flag builder.
pub type FlagResult<T> = Result<T, FlagError>;

/// Errors that abort a flag build.
///
/// Every variant describes a structural problem with the input shape, so
/// retrying the same build can never succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlagError {
    /// A flagged field resolved to a value kind with no flag rendering.
    #[error("cannot build flag for '{path}': value of type {type_name} is not supported: {value}")]
    UnsupportedValueKind {
        /// Location of the offending field.
        path: String,
        /// Runtime type of the unwrapped value.
        type_name: &'static str,
        /// Short rendering of the value for diagnostics.
        value: String,
    },
}

impl FlagError {
    /// Builds an [`FlagError::UnsupportedValueKind`] error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagbuilder::FlagError;
    ///
    /// let err = FlagError::unsupported(".peers", "alloc::vec::Vec<u16>", "[2 items]");
    /// assert!(err.to_string().contains(".peers"));
    /// ```
    #[must_use]
    pub fn unsupported(
        path: impl Into<String>,
        type_name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnsupportedValueKind {
            path: path.into(),
            type_name,
            value: value.into(),
        }
    }
}

/// Errors raised while parsing a duration string such as `1h30m`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    /// The input was empty.
    #[error("empty duration")]
    Empty,

    /// The input did not follow `[+]{number}{unit}...` syntax.
    #[error("invalid duration '{input}'")]
    Invalid {
        /// The rejected input.
        input: String,
    },

    /// A number was not followed by a unit.
    #[error("missing unit in duration '{input}'")]
    MissingUnit {
        /// The rejected input.
        input: String,
    },

    /// A unit suffix was not recognised.
    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit {
        /// The unrecognised unit.
        unit: String,
        /// The rejected input.
        input: String,
    },

    /// Negative durations cannot be represented.
    #[error("negative duration '{input}'")]
    Negative {
        /// The rejected input.
        input: String,
    },

    /// The value does not fit in a [`std::time::Duration`].
    #[error("duration '{input}' is out of range")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}
