//! Turns annotated configuration values into sorted `--name=value` flags.

use tracing::{debug, trace};

use crate::annotation::{FieldAnnotation, FlagName};
use crate::error::{FlagError, FlagResult};
use crate::value::FlagValue;
use crate::walk::{FieldPath, Visit, Visitor, Walk, walk};

/// Collects flags from one or more configuration values.
///
/// The builder is the [`Visitor`] driven by [`walk`]. Most callers use
/// [`build_flags`] or [`build_flag_args`]; use the builder directly to merge
/// the flags of several values into one command line.
///
/// # Examples
///
/// ```rust
/// use flagbuilder::{FlagBuilder, Flags};
///
/// #[derive(Flags)]
/// struct Network {
///     #[flag(name = "cluster-dns")]
///     dns: String,
/// }
///
/// #[derive(Flags)]
/// struct Logging {
///     #[flag(name = "v", empty = "0")]
///     verbosity: u8,
/// }
///
/// let mut builder = FlagBuilder::new();
/// builder.collect(&Network { dns: "10.0.0.10".into() })?;
/// builder.collect(&Logging { verbosity: 2 })?;
/// assert_eq!(builder.finish(), "--cluster-dns=10.0.0.10 --v=2");
/// # Ok::<(), flagbuilder::FlagError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct FlagBuilder {
    flags: Vec<String>,
}

impl FlagBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Walks `config` and records its flags.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnsupportedValueKind`] when a flagged field holds
    /// a value with no flag rendering. Flags collected from `config` before
    /// the failure are discarded; flags from earlier calls are kept.
    pub fn collect(&mut self, config: &dyn Walk) -> FlagResult<()> {
        let before = self.flags.len();
        walk(config, self).inspect_err(|_| self.flags.truncate(before))
    }

    /// Returns the collected flags sorted lexicographically.
    #[must_use]
    pub fn into_args(mut self) -> Vec<String> {
        self.flags.sort();
        debug!(count = self.flags.len(), "built flags");
        self.flags
    }

    /// Returns the sorted flags joined by single spaces.
    #[must_use]
    pub fn finish(self) -> String {
        self.into_args().join(" ")
    }
}

impl Visitor for FlagBuilder {
    type Error = FlagError;

    fn visit(
        &mut self,
        path: &FieldPath,
        annotation: Option<&FieldAnnotation>,
        value: &dyn Walk,
    ) -> Result<Visit, Self::Error> {
        let Some(field) = annotation else {
            trace!(path = %path, "ignoring non-field");
            return Ok(Visit::Descend);
        };
        let name = match field.flag() {
            FlagName::Unset => {
                trace!(path = %path, "not writing field with no flag name");
                return Ok(Visit::Descend);
            }
            FlagName::Excluded => {
                trace!(path = %path, "skipping excluded field");
                return Ok(Visit::Skip);
            }
            FlagName::Named(name) => name,
        };

        let flag_value = FlagValue::classify(path, value)?;
        if let Some(rendered) = flag_value.render(field.flag_empty()) {
            self.flags.push(format!("--{name}={rendered}"));
        }
        Ok(Visit::Skip)
    }
}

/// Builds the flag string for `config`.
///
/// Flags are sorted lexicographically and joined by single spaces, so the
/// result does not depend on field order or map iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use flagbuilder::{Flags, build_flags};
///
/// #[derive(Flags)]
/// struct Config {
///     #[flag(name = "name")]
///     name: String,
///     #[flag(name = "count")]
///     count: u32,
///     #[flag(name = "tags")]
///     tags: Vec<String>,
///     #[flag(name = "labels")]
///     labels: HashMap<String, String>,
///     #[flag(skip)]
///     excluded: String,
/// }
///
/// let config = Config {
///     name: "foo".into(),
///     count: 3,
///     tags: vec!["a".into(), "b".into()],
///     labels: HashMap::from([("env".into(), "prod".into())]),
///     excluded: "ignored".into(),
/// };
/// assert_eq!(
///     build_flags(&config)?,
///     "--count=3 --labels=env=prod --name=foo --tags=a,b"
/// );
/// # Ok::<(), flagbuilder::FlagError>(())
/// ```
///
/// # Errors
///
/// Returns [`FlagError::UnsupportedValueKind`] when a flagged field holds a
/// value with no flag rendering. No partial output is produced.
pub fn build_flags<T: Walk>(config: &T) -> FlagResult<String> {
    let mut builder = FlagBuilder::new();
    builder.collect(config)?;
    Ok(builder.finish())
}

/// Builds the sorted flags for `config` as separate arguments.
///
/// Suitable for [`std::process::Command::args`].
///
/// # Errors
///
/// Returns [`FlagError::UnsupportedValueKind`] when a flagged field holds a
/// value with no flag rendering.
pub fn build_flag_args<T: Walk>(config: &T) -> FlagResult<Vec<String>> {
    let mut builder = FlagBuilder::new();
    builder.collect(config)?;
    Ok(builder.into_args())
}
