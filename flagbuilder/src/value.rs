//! Classification of flagged field values.
//!
//! Every flagged field is resolved to one [`FlagValue`] kind. Values that fit
//! none of the kinds are rejected instead of being rendered approximately.

use crate::duration::format_duration;
use crate::error::{FlagError, FlagResult};
use crate::walk::{FieldPath, Node, Walk};

/// The value kinds a flag can be rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue<'a> {
    /// An optional or pointer with nothing in it.
    Absent,
    /// A string.
    Text(&'a str),
    /// A boolean, integer or float in its `Display` form.
    Scalar(String),
    /// A duration in Go syntax.
    Duration(String),
    /// A sequence of strings.
    List(Vec<&'a str>),
    /// A string-to-string map as key-value pairs sorted by key.
    Pairs(Vec<(&'a str, &'a str)>),
}

impl<'a> FlagValue<'a> {
    /// Classifies `value`, unwrapping one level of optional or pointer.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnsupportedValueKind`] when the unwrapped value
    /// is a struct, another optional, a non-string sequence or map, or an
    /// opaque value.
    pub fn classify(path: &FieldPath, value: &'a dyn Walk) -> FlagResult<Self> {
        let (target, node) = match value.node() {
            Node::Indirect(None) => return Ok(Self::Absent),
            Node::Indirect(Some(inner)) => (inner, inner.node()),
            direct => (value, direct),
        };
        let unsupported = |shape: &Node<'_>| {
            FlagError::unsupported(path.as_str(), target.type_name(), shape.summary())
        };

        match node {
            Node::Text(text) => Ok(Self::Text(text)),
            Node::Bool(flag) => Ok(Self::Scalar(flag.to_string())),
            Node::Number(number) => Ok(Self::Scalar(number)),
            Node::Duration(duration) => Ok(Self::Duration(zero_as_seconds(format_duration(
                duration,
            )))),
            Node::Seq(seq) => seq
                .into_text()
                .map(Self::List)
                .map_err(|rejected| unsupported(&Node::Seq(rejected))),
            Node::Map(map) => map
                .into_text()
                .map(Self::Pairs)
                .map_err(|rejected| unsupported(&Node::Map(rejected))),
            other @ (Node::Struct(_) | Node::Indirect(_) | Node::Opaque(_)) => {
                Err(unsupported(&other))
            }
        }
    }

    /// Renders the flag value, or `None` when no flag should be emitted.
    ///
    /// Strings are dropped when empty; strings, scalars and durations are
    /// dropped when they equal `flag_empty`; lists and pairs are dropped
    /// when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagbuilder::FlagValue;
    ///
    /// assert_eq!(FlagValue::Scalar("0".into()).render("0"), None);
    /// assert_eq!(FlagValue::List(vec!["a", "b"]).render(""), Some("a,b".into()));
    /// assert_eq!(FlagValue::Text("").render(""), None);
    /// ```
    #[must_use]
    pub fn render(&self, flag_empty: &str) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(text) => {
                (!text.is_empty() && *text != flag_empty).then(|| (*text).to_owned())
            }
            Self::Scalar(rendered) | Self::Duration(rendered) => {
                (rendered != flag_empty).then(|| rendered.clone())
            }
            Self::List(items) => (!items.is_empty()).then(|| items.join(",")),
            Self::Pairs(pairs) => (!pairs.is_empty()).then(|| {
                pairs
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join(",")
            }),
        }
    }
}

/// Older Go releases print a zero duration as `0`; flags always use `0s`.
fn zero_as_seconds(rendered: String) -> String {
    if rendered == "0" {
        "0s".to_owned()
    } else {
        rendered
    }
}
