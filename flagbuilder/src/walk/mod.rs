//! Recursive traversal of configuration values.
//!
//! Values describe their own shape through [`Walk::node`]. The [`walk`]
//! function visits the root and then every child a [`Visitor`] allows it to
//! descend into: struct fields, the target of an optional or pointer, the
//! elements of a sequence and the values of a map. Struct fields carry their
//! [`FieldAnnotation`]; every other node is visited without one.

mod impls;
mod path;

use std::fmt;
use std::time::Duration;

use crate::annotation::FieldAnnotation;
use crate::duration::format_duration;

pub use path::FieldPath;

/// A value the traversal engine can inspect.
///
/// Implementations exist for strings, booleans, every integer and float
/// primitive, durations, `Option`, `Box`, `Rc`, `Arc`, sequences and maps.
/// Configuration structs normally derive it with
/// [`Flags`](crate::Flags); a manual implementation looks like this:
///
/// ```rust
/// use flagbuilder::{FieldAnnotation, Field, Node, Walk, build_flags};
///
/// struct Proxy {
///     mode: String,
///     port: u16,
/// }
///
/// impl Walk for Proxy {
///     fn node(&self) -> Node<'_> {
///         Node::Struct(vec![
///             Field::new("mode", FieldAnnotation::new("proxy-mode"), &self.mode),
///             Field::new("port", FieldAnnotation::new("port").with_empty("0"), &self.port),
///         ])
///     }
/// }
///
/// let proxy = Proxy { mode: "iptables".into(), port: 0 };
/// assert_eq!(build_flags(&proxy).ok().as_deref(), Some("--proxy-mode=iptables"));
/// ```
pub trait Walk {
    /// Reports the shape of this value.
    fn node(&self) -> Node<'_>;

    /// Name of the concrete type, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Borrows the value as a string when it is one.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Whether every value of this type is a string.
    ///
    /// Sequences and maps use this to decide whether they hold strings,
    /// including when they are empty.
    #[must_use]
    fn is_text() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Shape of a single value as seen by the traversal engine.
pub enum Node<'a> {
    /// A string.
    Text(&'a str),
    /// A boolean.
    Bool(bool),
    /// An integer or float, already rendered with `Display`.
    Number(String),
    /// A span of time.
    Duration(Duration),
    /// A struct with named, annotated fields.
    Struct(Vec<Field<'a>>),
    /// An owned optional or pointer; `None` when nothing is present.
    Indirect(Option<&'a dyn Walk>),
    /// An ordered sequence.
    Seq(Seq<'a>),
    /// A key-value mapping.
    Map(Map<'a>),
    /// Anything else, rendered with `Debug`.
    Opaque(String),
}

impl Node<'_> {
    /// Builds an [`Node::Opaque`] node for a type with no flag rendering.
    ///
    /// A flagged field holding such a value fails the build instead of
    /// being silently dropped.
    #[must_use]
    pub fn opaque<T: fmt::Debug + ?Sized>(value: &T) -> Node<'static> {
        Node::Opaque(format!("{value:?}"))
    }

    /// Short description of the node for diagnostics.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Text(text) => format!("{text:?}"),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => number.clone(),
            Self::Duration(duration) => format_duration(*duration),
            Self::Struct(fields) => {
                let names: Vec<&str> = fields.iter().map(Field::name).collect();
                format!("{{{}}}", names.join(", "))
            }
            Self::Indirect(None) => "None".to_owned(),
            Self::Indirect(Some(inner)) => format!("Some({})", inner.node().summary()),
            Self::Seq(seq) => format!("[{} items]", seq.len()),
            Self::Map(map) => format!("{{{} entries}}", map.len()),
            Self::Opaque(rendered) => rendered.clone(),
        }
    }
}

/// A named struct field together with its flag metadata.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    annotation: FieldAnnotation,
    value: &'a dyn Walk,
}

impl<'a> Field<'a> {
    /// Creates a field entry.
    #[must_use]
    pub const fn new(name: &'static str, annotation: FieldAnnotation, value: &'a dyn Walk) -> Self {
        Self {
            name,
            annotation,
            value,
        }
    }

    /// Field identifier, used for paths.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Flag metadata.
    #[must_use]
    pub const fn annotation(&self) -> &FieldAnnotation {
        &self.annotation
    }

    /// Field value.
    #[must_use]
    pub const fn value(&self) -> &'a dyn Walk {
        self.value
    }
}

/// Elements of a sequence, plus their strings when the element type is a string.
pub struct Seq<'a> {
    items: Vec<&'a dyn Walk>,
    text: Option<Vec<&'a str>>,
}

impl<'a> Seq<'a> {
    /// Collects the elements of a sequence.
    pub fn new<T, I>(items: I) -> Self
    where
        T: Walk + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let typed: Vec<&'a T> = items.into_iter().collect();
        let text = T::is_text().then(|| typed.iter().copied().filter_map(T::as_text).collect());
        let items = typed.into_iter().map(|item| item as &'a dyn Walk).collect();
        Self { items, text }
    }

    /// Elements in sequence order.
    #[must_use]
    pub fn items(&self) -> &[&'a dyn Walk] {
        &self.items
    }

    pub(crate) const fn len(&self) -> usize {
        self.items.len()
    }

    /// Converts into the element strings, or returns `self` when the
    /// elements are not strings.
    ///
    /// # Errors
    ///
    /// Returns the sequence unchanged when its element type is not a string.
    pub fn into_text(self) -> Result<Vec<&'a str>, Self> {
        match self.text {
            Some(text) => Ok(text),
            None => Err(self),
        }
    }
}

/// One key-value pair of a [`Map`].
#[derive(Clone)]
pub struct Entry<'a> {
    key: String,
    value: &'a dyn Walk,
}

impl<'a> Entry<'a> {
    /// Rendered key.
    #[must_use]
    pub const fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Value stored under the key.
    #[must_use]
    pub const fn value(&self) -> &'a dyn Walk {
        self.value
    }
}

/// Entries of a map, ordered by rendered key.
pub struct Map<'a> {
    entries: Vec<Entry<'a>>,
    text: Option<Vec<(&'a str, &'a str)>>,
}

impl<'a> Map<'a> {
    /// Collects the entries of a map.
    ///
    /// Entries are sorted by their rendered key so that iteration order of
    /// the underlying collection never leaks into paths or flag values.
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: Walk + fmt::Display + 'a,
        V: Walk + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        let mut typed: Vec<(String, &'a K, &'a V)> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), key, value))
            .collect();
        typed.sort_by(|left, right| left.0.cmp(&right.0));
        let text = (K::is_text() && V::is_text()).then(|| {
            typed
                .iter()
                .filter_map(|(_, key, value)| Some((key.as_text()?, value.as_text()?)))
                .collect()
        });
        let entries = typed
            .into_iter()
            .map(|(key, _, value)| Entry {
                key,
                value: value as &'a dyn Walk,
            })
            .collect();
        Self { entries, text }
    }

    /// Entries in key order.
    #[must_use]
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Converts into string pairs sorted by key, or returns `self` when
    /// the map is not string-to-string.
    ///
    /// # Errors
    ///
    /// Returns the map unchanged when its key or value type is not a string.
    pub fn into_text(self) -> Result<Vec<(&'a str, &'a str)>, Self> {
        match self.text {
            Some(text) => Ok(text),
            None => Err(self),
        }
    }
}

/// Whether the traversal should continue below the node just visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the node's children.
    Descend,
    /// Leave the node's subtree unvisited.
    Skip,
}

/// Callback invoked by [`walk`] for every node.
pub trait Visitor {
    /// Error that aborts the traversal.
    type Error;

    /// Inspects one node.
    ///
    /// `annotation` is `Some` for struct fields and `None` for the root and
    /// for container elements.
    ///
    /// # Errors
    ///
    /// Any error stops the traversal and is returned from [`walk`].
    fn visit(
        &mut self,
        path: &FieldPath,
        annotation: Option<&FieldAnnotation>,
        value: &dyn Walk,
    ) -> Result<Visit, Self::Error>;
}

/// Visits `root` and every descendant the visitor descends into.
///
/// Each node is visited exactly once, parents before children. Struct fields
/// are visited in declaration order and map entries in key order.
///
/// # Errors
///
/// Returns the first error produced by the visitor.
pub fn walk<V>(root: &dyn Walk, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor + ?Sized,
{
    walk_node(&FieldPath::root(), None, root, visitor)
}

fn walk_node<V>(
    path: &FieldPath,
    annotation: Option<&FieldAnnotation>,
    value: &dyn Walk,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    V: Visitor + ?Sized,
{
    if visitor.visit(path, annotation, value)? == Visit::Skip {
        return Ok(());
    }
    match value.node() {
        Node::Struct(fields) => {
            for field in &fields {
                walk_node(
                    &path.field(field.name()),
                    Some(field.annotation()),
                    field.value(),
                    visitor,
                )?;
            }
        }
        Node::Indirect(Some(inner)) => walk_node(path, None, inner, visitor)?,
        Node::Seq(seq) => {
            for (index, item) in seq.items().iter().enumerate() {
                walk_node(&path.index(index), None, *item, visitor)?;
            }
        }
        Node::Map(map) => {
            for entry in map.entries() {
                walk_node(&path.key(entry.key()), None, entry.value(), visitor)?;
            }
        }
        Node::Text(_)
        | Node::Bool(_)
        | Node::Number(_)
        | Node::Duration(_)
        | Node::Indirect(None)
        | Node::Opaque(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests;
