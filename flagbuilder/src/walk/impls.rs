//! [`Walk`] implementations for standard library types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::{Map, Node, Seq, Walk};

impl Walk for String {
    fn node(&self) -> Node<'_> {
        Node::Text(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn is_text() -> bool {
        true
    }
}

macro_rules! impl_walk_for_shared_str {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl Walk for $ptr<str> {
                fn node(&self) -> Node<'_> {
                    Node::Text(self)
                }

                fn as_text(&self) -> Option<&str> {
                    Some(self)
                }

                fn is_text() -> bool {
                    true
                }
            }
        )*
    };
}

impl_walk_for_shared_str!(Box, Rc, Arc);

impl Walk for &str {
    fn node(&self) -> Node<'_> {
        Node::Text(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn is_text() -> bool {
        true
    }
}

impl Walk for Cow<'_, str> {
    fn node(&self) -> Node<'_> {
        Node::Text(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn is_text() -> bool {
        true
    }
}

impl Walk for bool {
    fn node(&self) -> Node<'_> {
        Node::Bool(*self)
    }
}

macro_rules! impl_walk_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                fn node(&self) -> Node<'_> {
                    Node::Number(self.to_string())
                }
            }
        )*
    };
}

impl_walk_for_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Non-finite values use the spelling Go flag parsers accept.
macro_rules! impl_walk_for_floats {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                fn node(&self) -> Node<'_> {
                    let rendered = if self.is_nan() {
                        "NaN".to_owned()
                    } else if self.is_infinite() {
                        let sign = if self.is_sign_positive() { '+' } else { '-' };
                        format!("{sign}Inf")
                    } else {
                        self.to_string()
                    };
                    Node::Number(rendered)
                }
            }
        )*
    };
}

impl_walk_for_floats!(f32, f64);

impl Walk for Duration {
    fn node(&self) -> Node<'_> {
        Node::Duration(*self)
    }
}

impl Walk for () {
    fn node(&self) -> Node<'_> {
        Node::opaque(self)
    }
}

impl<T: Walk> Walk for Option<T> {
    fn node(&self) -> Node<'_> {
        Node::Indirect(self.as_ref().map(|value| value as &dyn Walk))
    }
}

macro_rules! impl_walk_for_pointers {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Walk> Walk for $ptr<T> {
                fn node(&self) -> Node<'_> {
                    let target: &T = self;
                    Node::Indirect(Some(target))
                }
            }
        )*
    };
}

impl_walk_for_pointers!(Box, Rc, Arc);

impl<T: Walk> Walk for Vec<T> {
    fn node(&self) -> Node<'_> {
        Node::Seq(Seq::new(self))
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    fn node(&self) -> Node<'_> {
        Node::Seq(Seq::new(self))
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    fn node(&self) -> Node<'_> {
        Node::Seq(Seq::new(self))
    }
}

impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: Walk + fmt::Display,
    V: Walk,
    S: BuildHasher,
{
    fn node(&self) -> Node<'_> {
        Node::Map(Map::new(self))
    }
}

impl<K, V> Walk for BTreeMap<K, V>
where
    K: Walk + fmt::Display,
    V: Walk,
{
    fn node(&self) -> Node<'_> {
        Node::Map(Map::new(self))
    }
}
