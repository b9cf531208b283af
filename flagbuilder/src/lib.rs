//! Render annotated configuration structs as command-line flags.
//!
//! Fields declare their flag through `#[flag(...)]` attributes understood by
//! the [`Flags`] derive macro. [`build_flags`] walks a value, renders every
//! flagged field as `--<name>=<value>` and returns the flags sorted and
//! joined by spaces:
//!
//! ```rust
//! use flagbuilder::{FlagDuration, Flags, build_flags};
//!
//! #[derive(Flags)]
//! struct Kubelet {
//!     #[flag(name = "cluster-domain")]
//!     cluster_domain: String,
//!     #[flag(name = "max-pods", empty = "0")]
//!     max_pods: u32,
//!     #[flag(name = "sync-frequency")]
//!     sync_frequency: Option<FlagDuration>,
//!     #[flag(skip)]
//!     bootstrap_token: String,
//! }
//!
//! let kubelet = Kubelet {
//!     cluster_domain: "cluster.local".into(),
//!     max_pods: 0,
//!     sync_frequency: Some(FlagDuration::from_secs(60)),
//!     bootstrap_token: "secret".into(),
//! };
//! assert_eq!(
//!     build_flags(&kubelet)?,
//!     "--cluster-domain=cluster.local --sync-frequency=1m0s"
//! );
//! # Ok::<(), flagbuilder::FlagError>(())
//! ```
//!
//! Supported value kinds are strings, booleans, integers, floats, durations,
//! sequences of strings and string-to-string maps, each optionally wrapped
//! in one `Option`, `Box`, `Rc` or `Arc`. A flagged field of any other kind
//! fails the whole build with [`FlagError::UnsupportedValueKind`].

pub use flagbuilder_macros::Flags;

mod annotation;
mod builder;
mod duration;
mod error;
mod value;
mod walk;

pub use annotation::{EXCLUDE, FieldAnnotation, FlagName};
pub use builder::{FlagBuilder, build_flag_args, build_flags};
pub use duration::{FlagDuration, format_duration, parse_duration};
pub use error::{DurationError, FlagError, FlagResult};
pub use value::FlagValue;
pub use walk::{Entry, Field, FieldPath, Map, Node, Seq, Visit, Visitor, Walk, walk};
