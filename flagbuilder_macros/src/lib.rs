//! Procedural macros for `flagbuilder`.
//!
//! The [`Flags`] derive implements `flagbuilder::Walk` for a struct with
//! named fields. Each field becomes an entry of the generated field table,
//! carrying the flag metadata from its `#[flag(...)]` attribute.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagbuilder::Walk`.
///
/// Field attributes:
///
/// - `#[flag(name = "max-pods")]` emits `--max-pods=<value>`.
/// - `#[flag(name = "v", empty = "0")]` suppresses the flag when the value
///   renders as `0`.
/// - `#[flag(skip)]` (or `name = "-"`) hides the field and everything
///   below it.
/// - No attribute, or `name = ""`, emits nothing for the field itself but
///   still searches nested structs for flags.
///
/// Struct attributes:
///
/// - `#[flag(rename_all = "kebab-case")]` derives flag names from field
///   names for fields without an explicit `name`.
/// - `#[flag(crate = "path")]` names the runtime crate when it was renamed.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
