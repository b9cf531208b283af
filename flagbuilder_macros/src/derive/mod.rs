//! Expansion of `#[derive(Flags)]`.

mod generate;
mod parse;
mod rename;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and emits the `Walk` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate_walk_impl(input, &parsed))
}
