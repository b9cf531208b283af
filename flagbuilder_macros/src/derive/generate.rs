//! Token generation for the `Walk` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_quote};

use super::parse::ParsedInput;

/// Path prefix of the runtime crate in generated code.
fn runtime_crate(parsed: &ParsedInput) -> TokenStream {
    parsed
        .struct_attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { ::flagbuilder }, |path| quote! { #path })
}

/// Generates `impl Walk` returning the struct's field table.
///
/// Every type parameter gains a `Walk` bound so generic fields can be
/// visited.
pub(crate) fn generate_walk_impl(input: &DeriveInput, parsed: &ParsedInput) -> TokenStream {
    let krate = runtime_crate(parsed);
    let ident = &input.ident;

    let mut generics = input.generics.clone();
    let type_params: Vec<syn::Ident> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
        })
        .collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: #krate::Walk));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let entries = parsed.fields.iter().map(|field| {
        let member = &field.ident;
        let path_name = &field.path_name;
        let flag = &field.flag;
        let empty = &field.empty;
        quote! {
            #krate::Field::new(
                #path_name,
                #krate::FieldAnnotation::new(#flag).with_empty(#empty),
                &self.#member,
            )
        }
    });

    quote! {
        impl #impl_generics #krate::Walk for #ident #ty_generics #where_clause {
            fn node(&self) -> #krate::Node<'_> {
                #krate::Node::Struct(::std::vec![#(#entries),*])
            }
        }
    }
}
