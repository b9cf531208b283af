//! Parsing of `#[flag(...)]` attributes for the `Flags` derive macro.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, LitStr};

use super::rename::RenameRule;

/// Flag name that hides a field and its subtree.
const EXCLUDE: &str = "-";

/// Struct-level `#[flag(...)]` metadata.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the runtime crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
    /// Derives flag names for fields without an explicit `name`.
    pub rename_all: Option<RenameRule>,
}

/// Field-level `#[flag(...)]` metadata.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub name: Option<String>,
    pub empty: Option<String>,
    pub skip: bool,
}

/// One field of the input struct with its resolved flag metadata.
pub(crate) struct FlagField {
    pub ident: syn::Ident,
    /// Field name used in diagnostic paths, without any `r#` prefix.
    pub path_name: String,
    pub flag: String,
    pub empty: String,
}

/// Everything the generator needs from the derive input.
pub(crate) struct ParsedInput {
    pub struct_attrs: StructAttrs,
    pub fields: Vec<FlagField>,
}

fn parse_flag_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

fn meta_key(meta: &ParseNestedMeta) -> String {
    meta.path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string)
}

/// Extracts struct-level `#[flag(...)]` metadata.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flag_attrs(attrs, |meta| match meta_key(meta).as_str() {
        "crate" => {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        }
        "rename_all" => {
            let s = lit_str(meta, "rename_all")?;
            out.rename_all = Some(RenameRule::parse(&s)?);
            Ok(())
        }
        other => Err(meta.error(format!("unknown struct-level flag attribute '{other}'"))),
    })?;
    Ok(out)
}

/// Extracts field-level `#[flag(...)]` metadata.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    let mut span = None;
    parse_flag_attrs(attrs, |meta| {
        span.get_or_insert_with(|| meta.path.span());
        match meta_key(meta).as_str() {
            "name" => {
                out.name = Some(lit_str(meta, "name")?.value());
                Ok(())
            }
            "empty" => {
                out.empty = Some(lit_str(meta, "empty")?.value());
                Ok(())
            }
            "skip" => {
                out.skip = true;
                Ok(())
            }
            other => Err(meta.error(format!("unknown flag attribute '{other}'"))),
        }
    })?;
    if out.skip && (out.name.is_some() || out.empty.is_some()) {
        let span = span.unwrap_or_else(proc_macro2::Span::call_site);
        return Err(syn::Error::new(
            span,
            "`skip` cannot be combined with `name` or `empty`",
        ));
    }
    Ok(out)
}

impl FieldAttrs {
    /// Resolves the flag name written into the generated annotation.
    fn resolve_flag(&self, field_name: &str, rename_all: Option<RenameRule>) -> String {
        if self.skip {
            return EXCLUDE.to_owned();
        }
        match (&self.name, rename_all) {
            (Some(name), _) => name.clone(),
            (None, Some(rule)) => rule.apply(field_name),
            (None, None) => String::new(),
        }
    }
}

/// Gathers the fields of the input struct and their flag metadata.
///
/// Only structs with named fields are accepted. Unit-like structs written
/// with braces (`struct Empty {}`) produce an empty field table.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Flags requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Flags can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Flags requires named fields"));
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        let path_name = ident.unraw().to_string();
        let flag = attrs.resolve_flag(&path_name, struct_attrs.rename_all);
        fields.push(FlagField {
            ident,
            path_name,
            flag,
            empty: attrs.empty.unwrap_or_default(),
        });
    }
    Ok(ParsedInput {
        struct_attrs,
        fields,
    })
}

#[cfg(test)]
mod tests;
