//! Tests for `#[flag(...)]` parsing behaviour.

use super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::parse_quote;

fn flags_of(input: &DeriveInput) -> Result<Vec<(String, String, String)>> {
    let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
    Ok(parsed
        .fields
        .into_iter()
        .map(|field| (field.path_name, field.flag, field.empty))
        .collect())
}

fn triple(path: &str, flag: &str, empty: &str) -> (String, String, String) {
    (path.to_owned(), flag.to_owned(), empty.to_owned())
}

fn error_of(input: &DeriveInput) -> Option<String> {
    parse_input(input).err().map(|err| err.to_string())
}

#[rstest]
fn parses_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[flag(name = "node-labels")]
            labels: std::collections::HashMap<String, String>,
            #[flag(name = "v", empty = "0")]
            verbosity: u8,
            #[flag(skip)]
            secret: String,
            #[flag(name = "-")]
            hidden: String,
            #[flag(name = "")]
            nested: Inner,
            plain: Inner,
        }
    };
    let flags = flags_of(&input)?;
    ensure!(
        flags
            == vec![
                triple("labels", "node-labels", ""),
                triple("verbosity", "v", "0"),
                triple("secret", "-", ""),
                triple("hidden", "-", ""),
                triple("nested", "", ""),
                triple("plain", "", ""),
            ],
        "unexpected flags: {flags:?}"
    );
    Ok(())
}

#[rstest]
fn rename_all_fills_in_missing_names_only() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flag(rename_all = "kebab-case")]
        struct Demo {
            max_pods: u32,
            #[flag(name = "custom")]
            renamed: String,
            #[flag(name = "")]
            container: Inner,
            #[flag(skip)]
            hidden: String,
            #[flag(empty = "0")]
            read_only_port: u16,
        }
    };
    let flags = flags_of(&input)?;
    ensure!(
        flags
            == vec![
                triple("max_pods", "max-pods", ""),
                triple("renamed", "custom", ""),
                triple("container", "", ""),
                triple("hidden", "-", ""),
                triple("read_only_port", "read-only-port", "0"),
            ],
        "unexpected flags: {flags:?}"
    );
    Ok(())
}

#[rstest]
fn attributes_accumulate_across_repeats() -> Result<()> {
    let attrs: Vec<Attribute> = vec![
        parse_quote!(#[flag(name = "port")]),
        parse_quote!(#[doc = "ignored"]),
        parse_quote!(#[flag(empty = "0")]),
    ];
    let parsed = parse_field_attrs(&attrs).map_err(|err| anyhow!(err))?;
    ensure!(
        parsed
            == FieldAttrs {
                name: Some("port".to_owned()),
                empty: Some("0".to_owned()),
                skip: false,
            },
        "unexpected attrs: {parsed:?}"
    );
    Ok(())
}

#[rstest]
fn parses_crate_path() -> Result<()> {
    let attrs: Vec<Attribute> = vec![parse_quote!(#[flag(crate = "deps::flagbuilder")])];
    let parsed = parse_struct_attrs(&attrs).map_err(|err| anyhow!(err))?;
    let path = parsed.crate_path.ok_or_else(|| anyhow!("missing crate path"))?;
    ensure!(
        quote::quote!(#path).to_string() == "deps :: flagbuilder",
        "unexpected path"
    );
    Ok(())
}

#[rstest]
#[case::tuple_struct(parse_quote! { struct Tuple(String); }, "Flags requires named fields")]
#[case::enumeration(parse_quote! { enum Mode { A, B } }, "Flags can only be derived for structs")]
#[case::unknown_key(
    parse_quote! { struct S { #[flag(rename = "x")] a: String } },
    "unknown flag attribute 'rename'"
)]
#[case::non_string_name(
    parse_quote! { struct S { #[flag(name = 5)] a: String } },
    "name must be a string"
)]
#[case::skip_with_name(
    parse_quote! { struct S { #[flag(skip, name = "a")] a: String } },
    "`skip` cannot be combined with `name` or `empty`"
)]
#[case::unknown_struct_key(
    parse_quote! { #[flag(prefix = "X")] struct S { a: String } },
    "unknown struct-level flag attribute 'prefix'"
)]
#[case::bad_rename_rule(
    parse_quote! { #[flag(rename_all = "Train-Case")] struct S { a: String } },
    "unsupported rename_all value 'Train-Case'"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) {
    let err = error_of(&input);
    assert!(
        err.as_deref().is_some_and(|msg| msg.contains(expected)),
        "expected error containing {expected:?}, got {err:?}"
    );
}

#[rstest]
fn accepts_empty_structs() -> Result<()> {
    let input: DeriveInput = parse_quote! { struct Empty {} };
    ensure!(flags_of(&input)?.is_empty(), "expected no fields");
    Ok(())
}
