//! Flag names derived from field names.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::LitStr;

/// Supported `#[flag(rename_all = "...")]` rules.
///
/// The spellings match serde's `rename_all` so structs shared with a
/// configuration loader can use the same casing for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub(crate) fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    pub(crate) fn apply(self, field_name: &str) -> String {
        match self {
            Self::Lower => field_name.to_ascii_lowercase(),
            Self::Upper => field_name.to_ascii_uppercase(),
            Self::Pascal => field_name.to_upper_camel_case(),
            Self::Camel => field_name.to_lower_camel_case(),
            Self::Snake => field_name.to_snake_case(),
            Self::ScreamingSnake => field_name.to_shouty_snake_case(),
            Self::Kebab => field_name.to_kebab_case(),
            Self::ScreamingKebab => field_name.to_shouty_kebab_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case::kebab("kebab-case", "max-pods")]
    #[case::snake("snake_case", "max_pods")]
    #[case::camel("camelCase", "maxPods")]
    #[case::pascal("PascalCase", "MaxPods")]
    #[case::screaming("SCREAMING-KEBAB-CASE", "MAX-PODS")]
    #[case::lower("lowercase", "max_pods")]
    fn applies_rule(#[case] rule: &str, #[case] expected: &str) -> syn::Result<()> {
        let lit = LitStr::new(rule, proc_macro2::Span::call_site());
        assert_eq!(RenameRule::parse(&lit)?.apply("max_pods"), expected);
        Ok(())
    }

    #[rstest]
    fn rejects_unknown_rule() {
        let lit: LitStr = parse_quote!("Title Case");
        let err = RenameRule::parse(&lit).err().map(|err| err.to_string());
        assert!(
            err.as_deref()
                .is_some_and(|msg| msg.contains("unsupported rename_all value 'Title Case'")),
            "unexpected error: {err:?}"
        );
    }
}
