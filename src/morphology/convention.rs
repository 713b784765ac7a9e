use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of naming-convention tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize,
)]
pub enum NamingConvention {
    #[strum(serialize = "snake_case")]
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[strum(serialize = "camelCase")]
    #[serde(rename = "camelCase")]
    CamelCase,
    #[strum(serialize = "PascalCase")]
    PascalCase,
    #[strum(serialize = "CONSTANT_CASE")]
    #[serde(rename = "CONSTANT_CASE")]
    ConstantCase,
    #[strum(serialize = "PRIVATE_CONSTANT_CASE")]
    #[serde(rename = "PRIVATE_CONSTANT_CASE")]
    PrivateConstantCase,
    #[strum(serialize = "private_snake_case")]
    #[serde(rename = "private_snake_case")]
    PrivateSnakeCase,
    #[strum(serialize = "lowercase")]
    #[serde(rename = "lowercase")]
    Lowercase,
}

type Rule = (fn(&str) -> bool, NamingConvention);

// Ordered decision rules; the first predicate that matches wins. The order
// mirrors the underscore branch (constant before private before plain
// snake) followed by the uppercase branch (Pascal before camel).
const RULES: &[Rule] = &[
    (is_constant, NamingConvention::ConstantCase),
    (is_private_constant, NamingConvention::PrivateConstantCase),
    (is_private_snake, NamingConvention::PrivateSnakeCase),
    (is_snake, NamingConvention::SnakeCase),
    (is_pascal, NamingConvention::PascalCase),
    (is_camel, NamingConvention::CamelCase),
];

/// Classifies the naming convention of `identifier`.
///
/// Total over all strings; only the empty string maps to `None`, every
/// other input gets exactly one of the seven tags (`Lowercase` is the
/// fallback when no rule matches).
pub fn classify(identifier: &str) -> Option<NamingConvention> {
    if identifier.is_empty() {
        return None;
    }

    let convention = RULES
        .iter()
        .find(|(applies, _)| applies(identifier))
        .map(|(_, convention)| *convention)
        .unwrap_or(NamingConvention::Lowercase);

    Some(convention)
}

fn is_constant(s: &str) -> bool {
    s.contains('_') && is_all_uppercase(s)
}

fn is_private_constant(s: &str) -> bool {
    s.starts_with('_') && is_all_uppercase(&s[1..])
}

fn is_private_snake(s: &str) -> bool {
    s.starts_with('_')
}

fn is_snake(s: &str) -> bool {
    s.contains('_')
}

fn is_pascal(s: &str) -> bool {
    has_ascii_uppercase(s) && s.chars().next().map_or(false, char::is_uppercase)
}

fn is_camel(s: &str) -> bool {
    has_ascii_uppercase(s)
}

fn has_ascii_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

// At least one cased character and no lowercase ones, so uncased characters
// like underscores and digits do not count against an all-uppercase string.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(
            classify("snake_case_var"),
            Some(NamingConvention::SnakeCase)
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(classify("camelCaseVar"), Some(NamingConvention::CamelCase));
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(classify("PascalCase"), Some(NamingConvention::PascalCase));
    }

    #[test]
    fn test_constant_case() {
        assert_eq!(
            classify("CONSTANT_VAR"),
            Some(NamingConvention::ConstantCase)
        );
    }

    #[test]
    fn test_private_snake_case() {
        assert_eq!(
            classify("_private_var"),
            Some(NamingConvention::PrivateSnakeCase)
        );
        assert_eq!(classify("__"), Some(NamingConvention::PrivateSnakeCase));
    }

    #[test]
    fn test_leading_underscore_all_caps_counts_as_constant() {
        // Underscores are uncased, so `_PRIVATE` is "entirely uppercase"
        // and the constant rule fires before the private rules get a look.
        assert_eq!(classify("_PRIVATE"), Some(NamingConvention::ConstantCase));
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(classify("lowercase"), Some(NamingConvention::Lowercase));
        assert_eq!(classify("x1"), Some(NamingConvention::Lowercase));
    }

    #[test]
    fn test_closed_set_has_seven_tags() {
        use strum::IntoEnumIterator;

        assert_eq!(NamingConvention::iter().count(), 7);
    }

    #[test]
    fn test_empty_is_the_sentinel() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_digits_do_not_affect_case_rules() {
        assert_eq!(classify("MAX_8"), Some(NamingConvention::ConstantCase));
        assert_eq!(classify("var_2"), Some(NamingConvention::SnakeCase));
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(NamingConvention::SnakeCase.to_string(), "snake_case");
        assert_eq!(NamingConvention::CamelCase.to_string(), "camelCase");
        assert_eq!(
            NamingConvention::ConstantCase.to_string(),
            "CONSTANT_CASE"
        );
        assert_eq!(NamingConvention::Lowercase.to_string(), "lowercase");
    }

    proptest! {
        // classify is total: any non-empty string gets exactly one tag.
        #[test]
        fn classify_never_fails(s in "\\PC*") {
            let result = classify(&s);
            prop_assert_eq!(result.is_none(), s.is_empty());
        }
    }
}
