use crate::config::MorphologyConfig;

/// Decomposes identifiers into morphemes using fixed affix tables.
///
/// An identifier is first split on word boundaries (underscores and the
/// position before each uppercase letter), then each part is checked for
/// at most one prefix strip and at most one suffix strip. Parts decompose
/// independently; no whole-word lookahead is needed.
#[derive(Debug, Clone)]
pub struct Decomposer {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl Decomposer {
    pub fn new(config: MorphologyConfig) -> Self {
        Self {
            prefixes: config.prefixes,
            suffixes: config.suffixes,
        }
    }

    /// Decomposes `identifier` into an ordered morpheme sequence.
    ///
    /// Total over all strings: the empty string yields an empty sequence,
    /// and a string with no splittable parts (e.g. `"_"`) is returned whole.
    pub fn decompose(&self, identifier: &str) -> Vec<String> {
        if identifier.is_empty() {
            return Vec::new();
        }

        let parts = split_boundaries(identifier);
        if parts.is_empty() {
            return vec![identifier.to_string()];
        }

        let mut morphemes = Vec::new();
        for part in parts {
            self.decompose_part(part, &mut morphemes);
        }
        morphemes
    }

    // Emits prefix, root, and suffix morphemes for one boundary-split part.
    // Affix tables are first-match-wins, and an affix only strips when it is
    // strictly shorter than what it strips from, so a part never reduces to
    // nothing.
    fn decompose_part(&self, part: &str, morphemes: &mut Vec<String>) {
        let mut rest = part;

        for prefix in &self.prefixes {
            if strips_prefix(rest, prefix) {
                morphemes.push(prefix.clone());
                rest = &rest[prefix.len()..];
                break;
            }
        }

        for suffix in &self.suffixes {
            if strips_suffix(rest, suffix) {
                let root = &rest[..rest.len() - suffix.len()];
                if !root.is_empty() {
                    morphemes.push(root.to_string());
                }
                morphemes.push(suffix.clone());
                return;
            }
        }

        if !rest.is_empty() {
            morphemes.push(rest.to_string());
        }
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(MorphologyConfig::default())
    }
}

// Splits on underscores (separator dropped) and before each uppercase
// letter (letter kept). Empty parts are dropped.
fn split_boundaries(identifier: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, c) in identifier.char_indices() {
        if c == '_' {
            if i > start {
                parts.push(&identifier[start..i]);
            }
            start = i + 1;
        } else if c.is_ascii_uppercase() {
            if i > start {
                parts.push(&identifier[start..i]);
            }
            start = i;
        }
    }
    if start < identifier.len() {
        parts.push(&identifier[start..]);
    }

    parts
}

// Case-insensitive, and only when the prefix is strictly shorter than the
// part. The `get` guards keep a non-ASCII part from panicking on a byte
// boundary.
fn strips_prefix(part: &str, prefix: &str) -> bool {
    part.len() > prefix.len()
        && part
            .get(..prefix.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

fn strips_suffix(part: &str, suffix: &str) -> bool {
    part.len() > suffix.len()
        && part
            .get(part.len() - suffix.len()..)
            .map_or(false, |tail| tail.eq_ignore_ascii_case(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose(identifier: &str) -> Vec<String> {
        Decomposer::default().decompose(identifier)
    }

    #[test]
    fn test_camel_case_split() {
        assert_eq!(
            decompose("calculateTotalValue"),
            vec!["calculate", "Total", "Value"]
        );
    }

    #[test]
    fn test_snake_case_split() {
        assert_eq!(decompose("test_function"), vec!["test", "func", "tion"]);
        assert_eq!(decompose("my_var"), vec!["my", "var"]);
    }

    #[test]
    fn test_prefix_strip() {
        assert_eq!(decompose("unhappy"), vec!["un", "happy"]);
        assert_eq!(decompose("preload"), vec!["pre", "load"]);
    }

    #[test]
    fn test_prefix_strip_is_case_insensitive() {
        // The emitted prefix morpheme is the table entry, not the slice.
        assert_eq!(decompose("Unwrap"), vec!["un", "wrap"]);
    }

    #[test]
    fn test_suffix_strip() {
        assert_eq!(decompose("calculator"), vec!["calculat", "or"]);
        assert_eq!(decompose("statement"), vec!["state", "ment"]);
    }

    #[test]
    fn test_suffix_table_order_wins() {
        // "er" precedes "or" in the table; "converter" ends in both "er"
        // and nothing else, "professor" only in "or".
        assert_eq!(decompose("converter"), vec!["convert", "er"]);
        assert_eq!(decompose("professor"), vec!["profess", "or"]);
    }

    #[test]
    fn test_prefix_and_suffix_on_one_part() {
        assert_eq!(decompose("subversion"), vec!["sub", "ver", "sion"]);
    }

    #[test]
    fn test_affix_must_be_strictly_shorter() {
        // "er" is not stripped from "er" itself, nor "un" from "un".
        assert_eq!(decompose("er"), vec!["er"]);
        assert_eq!(decompose("un"), vec!["un"]);
    }

    #[test]
    fn test_no_affix_identity() {
        assert_eq!(decompose("value"), vec!["value"]);
        assert_eq!(decompose("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_empty_identifier() {
        assert!(decompose("").is_empty());
    }

    #[test]
    fn test_underscores_only() {
        assert_eq!(decompose("_"), vec!["_"]);
        assert_eq!(decompose("___"), vec!["___"]);
    }

    #[test]
    fn test_leading_and_trailing_underscores() {
        assert_eq!(decompose("_private_var"), vec!["private", "var"]);
        assert_eq!(decompose("var_"), vec!["var"]);
    }

    #[test]
    fn test_consecutive_uppercase() {
        assert_eq!(decompose("ABC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_custom_tables() {
        let config = MorphologyConfig {
            prefixes: vec!["re".to_string()],
            suffixes: vec!["ing".to_string()],
        };
        let decomposer = Decomposer::new(config);
        assert_eq!(decomposer.decompose("reloading"), vec!["re", "load", "ing"]);
    }
}
