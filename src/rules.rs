//! Literal replacement rules.
//!
//! A rule is a (search, replace) pair applied as a verbatim substring
//! replace-all. There is no pattern language: a rule either finds its search
//! text somewhere in the content and replaces every occurrence, or leaves the
//! content untouched. Applying a rule is one-directional, so re-applying it
//! to its own output is a no-op - this is what makes whole runs idempotent
//! without any explicit bookkeeping.

/// A verbatim substring replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Exact text to search for.
    pub search: String,
    /// Text every occurrence is replaced with.
    pub replace: String,
}

impl ReplacementRule {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }

    /// Whether this rule would change the given content.
    pub fn matches(&self, content: &str) -> bool {
        content.contains(&self.search)
    }

    /// Replace every occurrence of the search text.
    ///
    /// Returns the content unchanged (as a fresh allocation) when the search
    /// text is absent; partial application is not possible.
    pub fn apply(&self, content: &str) -> String {
        content.replace(&self.search, &self.replace)
    }
}

/// The two substitutions this migration exists to perform: swap the hardcoded
/// backend URL assignment for an environment-variable fallback, and update
/// the comment that sat next to it.
pub fn default_rules() -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new(
            "const API_URL = 'http://localhost:5000';",
            "const API_URL = process.env.NEXT_PUBLIC_API_URL || 'http://localhost:5000';",
        ),
        ReplacementRule::new(
            "// Hardcoded API URL for testing",
            "// Use environment variable for backend URL",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let rule = ReplacementRule::new("foo", "bar");
        assert_eq!(rule.apply("foo foo foo"), "bar bar bar");
    }

    #[test]
    fn test_apply_no_match_is_identity() {
        let rule = ReplacementRule::new("foo", "bar");
        assert_eq!(rule.apply("baz qux"), "baz qux");
        assert!(!rule.matches("baz qux"));
    }

    #[test]
    fn test_default_rules_transform_target_lines() {
        let input = "const API_URL = 'http://localhost:5000';\n// Hardcoded API URL for testing\n";
        let mut content = input.to_string();
        for rule in default_rules() {
            content = rule.apply(&content);
        }
        assert_eq!(
            content,
            "const API_URL = process.env.NEXT_PUBLIC_API_URL || 'http://localhost:5000';\n\
             // Use environment variable for backend URL\n"
        );
    }

    #[test]
    fn test_default_url_rule_is_one_directional() {
        // The replacement still contains the localhost literal but not the
        // full search line, so re-application must not match.
        let rule = &default_rules()[0];
        let once = rule.apply(rule.search.as_str());
        assert!(!rule.matches(&once));
        assert_eq!(rule.apply(&once), once);
    }

    proptest! {
        #[test]
        fn prop_apply_without_match_is_identity(content in "[a-z \n]{0,64}") {
            let rule = ReplacementRule::new("API_URL", "BACKEND_URL");
            prop_assume!(!content.contains(&rule.search));
            prop_assert_eq!(rule.apply(&content), content);
        }

        #[test]
        fn prop_apply_is_idempotent_when_replace_excludes_search(
            prefix in "[a-z \n]{0,32}",
            suffix in "[a-z \n]{0,32}",
        ) {
            let rule = ReplacementRule::new("API_URL", "backend endpoint");
            let content = format!("{prefix}API_URL{suffix}");
            let once = rule.apply(&content);
            prop_assert_eq!(rule.apply(&once), once);
        }
    }
}
