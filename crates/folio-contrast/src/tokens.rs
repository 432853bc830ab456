//! Theme color tokens read from CSS custom properties.
//!
//! Only `--color-*` declarations are collected. Later declarations win, as
//! in the cascade. Values are kept verbatim; a non-hex value (`transparent`,
//! `rgb(...)`) is left for the audit to report as malformed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static COLOR_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(--color-[A-Za-z0-9_-]+)\s*:\s*([^;}]+?)\s*(?:!important\s*)?[;}]")
        .expect("color property pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTokens {
    values: BTreeMap<String, String>,
}

impl ThemeTokens {
    /// Collect every `--color-*: value;` declaration in `css`.
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        let values = COLOR_PROPERTY
            .captures_iter(css)
            .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STYLESHEET: &str = r"
        :root {
            --color-bg-primary: #1a1a1a;
            --color-text-primary:#FFFFFF;
            --color-accent : #3b82f6 ;
            --space-4: 1rem;
            --radius-lg: 0.5rem;
        }
    ";

    #[test]
    fn collects_color_properties_only() {
        let tokens = ThemeTokens::from_css(STYLESHEET);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.get("--color-bg-primary"), Some("#1a1a1a"));
        assert_eq!(tokens.get("--color-text-primary"), Some("#FFFFFF"));
        assert_eq!(tokens.get("--color-accent"), Some("#3b82f6"));
        assert_eq!(tokens.get("--space-4"), None);
    }

    #[test]
    fn later_declaration_wins() {
        let tokens = ThemeTokens::from_css(
            ":root { --color-bg: #000; } [data-theme=light] { --color-bg: #fff; }",
        );
        assert_eq!(tokens.get("--color-bg"), Some("#fff"));
    }

    #[test]
    fn last_declaration_without_semicolon() {
        let tokens = ThemeTokens::from_css(":root{--color-border:#374151}");
        assert_eq!(tokens.get("--color-border"), Some("#374151"));
    }

    #[test]
    fn important_flag_is_dropped() {
        let tokens = ThemeTokens::from_css(":root { --color-accent: #2563eb !important; }");
        assert_eq!(tokens.get("--color-accent"), Some("#2563eb"));
    }

    #[test]
    fn non_hex_values_are_kept_verbatim() {
        let tokens = ThemeTokens::from_css(":root { --color-overlay: transparent; }");
        assert_eq!(tokens.get("--color-overlay"), Some("transparent"));
    }

    #[test]
    fn empty_stylesheet() {
        assert!(ThemeTokens::from_css("body { margin: 0 }").is_empty());
    }

    #[test]
    fn from_iterator() {
        let tokens: ThemeTokens = [("--color-a", "#111")].into_iter().collect();
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec![("--color-a", "#111")]);
    }
}
