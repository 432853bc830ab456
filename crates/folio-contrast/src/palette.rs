//! Palettes — named, ordered lists of color pairs to audit.
//!
//! A palette comes from one of three places:
//!
//! - a built-in table ([`crate::builtin`])
//! - a JSON file (`{ "name": ..., "pairs": [{ "name", "fg", "bg" }] }`)
//! - role definitions resolved against a stylesheet's `--color-*` tokens

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::audit::ColorPair;
use crate::tokens::ThemeTokens;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette `{0}` has no color pairs")]
    Empty(String),
    #[error("role `{role}` references undefined token `{token}`")]
    Token { role: String, token: String },
}

/// A foreground/background pairing expressed as theme token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub name: &'static str,
    pub fg: &'static str,
    pub bg: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub pairs: Vec<ColorPair>,
}

impl Palette {
    /// Parse a palette from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`] for malformed JSON and
    /// [`PaletteError::Empty`] when `pairs` is empty.
    pub fn from_json(text: &str) -> Result<Self, PaletteError> {
        let palette: Self = serde_json::from_str(text)?;
        if palette.pairs.is_empty() {
            return Err(PaletteError::Empty(palette.name));
        }
        Ok(palette)
    }

    /// Read and parse a palette file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Palette::from_json`].
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let text = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_json(&text)?;
        debug!(path = %path.display(), name = %palette.name, pairs = palette.pairs.len(), "loaded palette");
        Ok(palette)
    }

    /// Build a palette by looking up each role's tokens.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Token`] for the first token `tokens` lacks.
    pub fn from_roles(
        name: impl Into<String>,
        roles: &[Role],
        tokens: &ThemeTokens,
    ) -> Result<Self, PaletteError> {
        let lookup = |role: &Role, token: &str| {
            tokens
                .get(token)
                .map(str::to_owned)
                .ok_or_else(|| PaletteError::Token {
                    role: role.name.to_owned(),
                    token: token.to_owned(),
                })
        };

        let pairs = roles
            .iter()
            .map(|role| -> Result<ColorPair, PaletteError> {
                Ok(ColorPair::new(role.name, lookup(role, role.fg)?, lookup(role, role.bg)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            pairs,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "name": "light",
        "pairs": [
            { "name": "Body text", "fg": "#1a1a1a", "bg": "#ffffff" },
            { "name": "Heading", "fg": "#6b7280", "bg": "#ffffff", "large_text": true }
        ]
    }"##;

    #[test]
    fn parses_json() {
        let palette = Palette::from_json(SAMPLE).unwrap();
        assert_eq!(palette.name, "light");
        assert_eq!(palette.pairs.len(), 2);
        assert_eq!(palette.pairs[0], ColorPair::new("Body text", "#1a1a1a", "#ffffff"));
        assert!(palette.pairs[1].large_text);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = Palette::from_json(r#"{ "name": "nothing", "pairs": [] }"#).unwrap_err();
        assert!(matches!(err, PaletteError::Empty(ref name) if name == "nothing"));
        assert_eq!(err.to_string(), "palette `nothing` has no color pairs");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Palette::from_json(r#"{ "name": "x", "pairs": [ { "name": "a" } ] }"#).unwrap_err();
        assert!(matches!(err, PaletteError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let palette = Palette::load(file.path()).unwrap();
        assert_eq!(palette.name, "light");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Palette::load(&path).unwrap_err();
        assert!(matches!(err, PaletteError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn roles_resolve_against_tokens() {
        let tokens = ThemeTokens::from_css(":root { --color-fg: #fff; --color-bg: #000; }");
        let roles = [Role {
            name: "Text",
            fg: "--color-fg",
            bg: "--color-bg",
        }];
        let palette = Palette::from_roles("css", &roles, &tokens).unwrap();
        assert_eq!(palette.pairs, vec![ColorPair::new("Text", "#fff", "#000")]);
    }

    #[test]
    fn missing_token_is_an_error() {
        let tokens = ThemeTokens::from_css(":root { --color-fg: #fff; }");
        let roles = [Role {
            name: "Text",
            fg: "--color-fg",
            bg: "--color-bg",
        }];
        let err = Palette::from_roles("css", &roles, &tokens).unwrap_err();
        assert_eq!(
            err.to_string(),
            "role `Text` references undefined token `--color-bg`"
        );
    }
}
