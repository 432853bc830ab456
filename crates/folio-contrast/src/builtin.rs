//! Built-in palettes — the portfolio's dark theme and its role pairings.
//!
//! Each palette is a list of [`Role`]s resolved against the theme's color
//! tokens, so the same roles can be re-audited against a stylesheet with
//! [`Palette::from_roles`].

use crate::palette::{Palette, Role};
use crate::tokens::ThemeTokens;

/// The dark theme's `--color-*` custom properties.
pub const DARK_TOKENS: &[(&str, &str)] = &[
    ("--color-bg-primary", "#1a1a1a"),
    ("--color-bg-secondary", "#2d2d2d"),
    ("--color-bg-tertiary", "#3a3a3a"),
    ("--color-text-primary", "#ffffff"),
    ("--color-text-secondary", "#a0a0a0"),
    ("--color-text-muted", "#6b7280"),
    ("--color-accent", "#3b82f6"),
    ("--color-accent-hover", "#2563eb"),
    ("--color-border", "#374151"),
    ("--color-border-light", "#4b5563"),
];

const fn role(name: &'static str, fg: &'static str, bg: &'static str) -> Role {
    Role { name, fg, bg }
}

/// Text, accent, and border combinations used across the site.
pub const DARK_ROLES: &[Role] = &[
    // Primary text
    role("Primary text on primary background", "--color-text-primary", "--color-bg-primary"),
    role("Primary text on secondary background", "--color-text-primary", "--color-bg-secondary"),
    role("Primary text on tertiary background", "--color-text-primary", "--color-bg-tertiary"),
    // Secondary text
    role("Secondary text on primary background", "--color-text-secondary", "--color-bg-primary"),
    role("Secondary text on secondary background", "--color-text-secondary", "--color-bg-secondary"),
    // Muted text
    role("Muted text on primary background", "--color-text-muted", "--color-bg-primary"),
    role("Muted text on secondary background", "--color-text-muted", "--color-bg-secondary"),
    // Accent
    role("Accent on primary background", "--color-accent", "--color-bg-primary"),
    role("Accent on secondary background", "--color-accent", "--color-bg-secondary"),
    role("Primary text on accent background", "--color-text-primary", "--color-accent"),
    // Borders are decorative, not text, but are still reported.
    role("Border on primary background", "--color-border", "--color-bg-primary"),
    role("Light border on primary background", "--color-border-light", "--color-bg-primary"),
];

/// Button label on button fill, at rest and on hover.
pub const BUTTON_ROLES: &[Role] = &[
    role("Primary button", "--color-text-primary", "--color-accent"),
    role("Hover state", "--color-text-primary", "--color-accent-hover"),
];

/// The dark theme's tokens as a lookup table.
#[must_use]
pub fn dark_tokens() -> ThemeTokens {
    DARK_TOKENS.iter().copied().collect()
}

/// Role table for a built-in palette name.
#[must_use]
pub fn builtin_roles(name: &str) -> Option<&'static [Role]> {
    match name {
        "default" | "dark" => Some(DARK_ROLES),
        "buttons" => Some(BUTTON_ROLES),
        _ => None,
    }
}

/// Look up a builtin palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_palette(name: &str) -> Option<Palette> {
    let roles = builtin_roles(name)?;
    // DARK_TOKENS defines every token the built-in roles reference.
    Palette::from_roles(name, roles, &dark_tokens()).ok()
}

/// List all available builtin palette names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "dark", "buttons"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
