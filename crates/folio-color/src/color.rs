// SPDX-License-Identifier: MIT
//
// folio-color color value — 24-bit sRGB with hex parsing.
//
// Single-character variable names (r, g, b, c) are the standard
// mathematical convention in color science.
//
// Accepted input forms:
//
//   #RGB   RGB   #RRGGBB   RRGGBB      (hex digits are case-insensitive)
//
// Shorthand digits are duplicated (`f0a` → `ff00aa`). Anything that does
// not land on exactly six hex digits after expansion is a `ColorError`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a string failed to normalize to a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Digit count (after stripping `#`) is neither 3 nor 6.
    #[error("invalid color `{input}`: expected 3 or 6 hex digits, found {len}")]
    Length { input: String, len: usize },
    /// A character that is not a hexadecimal digit.
    #[error("invalid color `{input}`: `{ch}` is not a hex digit")]
    Digit { input: String, ch: char },
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// # Examples
///
/// ```
/// use folio_color::Rgb;
///
/// let accent = Rgb::parse("#3b82f6").unwrap();
/// assert_eq!(accent, Rgb::new(0x3b, 0x82, 0xf6));
///
/// // Shorthand and bare forms resolve to the same value.
/// assert_eq!(Rgb::parse("fff").unwrap(), Rgb::WHITE);
/// assert_eq!(accent.to_hex(), "#3b82f6");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-digit hex color with an optional leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the digit count is wrong or a character
    /// is not a hex digit.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = normalize(s)?;
        let bytes = digits.as_bytes();
        // normalize() guarantees six ASCII hex digits.
        let channel = |i: usize| parse_hex_byte(&bytes[i..i + 2]).unwrap_or(0);
        Ok(Self::new(channel(0), channel(2), channel(4)))
    }

    /// Channel values scaled to [0.0, 1.0].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Normalize a hex color string to its six lowercase digits (no `#`).
///
/// One leading `#` is stripped; three digits expand by duplication.
///
/// # Errors
///
/// Returns [`ColorError::Length`] unless exactly 3 or 6 characters remain,
/// and [`ColorError::Digit`] for the first non-hex character.
pub fn normalize(input: &str) -> Result<String, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let len = digits.chars().count();
    if len != 3 && len != 6 {
        return Err(ColorError::Length {
            input: input.to_owned(),
            len,
        });
    }

    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::Digit {
            input: input.to_owned(),
            ch,
        });
    }

    let expanded: String = if len == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_owned()
    };
    Ok(expanded.to_ascii_lowercase())
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Transfer Function ───────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
