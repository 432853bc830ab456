//! WCAG 2.1 relative luminance, contrast ratio, and threshold checks.
//!
//! Thresholds (ratio must be at least):
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5:1       | 3:1        |
//! | AAA   | 7:1         | 4.5:1      |
//!
//! The `Rgb` functions are the strict core. The `&str` functions are the
//! lenient surface used by audits: a malformed color resolves to
//! [`MALFORMED_LUMINANCE`] (black) instead of failing, and [`Resolved`]
//! records that the fallback happened.

use bitflags::bitflags;
use folio_color::{ColorError, Rgb, srgb_to_linear};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Luminance assigned to a color string that fails to parse.
///
/// Equal to the luminance of black, so a malformed color contrasts with
/// its partner exactly as `#000000` would.
pub const MALFORMED_LUMINANCE: f64 = 0.0;

// ---------------------------------------------------------------------------
// Levels and text sizes
// ---------------------------------------------------------------------------

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Aa,
    Aaa,
}

/// Text size class. Large is at least 18pt regular or 14pt bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    #[must_use]
    pub const fn from_large(is_large_text: bool) -> Self {
        if is_large_text { Self::Large } else { Self::Normal }
    }
}

impl Level {
    /// Minimum contrast ratio for this level at the given text size.
    #[must_use]
    pub const fn threshold(self, size: TextSize) -> f64 {
        match (self, size) {
            (Self::Aa, TextSize::Normal) | (Self::Aaa, TextSize::Large) => 4.5,
            (Self::Aa, TextSize::Large) => 3.0,
            (Self::Aaa, TextSize::Normal) => 7.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

bitflags! {
    /// Every WCAG contrast threshold a ratio clears.
    ///
    /// ```
    /// use folio_contrast::contrast::Compliance;
    ///
    /// let c = Compliance::from_ratio(5.0);
    /// assert!(c.contains(Compliance::AA | Compliance::AA_LARGE | Compliance::AAA_LARGE));
    /// assert!(!c.contains(Compliance::AAA));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Compliance: u8 {
        /// >= 4.5:1, normal text.
        const AA        = 1 << 0;
        /// >= 7:1, normal text.
        const AAA       = 1 << 1;
        /// >= 3:1, large text.
        const AA_LARGE  = 1 << 2;
        /// >= 4.5:1, large text.
        const AAA_LARGE = 1 << 3;
    }
}

impl Compliance {
    /// Classify a contrast ratio against all four thresholds.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let mut flags = Self::empty();
        for (flag, level, size) in [
            (Self::AA, Level::Aa, TextSize::Normal),
            (Self::AAA, Level::Aaa, TextSize::Normal),
            (Self::AA_LARGE, Level::Aa, TextSize::Large),
            (Self::AAA_LARGE, Level::Aaa, TextSize::Large),
        ] {
            if ratio >= level.threshold(size) {
                flags |= flag;
            }
        }
        flags
    }

    /// Whether the threshold for `level` at `size` is cleared.
    #[must_use]
    pub const fn meets(self, level: Level, size: TextSize) -> bool {
        let flag = match (level, size) {
            (Level::Aa, TextSize::Normal) => Self::AA,
            (Level::Aaa, TextSize::Normal) => Self::AAA,
            (Level::Aa, TextSize::Large) => Self::AA_LARGE,
            (Level::Aaa, TextSize::Large) => Self::AAA_LARGE,
        };
        self.contains(flag)
    }
}

// ---------------------------------------------------------------------------
// Strict core
// ---------------------------------------------------------------------------

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio from two luminance values.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Always >= 1.0 and independent of argument order.
#[must_use]
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio of two hex strings, failing on the first malformed one.
///
/// # Errors
///
/// Returns the [`ColorError`] of whichever input does not parse.
pub fn try_contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Rgb::parse(a)?, Rgb::parse(b)?))
}

// ---------------------------------------------------------------------------
// Lenient surface
// ---------------------------------------------------------------------------

/// The outcome of resolving a color string for contrast math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Color(Rgb),
    /// Did not parse; contributes [`MALFORMED_LUMINANCE`].
    Malformed(ColorError),
}

impl Resolved {
    /// Parse `input`, keeping the error instead of propagating it.
    #[must_use]
    pub fn resolve(input: &str) -> Self {
        match Rgb::parse(input) {
            Ok(color) => Self::Color(color),
            Err(err) => {
                warn!(%err, "malformed color treated as black");
                Self::Malformed(err)
            }
        }
    }

    #[must_use]
    pub fn luminance(&self) -> f64 {
        match self {
            Self::Color(color) => relative_luminance(*color),
            Self::Malformed(_) => MALFORMED_LUMINANCE,
        }
    }

    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Relative luminance of a hex string, or [`MALFORMED_LUMINANCE`].
#[must_use]
pub fn luminance_of(input: &str) -> f64 {
    Resolved::resolve(input).luminance()
}

/// Contrast ratio of two hex strings. Malformed inputs count as black.
#[must_use]
pub fn contrast_ratio_hex(a: &str, b: &str) -> f64 {
    ratio_from_luminance(luminance_of(a), luminance_of(b))
}

/// WCAG AA: ratio >= 4.5 (normal text) or >= 3.0 (large text).
#[must_use]
pub fn meets_aa(fg: &str, bg: &str, is_large_text: bool) -> bool {
    contrast_ratio_hex(fg, bg) >= Level::Aa.threshold(TextSize::from_large(is_large_text))
}

/// WCAG AAA: ratio >= 7.0 (normal text) or >= 4.5 (large text).
#[must_use]
pub fn meets_aaa(fg: &str, bg: &str, is_large_text: bool) -> bool {
    contrast_ratio_hex(fg, bg) >= Level::Aaa.threshold(TextSize::from_large(is_large_text))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
