//! Batch auditing of named foreground/background pairs.
//!
//! Every pair is evaluated independently and in input order. Results are
//! recomputed on each call; nothing is cached.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::contrast::{Compliance, Level, Resolved, TextSize, ratio_from_luminance};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A named foreground/background combination from a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub name: String,
    pub fg: String,
    pub bg: String,
    /// Judge against the large-text thresholds.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub large_text: bool,
}

impl ColorPair {
    #[must_use]
    pub fn new(name: impl Into<String>, fg: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fg: fg.into(),
            bg: bg.into(),
            large_text: false,
        }
    }

    /// Mark this pair as large text (>= 18pt, or 14pt bold).
    #[must_use]
    pub fn large(mut self) -> Self {
        self.large_text = true;
        self
    }

    #[must_use]
    pub const fn text_size(&self) -> TextSize {
        TextSize::from_large(self.large_text)
    }
}

/// Which level decides a pair's [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditOptions {
    pub level: Level,
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

/// Side of a pair whose color string did not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Foreground,
    Background,
}

/// The evaluation of one [`ColorPair`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub name: String,
    pub foreground: String,
    pub background: String,
    /// Contrast ratio rounded to two decimal places.
    pub ratio: f64,
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    pub status: Status,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub large_text: bool,
    /// Sides that fell back to black because they failed to parse.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub malformed: Vec<Side>,
}

/// Aggregate outcome of an audit run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AuditReport {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<ComplianceResult>,
}

impl AuditReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// True when no pair failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ComplianceResult> {
        self.results.iter().filter(|r| r.status == Status::Fail)
    }

    /// Success rate as a whole percentage. Zero for an empty report.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn success_rate(&self) -> u32 {
        if self.results.is_empty() {
            return 0;
        }
        (self.passed as f64 / self.total() as f64 * 100.0).round() as u32
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Round to two decimal places for reporting.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate a single pair.
#[must_use]
pub fn evaluate(pair: &ColorPair, options: &AuditOptions) -> ComplianceResult {
    let fg = Resolved::resolve(&pair.fg);
    let bg = Resolved::resolve(&pair.bg);

    let mut malformed = Vec::new();
    if fg.is_malformed() {
        malformed.push(Side::Foreground);
    }
    if bg.is_malformed() {
        malformed.push(Side::Background);
    }

    let ratio = ratio_from_luminance(fg.luminance(), bg.luminance());
    let compliance = Compliance::from_ratio(ratio);
    let size = pair.text_size();

    let status = if compliance.meets(options.level, size) {
        Status::Pass
    } else {
        Status::Fail
    };

    debug!(
        pair = %pair.name,
        fg = %pair.fg,
        bg = %pair.bg,
        ratio,
        status = status.label(),
        "evaluated pair"
    );

    ComplianceResult {
        name: pair.name.clone(),
        foreground: pair.fg.clone(),
        background: pair.bg.clone(),
        ratio: round2(ratio),
        passes_aa: compliance.meets(Level::Aa, size),
        passes_aaa: compliance.meets(Level::Aaa, size),
        status,
        large_text: pair.large_text,
        malformed,
    }
}

/// Audit pairs at WCAG AA, the level the theme is held to.
#[must_use]
pub fn audit_pairs(pairs: &[ColorPair]) -> AuditReport {
    audit_pairs_with(pairs, &AuditOptions::default())
}

/// Audit pairs, in input order, with `status` decided by `options.level`.
#[must_use]
pub fn audit_pairs_with(pairs: &[ColorPair], options: &AuditOptions) -> AuditReport {
    let results: Vec<ComplianceResult> = pairs.iter().map(|p| evaluate(p, options)).collect();
    let passed = results.iter().filter(|r| r.status == Status::Pass).count();
    let failed = results.len() - passed;

    info!(
        level = options.level.label(),
        passed,
        failed,
        total = results.len(),
        "contrast audit finished"
    );

    AuditReport {
        passed,
        failed,
        results,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
