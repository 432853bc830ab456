//! Human- and machine-readable renderings of an [`AuditReport`].

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::audit::{AuditOptions, AuditReport, ComplianceResult, Side, Status};
use crate::contrast::TextSize;

const fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

/// Render the report as an aligned plain-text table with a summary.
///
/// ```text
/// Color contrast audit (WCAG AA)
///
///   PASS  Primary text on primary background  17.40:1  AA ✓  AAA ✓
///   FAIL  Muted text on primary background     3.60:1  AA ✗  AAA ✗
///         → Increase contrast ratio to at least 4.5:1
///
/// Passed: 1/2
/// Failed: 1
/// Success rate: 50%
/// ```
#[must_use]
pub fn render_text(report: &AuditReport, options: &AuditOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Color contrast audit (WCAG {})", options.level.label());
    out.push('\n');

    let name_width = report
        .results
        .iter()
        .map(|r| r.name.width())
        .max()
        .unwrap_or(0);

    for result in &report.results {
        write_result(&mut out, result, name_width, options);
    }

    if !report.results.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "Passed: {}/{}", report.passed, report.total());
    let _ = writeln!(out, "Failed: {}", report.failed);
    let _ = writeln!(out, "Success rate: {}%", report.success_rate());
    out
}

fn write_result(out: &mut String, r: &ComplianceResult, name_width: usize, options: &AuditOptions) {
    // Pad by display width; `{:<n}` would count chars.
    let padding = " ".repeat(name_width.saturating_sub(r.name.width()));
    let size = if r.large_text { " (large)" } else { "" };
    let _ = writeln!(
        out,
        "  {}  {}{}  {:>6.2}:1  AA {}  AAA {}{}",
        r.status.label(),
        r.name,
        padding,
        r.ratio,
        mark(r.passes_aa),
        mark(r.passes_aaa),
        size,
    );

    for side in &r.malformed {
        let (label, value) = match side {
            Side::Foreground => ("foreground", &r.foreground),
            Side::Background => ("background", &r.background),
        };
        let _ = writeln!(out, "        ! {label} `{value}` is not a hex color; treated as black");
    }

    if r.status == Status::Fail {
        let threshold = options.level.threshold(TextSize::from_large(r.large_text));
        let _ = writeln!(out, "        → Increase contrast ratio to at least {threshold}:1");
    }
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Propagates serialization failures from `serde_json`.
pub fn render_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
