//! # folio-contrast — WCAG contrast evaluation for the portfolio theme
//!
//! Evaluates foreground/background color pairs against the WCAG 2.1
//! contrast thresholds and audits whole palettes of them.
//!
//! # Architecture
//!
//! ```text
//! builtin.rs / palette.rs / tokens.rs
//!     │   named ColorPairs (built in, JSON file, or CSS custom properties)
//!     ▼
//! contrast.rs: luminance → contrast ratio → AA/AAA thresholds
//!     │
//!     ▼
//! audit.rs:    per-pair ComplianceResult + pass/fail counts
//!     │
//!     ▼
//! report.rs:   aligned text table or JSON
//! ```
//!
//! Malformed color strings never abort an audit. They resolve to black
//! luminance and are flagged on the result, so a typo in a palette shows up
//! in the report instead of hiding behind a crash.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod audit;
pub mod builtin;
pub mod contrast;
pub mod palette;
pub mod report;
pub mod tokens;

pub use audit::{AuditOptions, AuditReport, ColorPair, ComplianceResult, Status, audit_pairs};
pub use contrast::{Level, TextSize, contrast_ratio, contrast_ratio_hex, meets_aa, meets_aaa};
pub use palette::{Palette, PaletteError};
