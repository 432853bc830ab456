// SPDX-License-Identifier: MIT
//
// folio-color — sRGB color values for folio-audit.
//
// Theme colors arrive as CSS hex strings (`#1a1a1a`, `#fff`, `3b82f6`).
// This crate owns the parse boundary: a string either normalizes to
// exactly three 8-bit channels or it is rejected with a typed error.
// Everything downstream (luminance, contrast, auditing) works on the
// parsed `Rgb` value and never touches raw strings again.

pub mod color;

pub use color::{ColorError, Rgb, normalize, srgb_to_linear};
