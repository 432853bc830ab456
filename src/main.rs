// SPDX-License-Identifier: MIT
//
// folio-audit — WCAG color-contrast auditor for the portfolio theme.
//
// This is the main binary that wires together the crates:
//
//   folio-color    → hex parsing, sRGB channel values
//   folio-contrast → luminance, contrast ratio, palettes, audit reports
//
// Commands:
//
//   ratio <FG> <BG>          contrast ratio of one pair (strict parsing)
//   check <FG> <BG>          ratio plus AA/AAA verdicts
//   audit                    audit a built-in palette, a JSON palette file,
//                            or a palette's roles resolved from a stylesheet
//   palettes                 list built-in palette names
//
// Report output goes to stdout. Logs go to stderr, filtered by RUST_LOG.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use folio_color::Rgb;
use folio_contrast::audit::{AuditOptions, audit_pairs_with, round2};
use folio_contrast::builtin::{builtin_names, builtin_palette, builtin_roles};
use folio_contrast::contrast::{Compliance, Level, TextSize, contrast_ratio};
use folio_contrast::palette::Palette;
use folio_contrast::report::{render_json, render_text};
use folio_contrast::tokens::ThemeTokens;

/// Exit status for a color argument that does not parse.
const EXIT_BAD_COLOR: u8 = 2;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio-audit", version, about = "WCAG color-contrast auditor")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the contrast ratio of two colors.
    Ratio { fg: String, bg: String },
    /// Print the ratio and AA/AAA verdicts for two colors.
    Check {
        fg: String,
        bg: String,
        #[arg(long, help = "Use large-text thresholds (>= 18pt, or 14pt bold)")]
        large: bool,
    },
    /// Audit a palette of named color pairs.
    Audit {
        #[arg(
            long,
            env = "FOLIO_AUDIT_PALETTE",
            default_value = "dark",
            help = "Built-in palette (its roles are used with --css)"
        )]
        palette: String,
        #[arg(long, help = "JSON palette file; takes precedence over --palette and --css")]
        file: Option<PathBuf>,
        #[arg(long, help = "Stylesheet whose --color-* properties fill the palette's roles")]
        css: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = LevelArg::Aa)]
        level: LevelArg,
        #[arg(long, help = "Exit non-zero if any pair fails")]
        strict: bool,
    },
    /// List built-in palettes.
    Palettes,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LevelArg {
    Aa,
    Aaa,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Aa => Self::Aa,
            LevelArg::Aaa => Self::Aaa,
        }
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Parse both colors or report the first bad one on stderr.
fn parse_pair(fg: &str, bg: &str) -> Option<(Rgb, Rgb)> {
    match (Rgb::parse(fg), Rgb::parse(bg)) {
        (Ok(fg), Ok(bg)) => Some((fg, bg)),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("folio-audit: {e}");
            None
        }
    }
}

fn cmd_ratio(fg: &str, bg: &str, as_json: bool) -> ExitCode {
    let Some((fg_rgb, bg_rgb)) = parse_pair(fg, bg) else {
        return ExitCode::from(EXIT_BAD_COLOR);
    };
    let ratio = contrast_ratio(fg_rgb, bg_rgb);
    if as_json {
        println!("{}", json!({ "foreground": fg, "background": bg, "ratio": round2(ratio) }));
    } else {
        println!("{ratio:.2}");
    }
    ExitCode::SUCCESS
}

fn cmd_check(fg: &str, bg: &str, large: bool, as_json: bool) -> ExitCode {
    let Some((fg_rgb, bg_rgb)) = parse_pair(fg, bg) else {
        return ExitCode::from(EXIT_BAD_COLOR);
    };
    let ratio = contrast_ratio(fg_rgb, bg_rgb);
    let compliance = Compliance::from_ratio(ratio);
    let size = TextSize::from_large(large);
    let aa = compliance.meets(Level::Aa, size);
    let aaa = compliance.meets(Level::Aaa, size);

    if as_json {
        println!(
            "{}",
            json!({
                "foreground": fg,
                "background": bg,
                "ratio": round2(ratio),
                "largeText": large,
                "passesAA": aa,
                "passesAAA": aaa,
            })
        );
    } else {
        let size_label = if large { "large text" } else { "normal text" };
        let verdict = |ok: bool| if ok { "PASS" } else { "FAIL" };
        println!("Contrast ratio: {ratio:.2}:1");
        println!(
            "WCAG AA  ({size_label}, >= {}:1): {}",
            Level::Aa.threshold(size),
            verdict(aa)
        );
        println!(
            "WCAG AAA ({size_label}, >= {}:1): {}",
            Level::Aaa.threshold(size),
            verdict(aaa)
        );
    }
    ExitCode::SUCCESS
}

/// Pick the palette an `audit` invocation asked for.
fn select_palette(name: &str, file: Option<&Path>, css: Option<&Path>) -> Result<Palette> {
    if let Some(path) = file {
        return Palette::load(path).with_context(|| format!("loading palette {}", path.display()));
    }

    if let Some(path) = css {
        let roles = builtin_roles(name).ok_or_else(|| unknown_palette(name))?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading stylesheet {}", path.display()))?;
        let tokens = ThemeTokens::from_css(&text);
        debug!(path = %path.display(), tokens = tokens.len(), "parsed stylesheet");
        return Palette::from_roles(name, roles, &tokens)
            .with_context(|| format!("resolving `{name}` roles from {}", path.display()));
    }

    builtin_palette(name).ok_or_else(|| unknown_palette(name))
}

fn unknown_palette(name: &str) -> anyhow::Error {
    anyhow!(
        "unknown palette `{name}` (available: {})",
        builtin_names().join(", ")
    )
}

fn cmd_audit(
    name: &str,
    file: Option<&Path>,
    css: Option<&Path>,
    level: LevelArg,
    strict: bool,
    as_json: bool,
) -> Result<ExitCode> {
    let palette = select_palette(name, file, css)?;
    info!(palette = %palette.name, pairs = palette.pairs.len(), "auditing palette");

    let options = AuditOptions {
        level: level.into(),
    };
    let report = audit_pairs_with(&palette.pairs, &options);

    if as_json {
        println!("{}", render_json(&report).context("serializing report")?);
    } else {
        print!("{}", render_text(&report, &options));
    }

    if strict && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_palettes(as_json: bool) {
    if as_json {
        println!("{}", json!(builtin_names()));
    } else {
        for name in builtin_names() {
            println!("{name}");
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Ratio { fg, bg } => Ok(cmd_ratio(fg, bg, cli.json)),
        Commands::Check { fg, bg, large } => Ok(cmd_check(fg, bg, *large, cli.json)),
        Commands::Audit {
            palette,
            file,
            css,
            level,
            strict,
        } => cmd_audit(palette, file.as_deref(), css.as_deref(), *level, *strict, cli.json),
        Commands::Palettes => {
            cmd_palettes(cli.json);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    run(&cli).unwrap_or_else(|e| {
        eprintln!("folio-audit: {e:#}");
        ExitCode::FAILURE
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────
