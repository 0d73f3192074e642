//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format, followed by a per-language
//! coverage table and a one-line summary. Separate from core logic so that
//! transcov can be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::issues::{Issue, ReportLocation, Reportable, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of extra usages to display per issue.
const MAX_USAGES_DISPLAY: usize = 3;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    for issue in &result.issues {
        print_issue(issue, writer);
    }

    match &result.summary {
        CommandSummary::Check(summary) => print_check_summary(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col (1-based column for editors)
    match issue.location() {
        ReportLocation::Source(loc) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                loc.file,
                loc.line,
                loc.column + 1
            );
        }
        ReportLocation::Language(language) => {
            let _ = writeln!(writer, "  {} language '{}'", "-->".blue(), language);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let usages = issue.usages();
    let total = usages.len();
    let display_count = total.min(MAX_USAGES_DISPLAY);
    for (i, usage) in usages.iter().take(display_count).enumerate() {
        let remaining = total - display_count;
        let suffix = if i == display_count - 1 && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "   {} {} {}:{}:{}{}",
            "=".blue(),
            "used:".bold(),
            usage.file,
            usage.line,
            usage.column + 1,
            suffix
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

// ============================================================
// Check summary
// ============================================================

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

/// One row of the coverage table, without colors.
///
/// `width` is the display width of the widest language code.
fn format_coverage_row(
    language: &str,
    width: usize,
    percent: u32,
    missing: usize,
    unused: usize,
) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(language));
    format!(
        "{}{:padding$}  {:>3}%  {} missing, {} unused",
        language,
        "",
        percent,
        missing,
        unused,
        padding = padding
    )
}

fn color_for_percent(row: String, percent: u32) -> ColoredString {
    match percent {
        100 => row.green(),
        50..=99 => row.yellow(),
        _ => row.red(),
    }
}

fn print_check_summary<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;

    if !report.languages.is_empty() {
        let width = report
            .languages
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);

        let _ = writeln!(writer, "{}", "Coverage:".bold());
        for language in &report.languages {
            let percent = report
                .summary
                .coverage_percent
                .get(language)
                .copied()
                .unwrap_or(100);
            let missing = report.missing.get(language).map_or(0, Vec::len);
            let unused = report.unused.get(language).map_or(0, Vec::len);
            let row = format_coverage_row(language, width, percent, missing, unused);
            let _ = writeln!(writer, "  {}", color_for_percent(row, percent));
        }
        let _ = writeln!(writer);
    }

    let files = format!(
        "{}, {}",
        plural(summary.source_files_checked, "source file"),
        plural(summary.translation_files_loaded, "translation file")
    );

    if report.has_missing() {
        let mark = if summary.fail_on_missing {
            FAILURE_MARK.red()
        } else {
            FAILURE_MARK.yellow()
        };
        let _ = writeln!(
            writer,
            "{} {} across {} ({}, {} checked)",
            mark,
            plural(report.summary.total_missing, "missing translation"),
            plural(
                report.missing.values().filter(|m| !m.is_empty()).count(),
                "language"
            ),
            plural(report.total_keys, "key"),
            files
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} translated in {} ({} checked)",
                plural(report.total_keys, "key"),
                plural(report.languages.len(), "language"),
                files
            )
            .green()
        );
    }

    let hidden = report.summary.total_unused + report.dynamic_keys.len();
    if !verbose && hidden > 0 {
        let _ = writeln!(
            writer,
            "  {} unused, {} (use {} for details)",
            report.summary.total_unused,
            plural(report.dynamic_keys.len(), "dynamic usage"),
            "-v".cyan()
        );
    }

    if let Some(path) = &summary.report_path {
        let _ = writeln!(
            writer,
            "{}",
            format!("Report written to {}", path.display()).dimmed()
        );
    }
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}
