//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow langfill to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AddSummary, CommandResult, CommandSummary, InitSummary, LanguagesSummary, ListSummary,
    MissingSummary, SyncSummary, TranslateRunSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    TranslateSummary,
    data::{KeyPath, MergedEntry, TranslationType},
    store::KeyAction,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Shown in `list` for a key the language does not have.
const ABSENT: &str = "-";

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Missing(summary) => print_missing(summary, writer),
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Translate(summary) => print_translate(summary, writer),
        CommandSummary::List(summary) => print_list(summary, writer),
        CommandSummary::Add(summary) => print_add(summary, writer),
        CommandSummary::Languages(summary) => print_languages(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Completion notice for one language of a `translate` run.
pub fn print_language_done(summary: &TranslateSummary) {
    print_language_done_to(summary, &mut io::stdout().lock());
}

pub fn print_language_done_to<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    if summary.skipped {
        let _ = writeln!(
            writer,
            "{} {} (source language)",
            "Skipped".dimmed(),
            summary.language.bold()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Translated {} key(s) for {}",
            summary.translated.len(),
            summary.language
        )
        .green()
    );
}

fn describe(path: &KeyPath) -> String {
    match path.kind {
        TranslationType::Single if path.group != "single" => {
            format!("{}  {}", path.key, format!("({})", path.group).dimmed())
        }
        TranslationType::Single => format!("{}  {}", path.key, "(single)".dimmed()),
        TranslationType::Group => path.to_string(),
    }
}

fn print_missing<W: Write>(summary: &MissingSummary, writer: &mut W) {
    let mut total = 0;
    let mut language_count = 0;

    for (language, missing) in &summary.languages {
        if missing.is_empty() {
            continue;
        }
        total += missing.len();
        language_count += 1;

        let _ = writeln!(
            writer,
            "{}: {} missing key(s)",
            language.bold(),
            missing.len()
        );
        for entry in missing.iter() {
            let _ = writeln!(writer, "  {}", describe(&entry.path()));
        }
    }

    if total == 0 {
        let what = if summary.include_empty {
            "No missing or empty translations"
        } else {
            "No missing translations"
        };
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), what.green());
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} missing key(s) in {} language(s).",
        FAILURE_MARK.red(),
        total,
        language_count
    );
    let _ = writeln!(
        writer,
        "Run {} to add them as empty values.",
        "langfill sync --apply".cyan()
    );
}

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    let total: usize = summary.languages.iter().map(|l| l.keys.len()).sum();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Every language has every key".green()
        );
        return;
    }

    let language_count = summary
        .languages
        .iter()
        .filter(|l| !l.keys.is_empty())
        .count();

    if !summary.is_apply {
        for saved in summary.languages.iter().filter(|l| !l.keys.is_empty()) {
            let _ = writeln!(writer, "{}:", saved.language.bold());
            for path in &saved.keys {
                let _ = writeln!(writer, "  {} {}", "+".green(), describe(path));
            }
        }
        let _ = writeln!(
            writer,
            "{} {} empty key(s) in {} language(s).",
            "Would add".yellow().bold(),
            total,
            language_count
        );
        let _ = writeln!(writer, "Run with {} to write these keys.", "--apply".cyan());
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} empty key(s) in {} language(s).",
        "Added".green().bold(),
        total,
        language_count
    );
    for saved in summary.languages.iter().filter(|l| !l.keys.is_empty()) {
        let _ = writeln!(writer, "  - {}: {} key(s)", saved.language, saved.keys.len());
    }
}

fn print_translate<W: Write>(summary: &TranslateRunSummary, writer: &mut W) {
    for language in &summary.languages {
        for mismatch in &language.mismatches {
            let _ = writeln!(
                writer,
                "{}: placeholder mismatch in {} \"{}\"",
                "warning".bold().yellow(),
                language.language,
                mismatch.path
            );
            let _ = writeln!(
                writer,
                "  {} expected [{}], got [{}]",
                "=".blue(),
                mismatch.mismatch.expected.join(", "),
                mismatch.mismatch.actual.join(", ")
            );
            let _ = writeln!(writer, "  {} saved \"{}\"", "=".blue(), mismatch.text);
        }
        for failure in &language.failures {
            let _ = writeln!(
                writer,
                "{}: failed to translate {} \"{}\": {}",
                "error".bold().red(),
                language.language,
                failure.path,
                failure.error
            );
        }
    }

    let translated: usize = summary.languages.iter().map(|l| l.translated.len()).sum();
    let failed: usize = summary.languages.iter().map(|l| l.failures.len()).sum();
    let mismatched: usize = summary.languages.iter().map(|l| l.mismatches.len()).sum();

    if failed == 0 && mismatched == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} key(s) translated, {} failed, {} with placeholder mismatches.",
        FAILURE_MARK.red(),
        translated,
        failed,
        mismatched
    );
}

fn print_list<W: Write>(summary: &ListSummary, writer: &mut W) {
    let view = &summary.view;
    if view.is_empty() {
        let message = match &summary.filter {
            Some(filter) => format!("No translations match \"{}\"", filter),
            None => format!("No {} translations found", view.source_language()),
        };
        let _ = writeln!(writer, "{}", message);
        return;
    }

    let rows: Vec<[String; 4]> = view.entries().map(|entry| row(&entry)).collect();
    let header = [
        "GROUP".to_string(),
        "KEY".to_string(),
        view.source_language().to_uppercase(),
        view.language().to_uppercase(),
    ];

    let mut widths = header.each_ref().map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
    let _ = writeln!(
        writer,
        "{} key(s) in {} group(s).",
        view.len(),
        view.group_count()
    );
}

fn row(entry: &MergedEntry<'_>) -> [String; 4] {
    [
        entry.group.to_string(),
        entry.key.to_string(),
        entry.source.unwrap_or(ABSENT).to_string(),
        entry.target.unwrap_or(ABSENT).to_string(),
    ]
}

/// Pad cells by display width so CJK text stays aligned.
fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(width - cell.width() + 2));
        }
    }
    line
}

fn print_add<W: Write>(summary: &AddSummary, writer: &mut W) {
    let verb = match summary.action {
        KeyAction::Added => "Added",
        KeyAction::Updated => "Updated",
        KeyAction::Skipped => "Skipped",
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} \"{}\" for {}", verb, summary.path, summary.language).green()
    );
}

fn print_languages<W: Write>(summary: &LanguagesSummary, writer: &mut W) {
    if summary.languages.is_empty() {
        let _ = writeln!(writer, "No languages found");
        return;
    }
    for (code, name) in &summary.languages {
        let mut line = code.clone();
        if name != code {
            line.push_str(&format!("  {}", name));
        }
        if *code == summary.source_language {
            let _ = writeln!(writer, "{}  {}", line.bold(), "(source)".dimmed());
        } else {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
