//! Console presentation: one status line per file and the closing tally.

use crate::outcome::{FileOutcome, RunSummary};
use crate::walker::HtmlFile;
use owo_colors::OwoColorize;

/// Status line for one file
pub fn format_outcome_line(file: &HtmlFile, outcome: &FileOutcome, color: bool) -> String {
    let name = file.display_name();
    let (label, detail) = match outcome {
        FileOutcome::Updated => ("Updated", None),
        FileOutcome::AlreadyPresent => ("Already present", None),
        FileOutcome::NoAnchor => ("No anchor", None),
        FileOutcome::ReadFailed(e) => ("Read error", Some(e.to_string())),
        FileOutcome::WriteFailed(e) => ("Write error", Some(e.to_string())),
    };

    let label = if color {
        match outcome {
            FileOutcome::Updated => label.green().to_string(),
            FileOutcome::AlreadyPresent => label.dimmed().to_string(),
            FileOutcome::NoAnchor => label.yellow().to_string(),
            FileOutcome::ReadFailed(_) | FileOutcome::WriteFailed(_) => label.red().to_string(),
        }
    } else {
        label.to_string()
    };

    match detail {
        Some(detail) => format!("{}: {} - {}", label, name, detail),
        None => format!("{}: {}", label, name),
    }
}

/// Four-line tally
pub fn format_summary(summary: &RunSummary, color: bool) -> String {
    let heading = if color {
        "Summary:".bold().to_string()
    } else {
        "Summary:".to_string()
    };
    format!(
        "{}\nTotal: {}\nUpdated: {}\nAlready present: {}\nNot processed: {}",
        heading,
        summary.total,
        summary.updated,
        summary.already_present,
        summary.remainder()
    )
}
