//! Output formatting utilities

use crate::application::{FileOutcome, FileRecord, RewriteReport};
use crate::error::FigmdError;

/// Format the status line for one processed file
pub fn format_record(record: &FileRecord) -> String {
    let path = record.path.display();
    match &record.outcome {
        FileOutcome::Changed { replacements } => {
            format!("Updated: {} ({} replacement(s))", path, replacements)
        }
        FileOutcome::Unchanged => format!("Unchanged: {}", path),
        FileOutcome::Failed(err) => format!("Failed: {}: {}", path, failure_reason(err)),
    }
}

/// Format the closing summary of a directory run
pub fn format_summary(report: &RewriteReport) -> String {
    let mut output = format!(
        "Done. Updated {} of {} file(s) with {} replacement(s).",
        report.changed_files(),
        report.scanned_files(),
        report.total_replacements()
    );

    let failed = report.failed_files();
    if failed > 0 {
        output.push_str(&format!(" {} file(s) failed.", failed));
    }

    output
}

fn failure_reason(err: &FigmdError) -> String {
    match err {
        FigmdError::Read { source, .. } => format!("read failed: {}", source),
        FigmdError::Write { source, .. } => format!("write failed: {}", source),
        other => other.to_string(),
    }
}
