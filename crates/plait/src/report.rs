//! Text rendering for command results.

use plait_comb::Outcome;

use crate::commands::{FileReport, Verdict};

/// `Matched("<consumed>", "<remainder>")` or `Rejected(<rejection>)`.
///
/// Both halves of a match are printed with Rust string escaping so
/// whitespace and quotes stay visible.
pub fn render_outcome(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Matched {
            consumed,
            remainder,
        } => format!("Matched({consumed:?}, {remainder:?})"),
        Outcome::Rejected(rejection) => format!("Rejected({rejection})"),
    }
}

/// One line per file: `ok <path>` or `<path>: <reason>`.
pub fn render_file_report(report: &FileReport) -> String {
    match &report.verdict {
        Verdict::Accepted => format!("ok {}", report.path),
        Verdict::Rejected(rejection) => format!("{}: {rejection}", report.path),
        Verdict::Unreadable(err) => format!("{}: {err}", report.path),
    }
}
