//! The `check` command: validate files as JSON documents.

use plait_comb::Rejection;
use plait_json::{JsonGrammar, JsonOptions};
use rayon::prelude::*;
use tracing::debug;

use super::read_file;
use crate::DriverError;

/// What happened to one file.
#[derive(Debug)]
pub enum Verdict {
    /// The whole file is one JSON document.
    Accepted,
    /// The file was read but is not a JSON document.
    Rejected(Rejection),
    /// The file could not be read.
    Unreadable(DriverError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// A file path with its verdict.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub verdict: Verdict,
}

/// Check every file in `paths` against the RFC 8259 document grammar.
///
/// Files are checked in parallel; reports come back in input order. Only
/// a grammar construction failure aborts the whole run.
pub fn check_files(paths: &[String]) -> Result<Vec<FileReport>, DriverError> {
    let grammar = JsonGrammar::with_options(JsonOptions::rfc8259())?;
    let reports = paths
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            verdict: check_one(&grammar, path),
        })
        .collect();
    Ok(reports)
}

fn check_one(grammar: &JsonGrammar, path: &str) -> Verdict {
    let text = match read_file(path) {
        Ok(text) => text,
        Err(err) => return Verdict::Unreadable(err),
    };
    debug!(
        path,
        bytes = text.len(),
        remaining_stack = ?plait_stack::remaining_stack(),
        "checking file"
    );
    match grammar.document().parse(&text).into_result() {
        Ok(_) => Verdict::Accepted,
        Err(rejection) => Verdict::Rejected(rejection),
    }
}
