//! Driver command handlers, exercised without spawning the binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;

use plait::commands::{
    check_files, match_text, parse_match_args, read_file, MatchOptions, RuleName, Verdict,
};
use plait::report::render_outcome;
use plait::DriverError;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

// === check ===

#[test]
fn check_reports_each_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let padded = dir.path().join("padded.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"a": [1, 2.5e1, "x"], "b": true}"#).unwrap();
    fs::write(&padded, "\n  [null]\n").unwrap();
    fs::write(&bad, r#"{"a": 1,}"#).unwrap();
    let missing = dir.path().join("missing.json");

    let paths: Vec<String> = [&good, &padded, &bad, &missing]
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let reports = check_files(&paths).unwrap();

    assert_eq!(reports.len(), 4);
    for (report, path) in reports.iter().zip(&paths) {
        assert_eq!(&report.path, path);
    }
    assert!(reports[0].verdict.is_accepted());
    assert!(reports[1].verdict.is_accepted());
    assert!(matches!(reports[2].verdict, Verdict::Rejected(_)));
    assert!(matches!(
        reports[3].verdict,
        Verdict::Unreadable(DriverError::NotFound { .. })
    ));
}

#[test]
fn check_rejects_unescaped_control_characters() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.json");
    let escaped = dir.path().join("escaped.json");
    fs::write(&raw, "{\"note\": \"two\nlines\"}").unwrap();
    fs::write(&escaped, r#"{"note": "two\nlines"}"#).unwrap();
    let paths = [raw.display().to_string(), escaped.display().to_string()];
    let reports = check_files(&paths).unwrap();
    assert!(matches!(reports[0].verdict, Verdict::Rejected(_)));
    assert!(reports[1].verdict.is_accepted());
}

#[test]
fn check_rejects_trailing_content() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("two.json");
    fs::write(&file, "[1] [2]").unwrap();
    let reports = check_files(&[file.display().to_string()]).unwrap();
    assert!(!reports[0].verdict.is_accepted());
}

#[test]
fn read_file_classifies_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("latin1.json");
    fs::write(&file, [b'"', 0xE9, b'"']).unwrap();
    let err = read_file(&file.display().to_string()).unwrap_err();
    assert!(matches!(err, DriverError::InvalidUtf8 { .. }));
}

// === match argument parsing ===

#[test]
fn match_args_defaults() {
    let (options, text) = parse_match_args(&args(&["[1]"])).unwrap();
    assert_eq!(options, MatchOptions::default());
    assert_eq!(options.rule, RuleName::Value);
    assert_eq!(text, "[1]");
}

#[test]
fn match_args_flags_in_any_position() {
    let (options, text) =
        parse_match_args(&args(&["--strict", "-12", "--rule=number", "--literals"])).unwrap();
    assert_eq!(
        options,
        MatchOptions {
            rule: RuleName::Number,
            literals: true,
            strict: true,
        }
    );
    assert_eq!(text, "-12");
}

#[test]
fn match_args_double_dash_ends_flags() {
    let (_, text) = parse_match_args(&args(&["--", "--strict"])).unwrap();
    assert_eq!(text, "--strict");
}

#[test]
fn match_args_errors() {
    assert!(matches!(
        parse_match_args(&args(&["--rule=boolean", "x"])),
        Err(DriverError::UnknownRule(name)) if name == "boolean"
    ));
    assert!(matches!(
        parse_match_args(&args(&["--verbose", "x"])),
        Err(DriverError::UnknownOption(_))
    ));
    assert!(matches!(
        parse_match_args(&args(&["a", "b"])),
        Err(DriverError::UnexpectedArgument(arg)) if arg == "b"
    ));
    assert!(matches!(
        parse_match_args(&args(&["--strict"])),
        Err(DriverError::Missing(_))
    ));
}

#[test]
fn rule_names_round_trip_through_display() {
    for rule in [
        RuleName::Value,
        RuleName::Object,
        RuleName::Array,
        RuleName::String,
        RuleName::Number,
        RuleName::Whitespace,
    ] {
        assert_eq!(rule.to_string().parse::<RuleName>().unwrap(), rule);
    }
}

// === match ===

#[test]
fn match_prints_matched_and_remainder() {
    let outcome = match_text("[1, 2] tail", MatchOptions::default()).unwrap();
    assert_eq!(render_outcome(&outcome), r#"Matched("[1, 2]", " tail")"#);
}

#[test]
fn match_strict_requires_whole_text() {
    let strict = MatchOptions {
        strict: true,
        ..MatchOptions::default()
    };
    assert!(match_text("[1] tail", strict).unwrap().is_rejected());
    assert!(match_text("[1]", strict).unwrap().is_matched());
}

#[test]
fn match_selects_leaf_rules() {
    let number = MatchOptions {
        rule: RuleName::Number,
        ..MatchOptions::default()
    };
    let outcome = match_text("-0.", number).unwrap();
    assert_eq!(
        render_outcome(&outcome),
        "Rejected(no input at byte 3 (while parsing number))"
    );

    let string = MatchOptions {
        rule: RuleName::String,
        ..MatchOptions::default()
    };
    assert_eq!(
        render_outcome(&match_text(r#""a" b"#, string).unwrap()),
        r#"Matched("\"a\"", " b")"#
    );
}

#[test]
fn match_literals_flag() {
    let plain = MatchOptions::default();
    let literals = MatchOptions {
        literals: true,
        ..MatchOptions::default()
    };
    assert!(match_text("null", plain).unwrap().is_rejected());
    assert!(match_text("null", literals).unwrap().is_matched());
}
