//! Repetition: unbounded (`zero_or_more`, `one_or_more`), bounded
//! (`repeat`, `exactly`) and scan-until (`until`).
//!
//! # Termination
//!
//! Every loop here stops on a zero-length match. A parser that can accept
//! empty input (an `optional`, a `zero_or_more`) would otherwise be
//! applied forever to the same remainder. With the guard, each iteration
//! consumes at least one byte, so a loop runs at most `input.len()`
//! times.

use crate::outcome::{progress, Outcome, Rejection};
use crate::parser::Parser;

const UNTERMINATED: &str = "input ended before terminator";
const NO_PROGRESS: &str = "no progress before terminator";

/// Apply `parser` as many times as it matches. Always succeeds.
pub fn zero_or_more(parser: Parser) -> Parser {
    repeat(parser, 0, None)
}

/// Apply `parser` as many times as it matches, at least once.
///
/// Rejects if the first application rejects or matches nothing.
pub fn one_or_more(parser: Parser) -> Parser {
    repeat(parser, 1, None)
}

/// Apply `parser` exactly `count` times.
pub fn exactly(parser: Parser, count: usize) -> Parser {
    repeat(parser, count, Some(count))
}

/// Apply `parser` between `min` and `max` times (inclusive); `None`
/// leaves the upper end open.
///
/// Only non-empty matches count. When fewer than `min` are found, the
/// rejection that ended the loop is returned (shifted to this parser's
/// input), or a count rejection if the loop ended on a zero-length match.
pub fn repeat(parser: Parser, min: usize, max: Option<usize>) -> Parser {
    Parser::new(move |input: &str| {
        let mut rest = input;
        let mut count = 0;
        let mut stopped_by = None;
        while max.map_or(true, |max| count < max) {
            match parser.parse(rest) {
                Outcome::Matched {
                    consumed,
                    remainder,
                } if !consumed.is_empty() => {
                    rest = remainder;
                    count += 1;
                }
                Outcome::Matched { .. } => break,
                Outcome::Rejected(rejection) => {
                    stopped_by = Some(rejection);
                    break;
                }
            }
        }
        if count >= min {
            return Outcome::from_remainder(input, rest);
        }
        let offset = progress(input, rest);
        match stopped_by {
            Some(rejection) => Outcome::Rejected(rejection.shifted(offset)),
            None => Outcome::Rejected(Rejection::at(
                format!("expected at least {min} repetitions, found {count}"),
                offset,
            )),
        }
    })
}

/// Scan with `body` until `stop` matches, consuming `stop` as well.
///
/// At each position `stop` is tried first. Otherwise `body` has to make
/// progress. Rejects when the input runs out before `stop` matches, when
/// `body` rejects, or when `body` matches nothing.
///
/// ```text
/// // A string body: escapes and plain characters up to the closing quote.
/// until(ch('"'), one_of![escape, satisfy(is_string_char)])
/// ```
pub fn until(stop: Parser, body: Parser) -> Parser {
    Parser::new(move |input: &str| {
        let mut rest = input;
        loop {
            if let Outcome::Matched { remainder, .. } = stop.parse(rest) {
                return Outcome::from_remainder(input, remainder);
            }
            if rest.is_empty() {
                return Outcome::Rejected(Rejection::at(UNTERMINATED, progress(input, rest)));
            }
            match body.parse(rest) {
                Outcome::Matched {
                    consumed,
                    remainder,
                } if !consumed.is_empty() => rest = remainder,
                Outcome::Matched { .. } => {
                    return Outcome::Rejected(Rejection::at(NO_PROGRESS, progress(input, rest)));
                }
                Outcome::Rejected(rejection) => {
                    return Outcome::Rejected(rejection.shifted(progress(input, rest)));
                }
            }
        }
    })
}
