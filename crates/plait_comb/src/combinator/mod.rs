//! Sequencing, ordered alternation, optionality and conditional
//! implication.
//!
//! Every combinator takes parsers by value and returns a new [`Parser`].
//! Results are never copied: a successful combination is described by
//! where its last remainder starts, so the split invariant carries over
//! from the children automatically.

use crate::outcome::{progress, Outcome, Rejection};
use crate::parser::Parser;

const NO_ALTERNATIVE: &str = "no alternative matched";

/// Run `parsers` in order, each on the remainder of the previous one.
///
/// The first rejection stops the sequence and is returned with its offset
/// moved to be relative to the sequence's input. There is no backtracking
/// into earlier successes. An empty sequence is a zero-length match; use
/// [`seq!`](crate::seq) to have the compiler insist on at least one
/// parser.
pub fn concat(parsers: impl IntoIterator<Item = Parser>) -> Parser {
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    Parser::new(move |input: &str| {
        let mut rest = input;
        for parser in &parsers {
            match parser.parse(rest) {
                Outcome::Matched { remainder, .. } => rest = remainder,
                Outcome::Rejected(rejection) => {
                    return Outcome::Rejected(rejection.shifted(progress(input, rest)));
                }
            }
        }
        Outcome::from_remainder(input, rest)
    })
}

/// Try `parsers` in order against the same input; the first match wins.
///
/// When every alternative rejects, the rejection that got furthest into
/// the input is kept (the earliest one on ties). If none got past the
/// first byte, the alternatives are indistinguishable and a generic
/// "no alternative matched" rejection is returned instead.
pub fn first_of(parsers: impl IntoIterator<Item = Parser>) -> Parser {
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    Parser::new(move |input: &str| {
        let mut furthest: Option<Rejection> = None;
        for parser in &parsers {
            match parser.parse(input) {
                matched @ Outcome::Matched { .. } => return matched,
                Outcome::Rejected(rejection) => {
                    let further = furthest
                        .as_ref()
                        .map_or(true, |best| rejection.offset() > best.offset());
                    if further {
                        furthest = Some(rejection);
                    }
                }
            }
        }
        match furthest {
            Some(rejection) if rejection.offset() > 0 => Outcome::Rejected(rejection),
            _ => Outcome::rejected(NO_ALTERNATIVE),
        }
    })
}

/// `parser`, or a zero-length match when it rejects. Never fails.
pub fn optional(parser: Parser) -> Parser {
    Parser::new(move |input: &str| match parser.parse(input) {
        Outcome::Rejected(_) => Outcome::empty(input),
        matched @ Outcome::Matched { .. } => matched,
    })
}

/// "If `cond` is present, `then` must follow."
///
/// When `cond` rejects the clause is simply absent and the result is a
/// zero-length match. When `cond` matches, `then` has to match on what
/// `cond` left; its rejection is propagated.
///
/// ```text
/// // A decimal point, if present, needs at least one digit after it.
/// let fraction = implies(ch('.'), one_or_more(satisfy(is_digit)));
/// ```
pub fn implies(cond: Parser, then: Parser) -> Parser {
    Parser::new(move |input: &str| match cond.parse(input) {
        Outcome::Rejected(_) => Outcome::empty(input),
        Outcome::Matched { remainder, .. } => match then.parse(remainder) {
            Outcome::Matched {
                remainder: rest, ..
            } => Outcome::from_remainder(input, rest),
            Outcome::Rejected(rejection) => {
                Outcome::Rejected(rejection.shifted(progress(input, remainder)))
            }
        },
    })
}

/// Sequence one or more parsers.
///
/// `seq![a, b, c]` is `concat([a, b, c])`; an empty invocation does not
/// compile.
#[macro_export]
macro_rules! seq {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::concat([$first $(, $rest)*])
    };
}

/// Ordered choice between one or more parsers.
///
/// `one_of![a, b, c]` is `first_of([a, b, c])`; an empty invocation does
/// not compile.
#[macro_export]
macro_rules! one_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::first_of([$first $(, $rest)*])
    };
}
