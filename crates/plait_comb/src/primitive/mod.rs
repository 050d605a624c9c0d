//! Primitive matchers: single characters, character predicates, literal
//! strings and end of input.
//!
//! Characters are Unicode scalar values. Accepting one advances the input
//! by its UTF-8 length.

use std::borrow::Cow;

use crate::outcome::Outcome;
use crate::parser::Parser;

const NO_INPUT: &str = "no input";
const CHARACTER_MISMATCH: &str = "character mismatch";
const NOT_ENOUGH_INPUT: &str = "not enough input";
const TRAILING_INPUT: &str = "unexpected trailing input";

/// Match exactly the character `expected`.
pub fn ch(expected: char) -> Parser {
    satisfy(move |c| c == expected)
}

/// Match one character for which `predicate` holds.
///
/// ```text
/// let digit = satisfy(class::is_digit);
/// digit.parse("7up") == Outcome::matched("7", "up")
/// ```
pub fn satisfy<P>(predicate: P) -> Parser
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input: &str| match input.chars().next() {
        None => Outcome::rejected(NO_INPUT),
        Some(c) if predicate(c) => Outcome::split(input, c.len_utf8()),
        Some(_) => Outcome::rejected(CHARACTER_MISMATCH),
    })
}

/// Match `expected` verbatim.
///
/// Empty input, input shorter than `expected`, and a plain mismatch all
/// reject; only the message tells them apart.
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Parser {
    let expected: Cow<'static, str> = expected.into();
    let mismatch: Cow<'static, str> = format!("expected `{expected}`").into();
    Parser::new(move |input: &str| {
        if input.starts_with(expected.as_ref()) {
            Outcome::split(input, expected.len())
        } else if input.is_empty() {
            Outcome::rejected(NO_INPUT)
        } else if input.len() < expected.len() {
            Outcome::rejected(NOT_ENOUGH_INPUT)
        } else {
            Outcome::rejected(mismatch.clone())
        }
    })
}

/// Zero-length match on empty input; rejects anything else.
pub fn end_of_input() -> Parser {
    Parser::new(|input: &str| {
        if input.is_empty() {
            Outcome::empty(input)
        } else {
            Outcome::rejected(TRAILING_INPUT)
        }
    })
}
