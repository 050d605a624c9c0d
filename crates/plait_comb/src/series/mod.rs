//! Separated series: `element (separator element)*`.
//!
//! [`separated`] is the common case (at least one element, no trailing
//! separator). [`series`] takes a [`SeriesConfig`] for the variations:
//! a minimum or maximum element count, and whether a dangling separator
//! is allowed.
//!
//! Separator text is part of the match. The consumed slice always runs
//! from the first element to the end of the last accepted piece, so
//! `consumed + remainder` still equals the input.

use crate::outcome::{progress, Outcome, Rejection};
use crate::parser::Parser;

/// What to do with a separator that is not followed by an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingSeparator {
    /// A dangling separator rejects the whole series.
    #[default]
    Forbidden,
    /// A dangling separator is consumed and ends the series.
    Allowed,
}

/// Configuration for [`series`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Policy for a separator with no element after it.
    pub trailing: TrailingSeparator,
    /// Fewest elements accepted. With `0`, a series whose first element
    /// rejects is a zero-length match.
    pub min_count: usize,
    /// Most elements consumed; `None` for no limit.
    pub max_count: Option<usize>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            trailing: TrailingSeparator::Forbidden,
            min_count: 1,
            max_count: None,
        }
    }
}

impl SeriesConfig {
    /// At least one element, unbounded, trailing separator forbidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `count` elements.
    #[must_use]
    pub fn min(mut self, count: usize) -> Self {
        self.min_count = count;
        self
    }

    /// Stop after `count` elements.
    #[must_use]
    pub fn max(mut self, count: usize) -> Self {
        self.max_count = Some(count);
        self
    }

    /// Set the trailing separator policy.
    #[must_use]
    pub fn trailing(mut self, policy: TrailingSeparator) -> Self {
        self.trailing = policy;
        self
    }
}

/// One or more `element`s separated by `separator`, with no trailing
/// separator.
///
/// ```text
/// let digits = separated(satisfy(is_digit), literal(", "));
/// digits.parse("1, 5, 1")  // Matched("1, 5, 1", "")
/// digits.parse("1, 5, ")   // Rejected: separator without element
/// ```
pub fn separated(element: Parser, separator: Parser) -> Parser {
    series(element, separator, SeriesConfig::default())
}

/// `element (separator element)*` under `config`.
///
/// The loop ends when the separator rejects, when the maximum count is
/// reached, or when a separator-plus-element step consumes nothing. A
/// separator that consumed text but is not followed by an element is
/// handled by `config.trailing`.
pub fn series(element: Parser, separator: Parser, config: SeriesConfig) -> Parser {
    Parser::new(move |input: &str| {
        if config.max_count == Some(0) {
            return Outcome::empty(input);
        }
        let mut rest = match element.parse(input) {
            Outcome::Matched { remainder, .. } => remainder,
            Outcome::Rejected(_) if config.min_count == 0 => return Outcome::empty(input),
            rejected @ Outcome::Rejected(_) => return rejected,
        };
        let mut count = 1;

        while config.max_count.map_or(true, |max| count < max) {
            let after_separator = match separator.parse(rest) {
                Outcome::Matched { remainder, .. } => remainder,
                Outcome::Rejected(_) => break,
            };
            match element.parse(after_separator) {
                Outcome::Matched { remainder, .. } => {
                    if remainder.len() == rest.len() {
                        break;
                    }
                    rest = remainder;
                    count += 1;
                }
                // A zero-length separator is not really there.
                Outcome::Rejected(_) if after_separator.len() == rest.len() => break,
                Outcome::Rejected(rejection) => match config.trailing {
                    TrailingSeparator::Forbidden => {
                        return Outcome::Rejected(
                            rejection.shifted(progress(input, after_separator)),
                        );
                    }
                    TrailingSeparator::Allowed => {
                        rest = after_separator;
                        break;
                    }
                },
            }
        }

        if count < config.min_count {
            return Outcome::Rejected(Rejection::at(
                format!(
                    "expected at least {} elements, found {count}",
                    config.min_count
                ),
                progress(input, rest),
            ));
        }
        Outcome::from_remainder(input, rest)
    })
}
