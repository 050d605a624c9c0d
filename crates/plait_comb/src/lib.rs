//! Composable text-matching parsers.
//!
//! A [`Parser`] takes a string slice and returns an [`Outcome`]: the input
//! split into an accepted prefix and a remainder, or a [`Rejection`].
//! Parsers are built from a handful of primitives ([`ch`], [`satisfy`],
//! [`literal`]) and combined with sequencing, ordered choice, repetition
//! and separated series. Rules that refer to each other (directly or
//! through other rules) are tied together with a [`GrammarBuilder`].
//!
//! ```text
//! let digit = satisfy(class::is_digit);
//! let list = separated(digit, literal(", "));
//! list.parse("1, 5, 1 rest")   // Matched("1, 5, 1", " rest")
//! ```
//!
//! Matching only recognises text. Nothing here builds a value from what
//! was matched; callers that need one re-read the consumed slice.

pub mod class;
mod combinator;
mod grammar;
mod outcome;
mod parser;
mod primitive;
mod repeat;
mod series;

pub use combinator::{concat, first_of, implies, optional};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, Rule};
pub use outcome::{Match, Outcome, Rejection};
pub use parser::Parser;
pub use primitive::{ch, end_of_input, literal, satisfy};
pub use repeat::{exactly, one_or_more, repeat, until, zero_or_more};
pub use series::{separated, series, SeriesConfig, TrailingSeparator};
