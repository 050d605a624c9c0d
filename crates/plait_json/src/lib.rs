//! JSON recognizer built from `plait_comb` combinators.
//!
//! [`parse_json`] runs the `value` rule of a default grammar that is built
//! once per process. Build a [`JsonGrammar`] directly for other options or
//! for the `object`, `array` and `document` entry points.
//!
//! Only recognition is performed; no value tree is built.

mod grammar;
mod lexical;
mod options;

use std::sync::OnceLock;

use plait_comb::{GrammarError, Outcome};
use tracing::debug;

pub use grammar::JsonGrammar;
pub use lexical::{number, strict_string, string, whitespace};
pub use options::JsonOptions;

static DEFAULT_GRAMMAR: OnceLock<Result<JsonGrammar, GrammarError>> = OnceLock::new();

/// The shared grammar with default options.
pub fn default_grammar() -> Result<&'static JsonGrammar, GrammarError> {
    DEFAULT_GRAMMAR
        .get_or_init(JsonGrammar::new)
        .as_ref()
        .map_err(Clone::clone)
}

/// Match one JSON value (string, number, object or array) at the start of
/// `text`.
///
/// Whitespace inside objects and arrays is accepted; whitespace before or
/// after a top-level value is not consumed.
pub fn parse_json(text: &str) -> Outcome<'_> {
    debug!(bytes = text.len(), "parse_json");
    match default_grammar() {
        Ok(grammar) => grammar.value().parse(text),
        Err(err) => Outcome::rejected(err.to_string()),
    }
}
