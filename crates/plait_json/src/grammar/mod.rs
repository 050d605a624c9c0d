//! The recursive part of JSON: `value`, `object`, `array`.
//!
//! ```text
//! value  = string | number | object | array | literal*
//! object = '{' ( ws '}' | members '}' )
//! array  = '[' ( ws ']' | elements ']' )
//!
//! members  = separated(ws string ws ':' ws value ws, ws ',' ws)
//! elements = separated(ws value ws, ws ',' ws)
//! ```
//!
//! `literal*` is `true | false | null` when [`JsonOptions::literals`] is
//! set. `string` is [`strict_string`](crate::strict_string) when
//! [`JsonOptions::strict_strings`] is set. The closing bracket is distributed into both branches so that a
//! malformed member list reports its own rejection instead of a generic
//! bracket mismatch.

use plait_comb::{
    ch, end_of_input, first_of, literal, one_of, separated, seq, GrammarBuilder, GrammarError,
    Parser,
};
use tracing::debug;

use crate::lexical::{number, strict_string, string, whitespace};
use crate::options::JsonOptions;

/// A built JSON grammar.
///
/// All entry points share one frozen rule table; cloning is cheap.
#[derive(Clone, Debug)]
pub struct JsonGrammar {
    options: JsonOptions,
    value: Parser,
    object: Parser,
    array: Parser,
    document: Parser,
}

impl JsonGrammar {
    /// The grammar with default options.
    pub fn new() -> Result<Self, GrammarError> {
        Self::with_options(JsonOptions::default())
    }

    /// The grammar with `options` applied.
    pub fn with_options(options: JsonOptions) -> Result<Self, GrammarError> {
        let mut builder = GrammarBuilder::new();
        let value = builder.declare("value");
        let object = builder.declare("object");
        let array = builder.declare("array");

        let comma = || seq![whitespace(), ch(','), whitespace()];
        let string = || {
            if options.strict_strings {
                strict_string()
            } else {
                string()
            }
        };

        let member = seq![
            whitespace(),
            string(),
            whitespace(),
            ch(':'),
            whitespace(),
            builder.reference(value)?,
            whitespace(),
        ];
        let members = separated(member, comma());
        builder.define(
            object,
            seq![
                ch('{'),
                one_of![seq![whitespace(), ch('}')], seq![members, ch('}')]],
            ]
            .context("object"),
        )?;

        let element = seq![whitespace(), builder.reference(value)?, whitespace()];
        let elements = separated(element, comma());
        builder.define(
            array,
            seq![
                ch('['),
                one_of![seq![whitespace(), ch(']')], seq![elements, ch(']')]],
            ]
            .context("array"),
        )?;

        let mut alternatives = vec![
            string(),
            number(),
            builder.reference(object)?,
            builder.reference(array)?,
        ];
        if options.literals {
            alternatives.extend([literal("true"), literal("false"), literal("null")]);
        }
        builder.define(value, first_of(alternatives).label("expected a JSON value"))?;

        let grammar = builder.build()?;
        let value = grammar.rule(value)?;
        let document = if options.surrounding_whitespace {
            seq![whitespace(), value.clone(), whitespace(), end_of_input()]
        } else {
            value.complete()
        };
        debug!(?options, rules = ?grammar.rule_names(), "JSON grammar ready");

        Ok(JsonGrammar {
            options,
            object: grammar.rule(object)?,
            array: grammar.rule(array)?,
            value,
            document,
        })
    }

    /// Options the grammar was built with.
    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Any JSON value. Consumes no whitespace around a bare scalar.
    pub fn value(&self) -> &Parser {
        &self.value
    }

    /// A `{ ... }` object.
    pub fn object(&self) -> &Parser {
        &self.object
    }

    /// A `[ ... ]` array.
    pub fn array(&self) -> &Parser {
        &self.array
    }

    /// A complete document: one value and nothing after it, optionally
    /// padded with whitespace.
    pub fn document(&self) -> &Parser {
        &self.document
    }
}
