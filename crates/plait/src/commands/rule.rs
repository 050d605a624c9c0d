//! The `match` command: run one JSON rule on a piece of text.

use std::fmt;
use std::str::FromStr;

use plait_comb::{Outcome, Parser};
use plait_json::{number, string, whitespace, JsonGrammar, JsonOptions};
use tracing::debug;

use crate::DriverError;

/// The JSON rules reachable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleName {
    #[default]
    Value,
    Object,
    Array,
    String,
    Number,
    Whitespace,
}

impl RuleName {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Value => "value",
            RuleName::Object => "object",
            RuleName::Array => "array",
            RuleName::String => "string",
            RuleName::Number => "number",
            RuleName::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(RuleName::Value),
            "object" => Ok(RuleName::Object),
            "array" => Ok(RuleName::Array),
            "string" => Ok(RuleName::String),
            "number" => Ok(RuleName::Number),
            "whitespace" => Ok(RuleName::Whitespace),
            other => Err(DriverError::UnknownRule(other.to_string())),
        }
    }
}

/// Options for `plait match`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub rule: RuleName,
    /// Accept `true`/`false`/`null`.
    pub literals: bool,
    /// Reject unless the whole text is consumed.
    pub strict: bool,
}

/// Parse `[--rule=<name>] [--literals] [--strict] <text>`.
///
/// Flags may appear before or after the text. Anything not starting with
/// `--` is text, so `-1` needs no escaping; a lone `--` ends the flags for
/// text that does.
pub fn parse_match_args(args: &[String]) -> Result<(MatchOptions, String), DriverError> {
    let mut options = MatchOptions::default();
    let mut text = None;
    let mut flags_done = false;

    for arg in args {
        if flags_done || !arg.starts_with("--") {
            if text.is_none() {
                text = Some(arg.clone());
                continue;
            }
            return Err(DriverError::UnexpectedArgument(arg.clone()));
        }
        if arg == "--" {
            flags_done = true;
        } else if let Some(rule) = arg.strip_prefix("--rule=") {
            options.rule = rule.parse()?;
        } else if arg == "--literals" {
            options.literals = true;
        } else if arg == "--strict" {
            options.strict = true;
        } else {
            return Err(DriverError::UnknownOption(arg.clone()));
        }
    }

    let text = text.ok_or(DriverError::Missing("text to match"))?;
    Ok((options, text))
}

/// Run the rule selected by `options` on `text`.
pub fn match_text(text: &str, options: MatchOptions) -> Result<Outcome<'_>, DriverError> {
    debug!(rule = %options.rule, bytes = text.len(), "match");
    let parser = select(options)?;
    let parser = if options.strict {
        parser.complete()
    } else {
        parser
    };
    Ok(parser.parse(text))
}

fn select(options: MatchOptions) -> Result<Parser, DriverError> {
    let grammar = JsonGrammar::with_options(JsonOptions::new().literals(options.literals))?;
    let parser = match options.rule {
        RuleName::Value => grammar.value().clone(),
        RuleName::Object => grammar.object().clone(),
        RuleName::Array => grammar.array().clone(),
        RuleName::String => string(),
        RuleName::Number => number(),
        RuleName::Whitespace => whitespace(),
    };
    Ok(parser)
}
