//! The parser capability.
//!
//! A [`Parser`] is an immutable function from an input text to an
//! [`Outcome`]. It keeps no state between calls, so one value can be
//! invoked any number of times, from any number of threads, and cloning
//! it only bumps a reference count.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinator::{concat, first_of, optional};
use crate::outcome::{progress, Outcome};
use crate::primitive::end_of_input;
use crate::repeat::{one_or_more, zero_or_more};

type ParseFn = dyn for<'a> Fn(&'a str) -> Outcome<'a> + Send + Sync;

/// A composable text-matching function.
#[derive(Clone)]
pub struct Parser {
    run: Arc<ParseFn>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl Parser {
    /// Wrap a matching function.
    ///
    /// The function must uphold the split invariant: on success the
    /// remainder is a suffix of the input and the consumed text is
    /// everything before it.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Outcome<'a> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(f) }
    }

    /// Apply the parser to `input`.
    #[inline]
    pub fn parse<'a>(&self, input: &'a str) -> Outcome<'a> {
        (self.run)(input)
    }

    /// This parser followed by `next`.
    #[must_use]
    pub fn then(&self, next: &Parser) -> Parser {
        concat([self.clone(), next.clone()])
    }

    /// This parser, or `other` if this one rejects.
    #[must_use]
    pub fn or(&self, other: &Parser) -> Parser {
        first_of([self.clone(), other.clone()])
    }

    /// This parser, or a zero-length match.
    #[must_use]
    pub fn optional(&self) -> Parser {
        optional(self.clone())
    }

    /// Zero or more repetitions.
    #[must_use]
    pub fn many(&self) -> Parser {
        zero_or_more(self.clone())
    }

    /// One or more repetitions.
    #[must_use]
    pub fn many1(&self) -> Parser {
        one_or_more(self.clone())
    }

    /// Replace the message of rejections that happen at the very start of
    /// the input.
    ///
    /// Deeper rejections already say more than a label could, so they
    /// pass through untouched.
    #[must_use]
    pub fn label(&self, message: impl Into<Cow<'static, str>>) -> Parser {
        let inner = self.clone();
        let message: Cow<'static, str> = message.into();
        Parser::new(move |input: &str| {
            inner.parse(input).map_rejection(|rejection| {
                if rejection.offset() == 0 {
                    rejection.relabelled(message.clone())
                } else {
                    rejection
                }
            })
        })
    }

    /// Attach "while parsing `name`" to rejections that have no context yet.
    #[must_use]
    pub fn context(&self, name: &'static str) -> Parser {
        let inner = self.clone();
        Parser::new(move |input: &str| {
            inner
                .parse(input)
                .map_rejection(|rejection| rejection.with_context(name))
        })
    }

    /// This parser, rejecting unless it consumes the whole input.
    #[must_use]
    pub fn complete(&self) -> Parser {
        concat([self.clone(), end_of_input()])
    }

    /// Bytes of `input` this parser accepts, or `None` if it rejects.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.parse(input)
            .remainder()
            .map(|remainder| progress(input, remainder))
    }
}
