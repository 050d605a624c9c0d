//! Two-way parse outcome.
//!
//! Every parser returns an [`Outcome`]: either the input split into the
//! part that was accepted and the part that is left, or a [`Rejection`].
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Matched` | `consumed` is the accepted prefix, `remainder` the rest |
//! | `Rejected` | Nothing was accepted; the rejection says why and where |
//!
//! ## The split invariant
//!
//! For every `Matched` outcome produced by this crate,
//! `consumed` followed by `remainder` is exactly the input the parser was
//! given. Both halves borrow from that input, so no combinator ever
//! copies text: a sequence of matches is described by where its final
//! remainder starts (see [`Outcome::from_remainder`]).
//!
//! ## Rejection offsets
//!
//! A rejection's offset is relative to the input of the parser that
//! returned it. Combinators that run a child on a later part of their own
//! input shift the child's rejection so the offset stays relative to the
//! outermost input.

use std::borrow::Cow;

use thiserror::Error;

/// Result of applying a parser to an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The parser accepted a prefix of its input.
    Matched {
        /// The accepted prefix.
        consumed: &'a str,
        /// Everything after the accepted prefix.
        remainder: &'a str,
    },

    /// The parser did not accept its input.
    Rejected(Rejection),
}

/// The `Matched` half of an [`Outcome`], as a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    /// The accepted prefix.
    pub consumed: &'a str,
    /// Everything after the accepted prefix.
    pub remainder: &'a str,
}

/// Why a parser did not accept its input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}{}", context_suffix(.context))]
pub struct Rejection {
    message: Cow<'static, str>,
    offset: usize,
    context: Option<&'static str>,
}

fn context_suffix(context: &Option<&'static str>) -> String {
    match context {
        Some(context) => format!(" (while parsing {context})"),
        None => String::new(),
    }
}

impl Rejection {
    /// A rejection at the very start of the input.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::at(message, 0)
    }

    /// A rejection `offset` bytes into the input.
    pub fn at(message: impl Into<Cow<'static, str>>, offset: usize) -> Self {
        Rejection {
            message: message.into(),
            offset,
            context: None,
        }
    }

    /// The human-readable diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the failure, relative to the rejecting parser's input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The rule or construct being parsed when the failure happened.
    pub fn context(&self) -> Option<&'static str> {
        self.context
    }

    /// Move the offset `by` bytes further into an enclosing input.
    #[must_use]
    pub fn shifted(mut self, by: usize) -> Self {
        self.offset += by;
        self
    }

    /// Attach "while parsing `context`" unless a more specific context is
    /// already present.
    #[must_use]
    pub fn with_context(mut self, context: &'static str) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Replace the message, keeping offset and context.
    #[must_use]
    pub fn relabelled(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl<'a> Outcome<'a> {
    // === Constructors ===

    /// A successful outcome from its two halves.
    #[inline]
    pub fn matched(consumed: &'a str, remainder: &'a str) -> Self {
        Outcome::Matched {
            consumed,
            remainder,
        }
    }

    /// A rejection at offset 0.
    #[cold]
    pub fn rejected(message: impl Into<Cow<'static, str>>) -> Self {
        Outcome::Rejected(Rejection::new(message))
    }

    /// A zero-length match: nothing consumed, the whole input remains.
    #[inline]
    pub fn empty(input: &'a str) -> Self {
        Outcome::matched(&input[..0], input)
    }

    /// Accept the first `at` bytes of `input`.
    ///
    /// Rejects if `at` is past the end of the input or not on a character
    /// boundary.
    pub fn split(input: &'a str, at: usize) -> Self {
        match (input.get(..at), input.get(at..)) {
            (Some(consumed), Some(remainder)) => Outcome::matched(consumed, remainder),
            _ => Outcome::rejected("split point is not a character boundary"),
        }
    }

    /// Accept everything in `input` that precedes `remainder`.
    ///
    /// `remainder` must be a suffix of `input`, borrowed from the same
    /// text. Every parser from this crate returns such a remainder; a
    /// hand-written parser that returns any other slice is rejected here
    /// rather than having its input silently reinterpreted.
    #[inline]
    pub fn from_remainder(input: &'a str, remainder: &'a str) -> Self {
        let ends_together =
            input.as_bytes().as_ptr_range().end == remainder.as_bytes().as_ptr_range().end;
        if !ends_together || remainder.len() > input.len() {
            return Outcome::rejected(FOREIGN_REMAINDER);
        }
        match input.get(..progress(input, remainder)) {
            Some(consumed) => Outcome::matched(consumed, remainder),
            None => Outcome::rejected(FOREIGN_REMAINDER),
        }
    }

    // === Predicates ===

    /// Returns `true` for `Matched`.
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    /// Returns `true` for `Rejected`.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        !self.is_matched()
    }

    /// Returns `true` for a match that consumed nothing.
    ///
    /// Repetition stops on these; looping on a zero-length match would
    /// never terminate.
    #[inline]
    pub fn is_empty_match(&self) -> bool {
        matches!(self, Outcome::Matched { consumed, .. } if consumed.is_empty())
    }

    // === Accessors ===

    /// The accepted prefix, if matched.
    pub fn consumed(&self) -> Option<&'a str> {
        match self {
            Outcome::Matched { consumed, .. } => Some(*consumed),
            Outcome::Rejected(_) => None,
        }
    }

    /// The unconsumed suffix, if matched.
    pub fn remainder(&self) -> Option<&'a str> {
        match self {
            Outcome::Matched { remainder, .. } => Some(*remainder),
            Outcome::Rejected(_) => None,
        }
    }

    /// The rejection, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Matched { .. } => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }

    // === Transformations ===

    /// Move a rejection's offset `by` bytes; matches pass through.
    #[must_use]
    pub fn shifted(self, by: usize) -> Self {
        self.map_rejection(|rejection| rejection.shifted(by))
    }

    /// Transform the rejection, preserving a match unchanged.
    #[must_use]
    pub fn map_rejection<F: FnOnce(Rejection) -> Rejection>(self, f: F) -> Self {
        match self {
            Outcome::Rejected(rejection) => Outcome::Rejected(f(rejection)),
            matched @ Outcome::Matched { .. } => matched,
        }
    }

    /// Convert to `Option`, discarding the rejection.
    pub fn ok(self) -> Option<Match<'a>> {
        self.into_result().ok()
    }

    /// Convert to `Result` so the outcome composes with `?`.
    pub fn into_result(self) -> Result<Match<'a>, Rejection> {
        match self {
            Outcome::Matched {
                consumed,
                remainder,
            } => Ok(Match {
                consumed,
                remainder,
            }),
            Outcome::Rejected(rejection) => Err(rejection),
        }
    }
}

// === Conversions ===

impl<'a> From<Outcome<'a>> for Result<Match<'a>, Rejection> {
    fn from(outcome: Outcome<'a>) -> Self {
        outcome.into_result()
    }
}

impl<'a> From<Result<Match<'a>, Rejection>> for Outcome<'a> {
    fn from(result: Result<Match<'a>, Rejection>) -> Self {
        match result {
            Ok(Match {
                consumed,
                remainder,
            }) => Outcome::matched(consumed, remainder),
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}

const FOREIGN_REMAINDER: &str = "remainder is not a suffix of the input";

/// Bytes of `input` that lie before `remainder`.
#[inline]
pub(crate) fn progress(input: &str, remainder: &str) -> usize {
    input.len().saturating_sub(remainder.len())
}
