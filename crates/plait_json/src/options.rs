//! Grammar options.

/// Switches for the optional parts of [`JsonGrammar`](crate::JsonGrammar).
///
/// The default is the minimal grammar: no `true`/`false`/`null`,
/// [`JsonGrammar::document`](crate::JsonGrammar::document) accepts no
/// whitespace around the top-level value, and string bodies take any
/// character other than `"` and `\`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Accept `true`, `false` and `null` as values.
    pub literals: bool,
    /// Let a document start and end with whitespace.
    pub surrounding_whitespace: bool,
    /// Reject raw control characters (U+0000 to U+001F) in strings.
    pub strict_strings: bool,
}

impl JsonOptions {
    /// The minimal grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly what RFC 8259 allows: literals, surrounding whitespace,
    /// and no unescaped control characters in strings.
    pub fn rfc8259() -> Self {
        JsonOptions {
            literals: true,
            surrounding_whitespace: true,
            strict_strings: true,
        }
    }

    /// Set whether `true`/`false`/`null` are values.
    #[must_use]
    pub fn literals(mut self, enabled: bool) -> Self {
        self.literals = enabled;
        self
    }

    /// Set whether documents may be padded with whitespace.
    #[must_use]
    pub fn surrounding_whitespace(mut self, enabled: bool) -> Self {
        self.surrounding_whitespace = enabled;
        self
    }

    /// Set whether strings must escape control characters.
    #[must_use]
    pub fn strict_strings(mut self, enabled: bool) -> Self {
        self.strict_strings = enabled;
        self
    }
}
