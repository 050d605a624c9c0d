//! Leaf rules: numbers, strings, whitespace.
//!
//! None of these refer to other rules, so they are plain functions
//! returning a fresh [`Parser`] rather than grammar rules.

use plait_comb::class::{
    is_digit, is_hex_digit, is_json_whitespace, is_nonzero_digit, is_string_char,
    is_unescaped_char,
};
use plait_comb::{
    ch, exactly, implies, one_of, one_or_more, optional, satisfy, seq, until, zero_or_more,
    Parser,
};

/// A JSON number: `-`? (`0` | `[1-9][0-9]*`) fraction? exponent?
///
/// A decimal point or exponent marker commits: `-0.` and `11E+` reject
/// rather than matching a shorter prefix. A leading zero ends the
/// integer part, so on `"01"` only `"0"` is consumed.
pub fn number() -> Parser {
    let digits = || one_or_more(satisfy(is_digit));
    let integer = seq![
        optional(ch('-')),
        one_of![
            ch('0'),
            seq![satisfy(is_nonzero_digit), zero_or_more(satisfy(is_digit))],
        ],
    ];
    let fraction = implies(ch('.'), digits());
    let exponent = implies(
        one_of![ch('e'), ch('E')],
        seq![optional(one_of![ch('+'), ch('-')]), digits()],
    );
    seq![integer, fraction, exponent].context("number")
}

/// A JSON string, quotes included.
///
/// The body is scanned up to the first unescaped `"`. Escapes are matched
/// as a unit, so `\"` never ends the string.
pub fn string() -> Parser {
    string_with(is_string_char)
}

/// [`string`] that also rejects raw control characters, as RFC 8259
/// requires.
pub fn strict_string() -> Parser {
    string_with(is_unescaped_char)
}

fn string_with(plain: fn(char) -> bool) -> Parser {
    let body = one_of![satisfy(plain), escape()];
    seq![ch('"'), until(ch('"'), body)].context("string")
}

/// Zero or more of space, tab, line feed, carriage return.
pub fn whitespace() -> Parser {
    zero_or_more(satisfy(is_json_whitespace))
}

/// `\` followed by an escape letter or `u` and four hex digits.
fn escape() -> Parser {
    seq![
        ch('\\'),
        one_of![
            satisfy(is_escape_letter),
            seq![ch('u'), exactly(satisfy(is_hex_digit), 4)],
        ]
        .label("invalid escape sequence"),
    ]
}

fn is_escape_letter(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}
