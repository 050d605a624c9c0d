//! Named character classes.
//!
//! Plain `fn(char) -> bool` predicates for use with
//! [`satisfy`](crate::satisfy). None of them capture state.

/// `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `1`-`9`.
pub fn is_nonzero_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

/// `0`-`9`, `a`-`f`, `A`-`F`.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// ASCII letters.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Space, tab, line feed, carriage return.
pub fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Anything that may appear unescaped in a JSON string body.
pub fn is_string_char(c: char) -> bool {
    c != '"' && c != '\\'
}

/// [`is_string_char`] minus the control characters U+0000 to U+001F,
/// which RFC 8259 requires to be escaped.
pub fn is_unescaped_char(c: char) -> bool {
    is_string_char(c) && c > '\u{1f}'
}

/// Every character.
pub fn any_char(_: char) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_nonzero_digit('0'));
        assert!(is_nonzero_digit('1'));
    }

    #[test]
    fn hex_digits_in_both_cases() {
        for c in ['0', '9', 'a', 'f', 'A', 'F'] {
            assert!(is_hex_digit(c), "{c}");
        }
        assert!(!is_hex_digit('g'));
        assert!(!is_hex_digit('G'));
    }

    #[test]
    fn alpha_is_ascii_only() {
        assert!(is_alpha('q'));
        assert!(is_alpha('Q'));
        assert!(!is_alpha('é'));
        assert!(!is_alpha('1'));
    }

    #[test]
    fn whitespace_set() {
        for c in [' ', '\t', '\n', '\r'] {
            assert!(is_json_whitespace(c));
        }
        assert!(!is_json_whitespace('\u{a0}'));
    }

    #[test]
    fn string_chars_exclude_quote_and_backslash() {
        assert!(is_string_char('a'));
        assert!(is_string_char('\''));
        assert!(!is_string_char('"'));
        assert!(!is_string_char('\\'));
        assert!(any_char('"'));
    }

    #[test]
    fn unescaped_chars_exclude_controls() {
        assert!(is_unescaped_char(' '));
        assert!(is_unescaped_char('\u{7f}'));
        assert!(!is_unescaped_char('\u{0}'));
        assert!(!is_unescaped_char('\n'));
        assert!(!is_unescaped_char('\u{1f}'));
        assert!(!is_unescaped_char('"'));
    }
}
