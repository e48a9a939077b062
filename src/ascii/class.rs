//! Character classes for [`single_char`](crate::single_char::single_char).
//!
//! Each predicate takes what [`Cursor::peek`](crate::Cursor::peek) returns and
//! is `false` at the end of the input.

/// Space, tab, carriage return or line feed
pub fn is_space(ch: Option<char>) -> bool {
    matches!(ch, Some(' ' | '\t' | '\r' | '\n'))
}

/// Lowercase ASCII letter, `a` through `z`
pub fn is_alpha(ch: Option<char>) -> bool {
    matches!(ch, Some('a'..='z'))
}

/// Decimal ASCII digit, `0` through `9`
pub fn is_digit10(ch: Option<char>) -> bool {
    matches!(ch, Some('0'..='9'))
}
