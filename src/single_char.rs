use crate::cursor::Cursor;
use crate::error::{EXPECTED_PREDICATE, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser that consumes one character accepted by a predicate
///
/// The predicate sees `None` at the end of the input. Returning `true` for
/// `None` does not make the parser succeed, since there is no character to
/// yield.
pub struct SingleChar<F> {
    predicate: F,
}

impl<F> SingleChar<F> {
    pub fn new(predicate: F) -> Self {
        SingleChar { predicate }
    }
}

impl<'code, F> Parser<'code> for SingleChar<F>
where
    F: Fn(Option<char>) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, char> {
        let peeked = cursor.peek();
        let accepted = (self.predicate)(peeked);
        match peeked {
            Some(ch) if accepted => Ok((ch, cursor.next())),
            _ => Err(ParseError::new(EXPECTED_PREDICATE, cursor)),
        }
    }
}

/// Convenience function to create a SingleChar parser
pub fn single_char<F>(predicate: F) -> SingleChar<F>
where
    F: Fn(Option<char>) -> bool,
{
    SingleChar::new(predicate)
}

/// Parser that matches one specific character
pub fn certain_char(expected: char) -> SingleChar<impl Fn(Option<char>) -> bool> {
    single_char(move |ch| ch == Some(expected))
}
