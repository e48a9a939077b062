use crate::cursor::Cursor;
use crate::error::{EXPECTED_END_OF_INPUT, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only at the end of the input, consuming nothing
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        match cursor.peek() {
            None => Ok(((), cursor)),
            Some(_) => Err(ParseError::new(EXPECTED_END_OF_INPUT, cursor)),
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
