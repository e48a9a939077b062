use crate::cursor::Cursor;
use crate::error::{NO_ALTERNATIVE, ParseError};
use crate::parser::{ParseResult, Parser};

/// Ordered choice between any number of parsers
///
/// Each parser is tried on a fresh branch of the caller's cursor, in order.
/// The first one to succeed wins even if a later one would match more input.
/// When all of them fail the result is a generic failure at the original
/// position, and none of the attempts leave a trace on the cursor.
pub struct Alternative<P> {
    parsers: Vec<P>,
}

impl<P> Alternative<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Alternative { parsers }
    }
}

impl<'code, P> Parser<'code> for Alternative<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            if let Ok(success) = parser.parse(cursor.branch()) {
                return Ok(success);
            }
        }
        Err(ParseError::new(NO_ALTERNATIVE, cursor))
    }
}

/// Convenience function to create an Alternative parser
pub fn alternative<'code, P>(parsers: impl IntoIterator<Item = P>) -> Alternative<P>
where
    P: Parser<'code>,
{
    Alternative::new(parsers.into_iter().collect())
}
