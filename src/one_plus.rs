use crate::cursor::Cursor;
use crate::error::{AT_LEAST_ONE, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::zero_plus::greedy;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails at the starting position if the first attempt fails.
pub struct OnePlus<P> {
    parser: P,
}

impl<P> OnePlus<P> {
    pub fn new(parser: P) -> Self {
        OnePlus { parser }
    }
}

impl<'code, P> Parser<'code> for OnePlus<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (results, next) = greedy(&self.parser, cursor);
        if results.is_empty() {
            return Err(ParseError::new(AT_LEAST_ONE, cursor));
        }
        Ok((results, next))
    }
}

/// Convenience function to create a OnePlus parser
pub fn one_plus<'code, P>(parser: P) -> OnePlus<P>
where
    P: Parser<'code>,
{
    OnePlus::new(parser)
}
