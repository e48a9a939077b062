use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Runs `parser` on successive branches until it fails, committing each
/// success. The failure that ends the loop is dropped.
///
/// The caller must make sure `parser` consumes input whenever it succeeds,
/// otherwise this never returns.
pub(crate) fn greedy<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
) -> (Vec<P::Output>, Cursor<'code>)
where
    P: Parser<'code>,
{
    let mut results = Vec::new();

    while let Ok((value, branch)) = parser.parse(cursor.branch()) {
        cursor.commit(branch);
        results.push(value);
    }

    (results, cursor)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The inner parser must consume input whenever it succeeds:
/// repeating a parser that matches the empty string loops forever.
pub struct ZeroPlus<P> {
    parser: P,
}

impl<P> ZeroPlus<P> {
    pub fn new(parser: P) -> Self {
        ZeroPlus { parser }
    }
}

impl<'code, P> Parser<'code> for ZeroPlus<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(greedy(&self.parser, cursor))
    }
}

/// Convenience function to create a ZeroPlus parser
pub fn zero_plus<'code, P>(parser: P) -> ZeroPlus<P>
where
    P: Parser<'code>,
{
    ZeroPlus::new(parser)
}
