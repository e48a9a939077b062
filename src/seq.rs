use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs parsers one after another and collects their values
///
/// All parsers run on a single branch of the caller's cursor. The first
/// failure is returned unchanged and the branch is dropped, so the input
/// consumed by earlier parsers is given back as well. Parsers of different
/// types can be mixed with [`BoxedExt::boxed`](crate::parser::BoxedExt::boxed),
/// or paired with [`and`](crate::and::and) when their outputs differ.
pub struct Seq<P> {
    parsers: Vec<P>,
}

impl<P> Seq<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Seq { parsers }
    }
}

impl<'code, P> Parser<'code> for Seq<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut branch = cursor.branch();
        let mut values = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next) = parser.parse(branch)?;
            values.push(value);
            branch = next;
        }

        Ok((values, branch))
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, P>(parsers: impl IntoIterator<Item = P>) -> Seq<P>
where
    P: Parser<'code>,
{
    Seq::new(parsers.into_iter().collect())
}
