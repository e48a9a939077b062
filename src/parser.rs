use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of running a parser: the value and the advanced cursor, or the
/// reason the input did not match.
pub type ParseResult<'code, O> = Result<(O, Cursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success,
    /// or Err if the parse fails. A failure hands back no cursor, so nothing
    /// it consumed is visible to the caller.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures over a cursor are parsers
impl<'code, F, O> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        self(cursor)
    }
}

/// A type-erased parser, for mixing parsers of different types in one `Vec`
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

impl<'code, O> Parser<'code> for BoxedParser<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
