use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Yields `Some(value)` when the inner parser matches and `None` without
/// consuming anything when it does not. Never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let value = match self.parser.parse(cursor.branch()) {
            Ok((value, branch)) => {
                cursor.commit(branch);
                Some(value)
            }
            Err(_) => None,
        };
        Ok((value, cursor))
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
