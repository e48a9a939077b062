use crate::cursor::Cursor;
use crate::eof::eof;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Run `parser` once from `cursor` and return its outcome as is.
///
/// Input left over after a successful parse is not an error here; sequence
/// the top-level rule with [`eof`] (or use [`parse_complete`]) to require
/// that the whole input is consumed.
///
/// ```
/// use descent::ascii::word;
/// use descent::{Cursor, parse_sync};
///
/// let (text, rest) = parse_sync(&word(), Cursor::new("abc def")).unwrap();
/// assert_eq!(text, "abc");
/// assert_eq!(rest.remaining(), " def");
/// ```
pub fn parse_sync<'code, P>(parser: &P, cursor: Cursor<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    log_debug!("parse started at {}", cursor.position());
    let outcome = parser.parse(cursor);
    match &outcome {
        Ok((_, end)) => log_debug!("parse succeeded, stopped at {}", end.position()),
        Err(error) => log_debug!("parse failed: {}", error),
    }
    outcome
}

/// Parse all of `source` with `parser` and return only the value.
pub fn parse_complete<'code, P>(
    parser: &P,
    source: &'code str,
) -> Result<P::Output, ParseError<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let (value, cursor) = parse_sync(parser, Cursor::new(source))?;
    eof().parse(cursor)?;
    Ok(value)
}
