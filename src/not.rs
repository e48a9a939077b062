use crate::cursor::Cursor;
use crate::error::{ParseError, UNEXPECTED_MATCH};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        match self.parser.parse(cursor.branch()) {
            Ok(_) => Err(ParseError::new(UNEXPECTED_MATCH, cursor)),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::{is_alpha, word};
    use crate::single_char::{certain_char, single_char};

    #[test]
    fn test_not_succeeds_when_inner_fails() {
        let cursor = Cursor::new("123");
        let ((), next) = not(certain_char('a')).parse(cursor).unwrap();
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_not_fails_when_inner_matches() {
        let cursor = Cursor::new("abc");
        let error = not(certain_char('a')).parse(cursor).unwrap_err();

        assert_eq!(error.message(), "unexpected match");
        assert_eq!(error.position().offset(), 0);
    }

    #[test]
    fn test_not_as_word_boundary() {
        // "if" only as a whole word
        let keyword = certain_char('i')
            .and(certain_char('f'))
            .and(not(single_char(is_alpha)));

        assert!(keyword.parse(Cursor::new("if x")).is_ok());
        assert!(keyword.parse(Cursor::new("iffy")).is_err());
        assert!(word().parse(Cursor::new("iffy")).is_ok());
    }
}
