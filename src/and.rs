use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nesting
/// mirrors the parsing order, and destructuring it is explicit about it.
///
/// Example:
/// ```
/// use descent::and::AndExt;
/// use descent::ascii::word;
/// use descent::single_char::certain_char;
/// use descent::{Cursor, Parser};
///
/// let cursor = Cursor::new("key=value");
/// let (((key, _), value), cursor) = word()
///     .and(certain_char('='))
///     .and(word())
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(key, "key");
/// assert_eq!(value, "value");
/// assert!(cursor.is_at_end());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{is_digit10, word};
    use crate::one_plus::one_plus;
    use crate::single_char::{certain_char, single_char};

    #[test]
    fn test_and_both_succeed() {
        let cursor = Cursor::new("a5xyz");
        let parser = certain_char('a').and(single_char(is_digit10));

        let ((letter, digit), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(letter, 'a');
        assert_eq!(digit, '5');
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = Cursor::new("bxyz");
        let parser = certain_char('a').and(certain_char('x'));
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_and_second_fails_reports_its_position() {
        let cursor = Cursor::new("axyz");
        let parser = certain_char('a').and(certain_char('5'));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position().offset(), 1);
    }

    #[test]
    fn test_and_mixed_outputs() {
        let cursor = Cursor::new("abc123");
        let parser = word().and(one_plus(single_char(is_digit10)));

        let ((name, digits), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(name, "abc");
        assert_eq!(digits, vec!['1', '2', '3']);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_and_function_syntax() {
        let cursor = Cursor::new("xy");
        let parser = and(certain_char('x'), certain_char('y'));

        let ((x, y), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((x, y), ('x', 'y'));
        assert!(cursor.is_at_end());
    }
}
