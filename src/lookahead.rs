use crate::cursor::Cursor;
use crate::error::{NO_ALTERNATIVE, ParseError};
use crate::parser::{BoxedParser, ParseResult, Parser};
use std::convert::identity;

/// What a lookahead arm yields when it has no transform of its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookaheadMatch<L, P> {
    pub lookahead: L,
    pub parse: P,
}

/// One guarded branch of a [`Lookahead`]
pub trait Arm<'code> {
    type Output;

    /// `None` when the arm's lookahead does not match at `cursor`, otherwise
    /// the final outcome of the arm's parse step.
    fn attempt(&self, cursor: Cursor<'code>) -> Option<ParseResult<'code, Self::Output>>;
}

type Untransformed<L, P> = fn(LookaheadMatch<L, P>) -> LookaheadMatch<L, P>;

/// An arm built from a lookahead parser, a parse step and a transform.
///
/// When `consume` is set the parse step starts where the lookahead stopped,
/// otherwise it starts from the same position as the lookahead did.
pub struct LookaheadArm<L, P, F> {
    lookahead: L,
    consume: bool,
    parse: P,
    transform: F,
}

impl<L, P, F> LookaheadArm<L, P, F> {
    /// Replace the arm's transform. The transform receives the
    /// [`LookaheadMatch`] of both values.
    pub fn transform<'code, G, O>(self, transform: G) -> LookaheadArm<L, P, G>
    where
        L: Parser<'code>,
        P: Parser<'code>,
        G: Fn(LookaheadMatch<L::Output, P::Output>) -> O,
    {
        LookaheadArm {
            lookahead: self.lookahead,
            consume: self.consume,
            parse: self.parse,
            transform,
        }
    }

    pub fn boxed<'code, O>(self) -> BoxedArm<'code, O>
    where
        Self: Arm<'code, Output = O> + 'code,
    {
        Box::new(self)
    }
}

impl<'code, L, P, F, O> Arm<'code> for LookaheadArm<L, P, F>
where
    L: Parser<'code>,
    P: Parser<'code>,
    F: Fn(LookaheadMatch<L::Output, P::Output>) -> O,
{
    type Output = O;

    fn attempt(&self, cursor: Cursor<'code>) -> Option<ParseResult<'code, O>> {
        let (lookahead, after) = self.lookahead.parse(cursor.branch()).ok()?;
        let start = if self.consume { after } else { cursor.branch() };

        let outcome = self.parse.parse(start).map(|(parse, end)| {
            let matched = LookaheadMatch { lookahead, parse };
            ((self.transform)(matched), end)
        });
        Some(outcome)
    }
}

/// Convenience function to create a LookaheadArm yielding a [`LookaheadMatch`]
pub fn arm<'code, L, P>(
    lookahead: L,
    consume: bool,
    parse: P,
) -> LookaheadArm<L, P, Untransformed<L::Output, P::Output>>
where
    L: Parser<'code>,
    P: Parser<'code>,
{
    LookaheadArm {
        lookahead,
        consume,
        parse,
        transform: identity as Untransformed<L::Output, P::Output>,
    }
}

pub type BoxedArm<'code, O> = Box<dyn Arm<'code, Output = O> + 'code>;

/// Parser combinator that picks a branch by peeking ahead
///
/// Arms are tried in order. The first arm whose lookahead matches commits
/// to its parse step: if that step fails, the whole combinator fails with
/// the step's error and later arms are not tried. When no lookahead
/// matches, the `otherwise` parser runs from the original position, or the
/// combinator fails with a generic message if there is none.
pub struct Lookahead<'code, O> {
    arms: Vec<BoxedArm<'code, O>>,
    otherwise: Option<BoxedParser<'code, O>>,
}

impl<'code, O> Lookahead<'code, O> {
    pub fn new(arms: Vec<BoxedArm<'code, O>>) -> Self {
        Lookahead {
            arms,
            otherwise: None,
        }
    }

    /// Append an arm
    pub fn arm(mut self, arm: impl Arm<'code, Output = O> + 'code) -> Self {
        self.arms.push(Box::new(arm));
        self
    }

    /// Parser to fall back on when no arm's lookahead matches
    pub fn otherwise(mut self, parser: impl Parser<'code, Output = O> + 'code) -> Self {
        self.otherwise = Some(Box::new(parser));
        self
    }
}

impl<'code, O> Parser<'code> for Lookahead<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        for arm in &self.arms {
            if let Some(outcome) = arm.attempt(cursor) {
                return outcome;
            }
        }

        match &self.otherwise {
            Some(parser) => parser.parse(cursor),
            None => Err(ParseError::new(NO_ALTERNATIVE, cursor)),
        }
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'code, O>(arms: Vec<BoxedArm<'code, O>>) -> Lookahead<'code, O> {
    Lookahead::new(arms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::{is_digit10, word};
    use crate::map::MapExt;
    use crate::one_plus::one_plus;
    use crate::single_char::{certain_char, single_char};

    #[derive(Debug, PartialEq)]
    enum Item {
        Tag(String),
        Name(String),
        Number(String),
    }

    fn item<'code>() -> Lookahead<'code, Item> {
        lookahead(vec![])
            // `#tag`: the marker is consumed and the tag follows it
            .arm(arm(certain_char('#'), true, word()).transform(|m| Item::Tag(m.parse)))
            // a name is recognised by its first letter, which it still parses
            .arm(arm(word(), false, word()).transform(|m| Item::Name(m.parse)))
    }

    #[test]
    fn test_lookahead_consuming_arm() {
        let cursor = Cursor::new("#rust!");
        let (value, cursor) = item().parse(cursor).unwrap();

        assert_eq!(value, Item::Tag("rust".to_string()));
        assert_eq!(cursor.peek(), Some('!'));
    }

    #[test]
    fn test_lookahead_non_consuming_arm_sees_original_input() {
        let cursor = Cursor::new("rust!");
        let (value, cursor) = item().parse(cursor).unwrap();

        assert_eq!(value, Item::Name("rust".to_string()));
        assert_eq!(cursor.peek(), Some('!'));
    }

    #[test]
    fn test_lookahead_untransformed_match() {
        let cursor = Cursor::new("ab");
        let parser = lookahead(vec![arm(certain_char('a'), false, word()).boxed()]);

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(
            matched,
            LookaheadMatch {
                lookahead: 'a',
                parse: "ab".to_string()
            }
        );
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_lookahead_consume_flag_changes_parse_start() {
        let consuming = lookahead(vec![arm(certain_char('a'), true, word()).boxed()]);
        let (matched, _) = consuming.parse(Cursor::new("abc")).unwrap();
        assert_eq!(matched.parse, "bc");

        let peeking = lookahead(vec![arm(certain_char('a'), false, word()).boxed()]);
        let (matched, _) = peeking.parse(Cursor::new("abc")).unwrap();
        assert_eq!(matched.parse, "abc");
    }

    #[test]
    fn test_lookahead_parse_failure_is_final() {
        // The first arm's lookahead matches "#", so the second arm, which
        // would accept "#1", is never tried.
        let parser = lookahead(vec![])
            .arm(arm(certain_char('#'), true, word()).transform(|m| m.parse))
            .arm(
                arm(certain_char('#'), true, one_plus(single_char(is_digit10)))
                    .transform(|m| m.parse.into_iter().collect::<String>()),
            );

        let error = parser.parse(Cursor::new("#1")).unwrap_err();
        assert_eq!(error.message(), "expected at least one occurrence");
        assert_eq!(error.position().offset(), 1);
    }

    #[test]
    fn test_lookahead_otherwise() {
        let parser = item().otherwise(
            one_plus(single_char(is_digit10))
                .map(|digits| Item::Number(digits.into_iter().collect())),
        );

        let (value, cursor) = parser.parse(Cursor::new("42;")).unwrap();
        assert_eq!(value, Item::Number("42".to_string()));
        assert_eq!(cursor.peek(), Some(';'));
    }

    #[test]
    fn test_lookahead_no_arm_matches() {
        let cursor = Cursor::starting_at("x;", 1).unwrap();
        let error = item().parse(cursor).unwrap_err();

        assert_eq!(error.message(), "no alternative matches");
        assert_eq!(error.position(), cursor.position());
    }

    #[test]
    fn test_lookahead_with_sequence_lookahead() {
        let parser = lookahead(vec![
            arm(certain_char('-').and(certain_char('-')), true, word())
                .transform(|m| m.parse)
                .boxed(),
        ])
        .otherwise(word());

        let (flag, _) = parser.parse(Cursor::new("--verbose")).unwrap();
        assert_eq!(flag, "verbose");

        let (plain, _) = parser.parse(Cursor::new("verbose")).unwrap();
        assert_eq!(plain, "verbose");
    }
}
