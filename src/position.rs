use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Opaque snapshot of a cursor's offset, used for diagnostics.
///
/// The offset counts bytes of the UTF-8 source, which coincides with the
/// character index for ASCII input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    offset: usize,
}

impl Position {
    pub fn new(offset: usize) -> Self {
        Position { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset)
    }
}

/// Represents a span in the source text with start and end positions
/// and a reference to the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source text
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: Position, end: Position) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        self.source
            .get(self.start.offset()..self.end.offset())
            .unwrap_or_default()
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<'code, P> Parser<'code> for WithSpan<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        let (output, next) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), start, next.position());
        Ok(((output, span), next))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpanExt<'code>: Parser<'code> + Sized {
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<'code, P> SpanExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WithSpan combinator
pub fn with_span<P>(parser: P) -> WithSpan<P> {
    WithSpan::new(parser)
}
