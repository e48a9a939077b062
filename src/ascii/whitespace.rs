use crate::and::AndExt;
use crate::ascii::class::is_space;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::single_char::{SingleChar, single_char};
use crate::zero_plus::zero_plus;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> SingleChar<fn(Option<char>) -> bool> {
    single_char(is_space as fn(Option<char>) -> bool)
}

/// Skip any whitespace, then run `parser` and yield only its value
pub fn space_before<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    zero_plus(whitespace()).and(parser).map(|(_, value)| value)
}
