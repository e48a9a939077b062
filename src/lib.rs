//! # descent - Backtracking Parser Combinators
//!
//! A recursive-descent parser combinator library over character input.
//!
//! Grammars are built from small parsers combined with sequence, ordered
//! choice, repetition and lookahead combinators. Recursive and mutually
//! recursive productions are declared up front with [`Rule`] and defined
//! later. The library emphasizes:
//!
//! - **Backtracking by value**: a [`Cursor`] is a `Copy` position, so a failed
//!   attempt simply never hands its cursor back and consumes nothing
//! - **Mismatch is a value**: every grammar mismatch is a [`ParseError`] with a
//!   message and a position; only grammar-construction bugs panic
//! - **Composability**: combinators nest arbitrarily deep behind one
//!   [`Parser`] trait
//!
//! ```
//! use descent::ascii::{is_digit10, space_before};
//! use descent::{
//!     AndExt, Cursor, MapExt, alternative, certain_char, one_plus, parse_sync, single_char,
//!     zero_plus,
//! };
//!
//! let number = one_plus(single_char(is_digit10))
//!     .map(|digits| digits.into_iter().collect::<String>().parse::<i64>().unwrap_or_default());
//! let sum = number
//!     .and(zero_plus(
//!         space_before(alternative([certain_char('+'), certain_char('-')]))
//!             .and(space_before(one_plus(single_char(is_digit10)))),
//!     ))
//!     .map(|(first, rest)| {
//!         rest.into_iter().fold(first, |total, (op, digits)| {
//!             let value: i64 = digits.into_iter().collect::<String>().parse().unwrap_or_default();
//!             if op == '+' { total + value } else { total - value }
//!         })
//!     });
//!
//! let (total, _) = parse_sync(&sum, Cursor::new("10 + 5 - 3")).unwrap();
//! assert_eq!(total, 12);
//! ```
//!
//! The inner parser of [`zero_plus`] and [`one_plus`] must consume input
//! whenever it succeeds. Repeating a parser that can match the empty string
//! never terminates, and the library does not try to detect it.

#[macro_use]
mod macros;

pub mod alternative;
pub mod and;
pub mod ascii;
pub mod cursor;
pub mod driver;
pub mod eof;
pub mod error;
pub mod lookahead;
pub mod map;
pub mod not;
pub mod one_plus;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod rule;
pub mod seq;
pub mod single_char;
pub mod zero_plus;

pub use alternative::{Alternative, alternative};
pub use and::{And, AndExt, and};
pub use cursor::Cursor;
pub use driver::{parse_complete, parse_sync};
pub use eof::{Eof, eof};
pub use error::{CodeLoc, ParseError, UsageError};
pub use lookahead::{Arm, BoxedArm, Lookahead, LookaheadArm, LookaheadMatch, arm, lookahead};
pub use map::{Map, MapExt, map};
pub use not::{Not, not};
pub use one_plus::{OnePlus, one_plus};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser};
pub use position::{Position, Span, SpanExt, WithSpan, with_span};
pub use rule::{Rule, production};
pub use seq::{Seq, seq};
pub use single_char::{SingleChar, certain_char, single_char};
pub use zero_plus::{ZeroPlus, zero_plus};
