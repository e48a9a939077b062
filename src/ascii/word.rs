use crate::ascii::class::is_alpha;
use crate::map::MapExt;
use crate::one_plus::one_plus;
use crate::parser::Parser;
use crate::single_char::single_char;

/// Parser that matches a run of lowercase ASCII letters and yields it as a `String`
pub fn word<'code>() -> impl Parser<'code, Output = String> {
    one_plus(single_char(is_alpha)).map(|letters| letters.into_iter().collect::<String>())
}
