use crate::cursor::Cursor;
use crate::error::UsageError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A forward-declared grammar production.
///
/// A rule starts out empty and is bound to a body exactly once with
/// [`Rule::define`]. Clones share the same slot, so a rule can be referenced
/// by other parsers (including its own body) before the body exists. This is
/// what makes mutually recursive grammars expressible.
///
/// Invoking a rule that was never defined is a bug in the grammar, not a
/// mismatch in the input, and panics.
///
/// ```
/// use descent::and::AndExt;
/// use descent::map::MapExt;
/// use descent::optional::OptionalExt;
/// use descent::single_char::certain_char;
/// use descent::{Cursor, Parser, Rule};
///
/// // nested := '(' nested? ')'
/// let nested: Rule<'_, usize> = Rule::named("nested");
/// nested
///     .define(
///         certain_char('(')
///             .and(nested.clone().optional())
///             .and(certain_char(')'))
///             .map(|((_, inner), _)| inner.map_or(1, |depth| depth + 1)),
///     )
///     .unwrap();
///
/// let (depth, _) = nested.parse(Cursor::new("((()))")).unwrap();
/// assert_eq!(depth, 3);
/// ```
pub struct Rule<'code, O> {
    name: Rc<str>,
    body: Rc<OnceCell<BoxedParser<'code, O>>>,
}

impl<'code, O> Rule<'code, O> {
    pub fn new() -> Self {
        Self::named("<anonymous>")
    }

    /// An empty rule whose name shows up in diagnostics
    pub fn named(name: &str) -> Self {
        Rule {
            name: Rc::from(name),
            body: Rc::new(OnceCell::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defined(&self) -> bool {
        self.body.get().is_some()
    }

    /// Bind the rule's body. A rule can only be defined once.
    pub fn define(&self, parser: impl Parser<'code, Output = O> + 'code) -> Result<(), UsageError> {
        self.body
            .set(Box::new(parser))
            .map_err(|_| UsageError::AlreadyDefined {
                rule: self.name.to_string(),
            })?;
        log_debug!("defined rule `{}`", self.name);
        Ok(())
    }
}

impl<O> Default for Rule<'_, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for Rule<'_, O> {
    fn clone(&self) -> Self {
        Rule {
            name: Rc::clone(&self.name),
            body: Rc::clone(&self.body),
        }
    }
}

impl<O> fmt::Debug for Rule<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<'code, O> Parser<'code> for Rule<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        let Some(body) = self.body.get() else {
            panic!(
                "{}",
                UsageError::UndefinedRule {
                    rule: self.name.to_string()
                }
            );
        };
        log_trace!("entering rule `{}` at {}", self.name, cursor.position());
        body.parse(cursor)
    }
}

/// Convenience function to create an empty Rule
pub fn production<'code, O>() -> Rule<'code, O> {
    Rule::new()
}
