use crate::error::UsageError;
use crate::position::Position;

/// A backtrackable position in a source text.
///
/// Cursors are plain `Copy` values: branching is a copy and committing is an
/// assignment, so a speculative parse can never disturb its caller's cursor.
/// Parsers take a cursor by value and hand back the advanced one on success.
///
/// The offset always sits on a character boundary within `[0, source.len()]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// Cursor at byte `offset` of `source`
    ///
    /// Fails if `offset` is past the end or inside a multi-byte character.
    pub fn starting_at(source: &'code str, offset: usize) -> Result<Self, UsageError> {
        if !source.is_char_boundary(offset) {
            return Err(UsageError::InvalidOffset {
                offset,
                len: source.len(),
            });
        }
        Ok(Cursor { source, offset })
    }

    /// The character under the cursor, or `None` at the end of the input
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Move past the current character. At the end of the input this does nothing.
    pub fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.offset += ch.len_utf8();
        }
    }

    /// Consuming form of [`Cursor::advance`]
    pub fn next(mut self) -> Self {
        self.advance();
        self
    }

    /// An independent copy to run a speculative parse against
    pub fn branch(&self) -> Self {
        *self
    }

    /// Adopt the state of a branch after the parse that ran on it succeeded
    pub fn commit(&mut self, from: Cursor<'code>) {
        *self = from;
    }

    pub fn position(&self) -> Position {
        Position::new(self.offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The whole input, independent of the cursor's position
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The input from the cursor's position on
    pub fn remaining(&self) -> &'code str {
        self.source.get(self.offset..).unwrap_or_default()
    }

    /// Consume the cursor and return the source and the current offset
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello\nworld");
        assert_eq!(cursor.peek(), Some('h'));

        let cursor = cursor.next();
        assert_eq!(cursor.peek(), Some('e'));
        assert_eq!(cursor.position(), Position::new(1));
    }

    #[test]
    fn test_peek_at_end_is_none() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();

        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), Position::new(2));
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(1));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = Cursor::new("añb");
        let cursor = cursor.next();
        assert_eq!(cursor.peek(), Some('ñ'));

        let cursor = cursor.next();
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.position(), Position::new(3));
    }

    #[test]
    fn test_starting_at() {
        let cursor = Cursor::starting_at("abcd", 2).unwrap();
        assert_eq!(cursor.peek(), Some('c'));
        assert_eq!(cursor.remaining(), "cd");

        let cursor = Cursor::starting_at("abcd", 4).unwrap();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_starting_at_rejects_bad_offsets() {
        assert_eq!(
            Cursor::starting_at("abc", 4),
            Err(UsageError::InvalidOffset { offset: 4, len: 3 })
        );
        assert!(Cursor::starting_at("ñ", 1).is_err());
    }

    #[test]
    fn test_branch_independence() {
        let cursor = Cursor::new("abcd");
        let mut branch = cursor.branch();

        branch.advance();
        branch.advance();

        assert_eq!(branch.peek(), Some('c'));
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn test_commit_adopts_branch() {
        let mut cursor = Cursor::new("abcd");
        let mut branch = cursor.branch();
        branch.advance();

        cursor.commit(branch);
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor, branch);

        // A later branch that is dropped leaves the committed state alone
        let mut discarded = cursor.branch();
        discarded.advance();
        assert_eq!(discarded.peek(), Some('c'));
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_inner() {
        let cursor = Cursor::new("xyz").next().next();
        let (source, offset) = cursor.inner();
        assert_eq!(source, "xyz");
        assert_eq!(offset, 2);
    }
}
