use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::constants::{BUCKET_COUNT, EMPTY_VALUE};

/// A position in a `SlotSet`'s slot array.
///
/// Advancing skips empty slots and stops at the end position, one past the
/// last slot. A cursor borrows the set it came from, so it cannot be held
/// across a mutation of that set.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    slots: &'a [i32; BUCKET_COUNT],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(slots: &'a [i32; BUCKET_COUNT], position: usize) -> Self {
        debug_assert!(position <= slots.len());
        Cursor { slots, position }
    }

    /// Lands on the first occupied slot at or after `position`, or the end.
    pub(crate) fn first_occupied(slots: &'a [i32; BUCKET_COUNT], position: usize) -> Self {
        let mut cursor = Cursor::new(slots, position);
        cursor.skip_empty();
        cursor
    }

    pub fn index(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.slots.len()
    }

    pub fn is_end(&self) -> bool {
        self.position == self.limit()
    }

    /// The value under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<i32> {
        self.slots.get(self.position).copied()
    }

    /// Moves to the next occupied slot. Stays put at the end.
    pub fn advance(&mut self) -> &mut Self {
        if self.is_end() {
            return self;
        }
        self.position += 1;
        self.skip_empty();
        self
    }

    /// Advances, returning a copy of the cursor from before the move.
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    fn skip_empty(&mut self) {
        while self.position < self.limit() && self.slots[self.position] == EMPTY_VALUE {
            self.position += 1;
        }
    }
}

// Only positions are compared. Cursors from different sets are not meant to
// be compared.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cursor<'_> {}

impl Deref for Cursor<'_> {
    type Target = i32;

    fn deref(&self) -> &i32 {
        if self.is_end() {
            panic!("cannot dereference the end cursor");
        }
        &self.slots[self.position]
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("limit", &self.limit())
            .finish()
    }
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_end() {
            (0, Some(0))
        } else {
            (1, Some(self.limit() - self.position))
        }
    }
}

impl FusedIterator for Cursor<'_> {}
