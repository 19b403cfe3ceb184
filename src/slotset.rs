use std::fmt;
use std::mem;
use std::str::FromStr;

use log::{debug, trace};

use crate::constants::{BUCKET_COUNT, EMPTY_VALUE};
use crate::cursor::Cursor;
use crate::error::SetError;

/// The bucket a value belongs in: `abs(value) % BUCKET_COUNT`.
pub fn bucket_for(value: i32) -> usize {
    (value.unsigned_abs() % BUCKET_COUNT as u32) as usize
}

/// A set of integers stored in a fixed array of `BUCKET_COUNT` slots.
///
/// Every value lives in exactly the slot `bucket_for` gives it, and each slot
/// holds one value. There is no chaining: inserting a value whose slot holds a
/// different value replaces that value. This matches the behavior the set has
/// always had, so a set that resolves collisions should be a separate type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotSet {
    // buckets[i] == EMPTY_VALUE means the slot is unoccupied.
    buckets: [i32; BUCKET_COUNT],
    num_elements: usize,
}

impl SlotSet {
    pub const fn new() -> Self {
        SlotSet {
            buckets: [EMPTY_VALUE; BUCKET_COUNT],
            num_elements: 0,
        }
    }

    /// Moves the contents out into a new set, leaving this one empty.
    pub fn take(&mut self) -> SlotSet {
        mem::take(self)
    }

    /// Replaces the contents with those of `rhs`, leaving `rhs` empty.
    pub fn assign_move(&mut self, rhs: &mut SlotSet) {
        *self = rhs.take();
    }

    /// Clears the set, then inserts each value in order.
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i32>,
    {
        self.clear();
        self.extend(values);
    }

    pub fn swap(&mut self, rhs: &mut SlotSet) {
        mem::swap(self, rhs);
    }

    pub fn begin(&self) -> Cursor<'_> {
        Cursor::first_occupied(&self.buckets, 0)
    }

    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(&self.buckets, BUCKET_COUNT)
    }

    pub fn iter(&self) -> Cursor<'_> {
        self.begin()
    }

    pub fn bucket(&self, value: i32) -> usize {
        bucket_for(value)
    }

    /// Looks only in the value's own bucket. Returns `end()` on a miss.
    pub fn find(&self, value: i32) -> Cursor<'_> {
        let i = bucket_for(value);
        if value != EMPTY_VALUE && self.buckets[i] == value {
            Cursor::new(&self.buckets, i)
        } else {
            self.end()
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        !self.find(value).is_end()
    }

    /// Stores `value` in its bucket, replacing whatever was there.
    ///
    /// Panics if `value` is `EMPTY_VALUE`.
    pub fn insert(&mut self, value: i32) -> Cursor<'_> {
        match self.try_insert(value) {
            Ok(cursor) => cursor,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_insert(&mut self, value: i32) -> Result<Cursor<'_>, SetError> {
        if value == EMPTY_VALUE {
            return Err(SetError::ReservedValue);
        }

        let i = bucket_for(value);
        let previous = self.buckets[i];
        if previous == EMPTY_VALUE {
            trace!("inserting {} into bucket {}", value, i);
            self.num_elements += 1;
        } else if previous != value {
            debug!("inserting {} evicts {} from bucket {}", value, previous, i);
        }
        self.buckets[i] = value;

        Ok(Cursor::new(&self.buckets, i))
    }

    /// Removes `value` and returns a cursor to the next occupied slot.
    /// Returns `end()` without changing anything if `value` is absent.
    pub fn erase(&mut self, value: i32) -> Cursor<'_> {
        let i = bucket_for(value);
        if value == EMPTY_VALUE || self.buckets[i] != value {
            return self.end();
        }

        trace!("erasing {} from bucket {}", value, i);
        self.buckets[i] = EMPTY_VALUE;
        self.num_elements -= 1;

        Cursor::first_occupied(&self.buckets, i + 1)
    }

    pub fn clear(&mut self) {
        self.buckets = [EMPTY_VALUE; BUCKET_COUNT];
        self.num_elements = 0;
    }

    pub fn len(&self) -> usize {
        self.num_elements
    }

    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    pub const fn bucket_count(&self) -> usize {
        BUCKET_COUNT
    }

    /// 1 if bucket `i` is occupied, otherwise 0.
    ///
    /// Panics if `i >= BUCKET_COUNT`.
    pub fn bucket_size(&self, i: usize) -> usize {
        match self.try_bucket_size(i) {
            Ok(size) => size,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_bucket_size(&self, i: usize) -> Result<usize, SetError> {
        self.buckets
            .get(i)
            .map(|&value| usize::from(value != EMPTY_VALUE))
            .ok_or(SetError::BucketOutOfRange { index: i })
    }

    pub fn slots(&self) -> &[i32; BUCKET_COUNT] {
        &self.buckets
    }
}

pub fn swap(lhs: &mut SlotSet, rhs: &mut SlotSet) {
    lhs.swap(rhs);
}

impl Default for SlotSet {
    fn default() -> Self {
        SlotSet::new()
    }
}

impl Extend<i32> for SlotSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for SlotSet {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut set = SlotSet::new();
        set.extend(values);
        set
    }
}

impl<const N: usize> From<[i32; N]> for SlotSet {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a SlotSet {
    type Item = i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Cursor<'a> {
        self.begin()
    }
}

/// Parses a comma-separated list such as `"31, 55, 67"`.
impl FromStr for SlotSet {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = SlotSet::new();
        for token in s.split(',').map(str::trim).filter(|token| !token.is_empty()) {
            let value = token.parse().map_err(|_| SetError::Parse {
                token: token.to_owned(),
            })?;
            set.try_insert(value)?;
        }
        Ok(set)
    }
}

/*
 * Draws the slots as a row of boxes with the bucket index under each:
 *
 *    +----+----+----+----+----+----+----+----+----+----+
 *    |    | 31 |    |    |    | 55 |    | 67 |    |    |
 *    +----+----+----+----+----+----+----+----+----+----+
 *      0    1    2    3    4    5    6    7    8    9
 */
impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("{}+", "+----".repeat(BUCKET_COUNT));

        writeln!(f, "{}", border)?;
        for &value in &self.buckets {
            if value == EMPTY_VALUE {
                write!(f, "|    ")?;
            } else {
                write!(f, "|{:^4}", value)?;
            }
        }
        writeln!(f, "|")?;
        writeln!(f, "{}", border)?;

        let indices: String = (0..BUCKET_COUNT).map(|i| format!("{:^5}", i)).collect();
        write!(f, "{}", indices.trim_end())
    }
}
