//! Ordered, cursor-addressable sequence.
//!
//! This module provides [`CursorSequence`], an ordered list of items with a
//! movable "current item" cursor. Items are inserted immediately before or
//! after the cursor and removed at the cursor; traversal moves the cursor
//! forward from the first item.
//!
//! # Cursor States
//!
//! The cursor is an index in `[0, len]`. An index below `len` names the
//! current item; an index equal to `len` means there is no current item.
//!
//! ```text
//!                     start (len > 0)
//!   no current item ───────────────────► has current item
//!          ▲                                    │  │
//!          │  advance past the last item        │  │ advance / insert_* /
//!          │  remove_current on the last item   │  │ remove_current (not last)
//!          └────────────────────────────────────┘  └──────► has current item
//! ```
//!
//! Operations that need a current item return [`SequenceError`] instead of
//! asserting, and leave the sequence untouched when they do.
//!
//! # Examples
//!
//! ```rust
//! use dense_collections::dense::CursorSequence;
//!
//! let mut sequence = CursorSequence::new();
//! sequence.insert_after(5);
//! sequence.insert_after(7);
//!
//! sequence.start();
//! assert_eq!(sequence.current(), Some(&5));
//! sequence.advance().unwrap();
//! assert_eq!(sequence.current(), Some(&7));
//! sequence.advance().unwrap();
//! assert!(!sequence.has_current());
//! ```

use std::fmt;
use std::io;

use super::buffer::{self, GrowableBuffer};
use super::dump;
use super::error::{SequenceError, StorageError};
use super::growth::GrowthPolicy;

/// The smallest capacity a sequence buffer is ever resized to.
const MINIMUM_CAPACITY: usize = 1;

/// A growable ordered list with a "current item" cursor.
///
/// Cloning performs a deep copy of the items and keeps both the cursor and
/// the capacity. [`Clone::clone_from`] behaves like assignment: it copies
/// items and cursor, and grows the destination's capacity only when the
/// source's capacity is larger.
///
/// # Type Parameters
///
/// * `T` - The item type.
pub struct CursorSequence<T> {
    buffer: GrowableBuffer<T>,
    cursor: usize,
}

impl<T> CursorSequence<T> {
    /// Capacity used by [`Self::new`].
    pub const DEFAULT_CAPACITY: usize = 30;

    /// Growth applied when an insertion finds the buffer full.
    pub const GROWTH_POLICY: GrowthPolicy = GrowthPolicy::ONE_AND_A_QUARTER;

    /// Creates an empty sequence with [`Self::DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with room for `capacity` items.
    ///
    /// A capacity of zero is replaced by one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: GrowableBuffer::with_capacity(capacity, MINIMUM_CAPACITY),
            cursor: 0,
        }
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the sequence has no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of items the sequence can hold before growing.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the items in order, independent of the cursor.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Returns an iterator over the items in order, independent of the
    /// cursor.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Moves the cursor to the first item.
    ///
    /// On an empty sequence this leaves no current item.
    #[inline]
    pub const fn start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the next item, or past the end if the current
    /// item is the last one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoCurrentItem`] if there is no current item.
    pub const fn advance(&mut self) -> Result<(), SequenceError> {
        if !self.has_current() {
            return Err(SequenceError::NoCurrentItem {
                operation: "advance",
            });
        }
        self.cursor += 1;
        Ok(())
    }

    /// Returns `true` if the cursor names an item.
    #[inline]
    #[must_use]
    pub const fn has_current(&self) -> bool {
        self.cursor != self.len()
    }

    /// Returns the current item, or `None` if there is none.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.as_slice().get(self.cursor)
    }

    /// Returns the index of the current item, or `None` if there is none.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        if self.has_current() {
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Inserts `item` before the current item and makes it current.
    ///
    /// Without a current item, `item` becomes the first item instead. A full
    /// buffer grows by [`Self::GROWTH_POLICY`] first; failing to allocate the
    /// larger buffer terminates the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::CursorSequence;
    ///
    /// let mut sequence: CursorSequence<i32> = [1, 3].into_iter().collect();
    /// sequence.insert_before(0);
    /// assert_eq!(sequence.as_slice(), &[0, 1, 3]);
    ///
    /// sequence.advance().unwrap();
    /// sequence.advance().unwrap();
    /// sequence.insert_before(2);
    /// assert_eq!(sequence.as_slice(), &[0, 1, 2, 3]);
    /// assert_eq!(sequence.current(), Some(&2));
    /// ```
    pub fn insert_before(&mut self, item: T) {
        if let Err(error) = self.try_insert_before(item) {
            buffer::abort_on(error);
        }
    }

    /// Like [`Self::insert_before`], but reports allocation failure to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the buffer had to grow and the allocation
    /// failed. The sequence is unchanged in that case.
    pub fn try_insert_before(&mut self, item: T) -> Result<(), StorageError> {
        let index = if self.has_current() { self.cursor } else { 0 };
        self.buffer.try_insert(Self::GROWTH_POLICY, index, item)?;
        self.cursor = index;
        Ok(())
    }

    /// Inserts `item` after the current item and makes it current.
    ///
    /// Without a current item, `item` is appended at the end instead. A full
    /// buffer grows by [`Self::GROWTH_POLICY`] first; failing to allocate the
    /// larger buffer terminates the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::CursorSequence;
    ///
    /// let mut sequence: CursorSequence<i32> = [1, 3].into_iter().collect();
    /// sequence.start();
    /// sequence.insert_after(2);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    /// assert_eq!(sequence.current(), Some(&2));
    /// ```
    pub fn insert_after(&mut self, item: T) {
        if let Err(error) = self.try_insert_after(item) {
            buffer::abort_on(error);
        }
    }

    /// Like [`Self::insert_after`], but reports allocation failure to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the buffer had to grow and the allocation
    /// failed. The sequence is unchanged in that case.
    pub fn try_insert_after(&mut self, item: T) -> Result<(), StorageError> {
        // Without a current item the cursor already equals len, the append slot.
        let index = if self.has_current() {
            self.cursor + 1
        } else {
            self.cursor
        };
        self.buffer.try_insert(Self::GROWTH_POLICY, index, item)?;
        self.cursor = index;
        Ok(())
    }

    /// Removes and returns the current item.
    ///
    /// The item after it slides into its place and becomes current. Removing
    /// the last item leaves no current item.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoCurrentItem`] if there is no current item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::CursorSequence;
    ///
    /// let mut sequence: CursorSequence<i32> = [1, 2].into_iter().collect();
    /// sequence.start();
    /// sequence.advance().unwrap();
    /// assert_eq!(sequence.remove_current(), Ok(2));
    /// assert!(!sequence.has_current());
    /// ```
    pub fn remove_current(&mut self) -> Result<T, SequenceError> {
        if !self.has_current() {
            return Err(SequenceError::NoCurrentItem {
                operation: "remove_current",
            });
        }
        // The cursor keeps its index: it now names the next item, or equals
        // the shrunken len if the removed item was last.
        Ok(self.buffer.remove(self.cursor))
    }
}

impl<T: fmt::Display> CursorSequence<T> {
    /// Writes the items to `out`, separated by two spaces.
    ///
    /// Nothing is written for an empty sequence.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `out`.
    pub fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        dump::write_delimited(out, self.as_slice())
    }

    /// Writes the same bytes as [`Self::dump`] to an I/O sink.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `out`.
    pub fn dump_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        dump::write_delimited_io(out, self.as_slice())
    }
}

impl<T> Default for CursorSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CursorSequence<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            cursor: self.cursor,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let capacity = self.capacity().max(source.capacity());
        self.buffer.overwrite_from(&source.buffer, capacity);
        self.cursor = source.cursor;
    }
}

impl<T: PartialEq> PartialEq for CursorSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice() && self.cursor == other.cursor
    }
}

impl<T: Eq> Eq for CursorSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for CursorSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CursorSequence")
            .field("items", &self.as_slice())
            .field("current_index", &self.current_index())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for CursorSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(formatter)
    }
}

impl<T> Extend<T> for CursorSequence<T> {
    /// Appends items at the end. A current item stays current; without one,
    /// the sequence still has no current item afterwards.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let had_current = self.has_current();
        for item in iter {
            self.buffer.push(Self::GROWTH_POLICY, item);
        }
        if !had_current {
            self.cursor = self.len();
        }
    }
}

impl<T> FromIterator<T> for CursorSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T> IntoIterator for &'a CursorSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(CursorSequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(CursorSequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CursorSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct CursorSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CursorSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CursorSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CursorSequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut sequence = CursorSequence::new();
        while let Some(item) = seq.next_element()? {
            sequence.buffer.push(CursorSequence::<T>::GROWTH_POLICY, item);
        }
        sequence.cursor = sequence.len();
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CursorSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CursorSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
