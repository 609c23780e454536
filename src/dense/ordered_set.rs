//! Insertion-ordered set of distinct integers.
//!
//! This module provides [`BoundedOrderedSet`], a set of `i32` values stored
//! contiguously in order of first insertion, together with the free
//! predicate [`equals`].
//!
//! # Overview
//!
//! - Members occupy positions `[0, len)` of the backing buffer with no gaps.
//! - No value ever occupies two positions.
//! - Adding a value that is already a member changes nothing, not even its
//!   position. Removing a member closes the gap, keeping the relative order
//!   of the remaining members.
//! - A full buffer grows to `floor(1.5 * capacity) + 1` before appending.
//!   Capacity never shrinks on its own.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `add`          | O(n)       |
//! | `remove`       | O(n)       |
//! | `contains`     | O(n)       |
//! | `len`          | O(1)       |
//! | `is_subset_of` | O(n * m)   |
//! | `union_with`   | O(n * m)   |
//! | `intersect`    | O(n * m)   |
//! | `subtract`     | O(n * m)   |
//!
//! # Examples
//!
//! ```rust
//! use dense_collections::dense::BoundedOrderedSet;
//!
//! let mut set = BoundedOrderedSet::new();
//! assert!(set.add(3));
//! assert!(set.add(1));
//! assert!(set.add(2));
//! assert!(set.add(1)); // already a member: no-op, still reported as success
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.to_string(), "3  1  2");
//! ```

use std::fmt;
use std::io;

use super::buffer::{self, GrowableBuffer};
use super::dump;
use super::error::StorageError;
use super::growth::GrowthPolicy;

/// A growable set of distinct `i32` values in first-insertion order.
///
/// Cloning performs a deep copy of the members and keeps the source's
/// capacity; [`Clone::clone_from`] behaves like assignment and gives the
/// destination exactly the source's capacity.
///
/// # Examples
///
/// ```rust
/// use dense_collections::dense::BoundedOrderedSet;
///
/// let left: BoundedOrderedSet = [1, 2, 3].into_iter().collect();
/// let right: BoundedOrderedSet = [2, 3, 4].into_iter().collect();
///
/// let difference = left.subtract(&right);
/// assert_eq!(difference.as_slice(), &[1]);
/// ```
pub struct BoundedOrderedSet {
    buffer: GrowableBuffer<i32>,
}

impl BoundedOrderedSet {
    /// Capacity used by [`Self::new`] and as the floor for every resize.
    pub const DEFAULT_CAPACITY: usize = 1;

    /// Growth applied when an `add` finds the buffer full.
    pub const GROWTH_POLICY: GrowthPolicy = GrowthPolicy::ONE_AND_A_HALF;

    /// Creates an empty set with [`Self::DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty set with room for `capacity` members.
    ///
    /// A capacity of zero is replaced by [`Self::DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::BoundedOrderedSet;
    ///
    /// assert_eq!(BoundedOrderedSet::with_capacity(8).capacity(), 8);
    /// assert_eq!(BoundedOrderedSet::with_capacity(0).capacity(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: GrowableBuffer::with_capacity(capacity, Self::DEFAULT_CAPACITY),
        }
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of members the set can hold before growing.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the members in storage (first-insertion) order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        self.buffer.as_slice()
    }

    /// Returns an iterator over the members in storage order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.as_slice().iter().copied()
    }

    /// Returns `true` if `value` is a member.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    /// Adds `value` as the newest member.
    ///
    /// Adding an existing member leaves the set unchanged. Either way the
    /// call reports success. A full buffer grows by [`Self::GROWTH_POLICY`]
    /// first; failing to allocate the larger buffer terminates the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::BoundedOrderedSet;
    ///
    /// let mut set = BoundedOrderedSet::with_capacity(1);
    /// set.add(10);
    /// set.add(20);
    /// assert_eq!(set.capacity(), 2);
    /// assert_eq!(set.as_slice(), &[10, 20]);
    /// ```
    pub fn add(&mut self, value: i32) -> bool {
        match self.try_add(value) {
            Ok(added) => added,
            Err(error) => buffer::abort_on(error),
        }
    }

    /// Like [`Self::add`], but reports allocation failure to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the buffer had to grow and the allocation
    /// failed. The set is unchanged in that case.
    pub fn try_add(&mut self, value: i32) -> Result<bool, StorageError> {
        if !self.contains(value) {
            self.buffer.try_push(Self::GROWTH_POLICY, value)?;
        }
        Ok(true)
    }

    /// Removes `value`, returning `false` if it was not a member.
    ///
    /// Later members shift one position towards the front.
    pub fn remove(&mut self, value: i32) -> bool {
        let Some(index) = self.as_slice().iter().position(|&member| member == value) else {
            return false;
        };
        self.buffer.remove(index);
        true
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    ///
    /// The empty set is a subset of every set.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|member| other.contains(member))
    }

    /// Returns the union of `self` and `other`.
    ///
    /// The result lists the common members first, then members only in
    /// `self`, then members only in `other`, each group in the storage order
    /// of the set it came from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dense_collections::dense::BoundedOrderedSet;
    ///
    /// let left: BoundedOrderedSet = [1, 2, 3].into_iter().collect();
    /// let right: BoundedOrderedSet = [4, 3, 2].into_iter().collect();
    /// assert_eq!(left.union_with(&right).as_slice(), &[2, 3, 1, 4]);
    /// ```
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        let mut union = self.intersect(other);
        union.extend(self.subtract(other));
        union.extend(other.subtract(self));
        union
    }

    /// Returns the members of `self` that are also members of `other`, in
    /// the storage order of `self`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.iter().filter(|&member| other.contains(member)).collect()
    }

    /// Returns the members of `self` that are not members of `other`, in
    /// the storage order of `self`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.iter().filter(|&member| !other.contains(member)).collect()
    }

    /// Removes every member; the capacity is kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Writes the members to `out`, separated by two spaces.
    ///
    /// Nothing is written for an empty set.
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

/// Returns `true` if `left` and `right` have exactly the same members,
/// regardless of their storage order.
///
/// # Examples
///
/// ```rust
/// use dense_collections::dense::{BoundedOrderedSet, equals};
///
/// let left: BoundedOrderedSet = [1, 2, 3].into_iter().collect();
/// let right: BoundedOrderedSet = [3, 1, 2].into_iter().collect();
/// assert!(equals(&left, &right));
/// ```
#[must_use]
pub fn equals(left: &BoundedOrderedSet, right: &BoundedOrderedSet) -> bool {
    if left.is_empty() && right.is_empty() {
        return true;
    }
    left.len() == right.len() && left.is_subset_of(right) && right.is_subset_of(left)
}

impl Default for BoundedOrderedSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BoundedOrderedSet {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buffer
            .overwrite_from(&source.buffer, source.buffer.capacity());
    }
}

impl PartialEq for BoundedOrderedSet {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl Eq for BoundedOrderedSet {}

impl fmt::Debug for BoundedOrderedSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for BoundedOrderedSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(formatter)
    }
}

impl Extend<i32> for BoundedOrderedSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<i32> for BoundedOrderedSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a BoundedOrderedSet {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the members of a [`BoundedOrderedSet`] in storage
/// order.
pub struct BoundedOrderedSetIntoIterator {
    set: BoundedOrderedSet,
    index: usize,
}

impl Iterator for BoundedOrderedSetIntoIterator {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.set.as_slice().get(self.index).copied()?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundedOrderedSetIntoIterator {}

impl IntoIterator for BoundedOrderedSet {
    type Item = i32;
    type IntoIter = BoundedOrderedSetIntoIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BoundedOrderedSetIntoIterator {
            set: self,
            index: 0,
        }
    }
}

static_assertions::assert_impl_all!(BoundedOrderedSet: Send, Sync, Clone, Default);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BoundedOrderedSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct BoundedOrderedSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for BoundedOrderedSetVisitor {
    type Value = BoundedOrderedSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = BoundedOrderedSet::new();
        while let Some(value) = seq.next_element()? {
            set.add(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BoundedOrderedSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BoundedOrderedSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
