//! Exclusively owned backing storage with an explicit capacity.
//!
//! `GrowableBuffer` keeps live entries in a `Vec<T>` and tracks the logical
//! capacity separately, so the growth rules of the containers stay exact no
//! matter how the allocator rounds the physical allocation. The physical
//! allocation is always at least the logical capacity, so appending into
//! spare logical capacity never reallocates.

use super::error::StorageError;
use super::growth::GrowthPolicy;

/// Growable, contiguous storage shared by the dense containers.
///
/// # Invariants
///
/// - `items.len() <= capacity`
/// - `capacity >= minimum`
/// - `items.capacity() >= capacity`
#[derive(Debug)]
pub(crate) struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    minimum: usize,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer holding `requested` slots, or `minimum` slots
    /// when `requested` is smaller.
    pub(crate) fn with_capacity(requested: usize, minimum: usize) -> Self {
        let capacity = requested.max(minimum);
        let mut items = Vec::new();
        reserve_or_abort(&mut items, capacity);
        Self {
            items,
            capacity,
            minimum,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Clamps a requested capacity so live entries always fit.
    ///
    /// A request below the number of live entries becomes exactly that
    /// number, and the result never drops below the buffer's minimum.
    fn clamp(&self, requested: usize) -> usize {
        requested.max(self.items.len()).max(self.minimum)
    }

    /// Replaces the capacity with `requested`, clamped by [`Self::clamp`].
    ///
    /// Live entries keep their positions. On failure nothing changes.
    pub(crate) fn try_resize(&mut self, requested: usize) -> Result<(), StorageError> {
        let capacity = self.clamp(requested);
        if capacity != requested {
            log::debug!(
                "resize to {requested} clamped to {capacity} ({} live entries)",
                self.items.len()
            );
        }

        if capacity > self.items.capacity() {
            self.items
                .try_reserve_exact(capacity - self.items.len())
                .map_err(|_| StorageError {
                    requested_capacity: capacity,
                })?;
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Grows by `policy` if every slot is occupied.
    pub(crate) fn try_ensure_room(&mut self, policy: GrowthPolicy) -> Result<(), StorageError> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let next = policy.next_capacity(self.capacity);
        log::trace!("growing buffer from {} to {next} slots", self.capacity);
        self.try_resize(next)
    }

    /// Inserts `item` at `index`, shifting later entries one slot right.
    ///
    /// Grows first if the buffer is full.
    pub(crate) fn try_insert(
        &mut self,
        policy: GrowthPolicy,
        index: usize,
        item: T,
    ) -> Result<(), StorageError> {
        self.try_ensure_room(policy)?;
        self.items.insert(index, item);
        Ok(())
    }

    /// Appends `item` after the last live entry, growing first if full.
    pub(crate) fn try_push(&mut self, policy: GrowthPolicy, item: T) -> Result<(), StorageError> {
        self.try_ensure_room(policy)?;
        self.items.push(item);
        Ok(())
    }

    pub(crate) fn push(&mut self, policy: GrowthPolicy, item: T) {
        if let Err(error) = self.try_push(policy, item) {
            abort_on(error);
        }
    }

    /// Removes the entry at `index`, shifting later entries one slot left.
    ///
    /// The caller guarantees `index < len`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Forgets every live entry; capacity is untouched.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> GrowableBuffer<T> {
    /// Replaces the contents with a deep copy of `source`'s live entries and
    /// sets the capacity to `capacity`.
    ///
    /// The caller guarantees `capacity >= source.len()`.
    pub(crate) fn overwrite_from(&mut self, source: &Self, capacity: usize) {
        self.items.clear();
        if capacity > self.items.capacity() {
            reserve_or_abort(&mut self.items, capacity);
        } else {
            self.items.shrink_to(capacity);
        }
        self.items.extend_from_slice(&source.items);
        self.capacity = capacity;
        self.minimum = source.minimum;
    }
}

impl<T: Clone> Clone for GrowableBuffer<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::new();
        reserve_or_abort(&mut items, self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            minimum: self.minimum,
        }
    }
}

fn reserve_or_abort<T>(items: &mut Vec<T>, capacity: usize) {
    let additional = capacity.saturating_sub(items.len());
    if items.try_reserve_exact(additional).is_err() {
        abort_on(StorageError {
            requested_capacity: capacity,
        });
    }
}

/// Reports an unrecoverable allocation failure and terminates the process.
pub(crate) fn abort_on(error: StorageError) -> ! {
    log::error!("{error}; terminating");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled(values: &[i32], capacity: usize) -> GrowableBuffer<i32> {
        let mut buffer = GrowableBuffer::with_capacity(capacity, 1);
        for &value in values {
            buffer.push(GrowthPolicy::ONE_AND_A_HALF, value);
        }
        buffer
    }

    #[rstest]
    #[case::zero_uses_minimum(0, 1)]
    #[case::above_minimum_is_kept(5, 5)]
    fn with_capacity_respects_minimum(#[case] requested: usize, #[case] expected: usize) {
        let buffer: GrowableBuffer<i32> = GrowableBuffer::with_capacity(requested, 1);
        assert_eq!(buffer.capacity(), expected);
        assert_eq!(buffer.len(), 0);
    }

    #[rstest]
    fn resize_below_len_clamps_to_len() {
        let mut buffer = filled(&[1, 2, 3, 4], 10);
        buffer.try_resize(2).unwrap();
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
    }

    #[rstest]
    fn resize_of_empty_buffer_clamps_to_minimum() {
        let mut buffer: GrowableBuffer<i32> = GrowableBuffer::with_capacity(10, 3);
        buffer.try_resize(0).unwrap();
        assert_eq!(buffer.capacity(), 3);
    }

    #[rstest]
    fn resize_above_len_is_honored() {
        let mut buffer = filled(&[1, 2], 2);
        buffer.try_resize(9).unwrap();
        assert_eq!(buffer.capacity(), 9);
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn ensure_room_only_grows_when_full() {
        let mut buffer = filled(&[1], 2);
        buffer.try_ensure_room(GrowthPolicy::ONE_AND_A_HALF).unwrap();
        assert_eq!(buffer.capacity(), 2);

        buffer.push(GrowthPolicy::ONE_AND_A_HALF, 2);
        buffer.try_ensure_room(GrowthPolicy::ONE_AND_A_HALF).unwrap();
        assert_eq!(buffer.capacity(), 4);
    }

    #[rstest]
    fn push_follows_growth_sequence() {
        let mut buffer: GrowableBuffer<i32> = GrowableBuffer::with_capacity(1, 1);
        let mut observed = vec![buffer.capacity()];
        for value in 0..10 {
            buffer.push(GrowthPolicy::ONE_AND_A_HALF, value);
            if observed.last() != Some(&buffer.capacity()) {
                observed.push(buffer.capacity());
            }
        }
        assert_eq!(observed, vec![1, 2, 4, 7, 11]);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    fn insert_shifts_later_entries_right() {
        let mut buffer = filled(&[1, 3], 2);
        buffer
            .try_insert(GrowthPolicy::ONE_AND_A_QUARTER, 1, 2)
            .unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 3]);
        assert_eq!(buffer.capacity(), 3);
    }

    #[rstest]
    fn remove_shifts_later_entries_left() {
        let mut buffer = filled(&[1, 2, 3], 3);
        assert_eq!(buffer.remove(0), 1);
        assert_eq!(buffer.as_slice(), &[2, 3]);
        assert_eq!(buffer.capacity(), 3);
    }

    #[rstest]
    fn clear_keeps_capacity() {
        let mut buffer = filled(&[1, 2, 3], 5);
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
    }

    #[rstest]
    fn clone_is_deep_and_keeps_capacity() {
        let original = filled(&[1, 2], 6);
        let mut copy = original.clone();
        copy.remove(0);
        assert_eq!(original.as_slice(), &[1, 2]);
        assert_eq!(copy.as_slice(), &[2]);
        assert_eq!(copy.capacity(), 6);
    }

    #[rstest]
    fn overwrite_from_sets_requested_capacity() {
        let source = filled(&[7, 8], 3);
        let mut destination = filled(&[1, 2, 3, 4, 5], 9);
        destination.overwrite_from(&source, 3);
        assert_eq!(destination.as_slice(), &[7, 8]);
        assert_eq!(destination.capacity(), 3);
    }
}
