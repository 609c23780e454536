//! Capacity growth policy.

/// A multiplicative growth rule for a full backing buffer.
///
/// The next capacity is `floor(capacity * numerator / denominator) + 1`,
/// evaluated in integer arithmetic and saturating at `usize::MAX`. The `+ 1`
/// guarantees progress even from a capacity of zero or one.
///
/// # Examples
///
/// ```rust
/// use dense_collections::dense::GrowthPolicy;
///
/// assert_eq!(GrowthPolicy::ONE_AND_A_HALF.next_capacity(1), 2);
/// assert_eq!(GrowthPolicy::ONE_AND_A_HALF.next_capacity(4), 7);
/// assert_eq!(GrowthPolicy::ONE_AND_A_QUARTER.next_capacity(30), 38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    numerator: usize,
    denominator: usize,
}

impl GrowthPolicy {
    /// Grows to `floor(1.5 * capacity) + 1`.
    pub const ONE_AND_A_HALF: Self = Self::new(3, 2);

    /// Grows to `floor(1.25 * capacity) + 1`.
    pub const ONE_AND_A_QUARTER: Self = Self::new(5, 4);

    /// Creates a policy growing by the factor `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        assert!(denominator != 0, "growth factor denominator must be non-zero");
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the capacity that replaces a full buffer of `capacity`.
    #[inline]
    #[must_use]
    pub const fn next_capacity(self, capacity: usize) -> usize {
        // capacity = quotient * denominator + remainder, so the floor of the
        // scaled value splits without an intermediate overflow.
        let quotient = capacity / self.denominator;
        let remainder = capacity % self.denominator;
        let whole = quotient.saturating_mul(self.numerator);
        let fraction = remainder.saturating_mul(self.numerator) / self.denominator;
        whole.saturating_add(fraction).saturating_add(1)
    }
}
