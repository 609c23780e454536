//! Contiguous containers over a single growable buffer.
//!
//! This module provides two independent containers that share one storage
//! discipline: live entries occupy positions `[0, len)` of an exclusively
//! owned buffer, and the buffer's capacity only changes through an explicit
//! resize that never drops live entries.
//!
//! - [`BoundedOrderedSet`]: distinct integers in first-insertion order
//! - [`CursorSequence`]: ordered items with a "current item" cursor
//!
//! # Growth
//!
//! When an insertion finds the buffer full, the capacity is replaced by
//! `floor(capacity * factor) + 1`, where the factor is fixed per container
//! (see [`GrowthPolicy`]). Allocation failure while growing is fatal; the
//! `try_*` insertion variants report it as a [`StorageError`] instead.
//!
//! # Examples
//!
//! ## `BoundedOrderedSet`
//!
//! ```rust
//! use dense_collections::dense::{BoundedOrderedSet, equals};
//!
//! let left: BoundedOrderedSet = [1, 2, 3].into_iter().collect();
//! let right: BoundedOrderedSet = [2, 3, 4].into_iter().collect();
//!
//! let common = left.intersect(&right);
//! assert_eq!(common.len(), 2);
//! assert!(common.is_subset_of(&left));
//!
//! assert!(equals(&left.union_with(&right), &right.union_with(&left)));
//! ```
//!
//! ## `CursorSequence`
//!
//! ```rust
//! use dense_collections::dense::CursorSequence;
//!
//! let mut sequence: CursorSequence<i32> = [1, 2, 3].into_iter().collect();
//! sequence.start();
//! sequence.advance().unwrap();
//! assert_eq!(sequence.remove_current(), Ok(2));
//! assert_eq!(sequence.current(), Some(&3));
//! assert_eq!(sequence.to_string(), "1  3");
//! ```

mod buffer;
mod dump;
mod error;
mod growth;

#[cfg(feature = "ordered-set")]
mod ordered_set;
#[cfg(feature = "sequence")]
mod sequence;

pub use error::SequenceError;
pub use error::StorageError;
pub use growth::GrowthPolicy;

#[cfg(feature = "ordered-set")]
pub use ordered_set::BoundedOrderedSet;
#[cfg(feature = "ordered-set")]
pub use ordered_set::BoundedOrderedSetIntoIterator;
#[cfg(feature = "ordered-set")]
pub use ordered_set::equals;
#[cfg(feature = "sequence")]
pub use sequence::CursorSequence;
