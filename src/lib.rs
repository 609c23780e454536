//! # dense-collections
//!
//! Small, contiguous, growable containers with explicit capacity
//! bookkeeping.
//!
//! ## Overview
//!
//! - **`BoundedOrderedSet`**: distinct `i32` values kept in order of first
//!   insertion, with membership, subset and set-algebra operations.
//! - **`CursorSequence<T>`**: an ordered list with a movable "current item"
//!   cursor supporting insertion before/after the cursor and removal at it.
//!
//! Both containers own a single backing buffer whose capacity grows by a
//! fixed multiplicative policy when an insertion finds it full.
//!
//! ## Feature Flags
//!
//! - `ordered-set`: `BoundedOrderedSet` (default)
//! - `sequence`: `CursorSequence` (default)
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use dense_collections::prelude::*;
//!
//! let mut set = BoundedOrderedSet::new();
//! set.add(3);
//! set.add(1);
//! set.add(2);
//! set.add(1);
//! assert_eq!(set.to_string(), "3  1  2");
//!
//! let mut sequence = CursorSequence::new();
//! sequence.insert_after(5);
//! sequence.insert_after(7);
//! sequence.start();
//! assert_eq!(sequence.current(), Some(&5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their error types and the growth policy.
///
/// # Usage
///
/// ```rust
/// use dense_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dense::*;
}

pub mod dense;
