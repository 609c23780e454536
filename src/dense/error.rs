//! Error types for the dense containers.
//!
//! Only two things can go wrong: a cursor operation is attempted while the
//! sequence has no current item, or the backing buffer cannot be allocated.
//! Everything else reports through plain boolean results.

/// Represents a cursor operation attempted without a current item.
///
/// # Examples
///
/// ```rust
/// use dense_collections::dense::SequenceError;
///
/// let error = SequenceError::NoCurrentItem {
///     operation: "advance",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "advance: sequence has no current item"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The cursor is past the last item (or the sequence is empty).
    NoCurrentItem {
        /// The name of the operation that required a current item.
        operation: &'static str,
    },
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCurrentItem { operation } => {
                write!(formatter, "{operation}: sequence has no current item")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Represents a failed allocation of a container's backing buffer.
///
/// The infallible insertion methods treat this as fatal and terminate the
/// process; the `try_*` variants hand it back to the caller with the
/// container left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use dense_collections::dense::StorageError;
///
/// let error = StorageError {
///     requested_capacity: 42,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "failed to allocate storage for 42 elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageError {
    /// The capacity that could not be allocated.
    pub requested_capacity: usize,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "failed to allocate storage for {} elements",
            self.requested_capacity
        )
    }
}

impl std::error::Error for StorageError {}

static_assertions::assert_impl_all!(SequenceError: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(StorageError: std::error::Error, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::advance("advance", "advance: sequence has no current item")]
    #[case::remove("remove_current", "remove_current: sequence has no current item")]
    fn sequence_error_names_the_operation(#[case] operation: &'static str, #[case] expected: &str) {
        let error = SequenceError::NoCurrentItem { operation };
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn storage_error_reports_requested_capacity() {
        let error = StorageError {
            requested_capacity: usize::MAX,
        };
        assert_eq!(
            error.to_string(),
            format!("failed to allocate storage for {} elements", usize::MAX)
        );
    }

    #[rstest]
    fn errors_are_usable_as_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(StorageError {
            requested_capacity: 1,
        });
        assert!(boxed.source().is_none());
    }
}
