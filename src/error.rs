//! Crate-wide error type.
//!
//! Key-not-found is never an error in this crate; it is `Option::None` (maps,
//! arrays) or [`CallOutcome::NotFound`](crate::object::CallOutcome) (method
//! dispatch). The only failure a container operation can report is running
//! out of memory while growing, and a failed operation leaves the container
//! in its previous state.

use std::collections::TryReserveError;

/// Error returned by fallible container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The allocator refused to provide memory for a grow step. The
    /// container is unchanged; the caller may free memory elsewhere and
    /// retry, but no retry happens automatically.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
