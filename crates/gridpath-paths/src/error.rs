//! Error types for the queue and solver.

/// Errors raised by [`MinQueue`](crate::MinQueue) operations.
///
/// Each one is a contract violation detected at the call site. A solver
/// receiving any of these should abort the current search: they indicate a
/// logic bug in the caller (duplicate seeding, relaxing an absent key),
/// never a transient condition.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key is already resident in the queue.
    #[error("key is already in the queue")]
    DuplicateKey,

    /// The key is not resident in the queue.
    #[error("key is not in the queue")]
    KeyNotFound,

    /// `decrease_priority` was called with a priority that is not strictly
    /// lower than the key's current priority.
    #[error("new priority is not lower than the current priority")]
    InvalidPriority,

    /// `extract_min` or `peek` on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
