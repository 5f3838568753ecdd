//! Errors raised by subscriber bookkeeping.

use thiserror::Error;

/// Failure of an [`Observable`](crate::Observable) operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservableError {
    /// The subscriber passed to [`unsubscribe`](crate::Observable::unsubscribe)
    /// is not currently subscribed.
    #[error("Subscriber not found: it is not subscribed to this subject")]
    NotFound,
}

pub type ObservableResult<T> = Result<T, ObservableError>;
