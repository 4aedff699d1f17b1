//! Unified error type.

use thiserror::Error;

/// Any error a handler may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type surfaced when awaiting an [`Outcome`](crate::Outcome).
///
/// A missing route is not an `Error`: it is a `404` [`Response`](crate::Response).
/// The only failure trailhead reports is one raised by a handler, and it is
/// passed through untouched. Nothing is translated into a `500`.
#[derive(Debug, Error)]
pub enum Error {
    /// The matched handler failed. Display and `source()` are the handler's own.
    #[error(transparent)]
    Handler(BoxError),
}

impl Error {
    pub fn handler(err: impl Into<BoxError>) -> Self {
        Self::Handler(err.into())
    }

    /// Returns the error exactly as the handler produced it.
    pub fn into_inner(self) -> BoxError {
        match self {
            Self::Handler(err) => err,
        }
    }
}
