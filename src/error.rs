use thiserror::Error;
#[cfg(feature = "std")]
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// [`BackBuf`](crate::BackBuf) error.
pub enum BufError {
    /// Empty input or output slice, zero length or zero capacity.
    #[error("invalid arguments")]
    InvalidArgument,
    /// Cannot write: every slot holds unread data.
    #[error("buffer is full")]
    Full,
    /// Cannot read: nothing is staged.
    #[error("buffer is empty")]
    Empty,
    /// Cannot omit more bytes than are staged.
    #[error("cannot omit {requested} bytes, only {available} unread")]
    InsufficientData { requested: usize, available: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// Violated internal invariant of [`BackReader`](crate::BackReader).
///
/// Never returned under correct buffer arithmetic. Treat as non-recoverable.
pub enum Inconsistency {
    /// Staging buffer accepted fewer bytes than were fetched from the source.
    #[error("staged {written} of {fetched} fetched bytes")]
    ShortWrite { fetched: usize, written: usize },
    /// Staging buffer yielded fewer bytes than it reported as available.
    #[error("drained {drained} of {expected} staged bytes")]
    ShortDrain { expected: usize, drained: usize },
    /// Staging buffer rejected an operation the reader computed as valid.
    #[error("staging buffer: {0}")]
    Buffer(#[from] BufError),
}

#[derive(Debug, PartialEq, Eq, Error)]
/// [`BackReader`](crate::BackReader) error, generic over the source error `E`.
pub enum Error<E> {
    /// Empty output slice or buffer size below [`MIN_BUF_SIZE`](crate::MIN_BUF_SIZE).
    #[error("invalid arguments")]
    InvalidArgument,
    /// Source is exhausted. Holds the number of bytes read, they are placed at the start of the output.
    #[error("no content to be read, {0} bytes read")]
    NoContent(usize),
    /// Source returned no bytes at `offset` while the reader expected more below its tracked offset.
    #[error("source ended at offset {offset}")]
    Truncated { offset: u64 },
    #[error("unexpected internal error: {0}")]
    Internal(#[from] Inconsistency),
    /// Error returned by the source, unchanged.
    #[error("source read failed")]
    Source(#[source] E),
}

#[cfg(feature = "std")]
impl From<Error<io::Error>> for io::Error {
    fn from(err: Error<io::Error>) -> Self {
        match err {
            Error::Source(err) => err,
            Error::InvalidArgument => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::NoContent(_) | Error::Truncated { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            Error::Internal(inner) => io::Error::other(inner),
        }
    }
}
