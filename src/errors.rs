use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BufferError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Invalid whence: {0}")]
    InvalidWhence(i32),
    #[error("Negative position: {0}")]
    NegativePosition(i64),
    #[error("Negative offset: {0}")]
    NegativeOffset(i64),
    /// The backing bytes ran out before the destination was filled.
    /// `read` is the number of bytes that were copied anyway.
    #[error("End of stream reached after {read} bytes")]
    EndOfStream { read: usize },
    #[error("Position overflow")]
    Overflow,
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl BufferError {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream { .. })
    }

    /// Bytes copied into the destination before the error, if any.
    pub fn bytes_read(&self) -> usize {
        match self {
            Self::EndOfStream { read } => *read,
            _ => 0,
        }
    }
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::InvalidWhence(_)
            | BufferError::NegativePosition(_)
            | BufferError::NegativeOffset(_)
            | BufferError::Overflow => io::ErrorKind::InvalidInput,
            BufferError::EndOfStream { .. } => io::ErrorKind::UnexpectedEof,
            BufferError::Allocation(_) => io::ErrorKind::OutOfMemory,
        };
        io::Error::new(kind, err)
    }
}
