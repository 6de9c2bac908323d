use std::io::SeekFrom;

use crate::errors::{BufferError, Result};

/// Reference point for interpreting a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Whence {
    Start = 0,
    Current = 1,
    End = 2,
}

impl TryFrom<i32> for Whence {
    type Error = BufferError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            other => Err(BufferError::InvalidWhence(other)),
        }
    }
}

impl From<Whence> for i32 {
    fn from(whence: Whence) -> Self {
        whence as i32
    }
}

/// Split a std `SeekFrom` into a signed offset and its reference point.
pub(crate) fn split_seek_from(pos: SeekFrom) -> Result<(i64, Whence)> {
    match pos {
        SeekFrom::Start(offset) => {
            let offset =
                i64::try_from(offset).map_err(|_| BufferError::Overflow)?;
            Ok((offset, Whence::Start))
        }
        SeekFrom::Current(offset) => Ok((offset, Whence::Current)),
        SeekFrom::End(offset) => Ok((offset, Whence::End)),
    }
}
