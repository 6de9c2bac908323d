use log::{debug, trace};

use crate::errors::{BufferError, Result};
use crate::whence::Whence;

/// Growable in-memory byte store with a movable cursor.
///
/// Positional operations ([`ByteBuffer::write_at`], [`ByteBuffer::read_at`])
/// take an explicit offset and never touch the cursor. Sequential operations
/// ([`ByteBuffer::write`], [`ByteBuffer::read`]) start at the cursor and
/// advance it. The cursor may point past the end of the data; the next
/// sequential write then zero-fills the gap.
///
/// Not synchronized: share it across threads only behind a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    cursor: u64,
}

impl ByteBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer able to hold `capacity` bytes
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Take ownership of `data` as the initial content.
    /// No copy is made and the cursor starts at 0.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data, cursor: 0 }
    }

    /// Write `buf` at `offset` without moving the cursor.
    ///
    /// A gap between the current end and `offset` is zero-filled.
    /// Bytes after `offset + buf.len()` are left as they were.
    /// Writing an empty slice is a no-op, even past the end.
    ///
    /// # Errors
    /// [`BufferError::NegativeOffset`] if `offset < 0`, checked before
    /// anything else. [`BufferError::Overflow`] and
    /// [`BufferError::Allocation`] if the buffer cannot grow that far.
    pub fn write_at(&mut self, buf: &[u8], offset: i64) -> Result<usize> {
        let offset = check_offset(offset)?;
        if buf.is_empty() {
            return Ok(0);
        }
        self.splice(buf, offset)
    }

    /// Write `buf` at the cursor and advance the cursor past it.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let written = self.splice(buf, self.cursor)?;
        self.cursor += written as u64;
        Ok(written)
    }

    /// Move the cursor to `offset` relative to `whence` and return
    /// the new position. Positions past the end are allowed.
    ///
    /// # Errors
    /// [`BufferError::NegativePosition`] if the resulting position is
    /// below zero. The cursor is left untouched on error.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<u64> {
        let base = match whence {
            Whence::Start => 0,
            Whence::Current => self.cursor,
            Whence::End => self.data.len() as u64,
        };
        let pos = i64::try_from(base)
            .ok()
            .and_then(|base| base.checked_add(offset))
            .ok_or(BufferError::Overflow)?;
        if pos < 0 {
            debug!("refusing to seek to negative position {}", pos);
            return Err(BufferError::NegativePosition(pos));
        }

        trace!("cursor moved from {} to {}", self.cursor, pos);
        self.cursor = pos as u64;
        Ok(self.cursor)
    }

    /// Same as [`ByteBuffer::seek`], with `whence` given as a raw
    /// value (0 = start, 1 = current, 2 = end).
    ///
    /// # Errors
    /// [`BufferError::InvalidWhence`] for any other value.
    pub fn seek_raw(&mut self, offset: i64, whence: i32) -> Result<u64> {
        let whence = Whence::try_from(whence)?;
        self.seek(offset, whence)
    }

    /// Read from the cursor into `buf` and advance the cursor.
    ///
    /// Returns the number of bytes copied, which is less than
    /// `buf.len()` when the data ends first. That short read is not
    /// an error.
    ///
    /// # Errors
    /// [`BufferError::EndOfStream`] with `read: 0` if the cursor is
    /// already at or past the end. `buf` is left untouched.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let start = self
            .index_of(self.cursor)
            .ok_or(BufferError::EndOfStream { read: 0 })?;

        let read = copy_into(&self.data[start..], buf);
        self.cursor += read as u64;
        Ok(read)
    }

    /// Read into `buf` starting at `offset` without moving the cursor.
    ///
    /// # Errors
    /// [`BufferError::NegativeOffset`] if `offset < 0`.
    /// [`BufferError::EndOfStream`] if the data ends before `buf` is
    /// full. Unlike [`ByteBuffer::read`], this is also reported for a
    /// partial read: `read` then holds the count copied into
    /// `buf[..read]`.
    pub fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        let offset = check_offset(offset)?;
        if buf.is_empty() {
            return Ok(0);
        }
        let start = self
            .index_of(offset)
            .ok_or(BufferError::EndOfStream { read: 0 })?;

        let read = copy_into(&self.data[start..], buf);
        if read < buf.len() {
            return Err(BufferError::EndOfStream { read });
        }
        Ok(read)
    }

    /// Number of bytes stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position, possibly past the end
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// Borrow the stored bytes without copying.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give the stored bytes back, dropping the cursor.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Bytes between the cursor and the end, empty if the cursor
    /// is past the end.
    pub(crate) fn unread(&self) -> &[u8] {
        match self.index_of(self.cursor) {
            Some(start) => &self.data[start..],
            None => &[],
        }
    }

    pub(crate) fn advance(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_add(amount as u64);
    }

    /// Index of `pos` in the backing bytes, if it lies before the end.
    fn index_of(&self, pos: u64) -> Option<usize> {
        usize::try_from(pos)
            .ok()
            .filter(|&index| index < self.data.len())
    }

    fn splice(&mut self, buf: &[u8], offset: u64) -> Result<usize> {
        let start =
            usize::try_from(offset).map_err(|_| BufferError::Overflow)?;
        let end = start
            .checked_add(buf.len())
            .ok_or(BufferError::Overflow)?;

        let len = self.data.len();
        if end > len {
            self.data
                .try_reserve(end - len)
                .map_err(|err| {
                    debug!("cannot grow buffer to {} bytes: {}", end, err);
                    BufferError::from(err)
                })?;
            if start > len {
                trace!(
                    "zero-filling {} bytes up to offset {}",
                    start - len,
                    start
                );
            }
            trace!("growing buffer from {} to {} bytes", len, end);
            self.data.resize(end, 0);
        }

        self.data[start..end].copy_from_slice(buf);
        Ok(buf.len())
    }
}

fn check_offset(offset: i64) -> Result<u64> {
    u64::try_from(offset).map_err(|_| {
        debug!("refusing negative offset {}", offset);
        BufferError::NegativeOffset(offset)
    })
}

fn copy_into(src: &[u8], dst: &mut [u8]) -> usize {
    let count = src.len().min(dst.len());
    dst[..count].copy_from_slice(&src[..count]);
    count
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.into_inner()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
