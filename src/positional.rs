use crate::buffer::ByteBuffer;
use crate::errors::{BufferError, Result};

/// Reading at an explicit offset, independent of any cursor.
pub trait ReadAt {
    /// Copy bytes starting at `offset` into `buf`.
    ///
    /// Reaching the end before `buf` is full is reported as
    /// [`BufferError::EndOfStream`] carrying the partial count.
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize>;

    /// Fill all of `buf` from `offset`, or fail.
    fn read_exact_at(&self, buf: &mut [u8], offset: i64) -> Result<()> {
        let read = self.read_at(buf, offset)?;
        if read < buf.len() {
            return Err(BufferError::EndOfStream { read });
        }
        Ok(())
    }
}

/// Writing at an explicit offset, independent of any cursor.
pub trait WriteAt {
    fn write_at(&mut self, buf: &[u8], offset: i64) -> Result<usize>;

    /// Write all of `buf` at `offset`.
    fn write_all_at(&mut self, mut buf: &[u8], mut offset: i64) -> Result<()> {
        while !buf.is_empty() {
            let written = self.write_at(buf, offset)?;
            if written == 0 {
                return Err(BufferError::Overflow);
            }
            buf = &buf[written..];
            offset = offset
                .checked_add(written as i64)
                .ok_or(BufferError::Overflow)?;
        }
        Ok(())
    }
}

impl ReadAt for ByteBuffer {
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        ByteBuffer::read_at(self, buf, offset)
    }
}

impl WriteAt for ByteBuffer {
    fn write_at(&mut self, buf: &[u8], offset: i64) -> Result<usize> {
        ByteBuffer::write_at(self, buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &mut T {
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for &mut T {
    fn write_at(&mut self, buf: &[u8], offset: i64) -> Result<usize> {
        (**self).write_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for Box<T> {
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for Box<T> {
    fn write_at(&mut self, buf: &[u8], offset: i64) -> Result<usize> {
        (**self).write_at(buf, offset)
    }
}
