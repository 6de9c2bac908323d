//! `std::io` adapters, so a [`ByteBuffer`] can stand in for a file
//! wherever a `Read + Write + Seek` is expected.
//!
//! End of data follows the std convention here: `Read::read` returns
//! `Ok(0)` instead of an error.

use std::io::{self, BufRead, Read, Seek, SeekFrom, Write};

use crate::buffer::ByteBuffer;
use crate::errors::BufferError;
use crate::whence::split_seek_from;

impl Read for ByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match ByteBuffer::read(self, buf) {
            Ok(read) => Ok(read),
            Err(BufferError::EndOfStream { read }) => Ok(read),
            Err(err) => Err(err.into()),
        }
    }
}

impl BufRead for ByteBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.unread())
    }

    fn consume(&mut self, amt: usize) {
        self.advance(amt)
    }
}

impl Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(ByteBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for ByteBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, whence) = split_seek_from(pos)?;
        Ok(ByteBuffer::seek(self, offset, whence)?)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position())
    }
}
