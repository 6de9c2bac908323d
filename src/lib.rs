//! In-memory, random-access byte store with a movable cursor.
//!
//! [`ByteBuffer`] behaves like a seekable file that never touches
//! storage: sequential reads and writes go through a cursor, positional
//! reads and writes ([`ReadAt`], [`WriteAt`]) take an explicit offset
//! and leave the cursor alone. It also implements `std::io::Read`,
//! `Write`, `Seek` and `BufRead`.

mod buffer;
pub mod errors;
mod io;
mod positional;
mod whence;

pub use buffer::ByteBuffer;
pub use errors::{BufferError, Result};
pub use positional::{ReadAt, WriteAt};
pub use whence::Whence;

#[cfg(test)]
pub(crate) fn initialize() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}
