use data_buffer::{BufferError, ByteBuffer, Whence};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

#[derive(Clone, Debug)]
enum BufferOperation {
    Write(Vec<u8>),
    WriteAt(Vec<u8>, i64),
    Seek(i64, Whence),
    Read(usize),
    ReadAt(usize, i64),
}

#[derive(Clone, Debug)]
struct BufferOperationSequence(Vec<BufferOperation>);

fn small_offset(g: &mut Gen) -> i64 {
    // mostly in range, sometimes negative or far past the end
    i64::from(i8::arbitrary(g)) % 48
}

fn small_bytes(g: &mut Gen) -> Vec<u8> {
    let len = usize::arbitrary(g) % 12;
    (0..len).map(|_| u8::arbitrary(g)).collect()
}

impl Arbitrary for BufferOperationSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % 64 + 1;
        let ops = (0..size)
            .map(|_| match u8::arbitrary(g) % 5 {
                0 => BufferOperation::Write(small_bytes(g)),
                1 => BufferOperation::WriteAt(small_bytes(g), small_offset(g)),
                2 => {
                    let whence = *g
                        .choose(&[Whence::Start, Whence::Current, Whence::End])
                        .unwrap();
                    BufferOperation::Seek(small_offset(g), whence)
                }
                3 => BufferOperation::Read(usize::arbitrary(g) % 12),
                _ => BufferOperation::ReadAt(
                    usize::arbitrary(g) % 12,
                    small_offset(g),
                ),
            })
            .collect();
        BufferOperationSequence(ops)
    }
}

/// Naive reference: a plain vector and a signed position.
#[derive(Default)]
struct Model {
    data: Vec<u8>,
    pos: i64,
}

impl Model {
    fn write_at(
        &mut self,
        buf: &[u8],
        offset: i64,
    ) -> Result<usize, BufferError> {
        if offset < 0 {
            return Err(BufferError::NegativeOffset(offset));
        }
        let offset = offset as usize;
        for (i, byte) in buf.iter().enumerate() {
            while self.data.len() <= offset + i {
                self.data.push(0);
            }
            self.data[offset + i] = *byte;
        }
        Ok(buf.len())
    }

    fn read_from(&self, size: usize, offset: usize) -> Vec<u8> {
        self.data
            .iter()
            .skip(offset)
            .take(size)
            .copied()
            .collect()
    }
}

#[quickcheck]
fn prop_buffer_matches_model(
    BufferOperationSequence(operations): BufferOperationSequence,
) {
    let mut buffer = ByteBuffer::new();
    let mut model = Model::default();

    for op in operations {
        match op {
            BufferOperation::Write(data) => {
                let result = buffer.write(&data);
                assert_eq!(result, model.write_at(&data, model.pos));
                model.pos += data.len() as i64;
            }
            BufferOperation::WriteAt(data, offset) => {
                let before = buffer.len();
                let result = buffer.write_at(&data, offset);
                assert_eq!(result, model.write_at(&data, offset));
                if data.is_empty() {
                    assert_eq!(buffer.len(), before);
                }
            }
            BufferOperation::Seek(offset, whence) => {
                let base = match whence {
                    Whence::Start => 0,
                    Whence::Current => model.pos,
                    Whence::End => model.data.len() as i64,
                };
                let target = base + offset;
                let result = buffer.seek(offset, whence);
                if target < 0 {
                    assert_eq!(result, Err(BufferError::NegativePosition(target)));
                } else {
                    assert_eq!(result, Ok(target as u64));
                    model.pos = target;
                }
            }
            BufferOperation::Read(size) => {
                let mut dest = vec![0xAA; size];
                let result = buffer.read(&mut dest);
                let expected = model.read_from(size, model.pos as usize);
                if size == 0 {
                    assert_eq!(result, Ok(0));
                } else if expected.is_empty() {
                    assert_eq!(result, Err(BufferError::EndOfStream { read: 0 }));
                    assert!(dest.iter().all(|&b| b == 0xAA));
                } else {
                    assert_eq!(result, Ok(expected.len()));
                    assert_eq!(dest[..expected.len()], expected[..]);
                    model.pos += expected.len() as i64;
                }
            }
            BufferOperation::ReadAt(size, offset) => {
                let mut dest = vec![0; size];
                let result = buffer.read_at(&mut dest, offset);
                if offset < 0 {
                    assert_eq!(result, Err(BufferError::NegativeOffset(offset)));
                    continue;
                }
                let expected = model.read_from(size, offset as usize);
                if size == 0 {
                    assert_eq!(result, Ok(0));
                } else if expected.len() < size {
                    assert_eq!(
                        result,
                        Err(BufferError::EndOfStream {
                            read: expected.len()
                        })
                    );
                } else {
                    assert_eq!(result, Ok(size));
                }
                assert_eq!(dest[..expected.len()], expected[..]);
            }
        }

        assert_eq!(buffer.as_bytes(), &model.data[..]);
        assert_eq!(buffer.position(), model.pos as u64);
    }
}

#[quickcheck]
fn prop_write_at_round_trip(prefix: Vec<u8>, data: Vec<u8>, offset: u16) -> bool {
    let offset = i64::from(offset % 512);
    let mut buffer = ByteBuffer::from(prefix);
    buffer.write_at(&data, offset).unwrap();

    let mut dest = vec![0; data.len()];
    buffer.read_at(&mut dest, offset).is_ok() && dest == data
}

#[quickcheck]
fn prop_write_at_keeps_outside_bytes(
    prefix: Vec<u8>,
    data: Vec<u8>,
    offset: u16,
) -> bool {
    let start = usize::from(offset % 512);
    let mut buffer = ByteBuffer::from(prefix.clone());
    buffer.write_at(&data, start as i64).unwrap();

    let end = start + data.len();
    let bytes = buffer.as_bytes();
    prefix.iter().enumerate().all(|(i, byte)| {
        (start..end).contains(&i) || bytes[i] == *byte
    }) && bytes.len() >= prefix.len()
}
