//! Big-endian fixed-width field reader.

use crate::error::{CodecError, CodecResult, Field};

/// Width of every field in both record layouts.
pub const FIELD_SIZE: usize = 8;

/// A cursor over a record buffer.
///
/// Every read is bounds checked against the remaining input and fails
/// with [`CodecError::RecordRead`] naming the field that ran short.
pub struct RecordReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    /// Create a new reader over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read the next big-endian `u64` as `field`.
    pub fn read_u64(&mut self, field: Field) -> CodecResult<u64> {
        let bytes = self.read_bytes(FIELD_SIZE, field)?;
        let mut buf = [0u8; FIELD_SIZE];
        buf.copy_from_slice(bytes);
        Ok(u64::from_be_bytes(buf))
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    fn read_bytes(&mut self, len: usize, field: Field) -> CodecResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(CodecError::short_read(field, len, available));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
