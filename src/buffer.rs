use crate::{
    error::BufError,
    utils::{ranges, retreat},
};
use alloc::{boxed::Box, vec};
use core::fmt;

/// Smallest capacity accepted by [`BackBuf::new`].
pub const MIN_CAPACITY: usize = 1;

/// Circular byte buffer that is filled from right to left and drained from left to right.
///
/// Each write places its bytes immediately to the left of previously written ones,
/// each read takes the rightmost unread bytes, keeping their left-to-right order.
/// Unread data is never overwritten.
///
/// Both positions live in range `1..=capacity`, `capacity` being the "just past the end" position.
/// Equal positions mean either empty or full, the `full` flag tells which.
pub struct BackBuf {
    storage: Box<[u8]>,
    write: usize,
    read: usize,
    full: bool,
}

impl BackBuf {
    /// Creates an empty buffer able to hold `capacity` bytes.
    pub fn new(capacity: usize) -> Result<Self, BufError> {
        if capacity < MIN_CAPACITY {
            return Err(BufError::InvalidArgument);
        }
        Ok(Self {
            storage: vec![0; capacity].into_boxed_slice(),
            write: capacity,
            read: capacity,
            full: false,
        })
    }

    /// Capacity of the buffer.
    ///
    /// It is constant during the whole buffer lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Discards all staged bytes.
    pub fn reset(&mut self) {
        self.write = self.capacity();
        self.read = self.write;
        self.full = false;
    }

    /// The number of bytes that can be written without overwriting unread data.
    pub fn write_availability(&self) -> usize {
        if self.full {
            0
        } else if self.write <= self.read {
            self.capacity() - self.read + self.write
        } else {
            self.write - self.read
        }
    }

    /// The number of unread bytes.
    #[inline]
    pub fn read_availability(&self) -> usize {
        self.capacity() - self.write_availability()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_availability() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Stores the longest prefix of `bytes` that fits, to the left of already stored data.
    ///
    /// Returns count of bytes been written, accepting fewer than `bytes.len()` is not an error.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, BufError> {
        if bytes.is_empty() {
            return Err(BufError::InvalidArgument);
        }
        let count = usize::min(self.write_availability(), bytes.len());
        if count == 0 {
            return Err(BufError::Full);
        }

        let (head, tail) = ranges(self.capacity(), self.write, count);
        let (head_bytes, tail_bytes) = bytes[..count].split_at(head.len());
        self.storage[head].copy_from_slice(head_bytes);
        self.storage[tail].copy_from_slice(tail_bytes);

        self.write = retreat(self.capacity(), self.write, count);
        self.full = self.write == self.read;
        Ok(count)
    }

    /// Moves the rightmost unread bytes into the start of `out`, keeping their order.
    ///
    /// Returns count of bytes been read, which is `min(out.len(), self.read_availability())`.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize, BufError> {
        if out.is_empty() {
            return Err(BufError::InvalidArgument);
        }
        let count = usize::min(out.len(), self.read_availability());

        let (head, tail) = ranges(self.capacity(), self.read, count);
        let (head_out, tail_out) = out[..count].split_at_mut(head.len());
        head_out.copy_from_slice(&self.storage[head]);
        tail_out.copy_from_slice(&self.storage[tail]);

        self.read = retreat(self.capacity(), self.read, count);
        self.full = false;
        Ok(count)
    }

    /// Removes the rightmost unread byte and returns it.
    pub fn read_byte(&mut self) -> Result<u8, BufError> {
        let mut byte = [0];
        match self.read(&mut byte)? {
            0 => Err(BufError::Empty),
            _ => Ok(byte[0]),
        }
    }

    /// Moves the read position as if `count` bytes were read, without copying them.
    pub fn omit(&mut self, count: usize) -> Result<(), BufError> {
        if count == 0 {
            return Err(BufError::InvalidArgument);
        }
        let available = self.read_availability();
        if available < count {
            return Err(BufError::InsufficientData {
                requested: count,
                available,
            });
        }
        self.read = retreat(self.capacity(), self.read, count);
        self.full = false;
        Ok(())
    }
}

impl fmt::Debug for BackBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackBuf")
            .field("capacity", &self.capacity())
            .field("write", &self.write)
            .field("read", &self.read)
            .field("full", &self.full)
            .finish_non_exhaustive()
    }
}
