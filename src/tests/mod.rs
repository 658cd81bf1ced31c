use crate::ReadAt;
use alloc::vec::Vec;
use core::{cell::Cell, convert::Infallible};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "std")]
mod file;

/// Pseudorandom bytes, none of them zero.
fn random_bytes(seed: u64, size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(1..=u8::MAX)).collect()
}

/// In-memory source that counts `read_at` calls.
struct Counting {
    data: Vec<u8>,
    calls: Cell<usize>,
}

impl Counting {
    fn new(data: Vec<u8>) -> Self {
        Self { data, calls: Cell::new(0) }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ReadAt for Counting {
    type Error = Infallible;

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Infallible> {
        self.calls.set(self.calls.get() + 1);
        self.data.read_at(buf, offset)
    }
}

/// In-memory source that never returns more than `limit` bytes at once.
struct Short {
    data: Vec<u8>,
    limit: usize,
}

impl ReadAt for Short {
    type Error = Infallible;

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Infallible> {
        let len = usize::min(buf.len(), self.limit);
        self.data.read_at(&mut buf[..len], offset)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Failure(u64);

/// Source failing at every offset.
struct Broken;

impl ReadAt for Broken {
    type Error = Failure;

    fn read_at(&self, _: &mut [u8], offset: u64) -> Result<usize, Failure> {
        Err(Failure(offset))
    }
}
