//! Buffered reading of a random-access byte source in backward direction.
//!
//! Offset moves from right to left while every chunk is read from left to right.
//! This is handy for append-only files whose records carry their size or links in a trailer:
//! [`BackReader`] walks the file from its end, staging source windows in a [`BackBuf`].
//!
//! ```no_run
//! # fn main() -> std::io::Result<()> {
//! use backread::BackReader;
//! use std::fs::File;
//!
//! let file = File::open("data.log")?;
//! let mut reader = BackReader::from_file(&file)?;
//!
//! // Read last 32 bytes of the file.
//! let mut buf = [0; 32];
//! reader.read(&mut buf)?;
//! # Ok(())
//! # }
//! ```
#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod buffer;
pub mod error;
pub mod logger;
pub mod reader;
pub mod source;
mod utils;

#[cfg(test)]
mod tests;

pub use buffer::{BackBuf, MIN_CAPACITY};
pub use error::{BufError, Error, Inconsistency};
pub use reader::{BackReader, DEFAULT_BUF_SIZE, MIN_BUF_SIZE};
pub use source::ReadAt;
