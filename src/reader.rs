use crate::{
    buffer::BackBuf,
    error::{Error, Inconsistency},
    logger::{debug, trace},
    source::ReadAt,
};
use alloc::{boxed::Box, vec};
use core::fmt;
#[cfg(feature = "std")]
use std::io::{self, Seek, SeekFrom};

/// Smallest buffer size accepted by [`BackReader::new`].
pub const MIN_BUF_SIZE: usize = 1;
/// Buffer size used by [`BackReader::from_file`].
pub const DEFAULT_BUF_SIZE: usize = 4096;

/// Buffered reader over a random-access source that moves from higher offsets to lower ones.
///
/// Every chunk handed out keeps the left-to-right order of the source,
/// only the offset moves backward. Useful to walk an append-only file from its end,
/// e.g. to locate records whose size is stored after their payload.
///
/// ```
/// # use backread::BackReader;
/// let data = b"first|second".to_vec();
/// let mut reader = BackReader::new(data, 12, 4).unwrap();
///
/// let mut tail = [0; 6];
/// assert_eq!(reader.read(&mut tail), Ok(6));
/// assert_eq!(&tail, b"second");
/// assert_eq!(reader.offset(), 6);
/// ```
pub struct BackReader<S: ReadAt> {
    source: S,
    /// Lowest offset staged in `buffer`.
    offset: u64,
    buffer: BackBuf,
    window: Box<[u8]>,
}

impl<S: ReadAt> BackReader<S> {
    /// Creates a reader whose next read ends at `offset`, staging up to `buf_size` bytes at once.
    pub fn new(source: S, offset: u64, buf_size: usize) -> Result<Self, Error<S::Error>> {
        if buf_size < MIN_BUF_SIZE {
            return Err(Error::InvalidArgument);
        }
        let buffer = BackBuf::new(buf_size).map_err(|_| Error::InvalidArgument)?;
        Ok(Self {
            source,
            offset,
            buffer,
            window: vec![0; buf_size].into_boxed_slice(),
        })
    }

    /// Size of the staging buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Maximum number of bytes that can still be read, i.e. the offset the next read ends at.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset + self.buffer.read_availability() as u64
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Moves the reader so that the next read ends at `offset`.
    ///
    /// Staged bytes below `offset` are kept, so seeking back inside the staged window costs no source read.
    pub fn seek(&mut self, offset: u64) -> Result<(), Error<S::Error>> {
        let end = self.offset();
        if offset < self.offset || offset > end {
            if !self.buffer.is_empty() {
                debug!("seek to {offset} drops staged window {}..{end}", self.offset);
            }
            self.buffer.reset();
            self.offset = offset;
        } else if offset < end {
            self.buffer
                .omit((end - offset) as usize)
                .map_err(Inconsistency::from)?;
        }
        Ok(())
    }

    /// Reads at most `buf.len()` bytes ending at `offset`.
    ///
    /// Same as [`Self::seek`] followed by [`Self::read`].
    pub fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Error<S::Error>> {
        if buf.is_empty() {
            return Err(Error::InvalidArgument);
        }
        self.seek(offset)?;
        self.read(buf)
    }

    /// Reads at most `buf.len()` bytes ending at the current offset and moves the offset below them.
    ///
    /// Returns `buf.len()` when the buffer is filled.
    /// If the source start is reached first then [`Error::NoContent`] is returned
    /// with the number of bytes read, the bytes are placed at the start of `buf`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error<S::Error>> {
        if buf.is_empty() {
            return Err(Error::InvalidArgument);
        }
        let to_read = usize::try_from(self.offset()).map_or(buf.len(), |left| usize::min(left, buf.len()));

        let mut read = 0;
        while read < to_read {
            if self.buffer.is_empty() {
                self.refill()?;
            }

            let end = to_read - read;
            let count = usize::min(end, self.buffer.read_availability());
            let drained = self
                .buffer
                .read(&mut buf[end - count..end])
                .map_err(Inconsistency::from)?;
            if drained != count {
                return Err(Inconsistency::ShortDrain {
                    expected: count,
                    drained,
                }
                .into());
            }
            read += count;
        }

        if read < buf.len() {
            Err(Error::NoContent(read))
        } else {
            Ok(read)
        }
    }

    /// Stages the window of at most `capacity` bytes that ends at the tracked offset.
    ///
    /// Buffer must be empty.
    fn refill(&mut self) -> Result<(), Error<S::Error>> {
        let capacity = self.buffer.capacity();
        let size = usize::try_from(self.offset).map_or(capacity, |offset| usize::min(offset, capacity));
        let start = self.offset - size as u64;

        let window = &mut self.window[..size];
        let mut fetched = 0;
        while fetched < size {
            let pos = start + fetched as u64;
            match self.source.read_at(&mut window[fetched..], pos).map_err(Error::Source)? {
                0 => return Err(Error::Truncated { offset: pos }),
                n => fetched += n,
            }
        }

        let written = self.buffer.write(window).map_err(Inconsistency::from)?;
        if written != size {
            return Err(Inconsistency::ShortWrite {
                fetched: size,
                written,
            }
            .into());
        }
        trace!("staged {}..{}", start, self.offset);
        self.offset = start;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<F: ReadAt<Error = io::Error> + Seek> BackReader<F> {
    /// Creates a reader positioned at the end of `file` with [`DEFAULT_BUF_SIZE`] buffer.
    pub fn from_file(file: F) -> Result<Self, Error<io::Error>> {
        Self::from_file_with_capacity(file, DEFAULT_BUF_SIZE)
    }

    /// Creates a reader positioned at the end of `file` with a buffer of `buf_size` bytes.
    pub fn from_file_with_capacity(mut file: F, buf_size: usize) -> Result<Self, Error<io::Error>> {
        let end = file.seek(SeekFrom::End(0)).map_err(Error::Source)?;
        Self::new(file, end, buf_size)
    }
}

impl<S: ReadAt> fmt::Debug for BackReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackReader")
            .field("offset", &self.offset)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
