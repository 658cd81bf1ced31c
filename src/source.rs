use alloc::{boxed::Box, rc::Rc, sync::Arc, vec::Vec};
use core::convert::Infallible;
#[cfg(all(feature = "std", any(unix, windows)))]
use std::{fs::File, io};

/// Random-access byte source read by [`BackReader`](crate::BackReader).
///
/// Takes `&self` so that a single source may back several readers.
pub trait ReadAt {
    type Error;

    /// Reads at most `buf.len()` bytes starting at absolute `offset`.
    ///
    /// Returns the number of bytes actually read. A short read is not an error by itself,
    /// `0` means there is nothing at `offset`.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error>;
}

impl ReadAt for [u8] {
    type Error = Infallible;

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Infallible> {
        let start = match usize::try_from(offset) {
            Ok(start) if start < self.len() => start,
            _ => return Ok(0),
        };
        let count = usize::min(buf.len(), self.len() - start);
        buf[..count].copy_from_slice(&self[start..start + count]);
        Ok(count)
    }
}

impl ReadAt for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Infallible> {
        self.as_slice().read_at(buf, offset)
    }
}

macro_rules! impl_read_at_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T: ReadAt + ?Sized> ReadAt for $ptr<T> {
                type Error = T::Error;

                #[inline]
                fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
                    (**self).read_at(buf, offset)
                }
            }
        )*
    };
}

impl_read_at_deref!(Box, Rc, Arc);

impl<T: ReadAt + ?Sized> ReadAt for &T {
    type Error = T::Error;

    #[inline]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        (**self).read_at(buf, offset)
    }
}

#[cfg(all(feature = "std", any(unix, windows)))]
impl ReadAt for File {
    type Error = io::Error;

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        #[cfg(unix)]
        {
            std::os::unix::fs::FileExt::read_at(self, buf, offset)
        }
        #[cfg(windows)]
        {
            // Moves the file cursor, which `BackReader` never relies on.
            std::os::windows::fs::FileExt::seek_read(self, buf, offset)
        }
    }
}
