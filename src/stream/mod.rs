//! Stateful stream abstractions over byte storage.
//!
//! The capability set splits into three traits: [`Stream`] carries the
//! position and seek surface shared by every stream, and
//! [`InputStream`] / [`OutputStream`] add the directional bulk transfers.
//! Concrete streams implement the combination they support, and callers
//! that only need the capabilities can hold `&mut dyn InputStream` or
//! `&mut dyn OutputStream` — a file-backed stream drops in wherever a
//! memory stream is expected.
//!
//! The endian-aware numeric codecs live on the [`InputStreamExt`] /
//! [`OutputStreamExt`] extension traits (implemented for every stream) so
//! that the base traits stay usable as trait objects.
//!
//! # Example
//!
//! ```
//! use byteflow::{Endian, InputStreamExt, MemoryInputStream, MemoryOutputStream,
//!                OutputStreamExt};
//!
//! let mut out = MemoryOutputStream::new();
//! out.write_numeric::<u32>(0xDEAD_BEEF, Endian::Little).unwrap();
//! out.write_numeric::<u16>(7, Endian::Big).unwrap();
//!
//! let mut inp = MemoryInputStream::from_buffer(out.into_buffer());
//! assert_eq!(inp.read_numeric::<u32>(Endian::Little).unwrap(), 0xDEAD_BEEF);
//! assert_eq!(inp.read_numeric::<u16>(Endian::Big).unwrap(), 7);
//! ```

mod memory;

#[cfg(feature = "std")]
mod file;

pub use memory::{MemoryInputStream, MemoryOutputStream};

#[cfg(feature = "std")]
pub use file::{FileInputStream, FileOutputStream};

use snafu::ensure;

use crate::endian::{Endian, Numeric};
use crate::error::{Result, ShortReadSnafu, ShortWriteSnafu};

/// Position and seek capability shared by all streams.
///
/// Positions are expressed in bytes from the start of the stream. Memory
/// streams bound every seek to `[0, len]`; file streams delegate the
/// bounds to the host OS.
pub trait Stream {
    /// Current position.
    fn stream_position(&mut self) -> Result<u64>;

    /// Total length of the stream's contents.
    fn stream_len(&mut self) -> Result<u64>;

    /// Seek to `offset` bytes from the start.
    fn seek_begin(&mut self, offset: u64) -> Result<()>;

    /// Seek `offset` bytes relative to the current position.
    fn seek_current(&mut self, offset: i64) -> Result<()>;

    /// Seek `offset` bytes relative to the end (offsets are zero or
    /// negative for in-range positions on memory streams).
    fn seek_end(&mut self, offset: i64) -> Result<()>;
}

/// Stateful source of bytes.
pub trait InputStream: Stream {
    /// Read up to `output.len()` bytes, advancing the position by the
    /// amount read.
    ///
    /// Returns the number of bytes actually read: a count short of
    /// `output.len()` is a partial read by design, never an error. Fails
    /// with [`InvalidArgument`](crate::Error::InvalidArgument) when
    /// `output` is empty.
    fn read_bytes(&mut self, output: &mut [u8]) -> Result<usize>;

    /// Read a single byte, or `None` at the end of the stream.
    ///
    /// Falls back to [`read_bytes`](Self::read_bytes) with a one-byte
    /// destination; implementations with a cheaper path may override it.
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        let read = self.read_bytes(&mut byte)?;
        Ok((read == 1).then_some(byte[0]))
    }

    /// Read exactly `output.len()` bytes, failing with
    /// [`ShortRead`](crate::Error::ShortRead) on a partial transfer.
    fn read_exact(&mut self, output: &mut [u8]) -> Result<()> {
        let requested = output.len();
        let read = self.read_bytes(output)?;
        ensure!(read == requested, ShortReadSnafu { requested, read });
        Ok(())
    }
}

/// Stateful sink of bytes.
pub trait OutputStream: Stream {
    /// Write up to `input.len()` bytes, advancing the position by the
    /// amount written.
    ///
    /// Returns the number of bytes actually written; a short count is a
    /// partial write by design (a fixed-capacity memory stream clips at
    /// its capacity). Fails with
    /// [`InvalidArgument`](crate::Error::InvalidArgument) when `input` is
    /// empty.
    fn write_bytes(&mut self, input: &[u8]) -> Result<usize>;

    /// Write a single byte; `false` means the stream had no room.
    #[inline]
    fn write_byte(&mut self, value: u8) -> Result<bool> {
        Ok(self.write_bytes(&[value])? == 1)
    }

    /// Write all of `input`, failing with
    /// [`ShortWrite`](crate::Error::ShortWrite) on a partial transfer.
    fn write_all(&mut self, input: &[u8]) -> Result<()> {
        let requested = input.len();
        let written = self.write_bytes(input)?;
        ensure!(written == requested, ShortWriteSnafu { requested, written });
        Ok(())
    }
}

/// Numeric decoding for every [`InputStream`].
pub trait InputStreamExt: InputStream {
    /// Read a numeric value encoded with byte order `endian`.
    ///
    /// Reads `T::WIDTH` bytes through
    /// [`read_bytes`](InputStream::read_bytes); when fewer are available
    /// this is a [`ShortRead`](crate::Error::ShortRead) (the position
    /// still advances past the bytes consumed).
    fn read_numeric<T: Numeric>(&mut self, endian: Endian) -> Result<T> {
        let mut raw = [0u8; 8];
        let requested = T::WIDTH;
        let read = self.read_bytes(&mut raw[..requested])?;
        ensure!(read == requested, ShortReadSnafu { requested, read });

        let value = T::from_ne_bytes(&raw[..requested]);
        Ok(if endian == Endian::NATIVE {
            value
        } else {
            value.swap_bytes()
        })
    }
}

impl<S: InputStream + ?Sized> InputStreamExt for S {}

/// Numeric encoding for every [`OutputStream`].
pub trait OutputStreamExt: OutputStream {
    /// Write a numeric value with byte order `endian`.
    ///
    /// Fails with [`ShortWrite`](crate::Error::ShortWrite) unless all
    /// `T::WIDTH` bytes were written.
    fn write_numeric<T: Numeric>(&mut self, value: T, endian: Endian) -> Result<()> {
        let value = if endian == Endian::NATIVE {
            value
        } else {
            value.swap_bytes()
        };

        let mut raw = [0u8; 8];
        value.write_ne_bytes(&mut raw[..T::WIDTH]);

        let requested = T::WIDTH;
        let written = self.write_bytes(&raw[..requested])?;
        ensure!(written == requested, ShortWriteSnafu { requested, written });
        Ok(())
    }
}

impl<S: OutputStream + ?Sized> OutputStreamExt for S {}
