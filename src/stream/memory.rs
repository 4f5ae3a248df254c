//! Streams backed by an in-memory [`ByteBuffer`].

use snafu::ensure;

use crate::allocator::{ByteAllocator, Global};
use crate::buffer::{ByteBuffer, Growth};
use crate::error::{InvalidArgumentSnafu, Result, SeekOutOfRangeSnafu};
use crate::stream::{InputStream, OutputStream, Stream};
use crate::view::ByteView;

/// Bound a computed seek target to `[0, len]`.
fn checked_position(target: i128, len: usize) -> Result<usize> {
    ensure!(
        0 <= target && target <= len as i128,
        SeekOutOfRangeSnafu {
            position: target.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
            length: len,
        }
    );
    Ok(target as usize)
}

/// [`InputStream`] reading from an owned [`ByteBuffer`].
///
/// Reads are partial by design: a read past the remaining contents
/// returns the bytes that were left, and the count says how many.
///
/// # Example
///
/// ```
/// use byteflow::{InputStream, MemoryInputStream};
///
/// let mut stream = MemoryInputStream::from_slice(&[10, 20, 30]).unwrap();
///
/// let mut out = [0u8; 2];
/// assert_eq!(stream.read_bytes(&mut out).unwrap(), 2);
/// assert_eq!(out, [10, 20]);
/// assert_eq!(stream.read_byte().unwrap(), Some(30));
/// assert_eq!(stream.read_byte().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct MemoryInputStream<A: ByteAllocator = Global> {
    buffer: ByteBuffer<A>,
    position: usize,
}

impl MemoryInputStream<Global> {
    /// Create a stream by copying a block of data into it.
    ///
    /// The underlying buffer is pinned to [`Growth::None`]; an input
    /// stream never outgrows its contents. Fails with
    /// [`InvalidArgument`](crate::Error::InvalidArgument) on an empty
    /// source.
    #[inline]
    pub fn from_slice(source: &[u8]) -> Result<Self> {
        Self::from_slice_in(source, Global)
    }
}

impl<A: ByteAllocator> MemoryInputStream<A> {
    /// Create a stream by copying a block of data, using `alloc`.
    pub fn from_slice_in(source: &[u8], alloc: A) -> Result<Self> {
        ensure!(
            !source.is_empty(),
            InvalidArgumentSnafu {
                what: "input stream source",
            }
        );
        let mut buffer = ByteBuffer::from_slice_in(source, alloc)?;
        buffer.set_growth(Growth::None);
        Ok(Self { buffer, position: 0 })
    }

    /// Create a stream by taking ownership of an existing buffer.
    #[inline]
    #[must_use]
    pub fn from_buffer(buffer: ByteBuffer<A>) -> Self {
        Self { buffer, position: 0 }
    }

    /// Current read position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Length of the stream contents.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the stream holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Capacity of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Growth policy of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn growth(&self) -> Growth {
        self.buffer.growth()
    }

    /// View of the stream contents.
    #[inline]
    #[must_use]
    pub fn view(&self) -> ByteView<'_> {
        self.buffer.view()
    }

    /// Release the underlying buffer.
    #[inline]
    #[must_use]
    pub fn into_buffer(self) -> ByteBuffer<A> {
        self.buffer
    }
}

impl<A: ByteAllocator> Stream for MemoryInputStream<A> {
    #[inline]
    fn stream_position(&mut self) -> Result<u64> {
        Ok(self.position as u64)
    }

    #[inline]
    fn stream_len(&mut self) -> Result<u64> {
        Ok(self.buffer.len() as u64)
    }

    fn seek_begin(&mut self, offset: u64) -> Result<()> {
        self.position = checked_position(offset as i128, self.buffer.len())?;
        Ok(())
    }

    fn seek_current(&mut self, offset: i64) -> Result<()> {
        let target = self.position as i128 + offset as i128;
        self.position = checked_position(target, self.buffer.len())?;
        Ok(())
    }

    fn seek_end(&mut self, offset: i64) -> Result<()> {
        let target = self.buffer.len() as i128 + offset as i128;
        self.position = checked_position(target, self.buffer.len())?;
        Ok(())
    }
}

impl<A: ByteAllocator> InputStream for MemoryInputStream<A> {
    fn read_bytes(&mut self, output: &mut [u8]) -> Result<usize> {
        ensure!(
            !output.is_empty(),
            InvalidArgumentSnafu {
                what: "read destination",
            }
        );

        let remaining = self.buffer.len() - self.position;
        let read = output.len().min(remaining);

        output[..read].copy_from_slice(&self.buffer.as_slice()[self.position..self.position + read]);
        self.position += read;

        Ok(read)
    }
}

/// [`OutputStream`] writing into an owned [`ByteBuffer`].
///
/// The growth policy decides what an overflowing write does: a growable
/// buffer expands and takes the whole write, while a [`Growth::None`]
/// buffer clips the write to its remaining capacity and reports the
/// (possibly zero) partial count. The clipping happens here at the
/// stream layer, so the fixed-size buffer itself never sees an
/// over-capacity request.
///
/// # Example
///
/// ```
/// use byteflow::{Growth, MemoryOutputStream, OutputStream};
///
/// let mut fixed = MemoryOutputStream::with_capacity_and_growth(4, Growth::None).unwrap();
/// assert_eq!(fixed.write_bytes(&[1, 2, 3, 4, 5, 6]).unwrap(), 4);
/// assert_eq!(fixed.view().as_slice(), &[1, 2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct MemoryOutputStream<A: ByteAllocator = Global> {
    buffer: ByteBuffer<A>,
    position: usize,
}

impl MemoryOutputStream<Global> {
    /// Create an empty stream with no preallocation.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Create a stream with `capacity` bytes preallocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Create a stream with preallocated capacity and a growth policy.
    ///
    /// `Growth::None` makes a fixed-size stream that clips overflowing
    /// writes instead of expanding.
    #[inline]
    pub fn with_capacity_and_growth(capacity: usize, growth: Growth) -> Result<Self> {
        Self::with_capacity_and_growth_in(capacity, growth, Global)
    }
}

impl<A: ByteAllocator> MemoryOutputStream<A> {
    /// Create an empty stream with no preallocation, using `alloc`.
    #[inline]
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buffer: ByteBuffer::new_in(alloc),
            position: 0,
        }
    }

    /// Create a stream with `capacity` bytes preallocated from `alloc`.
    ///
    /// Fails with [`InvalidArgument`](crate::Error::InvalidArgument) for a
    /// zero capacity — use [`new_in`](Self::new_in) for an empty stream.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self> {
        Self::with_capacity_and_growth_in(capacity, Growth::Double, alloc)
    }

    /// Create a stream with preallocated capacity and a growth policy,
    /// using `alloc`.
    pub fn with_capacity_and_growth_in(capacity: usize, growth: Growth, alloc: A) -> Result<Self> {
        ensure!(
            capacity != 0,
            InvalidArgumentSnafu {
                what: "preallocated capacity",
            }
        );
        let mut buffer = ByteBuffer::with_capacity_in(capacity, alloc)?;
        buffer.set_growth(growth);
        Ok(Self { buffer, position: 0 })
    }

    /// Current write position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Length of the bytes written so far.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when nothing has been written.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Capacity of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Growth policy of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn growth(&self) -> Growth {
        self.buffer.growth()
    }

    /// View of the bytes written so far.
    #[inline]
    #[must_use]
    pub fn view(&self) -> ByteView<'_> {
        self.buffer.view()
    }

    /// Release the underlying buffer.
    #[inline]
    #[must_use]
    pub fn into_buffer(self) -> ByteBuffer<A> {
        self.buffer
    }
}

impl Default for MemoryOutputStream<Global> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ByteAllocator> Stream for MemoryOutputStream<A> {
    #[inline]
    fn stream_position(&mut self) -> Result<u64> {
        Ok(self.position as u64)
    }

    #[inline]
    fn stream_len(&mut self) -> Result<u64> {
        Ok(self.buffer.len() as u64)
    }

    fn seek_begin(&mut self, offset: u64) -> Result<()> {
        self.position = checked_position(offset as i128, self.buffer.len())?;
        Ok(())
    }

    fn seek_current(&mut self, offset: i64) -> Result<()> {
        let target = self.position as i128 + offset as i128;
        self.position = checked_position(target, self.buffer.len())?;
        Ok(())
    }

    fn seek_end(&mut self, offset: i64) -> Result<()> {
        let target = self.buffer.len() as i128 + offset as i128;
        self.position = checked_position(target, self.buffer.len())?;
        Ok(())
    }
}

impl<A: ByteAllocator> OutputStream for MemoryOutputStream<A> {
    fn write_bytes(&mut self, input: &[u8]) -> Result<usize> {
        ensure!(
            !input.is_empty(),
            InvalidArgumentSnafu {
                what: "write source",
            }
        );

        // A fixed-size stream clips the write so the non-growable buffer
        // never sees an over-capacity request: overflow becomes a partial
        // write here instead of a failure there.
        if self.buffer.growth() == Growth::None {
            let remaining = self.buffer.capacity() - self.position;
            let write = input.len().min(remaining);

            self.buffer.overwrite(&input[..write], self.position)?;
            self.position += write;

            return Ok(write);
        }

        self.buffer.overwrite(input, self.position)?;
        self.position += input.len();

        Ok(input.len())
    }
}
