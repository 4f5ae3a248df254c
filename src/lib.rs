//! Byte-level memory primitives for binary-format work: non-owning views,
//! an owning growable buffer, and seekable streams with endian-aware
//! numeric codecs layered on top.
//!
//! # Buffers
//!
//! ```
//! use byteflow::ByteBuffer;
//!
//! let mut buf = ByteBuffer::from_slice(b"hello world").unwrap();
//!
//! let word = buf.subview(6, 5).unwrap();
//! assert_eq!(word.as_slice(), b"world");
//!
//! buf.erase(5..11).unwrap();
//! assert_eq!(buf.as_slice(), b"hello");
//! ```
//!
//! # Streams
//!
//! ```
//! use byteflow::{Endian, InputStreamExt, MemoryInputStream, Stream};
//!
//! let record = [0x01, 0x02, 0x03, 0x04, 0x0C, 0xA8, 0x61];
//! let mut stream = MemoryInputStream::from_slice(&record).unwrap();
//!
//! stream.seek_begin(4).unwrap();
//! assert_eq!(stream.read_numeric::<u8>(Endian::Little).unwrap(), 12);
//! assert_eq!(stream.read_numeric::<u16>(Endian::Little).unwrap(), 25000);
//! ```
//!
//! Writes go through the buffer's growth policy: growable streams take
//! every write in full, while a [`Growth::None`] stream clips at its
//! capacity and reports the partial count — overflow is a well-defined
//! outcome, not an error. The `std` feature adds [`FileInputStream`] and
//! [`FileOutputStream`], which serve the same stream traits from a host
//! file handle.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod allocator;
mod buffer;
mod endian;
mod error;
mod stream;
mod view;

#[cfg(test)]
mod tests;

pub use allocator::{ByteAllocator, Global};
pub use buffer::{ByteBuffer, Growth};
pub use endian::{Endian, Numeric};
pub use error::{Error, Result};
pub use stream::{
    InputStream, InputStreamExt, MemoryInputStream, MemoryOutputStream, OutputStream,
    OutputStreamExt, Stream,
};
pub use view::{ByteView, ByteViewMut};

#[cfg(feature = "std")]
pub use stream::{FileInputStream, FileOutputStream};
