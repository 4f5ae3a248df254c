//! Error types for buffer and stream operations.

use snafu::Snafu;

/// Error produced by buffer mutations and stream transfers.
///
/// Bounds, ordering and capacity violations are contract errors: they are
/// reported at the point of detection, before any byte of the destination
/// is touched. Partial transfers are not errors at the counted API level
/// ([`read_bytes`](crate::InputStream::read_bytes) /
/// [`write_bytes`](crate::OutputStream::write_bytes) return the moved count);
/// only the full-transfer wrappers promote them to [`ShortRead`](Error::ShortRead)
/// and [`ShortWrite`](Error::ShortWrite).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    /// An index or offset lies outside the valid range of a view or buffer.
    #[snafu(display("offset {offset} is out of bounds for length {length}"))]
    OutOfBounds {
        /// Offending index or offset.
        offset: usize,
        /// Valid length it was checked against.
        length: usize,
    },

    /// A range's start is after its end.
    #[snafu(display("range start {start} is after range end {end}"))]
    MisorderedRange {
        /// Start of the misordered range.
        start: usize,
        /// End of the misordered range.
        end: usize,
    },

    /// A write would overflow a buffer whose growth policy forbids expansion.
    #[snafu(display("{required} bytes exceed fixed capacity of {capacity}"))]
    CapacityExceeded {
        /// Capacity the operation would have needed.
        required: usize,
        /// Capacity the buffer is pinned to.
        capacity: usize,
    },

    /// The allocator could not produce memory.
    #[snafu(display("allocator failed to provide {size} bytes"))]
    AllocationFailure {
        /// Size of the failed request.
        size: usize,
    },

    /// An empty range was passed where a non-trivial range is required.
    #[snafu(display("{what} must not be empty"))]
    InvalidArgument {
        /// Which argument was rejected.
        what: &'static str,
    },

    /// A full-transfer read observed a partial one.
    #[snafu(display("read {read} of {requested} required bytes"))]
    ShortRead {
        /// Bytes the caller required.
        requested: usize,
        /// Bytes actually read.
        read: usize,
    },

    /// A full-transfer write observed a partial one.
    #[snafu(display("wrote {written} of {requested} required bytes"))]
    ShortWrite {
        /// Bytes the caller required.
        requested: usize,
        /// Bytes actually written.
        written: usize,
    },

    /// A computed stream position falls outside `[0, length]`.
    #[snafu(display("seek to position {position} is outside stream of length {length}"))]
    SeekOutOfRange {
        /// Position the seek would have landed on.
        position: i64,
        /// Length of the stream.
        length: usize,
    },

    /// The host file API reported a failure.
    #[cfg(feature = "std")]
    #[snafu(display("file stream operation failed: {source}"))]
    Io {
        /// Underlying OS error.
        source: std::io::Error,
    },
}

/// Result type for buffer and stream operations.
pub type Result<T> = core::result::Result<T, Error>;
