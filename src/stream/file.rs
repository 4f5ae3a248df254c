//! Streams backed by a host file handle.
//!
//! These delegate position, seek, read and write straight to the OS with
//! no buffering logic of their own; they exist so a file can stand in
//! wherever a memory stream is expected. OS failures surface as
//! [`Io`](crate::Error::Io).

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use snafu::{ResultExt, ensure};

use crate::error::{InvalidArgumentSnafu, IoSnafu, Result};
use crate::stream::{InputStream, OutputStream, Stream};

/// Current length of a file, preserving the stream position.
fn file_len(file: &mut File) -> Result<u64> {
    let saved = file.stream_position().context(IoSnafu)?;
    let len = file.seek(SeekFrom::End(0)).context(IoSnafu)?;
    file.seek(SeekFrom::Start(saved)).context(IoSnafu)?;
    Ok(len)
}

/// [`InputStream`] reading from a file handle.
pub struct FileInputStream {
    file: File,
}

impl FileInputStream {
    /// Open `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).context(IoSnafu)?;
        Ok(Self { file })
    }

    /// Wrap an externally opened file handle.
    #[inline]
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Release the file handle.
    #[inline]
    #[must_use]
    pub fn into_file(self) -> File {
        self.file
    }
}

impl Stream for FileInputStream {
    #[inline]
    fn stream_position(&mut self) -> Result<u64> {
        self.file.stream_position().context(IoSnafu)
    }

    #[inline]
    fn stream_len(&mut self) -> Result<u64> {
        file_len(&mut self.file)
    }

    fn seek_begin(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset)).context(IoSnafu)?;
        Ok(())
    }

    fn seek_current(&mut self, offset: i64) -> Result<()> {
        self.file.seek(SeekFrom::Current(offset)).context(IoSnafu)?;
        Ok(())
    }

    fn seek_end(&mut self, offset: i64) -> Result<()> {
        self.file.seek(SeekFrom::End(offset)).context(IoSnafu)?;
        Ok(())
    }
}

impl InputStream for FileInputStream {
    fn read_bytes(&mut self, output: &mut [u8]) -> Result<usize> {
        ensure!(
            !output.is_empty(),
            InvalidArgumentSnafu {
                what: "read destination",
            }
        );

        // Read::read may return less than requested before the end of the
        // file; keep pulling so a short count only ever means end-of-file,
        // like the memory stream's remaining-length clip.
        let mut read = 0;
        while read < output.len() {
            let n = self.file.read(&mut output[read..]).context(IoSnafu)?;
            if n == 0 {
                break;
            }
            read += n;
        }
        Ok(read)
    }
}

/// [`OutputStream`] writing to a file handle.
pub struct FileOutputStream {
    file: File,
}

impl FileOutputStream {
    /// Open `path` for writing, creating or truncating it.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path).context(IoSnafu)?;
        Ok(Self { file })
    }

    /// Wrap an externally opened file handle.
    #[inline]
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Release the file handle, flushing buffered OS state.
    pub fn into_file(mut self) -> Result<File> {
        self.file.flush().context(IoSnafu)?;
        Ok(self.file)
    }
}

impl Stream for FileOutputStream {
    #[inline]
    fn stream_position(&mut self) -> Result<u64> {
        self.file.stream_position().context(IoSnafu)
    }

    #[inline]
    fn stream_len(&mut self) -> Result<u64> {
        file_len(&mut self.file)
    }

    fn seek_begin(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset)).context(IoSnafu)?;
        Ok(())
    }

    fn seek_current(&mut self, offset: i64) -> Result<()> {
        self.file.seek(SeekFrom::Current(offset)).context(IoSnafu)?;
        Ok(())
    }

    fn seek_end(&mut self, offset: i64) -> Result<()> {
        self.file.seek(SeekFrom::End(offset)).context(IoSnafu)?;
        Ok(())
    }
}

impl OutputStream for FileOutputStream {
    fn write_bytes(&mut self, input: &[u8]) -> Result<usize> {
        ensure!(
            !input.is_empty(),
            InvalidArgumentSnafu {
                what: "write source",
            }
        );

        self.file.write(input).context(IoSnafu)
    }
}
