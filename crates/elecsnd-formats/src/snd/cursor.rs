//! Seekable byte cursor over an SND archive
//!
//! Tracks the current offset so that errors can report where a read started.

use crate::snd::error::{SndError, SndResult};
use binrw::BinRead;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Sequential, seekable reader over archive bytes
pub struct ArchiveCursor<R: Read + Seek> {
    /// Underlying reader
    reader: R,
    /// Current position in the archive
    position: u64,
}

impl<R: Read + Seek> ArchiveCursor<R> {
    /// Wrap a reader positioned at the start of the archive
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }

    /// Current offset from the start of the archive
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Seek to an absolute offset
    pub fn seek_to(&mut self, offset: u64) -> SndResult<()> {
        self.position = self.reader.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Read up to `len` bytes.
    ///
    /// Returns fewer bytes when the archive ends early; the caller decides
    /// whether a short read is an error.
    pub fn read_bytes(&mut self, len: u64) -> std::io::Result<Vec<u8>> {
        let mut data = Vec::with_capacity(usize::try_from(len).unwrap_or(0).min(1 << 20));
        let read = (&mut self.reader).take(len).read_to_end(&mut data)?;
        self.position += read as u64;
        Ok(data)
    }

    /// Read a little-endian `binrw` structure.
    ///
    /// A short read becomes [`SndError::UnexpectedEndOfData`] labelled with
    /// `context`.
    pub fn read_le<T>(&mut self, context: &'static str) -> SndResult<T>
    where
        T: for<'a> BinRead<Args<'a> = ()>,
    {
        let offset = self.position;
        let value = T::read_le(&mut self.reader).map_err(|e| map_read_error(e, context, offset));
        self.position = self.reader.stream_position()?;
        value
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ArchiveCursor<BufReader<File>> {
    /// Open an archive file for buffered reading
    pub fn open<P: AsRef<Path>>(path: P) -> SndResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

fn map_read_error(err: binrw::Error, context: &'static str, offset: u64) -> SndError {
    if err.is_eof() {
        return SndError::UnexpectedEndOfData { context, offset };
    }
    match err {
        binrw::Error::Io(e) => SndError::Io(e),
        other => SndError::BinRead(other),
    }
}
