//! Raw archive access without decoding

use crate::snd::chain::{ChainCursor, ChainEntry};
use crate::snd::cursor::ArchiveCursor;
use crate::snd::error::{EntryError, SndResult};
use crate::snd::header::SndHeader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// An opened archive with its parsed header
pub struct SndArchive<R: Read + Seek> {
    cursor: ArchiveCursor<R>,
    header: SndHeader,
}

impl<R: Read + Seek> SndArchive<R> {
    /// Parse the header from a reader positioned at the archive start
    pub fn from_reader(reader: R) -> SndResult<Self> {
        let mut cursor = ArchiveCursor::new(reader);
        let header = SndHeader::read_from(&mut cursor)?;
        Ok(Self { cursor, header })
    }

    /// Parsed global header
    pub fn header(&self) -> &SndHeader {
        &self.header
    }

    /// Walk the whole chain (bounded by the declared count) without reading
    /// payloads
    pub fn entries(&mut self) -> SndResult<Vec<ChainEntry>> {
        let mut chain = ChainCursor::new(&self.header, 0);
        let mut entries = Vec::with_capacity(chain.remaining().min(4096) as usize);
        while let Some(entry) = chain.advance(&mut self.cursor)? {
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Raw payload bytes of `entry`
    pub fn read_payload(&mut self, entry: &ChainEntry) -> SndResult<Vec<u8>> {
        self.cursor.seek_to(entry.payload_offset)?;
        let data = self.cursor.read_bytes(u64::from(entry.payload_length))?;
        if data.len() < entry.payload_length as usize {
            return Err(EntryError::TruncatedPayload {
                expected: entry.payload_length,
                actual: data.len() as u32,
            }
            .with_key(entry.key));
        }
        Ok(data)
    }
}

impl SndArchive<BufReader<File>> {
    /// Open an archive file
    pub fn open<P: AsRef<Path>>(path: P) -> SndResult<Self> {
        let mut cursor = ArchiveCursor::open(path)?;
        let header = SndHeader::read_from(&mut cursor)?;
        Ok(Self { cursor, header })
    }
}
