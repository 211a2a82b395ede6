//! SND global header

use crate::snd::cursor::ArchiveCursor;
use crate::snd::error::{SndError, SndResult};
use binrw::{BinRead, BinWrite};
use std::io::{Read, Seek};

/// Magic literal at offset 0 of every SND archive
pub const SND_MAGIC: [u8; 12] = *b"ElecbyteSnd\0";

/// Size of the encoded global header in bytes
pub const HEADER_SIZE: u32 = 24;

/// SND global header (24 bytes, little-endian)
///
/// ```text
/// 0   12  magic "ElecbyteSnd\0"
/// 12   2  format version 1
/// 14   2  format version 2
/// 16   4  resource count
/// 20   4  offset of the first sub-header
/// ```
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little, magic = b"ElecbyteSnd\0")]
pub struct SndHeader {
    /// First format version field
    pub version1: u16,
    /// Second format version field
    pub version2: u16,
    /// Declared number of sounds; bounds the chain walk
    pub resource_count: u32,
    /// Absolute offset of the first sub-header
    pub first_sub_header_offset: u32,
}

impl SndHeader {
    /// Header for `resource_count` sounds with the chain starting right
    /// after the header
    pub fn new(resource_count: u32) -> Self {
        Self {
            version1: 0,
            version2: 1,
            resource_count,
            first_sub_header_offset: HEADER_SIZE,
        }
    }

    /// Both version fields as `(version1, version2)`
    pub fn version(&self) -> (u16, u16) {
        (self.version1, self.version2)
    }

    /// Read and validate the header at the cursor's current position.
    ///
    /// The magic is compared before any other field is read, so a short or
    /// foreign file is reported as [`SndError::InvalidFormat`] rather than a
    /// truncation.
    pub fn read_from<R: Read + Seek>(cursor: &mut ArchiveCursor<R>) -> SndResult<Self> {
        let start = cursor.position();
        let found = cursor.read_bytes(SND_MAGIC.len() as u64)?;
        if found.as_slice() != SND_MAGIC {
            return Err(SndError::InvalidFormat { found });
        }

        cursor.seek_to(start)?;
        match cursor.read_le::<Self>("archive header") {
            Err(SndError::BinRead(binrw::Error::BadMagic { .. })) => {
                Err(SndError::InvalidFormat { found })
            }
            other => other,
        }
    }
}
