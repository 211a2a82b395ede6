//! SND archive builder

use crate::snd::chain::{SUB_HEADER_SIZE, SubHeader};
use crate::snd::error::{SndError, SndResult};
use crate::snd::header::{HEADER_SIZE, SndHeader};
use crate::snd::key::ResourceKey;
use binrw::BinWrite;
use std::io::{Cursor, Seek, Write};

/// Builder for SND archives.
///
/// Sounds are written in insertion order, each sub-header pointing at the
/// next; the last one stores a `next_offset` of 0. Duplicate keys are
/// written as given, so readers see them in the chain.
#[derive(Debug, Clone)]
pub struct SndBuilder {
    version1: u16,
    version2: u16,
    sounds: Vec<(ResourceKey, Vec<u8>)>,
}

impl Default for SndBuilder {
    fn default() -> Self {
        let header = SndHeader::new(0);
        Self {
            version1: header.version1,
            version2: header.version2,
            sounds: Vec::new(),
        }
    }
}

impl SndBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header version fields
    pub fn version(&mut self, version1: u16, version2: u16) -> &mut Self {
        self.version1 = version1;
        self.version2 = version2;
        self
    }

    /// Append a sound
    pub fn add_sound(&mut self, key: ResourceKey, payload: impl Into<Vec<u8>>) -> &mut Self {
        self.sounds.push((key, payload.into()));
        self
    }

    /// Number of sounds added
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether no sounds have been added
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Write the archive
    pub fn build<W: Write + Seek>(&self, mut writer: W) -> SndResult<()> {
        let count = u32::try_from(self.sounds.len()).map_err(|_| too_large("sound count"))?;

        let header = SndHeader {
            version1: self.version1,
            version2: self.version2,
            resource_count: count,
            first_sub_header_offset: HEADER_SIZE,
        };
        header.write_le(&mut writer)?;

        let mut offset = HEADER_SIZE;
        for (i, (key, payload)) in self.sounds.iter().enumerate() {
            let payload_length =
                u32::try_from(payload.len()).map_err(|_| too_large("payload length"))?;
            let end = offset
                .checked_add(SUB_HEADER_SIZE)
                .and_then(|o| o.checked_add(payload_length))
                .ok_or_else(|| too_large("archive size"))?;

            let sub = SubHeader {
                next_offset: if i + 1 == self.sounds.len() { 0 } else { end },
                payload_length,
                key: *key,
            };
            sub.write_le(&mut writer)?;
            writer.write_all(payload)?;
            offset = end;
        }

        Ok(())
    }

    /// Write the archive into a new buffer
    pub fn build_to_vec(&self) -> SndResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.build(Cursor::new(&mut buf))?;
        Ok(buf)
    }
}

fn too_large(what: &str) -> SndError {
    SndError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("{what} exceeds the 32-bit SND limit"),
    ))
}
