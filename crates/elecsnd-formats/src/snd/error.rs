//! Error types for SND archive operations

use crate::audio::DecodeError;
use crate::snd::ResourceKey;
use thiserror::Error;

/// SND operation result type
pub type SndResult<T> = Result<T, SndError>;

/// Archive-level errors.
///
/// Everything except [`SndError::Entry`] aborts the whole load. `Entry` only
/// reaches the caller from a bounded (`max > 0`) load; unbounded loads record
/// the failing key as corrupt instead.
#[derive(Debug, Error)]
pub enum SndError {
    /// I/O error opening or seeking the archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the SND magic literal
    #[error("Unrecognized SND file, invalid header: found {found:02x?}")]
    InvalidFormat {
        /// Bytes found where the magic was expected (may be shorter than 12)
        found: Vec<u8>,
    },

    /// Header or sub-header ended before all fields were read
    #[error("Unexpected end of data reading {context} at offset {offset}")]
    UnexpectedEndOfData {
        /// Structure being read
        context: &'static str,
        /// Offset at which the read started
        offset: u64,
    },

    /// Structural error reported by the binary reader
    #[error("Binary format error: {0}")]
    BinRead(#[from] binrw::Error),

    /// A single entry could not be read or decoded
    #[error("Sound {key} can't be read: {source}")]
    Entry {
        /// Key of the failing entry
        key: ResourceKey,
        /// Underlying entry error
        #[source]
        source: EntryError,
    },
}

impl SndError {
    /// Whether this error means the archive structure itself is unusable
    pub fn is_fatal(&self) -> bool {
        !self.is_entry_error()
    }

    /// Whether this error concerns a single payload rather than the archive
    pub fn is_entry_error(&self) -> bool {
        matches!(self, Self::Entry { .. })
    }
}

/// Per-entry payload errors
#[derive(Debug, Error)]
pub enum EntryError {
    /// Declared payload is below the minimum decodable size
    #[error("wav size is too small: {size} bytes (minimum {min})")]
    PayloadTooSmall {
        /// Declared payload length
        size: u32,
        /// Minimum accepted length
        min: u32,
    },

    /// Fewer payload bytes were available than the sub-header declared
    #[error("truncated payload: expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        /// Declared payload length
        expected: u32,
        /// Bytes actually read
        actual: u32,
    },

    /// I/O error while reading the payload
    #[error("payload I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a well-formed audio container
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl EntryError {
    /// Attach the entry key, producing an archive-level error
    pub fn with_key(self, key: ResourceKey) -> SndError {
        SndError::Entry { key, source: self }
    }
}
