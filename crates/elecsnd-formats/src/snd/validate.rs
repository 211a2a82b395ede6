//! Payload validation
//!
//! A payload is only trusted after it has been decoded and replayed to the
//! end once. Payloads whose stream stops short of its declared length are
//! kept as corrupt markers instead of being handed to playback, where they
//! would stall the mixer.

use crate::audio::{AudioDecoder, DecodeError, DecodeResult, SampleStream, SoundFormat};
use crate::snd::config::LoadOptions;
use crate::snd::cursor::ArchiveCursor;
use crate::snd::error::EntryError;
use bytes::Bytes;
use std::io::{Read, Seek};
use std::time::Duration;

/// A validated sound.
///
/// Keeps the raw payload so that it can be decoded again on demand rather
/// than holding a converted playback buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundResource {
    payload: Bytes,
    format: SoundFormat,
    len: usize,
}

impl SoundResource {
    /// Raw payload bytes as stored in the archive
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Sample format reported by the decoder
    pub fn format(&self) -> SoundFormat {
        self.format
    }

    /// Decoded length in frames
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sound has no frames
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Playing time at the source sample rate
    pub fn duration(&self) -> Duration {
        if self.format.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.len as f64 / f64::from(self.format.sample_rate))
    }

    /// Decode the payload again into a fresh stream
    pub fn open_stream<D: AudioDecoder + ?Sized>(
        &self,
        decoder: &D,
    ) -> DecodeResult<Box<dyn SampleStream>> {
        decoder.decode(self.payload.clone())
    }
}

/// Outcome of validating a well-formed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Played to its declared length
    Healthy(SoundResource),
    /// Decoded, but the stream ended early
    Corrupt {
        /// Frames produced before the stream stopped
        played: usize,
        /// Declared length in frames
        total: usize,
    },
}

/// Decode `payload` and replay it once in blocks of `block_frames`.
///
/// Fails only when the decoder rejects the container outright.
pub fn classify<D: AudioDecoder + ?Sized>(
    payload: Bytes,
    decoder: &D,
    block_frames: usize,
) -> Result<Validation, DecodeError> {
    let mut stream = decoder.decode(payload.clone())?;
    let mut block = vec![[0.0f32; 2]; block_frames.max(1)];

    while stream.stream(&mut block) > 0 {}

    if stream.position() < stream.len() {
        return Ok(Validation::Corrupt {
            played: stream.position(),
            total: stream.len(),
        });
    }

    Ok(Validation::Healthy(SoundResource {
        payload,
        format: stream.format(),
        len: stream.len(),
    }))
}

/// Read `length` payload bytes at the cursor and classify them.
///
/// Payloads below `options.min_payload_size` are rejected before any read.
pub fn validate_payload<R, D>(
    cursor: &mut ArchiveCursor<R>,
    length: u32,
    decoder: &D,
    options: &LoadOptions,
) -> Result<Validation, EntryError>
where
    R: Read + Seek,
    D: AudioDecoder + ?Sized,
{
    if length < options.min_payload_size {
        return Err(EntryError::PayloadTooSmall {
            size: length,
            min: options.min_payload_size,
        });
    }

    let data = cursor.read_bytes(u64::from(length))?;
    if data.len() < length as usize {
        return Err(EntryError::TruncatedPayload {
            expected: length,
            actual: data.len() as u32,
        });
    }

    Ok(classify(Bytes::from(data), decoder, options.block_frames)?)
}
