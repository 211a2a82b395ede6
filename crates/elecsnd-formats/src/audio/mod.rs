//! Audio decode and playback seams
//!
//! The archive reader needs only two things from an audio backend: turn
//! payload bytes into a seekable sample stream, and report how far that
//! stream has played. [`AudioDecoder`] and [`SampleStream`] capture exactly
//! that; [`WavDecoder`] is the stock implementation for RIFF/WAVE payloads.
//!
//! [`Playback`] is the other direction: something that accepts a validated
//! sound and a loop count.

mod playback;
mod wav;

pub use playback::Playback;
pub use wav::{WavDecoder, WavStream};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decoder result type
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised by an audio decoder
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed or unreadable WAV container
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Well-formed container using an encoding the decoder can't stream
    #[error("Unsupported audio encoding: {0}")]
    Unsupported(String),

    /// Seek target outside the stream
    #[error("Seek to frame {frame} beyond stream length {len}")]
    Seek {
        /// Requested frame
        frame: usize,
        /// Stream length in frames
        len: usize,
    },
}

/// Sample format of a decoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundFormat {
    /// Samples per second, per channel
    pub sample_rate: u32,
    /// Channel count in the source
    pub channels: u16,
    /// Bits per source sample
    pub bits_per_sample: u16,
    /// Whether samples are IEEE floats rather than integers
    pub float: bool,
}

/// Decoded, seekable stream of stereo frames
pub trait SampleStream {
    /// Fill `frames` from the current position.
    ///
    /// Returns the number of frames produced; `0` means the stream can't
    /// produce more, either because it finished or because the data ran out.
    fn stream(&mut self, frames: &mut [[f32; 2]]) -> usize;

    /// Current position in frames
    fn position(&self) -> usize;

    /// Total declared length in frames
    fn len(&self) -> usize;

    /// Whether the stream declares no frames at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move to an absolute frame position
    fn seek(&mut self, frame: usize) -> DecodeResult<()>;

    /// Source sample format
    fn format(&self) -> SoundFormat;
}

/// Turns raw payload bytes into a [`SampleStream`]
pub trait AudioDecoder {
    /// Decode `payload`, failing only when the container itself is malformed
    fn decode(&self, payload: Bytes) -> DecodeResult<Box<dyn SampleStream>>;
}

impl<D: AudioDecoder + ?Sized> AudioDecoder for &D {
    fn decode(&self, payload: Bytes) -> DecodeResult<Box<dyn SampleStream>> {
        (**self).decode(payload)
    }
}
