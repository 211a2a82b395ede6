//! RIFF/WAVE decoding backed by `hound`

use crate::audio::{AudioDecoder, DecodeError, DecodeResult, SampleStream, SoundFormat};
use bytes::Bytes;
use hound::{SampleFormat, WavReader};
use std::io::Cursor;

/// Decoder for WAV payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

impl AudioDecoder for WavDecoder {
    fn decode(&self, payload: Bytes) -> DecodeResult<Box<dyn SampleStream>> {
        Ok(Box::new(WavStream::new(payload)?))
    }
}

/// Stereo frame stream over an in-memory WAV payload.
///
/// Mono sources are duplicated to both channels; channels beyond the second
/// are read and dropped. A failed sample read (usually a data chunk that
/// claims more bytes than the payload holds) ends the stream early, leaving
/// [`SampleStream::position`] short of [`SampleStream::len`].
pub struct WavStream {
    reader: WavReader<Cursor<Bytes>>,
    format: SoundFormat,
    scale: f32,
    position: usize,
    len: usize,
    exhausted: bool,
}

impl WavStream {
    /// Parse the WAV header of `payload`
    pub fn new(payload: Bytes) -> DecodeResult<Self> {
        let reader = WavReader::new(Cursor::new(payload))?;
        let spec = reader.spec();

        if spec.channels == 0 {
            return Err(DecodeError::Unsupported("zero channels".to_string()));
        }
        let float = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Float, 32) => true,
            (SampleFormat::Int, 8 | 16 | 24 | 32) => false,
            (format, bits) => {
                return Err(DecodeError::Unsupported(format!(
                    "{format:?} samples with {bits} bits"
                )));
            }
        };

        let scale = if float {
            1.0
        } else {
            (1u64 << (spec.bits_per_sample - 1)) as f32
        };

        Ok(Self {
            len: reader.duration() as usize,
            reader,
            format: SoundFormat {
                sample_rate: spec.sample_rate,
                channels: spec.channels,
                bits_per_sample: spec.bits_per_sample,
                float,
            },
            scale,
            position: 0,
            exhausted: false,
        })
    }

    fn next_sample(&mut self) -> Option<f32> {
        if self.format.float {
            self.reader.samples::<f32>().next()?.ok()
        } else {
            let sample = self.reader.samples::<i32>().next()?.ok()?;
            Some(sample as f32 / self.scale)
        }
    }

    fn next_frame(&mut self) -> Option<[f32; 2]> {
        let left = self.next_sample()?;
        let mut right = left;
        for channel in 1..self.format.channels {
            let sample = self.next_sample()?;
            if channel == 1 {
                right = sample;
            }
        }
        Some([left, right])
    }
}

impl SampleStream for WavStream {
    fn stream(&mut self, frames: &mut [[f32; 2]]) -> usize {
        if self.exhausted {
            return 0;
        }

        let mut produced = 0;
        for slot in frames.iter_mut() {
            if self.position >= self.len {
                break;
            }
            match self.next_frame() {
                Some(frame) => {
                    *slot = frame;
                    produced += 1;
                    self.position += 1;
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        produced
    }

    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.len
    }

    fn seek(&mut self, frame: usize) -> DecodeResult<()> {
        if frame > self.len {
            return Err(DecodeError::Seek {
                frame,
                len: self.len,
            });
        }
        self.reader
            .seek(frame as u32)
            .map_err(|e| DecodeError::Wav(hound::Error::IoError(e)))?;
        self.position = frame;
        self.exhausted = false;
        Ok(())
    }

    fn format(&self) -> SoundFormat {
        self.format
    }
}
