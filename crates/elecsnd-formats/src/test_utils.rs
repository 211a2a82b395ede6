//! Test utilities for payload synthesis
//!
//! WAV payloads come from `hound`; the scripted decoder lets loader tests
//! pick an outcome per payload without building real audio.

use crate::audio::{
    AudioDecoder, DecodeError, DecodeResult, Playback, SampleStream, SoundFormat,
};
use crate::snd::{MIN_PAYLOAD_SIZE, ResourceKey, SoundResource};
use bytes::Bytes;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;

/// Encode `frames` frames of 16-bit PCM at 22050 Hz
pub fn wav_payload(frames: u32, channels: u16) -> Vec<u8> {
    wav_payload_with_spec(
        frames,
        WavSpec {
            channels,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        },
    )
}

/// Encode `frames` frames of a sawtooth with the given spec
pub fn wav_payload_with_spec(frames: u32, spec: WavSpec) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).expect("WAV header should write");
        for frame in 0..frames {
            for channel in 0..u32::from(spec.channels) {
                let step = ((frame * 37 + channel * 11) % 2000) as i32 - 1000;
                match spec.sample_format {
                    SampleFormat::Float => writer.write_sample(step as f32 / 1000.0),
                    SampleFormat::Int => writer.write_sample(step as i16),
                }
                .expect("sample should write");
            }
        }
        writer.finalize().expect("WAV should finalize");
    }
    cursor.into_inner()
}

/// Payload understood by [`ScriptedDecoder`].
///
/// Mode `0` plays all `frames`, mode `1` stops halfway, any other mode is
/// rejected as malformed. Padded to the minimum payload size.
pub fn scripted_payload(mode: u8, frames: u32) -> Vec<u8> {
    let mut data = vec![0u8; MIN_PAYLOAD_SIZE as usize];
    data[0] = mode;
    data[1..5].copy_from_slice(&frames.to_le_bytes());
    data
}

/// Decoder driven by the first bytes of the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedDecoder;

impl AudioDecoder for ScriptedDecoder {
    fn decode(&self, payload: Bytes) -> DecodeResult<Box<dyn SampleStream>> {
        if payload.len() < 5 {
            return Err(DecodeError::Unsupported("scripted payload too short".to_string()));
        }
        let len = u32::from_le_bytes([payload[1], payload[2], payload[3], payload[4]]) as usize;
        let stop_at = match payload[0] {
            0 => len,
            1 => len / 2,
            mode => return Err(DecodeError::Unsupported(format!("scripted mode {mode}"))),
        };
        Ok(Box::new(ScriptedStream {
            position: 0,
            len,
            stop_at,
        }))
    }
}

struct ScriptedStream {
    position: usize,
    len: usize,
    stop_at: usize,
}

impl SampleStream for ScriptedStream {
    fn stream(&mut self, frames: &mut [[f32; 2]]) -> usize {
        let n = frames.len().min(self.stop_at - self.position);
        self.position += n;
        n
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
        self.position = frame.min(self.stop_at);
        Ok(())
    }

    fn format(&self) -> SoundFormat {
        SoundFormat {
            sample_rate: 1000,
            channels: 1,
            bits_per_sample: 16,
            float: false,
        }
    }
}

/// Playback backend that records what it was given
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    /// `(key, frames, loops)` per call
    pub played: Vec<(ResourceKey, usize, i32)>,
    /// Fail once this many sounds have been played
    pub fail_after: Option<usize>,
}

impl Playback for RecordingPlayer {
    type Error = String;

    fn play(&mut self, key: ResourceKey, sound: &SoundResource, loops: i32) -> Result<(), String> {
        if self.fail_after == Some(self.played.len()) {
            return Err(format!("device refused {key}"));
        }
        self.played.push((key, sound.len(), loops));
        Ok(())
    }
}
