//! Load options

use serde::{Deserialize, Serialize};

/// Payloads shorter than this can't hold a usable WAV file
pub const MIN_PAYLOAD_SIZE: u32 = 128;

/// Frames per block when replaying a payload during validation
pub const REPLAY_BLOCK_FRAMES: usize = 512;

/// Options controlling a single archive load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Early-exit limit.
    ///
    /// `0` walks every declared entry. Any other value caps the walk at
    /// `min(max, resource_count)` steps and stops at the first accepted
    /// entry that gets classified; entry errors are then returned instead
    /// of being recorded.
    pub max: u32,

    /// Smallest payload accepted for decoding
    pub min_payload_size: u32,

    /// Frames requested per replay block during validation
    pub block_frames: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max: 0,
            min_payload_size: MIN_PAYLOAD_SIZE,
            block_frames: REPLAY_BLOCK_FRAMES,
        }
    }
}

impl LoadOptions {
    /// Options with an early-exit limit
    pub fn bounded(max: u32) -> Self {
        Self {
            max,
            ..Default::default()
        }
    }

    /// Set the early-exit limit (`0` = unbounded)
    #[must_use]
    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Set the minimum payload size
    #[must_use]
    pub const fn with_min_payload_size(mut self, size: u32) -> Self {
        self.min_payload_size = size;
        self
    }

    /// Set the replay block size; values below 1 are treated as 1
    #[must_use]
    pub const fn with_block_frames(mut self, frames: usize) -> Self {
        self.block_frames = frames;
        self
    }

    /// Whether an early-exit limit is set
    pub const fn is_bounded(&self) -> bool {
        self.max > 0
    }
}
