//! Reader and builder for Elecbyte SND sound archives
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Intentional for binary operations
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::cast_precision_loss)] // Sample normalization
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
#![allow(clippy::doc_markdown)] // Format names don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::return_self_not_must_use)] // Builder patterns
#![allow(clippy::len_without_is_empty)] // Stream traits
//! SND archives bundle the short WAV sounds used by 2D fighting game engines
//! into one file. This crate walks the archive's sub-header chain, validates
//! every selected payload by decoding and replaying it once, and returns a
//! [`snd::SoundTable`] in which unplayable payloads are kept as explicit
//! corrupt markers instead of failing the load.
//!
//! # Modules
//!
//! - **snd**: archive header, chain walker, key filters, validator, loader,
//!   sound table and builder
//! - **audio**: decode and playback seams, with a `hound`-based WAV decoder
//!
//! # Design Principles
//!
//! - **Bounded traversal**: the declared resource count, never the chain's
//!   own pointers, decides when the walk ends
//! - **Per-entry recovery**: one bad payload never aborts an unbounded load
//! - **Symmetric Operations**: archives can be built as well as read

#![warn(missing_docs)]

/// Audio decode and playback collaborators
pub mod audio;
pub mod snd;

// Test utilities module
#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;

pub use snd::{
    LoadOptions, ResourceKey, SndError, SndResult, SoundEntry, SoundTable, load, load_filtered,
};
