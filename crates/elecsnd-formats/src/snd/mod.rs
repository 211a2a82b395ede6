//! Elecbyte SND sound archives
//!
//! An SND file stores many short WAV payloads, each identified by a
//! `(group, index)` key. Payloads are reached through a chain of sub-headers
//! linked by absolute offsets.
//!
//! # Format Structure
//!
//! ```text
//! SND File (little-endian):
//! ├── Header (24 bytes)
//! │   ├── Magic: "ElecbyteSnd\0" (12 bytes)
//! │   ├── Version 1 (u16)
//! │   ├── Version 2 (u16)
//! │   ├── Resource Count (u32)
//! │   └── First Sub-Header Offset (u32)
//! └── Sub-header chain (Resource Count entries)
//!     └── Per entry:
//!         ├── Next Sub-Header Offset (u32)
//!         ├── Payload Length (u32)
//!         ├── Group (i32)
//!         ├── Index (i32)
//!         └── Payload (Payload Length bytes, WAV)
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use elecsnd_formats::snd::{self, ResourceKey};
//!
//! let table = snd::load("common.snd")?;
//! for (key, sound) in table.healthy() {
//!     println!("{key}: {} frames", sound.len());
//! }
//!
//! // Stop at the first match, looking at no more than 100 entries
//! let _one = snd::load_filtered("common.snd", &|k: ResourceKey| k.group == 5, 100)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Corrupt payloads never fail an unbounded load; they show up as
//! [`SoundEntry::Corrupt`] and are reported through `tracing` at warn level.

mod archive;
mod builder;
mod chain;
mod config;
mod cursor;
mod error;
mod filter;
mod header;
mod key;
mod loader;
mod table;
mod validate;

pub use archive::SndArchive;
pub use builder::SndBuilder;
pub use chain::{ChainCursor, ChainEntry, SUB_HEADER_SIZE, SubHeader, step_budget};
pub use config::{LoadOptions, MIN_PAYLOAD_SIZE, REPLAY_BLOCK_FRAMES};
pub use cursor::ArchiveCursor;
pub use error::{EntryError, SndError, SndResult};
pub use filter::{ExactKey, KeyFilter, NonNegativeKeys};
pub use header::{HEADER_SIZE, SND_MAGIC, SndHeader};
pub use key::ResourceKey;
pub use loader::{LoadReport, SndLoader, load, load_filtered};
pub use table::{SoundEntry, SoundTable};
pub use validate::{SoundResource, Validation, classify, validate_payload};
