//! Command-line configuration.
//!
//! Every option can also be supplied through an `ELECSND_*` environment
//! variable.

use clap::{Args, Parser, Subcommand};
use elecsnd_formats::snd::{ExactKey, LoadOptions, ResourceKey};
use std::path::PathBuf;

/// Inspect and extract Elecbyte SND sound archives
#[derive(Debug, Clone, Parser)]
#[command(name = "elecsnd", about = "Inspect Elecbyte SND sound archives", version)]
pub struct CliConfig {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the sub-header chain without decoding payloads
    List {
        /// Archive to read
        file: PathBuf,
    },

    /// Load and validate sounds, printing one line per entry
    Load {
        /// Archive to read
        file: PathBuf,

        /// Restrict to one key
        #[command(flatten)]
        key: KeyArgs,

        /// Early-exit limit (0 = walk every entry)
        #[arg(long, env = "ELECSND_MAX", default_value_t = 0)]
        max: u32,

        /// Frames per replay block during validation
        #[arg(long, env = "ELECSND_BLOCK_FRAMES", default_value_t = elecsnd_formats::snd::REPLAY_BLOCK_FRAMES)]
        block_frames: usize,
    },

    /// Write the raw payload of one sound to a file
    Extract {
        /// Archive to read
        file: PathBuf,

        /// Key to extract
        #[command(flatten)]
        key: KeyArgs,

        /// Output path
        #[arg(short, long, env = "ELECSND_OUTPUT")]
        output: PathBuf,
    },
}

/// `--group` / `--index` selection
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct KeyArgs {
    /// Sound group number
    #[arg(long, allow_negative_numbers = true)]
    pub group: Option<i32>,

    /// Sound index within the group
    #[arg(long, allow_negative_numbers = true)]
    pub index: Option<i32>,
}

impl KeyArgs {
    /// Both halves, if both were given
    pub fn key(&self) -> Option<ResourceKey> {
        Some(ResourceKey::new(self.group?, self.index?))
    }

    /// Whether `key` matches the halves that were given.
    ///
    /// With neither half given, the default non-negative rule applies.
    pub fn accepts(&self, key: ResourceKey) -> bool {
        match (self.group, self.index) {
            (None, None) => key.is_non_negative(),
            (group, index) => {
                group.is_none_or(|g| g == key.group) && index.is_none_or(|i| i == key.index)
            }
        }
    }

    /// Filter for an exact key, if both halves were given
    pub fn exact(&self) -> Option<ExactKey> {
        self.key().map(ExactKey)
    }
}

impl CliConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Load options for the `load` command
    pub fn load_options(max: u32, block_frames: usize) -> LoadOptions {
        LoadOptions::default()
            .with_max(max)
            .with_block_frames(block_frames)
    }
}
