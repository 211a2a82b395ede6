//! Command-line front end for Elecbyte SND sound archives.
//!
//! The `elecsnd` binary is a thin wrapper around [`commands::run`]:
//!
//! ```text
//! elecsnd list common.snd
//! elecsnd load common.snd --group 5 --max 100
//! elecsnd extract common.snd --group 5 --index 0 --output hit.wav
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod config;

pub use config::{CliConfig, Command, KeyArgs};
