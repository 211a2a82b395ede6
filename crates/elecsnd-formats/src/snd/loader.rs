//! Archive loading
//!
//! Ties the header reader, chain walker, key filter and payload validator
//! together into a [`SoundTable`].

use crate::audio::{AudioDecoder, WavDecoder};
use crate::snd::chain::ChainCursor;
use crate::snd::config::LoadOptions;
use crate::snd::cursor::ArchiveCursor;
use crate::snd::error::SndResult;
use crate::snd::filter::{KeyFilter, NonNegativeKeys};
use crate::snd::header::SndHeader;
use crate::snd::table::{SoundEntry, SoundTable};
use crate::snd::validate::{Validation, validate_payload};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load every sound with a non-negative key from the archive at `path`
pub fn load<P: AsRef<Path>>(path: P) -> SndResult<SoundTable> {
    SndLoader::new().load_path(path, &NonNegativeKeys)
}

/// Load the sounds accepted by `filter`.
///
/// `max == 0` walks every declared entry; `max > 0` walks at most `max`
/// entries and returns as soon as one accepted entry has been classified.
pub fn load_filtered<P, F>(path: P, filter: &F, max: u32) -> SndResult<SoundTable>
where
    P: AsRef<Path>,
    F: KeyFilter + ?Sized,
{
    SndLoader::new()
        .with_options(LoadOptions::bounded(max))
        .load_path(path, filter)
}

/// Counters collected during one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Resource count declared in the header
    pub declared: u32,
    /// Sub-headers read
    pub steps: u32,
    /// Entries accepted by the filter
    pub accepted: u32,
    /// Entries stored as healthy sounds
    pub healthy: u32,
    /// Entries stored as corrupt markers
    pub corrupt: u32,
    /// Accepted entries skipped because their key was already loaded
    pub duplicates: u32,
}

/// Configurable archive loader
#[derive(Debug, Clone, Default)]
pub struct SndLoader<D = WavDecoder> {
    decoder: D,
    options: LoadOptions,
}

impl SndLoader<WavDecoder> {
    /// Loader with WAV decoding and default options
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: AudioDecoder> SndLoader<D> {
    /// Replace the options
    #[must_use]
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the decoder
    pub fn with_decoder<E: AudioDecoder>(self, decoder: E) -> SndLoader<E> {
        SndLoader {
            decoder,
            options: self.options,
        }
    }

    /// Current options
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load from a file. The file is closed before this returns.
    pub fn load_path<P, F>(&self, path: P, filter: &F) -> SndResult<SoundTable>
    where
        P: AsRef<Path>,
        F: KeyFilter + ?Sized,
    {
        self.load_path_with_report(path, filter).map(|(table, _)| table)
    }

    /// Load from a file, also returning the walk counters
    pub fn load_path_with_report<P, F>(
        &self,
        path: P,
        filter: &F,
    ) -> SndResult<(SoundTable, LoadReport)>
    where
        P: AsRef<Path>,
        F: KeyFilter + ?Sized,
    {
        let path = path.as_ref();
        let mut cursor = ArchiveCursor::open(path)?;
        self.load_cursor(&mut cursor, filter, &path.display().to_string())
    }

    /// Load from any seekable reader positioned at the archive start
    pub fn load_reader<R, F>(&self, reader: R, filter: &F) -> SndResult<SoundTable>
    where
        R: Read + Seek,
        F: KeyFilter + ?Sized,
    {
        self.load_reader_with_report(reader, filter)
            .map(|(table, _)| table)
    }

    /// Load from a reader, also returning the walk counters
    pub fn load_reader_with_report<R, F>(
        &self,
        reader: R,
        filter: &F,
    ) -> SndResult<(SoundTable, LoadReport)>
    where
        R: Read + Seek,
        F: KeyFilter + ?Sized,
    {
        let mut cursor = ArchiveCursor::new(reader);
        self.load_cursor(&mut cursor, filter, "<reader>")
    }

    fn load_cursor<R, F>(
        &self,
        cursor: &mut ArchiveCursor<R>,
        filter: &F,
        source: &str,
    ) -> SndResult<(SoundTable, LoadReport)>
    where
        R: Read + Seek,
        F: KeyFilter + ?Sized,
    {
        let header = SndHeader::read_from(cursor)?;
        info!(
            "{} numberOfSounds={} version={}.{}",
            source, header.resource_count, header.version1, header.version2
        );

        let bounded = self.options.is_bounded();
        let mut table = SoundTable::new(header.version1, header.version2);
        let mut report = LoadReport {
            declared: header.resource_count,
            ..LoadReport::default()
        };
        let mut chain = ChainCursor::new(&header, self.options.max);

        while let Some(entry) = chain.advance(cursor)? {
            report.steps = chain.steps();
            let key = entry.key;

            if !filter.accept(key) {
                continue;
            }
            report.accepted += 1;
            if table.contains_key(key) {
                debug!("{} sound {} already loaded, skipping duplicate", source, key);
                report.duplicates += 1;
                continue;
            }

            let slot = match validate_payload(
                cursor,
                entry.payload_length,
                &self.decoder,
                &self.options,
            ) {
                Ok(Validation::Healthy(sound)) => {
                    report.healthy += 1;
                    SoundEntry::Healthy(sound)
                }
                Ok(Validation::Corrupt { played, total }) => {
                    warn!(
                        "{} sound {} is corrupted and can't be played ({}/{} frames), so it was disabled",
                        source, key, played, total
                    );
                    report.corrupt += 1;
                    SoundEntry::Corrupt
                }
                Err(e) => {
                    warn!("{} sound {} can't be read: {}", source, key, e);
                    if bounded {
                        return Err(e.with_key(key));
                    }
                    report.corrupt += 1;
                    SoundEntry::Corrupt
                }
            };

            table.insert_first(key, slot);
            if bounded {
                break;
            }
        }

        info!(
            "{} loaded {} sounds ({} corrupt) in {} of {} chain steps",
            source,
            table.len(),
            report.corrupt,
            report.steps,
            report.declared
        );
        Ok((table, report))
    }
}
