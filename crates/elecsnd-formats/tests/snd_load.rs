#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for loading SND archives from disk
//!
//! Archives are assembled with `SndBuilder` from WAV payloads synthesized by
//! `hound`, written to a temporary directory and loaded by path.

use elecsnd_formats::audio::{Playback, WavDecoder};
use elecsnd_formats::snd::{
    EntryError, ExactKey, LoadOptions, NonNegativeKeys, ResourceKey, SndArchive, SndBuilder,
    SndError, SndLoader, SoundEntry, SoundResource, Validation, classify,
};
use elecsnd_formats::{load, load_filtered};
use hound::{SampleFormat, WavSpec, WavWriter};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn wav(frames: u32) -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 11025,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..frames {
            writer.write_sample((i % 256) as i16 * 64).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

fn write_archive(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

fn archive(entries: &[((i32, i32), Vec<u8>)]) -> Vec<u8> {
    let mut builder = SndBuilder::new();
    for (key, payload) in entries {
        builder.add_sound(ResourceKey::from(*key), payload.clone());
    }
    builder.build_to_vec().unwrap()
}

// --- Scenarios ---

#[test]
fn two_valid_sounds_load_healthy() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        "two.snd",
        &archive(&[((0, 0), wav(400)), ((1, 0), wav(250))]),
    );

    let table = load(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.sound(ResourceKey::new(0, 0)).unwrap().len(), 400);
    assert_eq!(table.sound(ResourceKey::new(1, 0)).unwrap().len(), 250);
    assert_eq!(table.corrupt_keys().count(), 0);
}

#[test]
fn small_payload_marked_corrupt() {
    let dir = TempDir::new().unwrap();
    let mut short = wav(400);
    short.truncate(64);
    let path = write_archive(
        &dir,
        "short.snd",
        &archive(&[((0, 0), wav(400)), ((1, 0), short)]),
    );

    let table = load(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.sound(ResourceKey::new(0, 0)).is_some());
    assert_eq!(table.get(ResourceKey::new(1, 0)), Some(&SoundEntry::Corrupt));
}

#[test]
fn foreign_magic_rejected() {
    let dir = TempDir::new().unwrap();
    let mut data = archive(&[((0, 0), wav(200))]);
    data[0..12].copy_from_slice(b"NotElecbyte\0");
    let path = write_archive(&dir, "foreign.snd", &data);

    match load(&path) {
        Err(SndError::InvalidFormat { found }) => assert_eq!(found, b"NotElecbyte\0".to_vec()),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("absent.snd")).unwrap_err();
    match err {
        SndError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other}"),
    }
}

// --- Filtering and early exit ---

#[test]
fn bounded_exact_match_walks_minimal_chain() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        "many.snd",
        &archive(&[
            ((0, 0), wav(150)),
            ((0, 1), wav(160)),
            ((7, 3), wav(170)),
            ((9, 9), wav(180)),
        ]),
    );

    let table = load_filtered(&path, &ExactKey(ResourceKey::new(7, 3)), 1).unwrap();
    // One step only: the first entry doesn't match and the budget is spent
    assert!(table.is_empty());

    let (table, report) = SndLoader::new()
        .with_options(LoadOptions::bounded(4))
        .load_path_with_report(&path, &ExactKey(ResourceKey::new(7, 3)))
        .unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.sound(ResourceKey::new(7, 3)).unwrap().len(), 170);
    assert_eq!(report.steps, 3);
}

#[test]
fn max_one_single_matching_key() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(&dir, "one.snd", &archive(&[((2, 5), wav(300)), ((-1, 0), wav(300))]));

    let table = load_filtered(&path, &|k: ResourceKey| k == ResourceKey::new(2, 5), 1).unwrap();
    let keys: Vec<_> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![ResourceKey::new(2, 5)]);
}

#[test]
fn default_filter_drops_negative_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        "neg.snd",
        &archive(&[((-1, 0), wav(200)), ((0, -1), wav(200)), ((3, 3), wav(200))]),
    );

    let table = load(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.contains_key(ResourceKey::new(3, 3)));
}

// --- Corruption handling ---

#[test]
fn truncated_archive_tail() {
    let dir = TempDir::new().unwrap();
    let mut data = archive(&[((0, 0), wav(200)), ((0, 1), wav(200))]);
    data.truncate(data.len() - 50);
    let path = write_archive(&dir, "tail.snd", &data);

    // Unbounded: last payload is short, recorded as corrupt
    let table = load(&path).unwrap();
    assert!(table.sound(ResourceKey::new(0, 0)).is_some());
    assert!(table.is_corrupt(ResourceKey::new(0, 1)));

    // Bounded: asking for that entry surfaces the error
    let err = load_filtered(&path, &ExactKey(ResourceKey::new(0, 1)), 2).unwrap_err();
    assert!(matches!(
        err,
        SndError::Entry {
            source: EntryError::TruncatedPayload { .. },
            ..
        }
    ));
}

#[test]
fn short_data_chunk_marked_corrupt() {
    // Payload claims 500 frames but its data chunk was cut; the declared
    // payload length matches the bytes present
    let mut cut = wav(500);
    cut.truncate(cut.len() - 300);
    let dir = TempDir::new().unwrap();
    let path = write_archive(&dir, "cut.snd", &archive(&[((1, 1), cut)]));

    let table = load(&path).unwrap();
    assert!(table.is_corrupt(ResourceKey::new(1, 1)));
}

#[test]
fn broken_sub_header_is_fatal() {
    let mut data = archive(&[((0, 0), wav(200))]);
    // Declare three sounds and point the first sub-header past the end of
    // the file
    data[16..20].copy_from_slice(&3u32.to_le_bytes());
    let first_next = 24;
    data[first_next..first_next + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    let dir = TempDir::new().unwrap();
    let path = write_archive(&dir, "broken.snd", &data);

    let err = load(&path).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, SndError::UnexpectedEndOfData { .. }));
}

// --- Replay and playback ---

#[test]
fn healthy_payload_redecodes_to_same_length() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(&dir, "replay.snd", &archive(&[((4, 4), wav(1234))]));
    let table = load(&path).unwrap();
    let sound = table.sound(ResourceKey::new(4, 4)).unwrap();

    let stream = sound.open_stream(&WavDecoder).unwrap();
    assert_eq!(stream.len(), sound.len());
    match classify(sound.payload().clone(), &WavDecoder, 512).unwrap() {
        Validation::Healthy(again) => assert_eq!(&again, sound),
        Validation::Corrupt { .. } => panic!("replayed payload became corrupt"),
    }
}

#[derive(Default)]
struct Collect(Vec<(ResourceKey, i32)>);

impl Playback for Collect {
    type Error = std::convert::Infallible;

    fn play(
        &mut self,
        key: ResourceKey,
        _sound: &SoundResource,
        loops: i32,
    ) -> Result<(), Self::Error> {
        self.0.push((key, loops));
        Ok(())
    }
}

#[test]
fn play_all_hands_over_healthy_sounds() {
    let mut short = wav(10);
    short.truncate(40);
    let data = archive(&[((0, 0), wav(200)), ((0, 1), short), ((0, 2), wav(200))]);
    let table = SndLoader::new()
        .load_reader(Cursor::new(data), &NonNegativeKeys)
        .unwrap();

    let mut player = Collect::default();
    let played = table.play_all(&mut player, 0).unwrap();
    assert_eq!(played, 2);
    assert_eq!(
        player.0,
        vec![(ResourceKey::new(0, 0), 0), (ResourceKey::new(0, 2), 0)]
    );
}

#[test]
fn raw_listing_matches_loaded_keys() {
    let data = archive(&[((0, 0), wav(200)), ((5, 1), wav(210))]);
    let mut raw = SndArchive::from_reader(Cursor::new(data.clone())).unwrap();
    let listed: Vec<_> = raw.entries().unwrap().iter().map(|e| e.key).collect();

    let table = SndLoader::new()
        .load_reader(Cursor::new(data), &NonNegativeKeys)
        .unwrap();
    let loaded: Vec<_> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(listed, loaded);
}
