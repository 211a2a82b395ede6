//! Command implementations.
//!
//! Each command writes its report to the given writer so that tests can
//! capture it.

use crate::config::{CliConfig, Command, KeyArgs};
use anyhow::{Context, Result, bail};
use elecsnd_formats::snd::{LoadOptions, LoadReport, ResourceKey, SndArchive, SndLoader, SoundEntry};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run the parsed command, reporting to stdout
pub fn run(config: CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::List { file } => list(&file, &mut out),
        Command::Load {
            file,
            key,
            max,
            block_frames,
        } => load(&file, key, CliConfig::load_options(max, block_frames), &mut out).map(|_| ()),
        Command::Extract { file, key, output } => {
            let written = extract(&file, key, &output)?;
            writeln!(out, "wrote {} bytes to {}", written, output.display())?;
            Ok(())
        }
    }
}

/// Print the header and every chain entry
pub fn list<W: Write>(file: &Path, out: &mut W) -> Result<()> {
    let mut archive = SndArchive::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let header = archive.header().clone();
    writeln!(
        out,
        "{}: version {}.{}, {} sounds",
        file.display(),
        header.version1,
        header.version2,
        header.resource_count
    )?;

    let entries = archive
        .entries()
        .with_context(|| format!("Failed to walk sub-header chain of {}", file.display()))?;
    for entry in &entries {
        writeln!(
            out,
            "{:>6} {:>6} {:>10} bytes at {}",
            entry.key.group, entry.key.index, entry.payload_length, entry.payload_offset
        )?;
    }
    Ok(())
}

/// Load the archive and print one line per table entry
pub fn load<W: Write>(
    file: &Path,
    key: KeyArgs,
    options: LoadOptions,
    out: &mut W,
) -> Result<LoadReport> {
    let loader = SndLoader::new().with_options(options);
    let (table, report) = loader
        .load_path_with_report(file, &|k: ResourceKey| key.accepts(k))
        .with_context(|| format!("Failed to load {}", file.display()))?;

    for (key, entry) in &table {
        match entry {
            SoundEntry::Healthy(sound) => {
                let format = sound.format();
                writeln!(
                    out,
                    "{:>6} {:>6}  {} Hz {} ch {} bit, {} frames ({:.3}s)",
                    key.group,
                    key.index,
                    format.sample_rate,
                    format.channels,
                    format.bits_per_sample,
                    sound.len(),
                    sound.duration().as_secs_f64()
                )?;
            }
            SoundEntry::Corrupt => writeln!(out, "{:>6} {:>6}  CORRUPT", key.group, key.index)?,
        }
    }
    writeln!(
        out,
        "{} healthy, {} corrupt, {} duplicates skipped, {} of {} entries visited",
        report.healthy, report.corrupt, report.duplicates, report.steps, report.declared
    )?;
    Ok(report)
}

/// Write the raw payload of one key; returns the number of bytes written
pub fn extract(file: &Path, key: KeyArgs, output: &Path) -> Result<usize> {
    let Some(filter) = key.exact() else {
        bail!("extract needs both --group and --index");
    };

    let mut archive = SndArchive::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let entries = archive.entries()?;
    let Some(entry) = entries.iter().find(|e| e.key == filter.0) else {
        bail!("sound {} not found in {}", filter.0, file.display());
    };

    let payload = archive.read_payload(entry)?;
    std::fs::write(output, &payload)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Extracted sound {} ({} bytes)", entry.key, payload.len());
    Ok(payload.len())
}
