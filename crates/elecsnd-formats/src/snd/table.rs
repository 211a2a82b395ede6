//! Loaded sound table

use crate::audio::Playback;
use crate::snd::key::ResourceKey;
use crate::snd::validate::SoundResource;
use std::collections::HashMap;

/// A table slot: a playable sound or the marker for a corrupt one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundEntry {
    /// Validated sound
    Healthy(SoundResource),
    /// Present in the archive but not playable
    Corrupt,
}

impl SoundEntry {
    /// The sound, unless this is the corrupt marker
    pub fn sound(&self) -> Option<&SoundResource> {
        match self {
            Self::Healthy(sound) => Some(sound),
            Self::Corrupt => None,
        }
    }

    /// Whether this is the corrupt marker
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt)
    }
}

/// Sounds loaded from one archive, keyed by `(group, index)`.
///
/// Iteration follows chain order. A corrupt entry is distinct from an absent
/// one: [`SoundTable::get`] returns `Some(SoundEntry::Corrupt)` for a key the
/// archive holds but couldn't validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundTable {
    entries: Vec<(ResourceKey, SoundEntry)>,
    index: HashMap<ResourceKey, usize>,
    version1: u16,
    version2: u16,
}

impl SoundTable {
    /// Empty table carrying the archive's version fields
    pub fn new(version1: u16, version2: u16) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            version1,
            version2,
        }
    }

    /// Insert unless the key is already present; returns whether it was
    /// inserted
    pub(crate) fn insert_first(&mut self, key: ResourceKey, entry: SoundEntry) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push((key, entry));
        true
    }

    /// Entry for `key`
    pub fn get(&self, key: ResourceKey) -> Option<&SoundEntry> {
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    /// Playable sound for `key`; `None` when absent or corrupt
    pub fn sound(&self, key: ResourceKey) -> Option<&SoundResource> {
        self.get(key).and_then(SoundEntry::sound)
    }

    /// Whether `key` is present and marked corrupt
    pub fn is_corrupt(&self, key: ResourceKey) -> bool {
        self.get(key).is_some_and(SoundEntry::is_corrupt)
    }

    /// Whether `key` is present, healthy or not
    pub fn contains_key(&self, key: ResourceKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Number of entries, including corrupt ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKey, &SoundEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// Healthy sounds in load order
    pub fn healthy(&self) -> impl Iterator<Item = (ResourceKey, &SoundResource)> {
        self.iter()
            .filter_map(|(key, entry)| entry.sound().map(|sound| (key, sound)))
    }

    /// Keys marked corrupt, in load order
    pub fn corrupt_keys(&self) -> impl Iterator<Item = ResourceKey> + '_ {
        self.iter()
            .filter(|(_, entry)| entry.is_corrupt())
            .map(|(key, _)| key)
    }

    /// First format version field from the archive header
    pub fn version1(&self) -> u16 {
        self.version1
    }

    /// Second format version field from the archive header
    pub fn version2(&self) -> u16 {
        self.version2
    }

    /// Both version fields as `(version1, version2)`
    pub fn version(&self) -> (u16, u16) {
        (self.version1, self.version2)
    }

    /// Hand every healthy sound to `player` in load order.
    ///
    /// Corrupt entries are skipped. Stops at the first playback error.
    /// Returns the number of sounds handed over.
    pub fn play_all<P: Playback>(&self, player: &mut P, loops: i32) -> Result<usize, P::Error> {
        let mut played = 0;
        for (key, sound) in self.healthy() {
            player.play(key, sound, loops)?;
            played += 1;
        }
        Ok(played)
    }
}

impl<'a> IntoIterator for &'a SoundTable {
    type Item = (ResourceKey, &'a SoundEntry);
    type IntoIter = Box<dyn Iterator<Item = (ResourceKey, &'a SoundEntry)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
