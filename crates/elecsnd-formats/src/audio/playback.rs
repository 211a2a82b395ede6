//! Playback collaborator

use crate::snd::{ResourceKey, SoundResource};

/// Accepts validated sounds for playback.
///
/// Implemented by whatever owns the audio device or mixer; the archive
/// reader only hands sounds over.
pub trait Playback {
    /// Error reported by the backend
    type Error;

    /// Start playing `sound`; `loops` follows the backend's convention
    /// (commonly `0` = once, `-1` = forever)
    fn play(&mut self, key: ResourceKey, sound: &SoundResource, loops: i32)
    -> Result<(), Self::Error>;
}

impl<P: Playback + ?Sized> Playback for &mut P {
    type Error = P::Error;

    fn play(
        &mut self,
        key: ResourceKey,
        sound: &SoundResource,
        loops: i32,
    ) -> Result<(), Self::Error> {
        (**self).play(key, sound, loops)
    }
}
