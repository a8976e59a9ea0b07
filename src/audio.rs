//! Audio playback through rodio
//!
//! One looping music sink for the life of the process, plus detached
//! one-shot sinks for effects. Playback is fire-and-forget.

use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::assets::{Assets, SoundBytes};
use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Fire,
    /// Enemy struck
    Hit,
}

impl SoundEffect {
    /// Effect triggered by a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ShotFired => Some(SoundEffect::Fire),
            GameEvent::EnemyDestroyed { .. } => Some(SoundEffect::Hit),
            GameEvent::GameOver | GameEvent::Victory => None,
        }
    }
}

/// Open output device and the music sink playing on it
struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    _music: Sink,
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<Output>,
    fire: SoundBytes,
    hit: SoundBytes,
    sfx_volume: f32,
}

impl AudioManager {
    /// Open the default device and start the music loop.
    /// With audio disabled in settings no device is opened.
    pub fn new(assets: &Assets, settings: &Settings) -> Result<Self> {
        let output = if settings.audio_enabled {
            Some(Self::open(
                &assets.music_path,
                &assets.music,
                settings.effective_music_volume(),
            )?)
        } else {
            log::info!("Audio disabled by settings");
            None
        };
        Ok(Self {
            output,
            fire: assets.fire_sfx.clone(),
            hit: assets.hit_sfx.clone(),
            sfx_volume: settings.effective_sfx_volume(),
        })
    }

    fn open(path: &Path, music: &SoundBytes, volume: f32) -> Result<Output> {
        let source = looped_music(path, music)?;
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| GameError::AudioDevice(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| GameError::AudioDevice(e.to_string()))?;
        sink.set_volume(volume);
        sink.append(source);
        log::info!("Background music started (volume {:.2})", volume);
        Ok(Output {
            _stream: stream,
            handle,
            _music: sink,
        })
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let Some(output) = &self.output else { return };

        let bytes = match effect {
            SoundEffect::Fire => &self.fire,
            SoundEffect::Hit => &self.hit,
        };
        let Ok(sink) = Sink::try_new(&output.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) else {
            return;
        };
        sink.set_volume(self.sfx_volume);
        sink.append(source);
        sink.detach();
    }

    /// Play whatever effects a batch of simulation events calls for
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

/// Endless decoder over the music bytes
fn looped_music(
    path: &Path,
    music: &SoundBytes,
) -> Result<impl Source<Item = i16> + Send + 'static> {
    Decoder::new_looped(Cursor::new(music.clone())).map_err(|e| GameError::AudioDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_event_mapping() {
        assert_eq!(SoundEffect::for_event(&GameEvent::ShotFired), Some(SoundEffect::Fire));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::EnemyDestroyed { at: Vec2::ZERO }),
            Some(SoundEffect::Hit)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::GameOver), None);
        assert_eq!(SoundEffect::for_event(&GameEvent::Victory), None);
    }

    #[test]
    fn test_bad_music_is_a_decode_error() {
        let bytes: SoundBytes = b"definitely not an mp3".as_slice().into();
        let err = looped_music(Path::new("assets/MusicaFondo.mp3"), &bytes).err();
        match err {
            Some(GameError::AudioDecode { path, .. }) => {
                assert_eq!(path, Path::new("assets/MusicaFondo.mp3"));
            }
            other => panic!("expected AudioDecode, got {:?}", other.map(|e| e.to_string())),
        }
    }
}
