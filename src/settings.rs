//! Game settings and preferences
//!
//! Read once at startup from the JSON file named by `MEMORY_INVADERS_SETTINGS`.
//! Without that variable the defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "MEMORY_INVADERS_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Open an output device and play sound at all
    pub audio_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Session ===
    /// Fixed RNG seed; a fresh seed per session when unset
    pub seed: Option<u64>,
    /// Directory searched before the default asset locations
    pub assets_dir: Option<PathBuf>,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.3,
            seed: None,
            assets_dir: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from the file named by `MEMORY_INVADERS_SETTINGS`
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => {
                log::warn!("Invalid settings in {} - using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings JSON; volumes are clamped into range and tuning sanitized
    pub fn from_json(json: &str) -> Option<Self> {
        let mut settings: Settings = serde_json::from_str(json).ok()?;
        settings.tuning = settings.tuning.sanitized();
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        Some(settings)
    }

    /// Effective music volume
    pub fn effective_music_volume(&self) -> f32 {
        self.master_volume * self.music_volume
    }

    /// Effective sound effect volume
    pub fn effective_sfx_volume(&self) -> f32 {
        self.master_volume * self.sfx_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, GameState, TickInput, tick};

    #[test]
    fn test_defaults_match_classic_mix() {
        let settings = Settings::default();
        assert!(settings.audio_enabled);
        assert!((settings.effective_music_volume() - 0.3).abs() < 1e-6);
        assert!((settings.effective_sfx_volume() - 1.0).abs() < 1e-6);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "seed": 42, "tuning": { "win_score": 3 } }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tuning.win_score, 3);
        assert_eq!(settings.tuning.enemy_count, 20);
        assert!(settings.audio_enabled);
    }

    #[test]
    fn test_from_json_clamps_volume() {
        let settings = Settings::from_json(r#"{ "music_volume": 4.0, "sfx_volume": -1.0 }"#).unwrap();
        assert_eq!(settings.music_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_from_json_repairs_tuning() {
        let settings = Settings::from_json(
            r#"{ "seed": 7, "tuning": { "particle_speed": -3.0, "win_score": 0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.tuning.particle_speed, 3.0);
        assert_eq!(settings.tuning.win_score, 1);
    }

    #[test]
    fn test_negative_particle_speed_survives_a_hit() {
        let settings =
            Settings::from_json(r#"{ "tuning": { "particle_speed": -3.0 } }"#).unwrap();
        let mut state = GameState::with_tuning(7, settings.tuning);
        let target = state.enemies[0].pos;
        state.bullets.push(Bullet { pos: target });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.explosions.len(), 1);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(Settings::from_json("{ not json").is_none());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/definitely/not/here.json"));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tuning.enemy_count, 20);
    }
}
