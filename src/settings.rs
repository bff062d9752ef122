//! Game settings and preferences
//!
//! Stored as JSON. Missing keys fall back to the defaults in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Session ===
    pub starting_lives: u8,
    /// Delay between a non-fatal hit and the respawn (ms)
    pub respawn_delay_ms: f64,
    /// Fixed run seed; `None` lets the host pick one
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            starting_lives: STARTING_LIVES,
            respawn_delay_ms: RESPAWN_DELAY_MS,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values back to something playable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        // The spawn band needs room on both sides of the center
        let min_extent = 4.0 * SPAWN_EXCLUSION;
        if !(self.playfield_width >= min_extent) || !(self.playfield_height >= min_extent) {
            log::warn!(
                "Playfield {}x{} too small, using {}x{}",
                self.playfield_width,
                self.playfield_height,
                defaults.playfield_width,
                defaults.playfield_height
            );
            self.playfield_width = defaults.playfield_width;
            self.playfield_height = defaults.playfield_height;
        }
        if self.starting_lives == 0 {
            log::warn!("starting_lives must be at least 1");
            self.starting_lives = 1;
        }
        if !(self.respawn_delay_ms >= 0.0) {
            log::warn!("Negative respawn delay, using default");
            self.respawn_delay_ms = defaults.respawn_delay_ms;
        }
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "starting_lives": 5, "seed": 9 }"#).unwrap();
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(settings.respawn_delay_ms, RESPAWN_DELAY_MS);
    }

    #[test]
    fn test_sanitize_clamps() {
        let settings = Settings::from_json(
            r#"{ "playfield_width": 50, "starting_lives": 0, "master_volume": 3.5, "respawn_delay_ms": -1 }"#,
        )
        .unwrap();
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(settings.starting_lives, 1);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.respawn_delay_ms, RESPAWN_DELAY_MS);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/drift-storm/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            seed: Some(3),
            muted: true,
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
