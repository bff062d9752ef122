//! Audio routing
//!
//! The simulation only emits [`GameEvent`]s. This module turns them into
//! fire-and-forget sound triggers for whatever backend the host plugs in.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shot,
    /// Projectile destroyed a body
    Explosion,
    /// Player struck, lives remain
    Collision,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    /// The sound an event should trigger, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ShotFired => Some(SoundEffect::Shot),
            GameEvent::BodyDestroyed { .. } => Some(SoundEffect::Explosion),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::Collision),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::PlayerRespawned
            | GameEvent::WaveSpawned { .. }
            | GameEvent::WaveCleared { .. } => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Shot => "shot",
            SoundEffect::Explosion => "explosion",
            SoundEffect::Collision => "collision",
            SoundEffect::GameOver => "game_over",
        }
    }
}

/// Something that can actually make noise
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0). Must not block.
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {} (vol {:.2})", effect.as_str(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes taken from settings
    pub fn with_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Trigger sounds for a batch of events, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_dispatch_maps_events_in_order() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(1.0);
        audio.dispatch(&[
            GameEvent::ShotFired,
            GameEvent::WaveSpawned { level: 1, count: 5 },
            GameEvent::BodyDestroyed { id: 3, fragments: 2 },
            GameEvent::PlayerHit { lives: 2 },
            GameEvent::PlayerRespawned,
            GameEvent::GameOver { score: 10 },
        ]);
        let played: Vec<SoundEffect> = audio.sink().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![
                SoundEffect::Shot,
                SoundEffect::Explosion,
                SoundEffect::Collision,
                SoundEffect::GameOver
            ]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_muted(true);
        audio.play(SoundEffect::Shot);
        assert!(audio.sink().0.is_empty());
    }

    #[test]
    fn test_volume_from_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        };
        let mut audio = AudioManager::with_settings(Recorder::default(), &settings);
        audio.play(SoundEffect::Explosion);
        assert_eq!(audio.sink().0, vec![(SoundEffect::Explosion, 0.25)]);
    }
}
