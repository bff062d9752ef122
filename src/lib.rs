//! Drift Storm - An asteroid-field arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, waves, respawn)
//! - `audio`: Event-to-sound routing for the host's audio backend
//! - `settings`: JSON-backed configuration

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, LogSink, SoundEffect};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Distances are in playfield units, times in milliseconds, speeds in
/// units per millisecond.
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 740.0;
    pub const PLAYFIELD_HEIGHT: f32 = 580.0;

    /// How far past an edge a body may drift before wrapping
    pub const BODY_WRAP_MARGIN: f32 = 30.0;
    pub const PLAYER_WRAP_MARGIN: f32 = 40.0;

    /// Player bounding rect (anchored at the player's position)
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_LENGTH: f32 = 30.0;
    /// Linear step while thrusting
    pub const PLAYER_THRUST: f32 = 0.2;
    /// Heading step per turning frame (radians)
    pub const PLAYER_TURN_RATE: f32 = 0.1;
    pub const STARTING_LIVES: u8 = 3;
    /// Delay between a non-fatal hit and the respawn
    pub const RESPAWN_DELAY_MS: f64 = 2000.0;

    pub const PROJECTILE_RADIUS: f32 = 2.0;
    pub const PROJECTILE_SPEED: f32 = 0.5;
    /// Muzzle offset from the player's anchor
    pub const PROJECTILE_OFFSET_X: f32 = -5.0;
    pub const PROJECTILE_OFFSET_Y: f32 = 5.0;

    /// Bodies per wave = level + this
    pub const WAVE_BASE_BODIES: u32 = 4;
    /// Half-width of the spawn exclusion band around the center
    pub const SPAWN_EXCLUSION: f32 = 100.0;
    pub const BODY_RADIUS_PER_LEVEL: f32 = 10.0;
    pub const BODY_RADIUS_SPREAD: u32 = 10;
    pub const BODY_MIN_SPEED: f32 = 0.1;
    pub const BODY_MAX_SPEED: f32 = 1.1;
    pub const BODY_MAX_MASS: f32 = 100.0;
    /// Masses are never allowed to reach zero
    pub const BODY_MIN_MASS: f32 = 1.0e-3;

    /// Bodies larger than this split in two when shot
    pub const FRAGMENT_RADIUS_THRESHOLD: f32 = 10.0;
    /// Fragments spawn at parent ± this offset on both axes
    pub const FRAGMENT_OFFSET: f32 = 5.0;

    pub const SCORE_PER_HIT: u64 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit direction for a heading measured from +x toward +y
#[inline]
pub fn standard_direction(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Unit direction for a heading measured from +y toward +x
#[inline]
pub fn compass_direction(theta: f32) -> Vec2 {
    Vec2::new(theta.sin(), theta.cos())
}
