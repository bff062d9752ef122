//! Wave population and level progression

use glam::Vec2;
use rand::Rng;

use super::state::{DriftBody, GameEvent, GameState};
use crate::consts::*;

/// Number of bodies in the wave for `level`
pub fn wave_size(level: u32) -> u32 {
    level + WAVE_BASE_BODIES
}

/// Run the level director once for this frame.
///
/// Populates a pending wave first, then advances the level if the field is
/// empty. Nothing happens after game over.
pub fn direct_wave(state: &mut GameState) {
    if state.session.game_over {
        return;
    }

    if state.session.wave_cleared {
        populate_wave(state);
        state.session.wave_cleared = false;
    }

    if state.bodies.is_empty() {
        log::info!("Level {} cleared", state.session.level);
        let level = state.session.level;
        state.emit(GameEvent::WaveCleared { level });
        state.session.level += 1;
        state.session.wave_cleared = true;
    }
}

/// Add a full wave of bodies for the current level
pub fn populate_wave(state: &mut GameState) {
    let level = state.session.level;
    let count = wave_size(level);
    for _ in 0..count {
        let body = random_body(state);
        state.bodies.push(body);
    }
    log::info!("Level {}: spawned {} bodies", level, count);
    state.emit(GameEvent::WaveSpawned { level, count });
}

/// Roll a body for the current level, kept out of the band around the center
fn random_body(state: &mut GameState) -> DriftBody {
    let id = state.next_entity_id();
    let level = state.session.level as f32;
    let field = state.playfield;
    let rng = &mut state.rng;

    let x = push_off_center((rng.random::<f32>() * field.width).floor(), field.width / 2.0);
    let y = push_off_center((rng.random::<f32>() * field.height).floor(), field.height / 2.0);
    let radius = level * BODY_RADIUS_PER_LEVEL + rng.random_range(0..BODY_RADIUS_SPREAD) as f32;
    let speed = rng.random_range(BODY_MIN_SPEED..BODY_MAX_SPEED);
    let heading = (rng.random_range(0..360u32) as f32).to_radians();
    let mass = rng.random_range(0.0..BODY_MAX_MASS).max(BODY_MIN_MASS);

    DriftBody::from_heading(id, Vec2::new(x, y), radius, speed, heading, mass)
}

/// Shift a coordinate within `SPAWN_EXCLUSION` of `center` up by `SPAWN_EXCLUSION`
#[inline]
fn push_off_center(coord: f32, center: f32) -> f32 {
    if (coord - center).abs() <= SPAWN_EXCLUSION {
        coord + SPAWN_EXCLUSION
    } else {
        coord
    }
}
