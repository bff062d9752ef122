//! Per-frame simulation step
//!
//! One call to [`advance`] runs the whole frame in a fixed order:
//! scheduled events, player intents, motion, collisions, wave director.

use super::collision::{resolve_body_deflections, resolve_player_hits, resolve_projectile_hits};
use super::kinematics::integrate;
use super::player::{apply_intents, respawn};
use super::schedule::ScheduledAction;
use super::spawner::direct_wave;
use super::state::GameState;
use crate::consts::BODY_WRAP_MARGIN;

/// Control intents held during a frame (sampled by the host)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlIntents {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
}

/// Advance the game by `dt_ms` milliseconds of elapsed time.
///
/// Does nothing once the game is over; state stays readable.
pub fn advance(state: &mut GameState, intents: &ControlIntents, dt_ms: f32) {
    if state.session.game_over {
        return;
    }
    let dt_ms = dt_ms.max(0.0);

    state.frame += 1;
    state.clock_ms += f64::from(dt_ms);

    for action in state.scheduler.drain_due(state.clock_ms) {
        match action {
            ScheduledAction::RespawnPlayer => respawn(state),
        }
    }

    apply_intents(state, intents, dt_ms);
    move_bodies(state, dt_ms);
    move_projectiles(state, dt_ms);

    if state.player.alive {
        resolve_player_hits(state);
    }
    if !state.session.game_over {
        resolve_body_deflections(state);
        resolve_projectile_hits(state);
    }

    direct_wave(state);

    state.prior_intents = intents.clone();
    log::trace!(
        "Frame {}: {} bodies, {} projectiles",
        state.frame,
        state.bodies.len(),
        state.projectiles.len()
    );
}

fn move_bodies(state: &mut GameState, dt: f32) {
    let field = state.playfield;
    for body in state.bodies.iter_mut() {
        body.pos = field.wrap(integrate(body.pos, body.vel, dt), BODY_WRAP_MARGIN);
    }
}

/// Projectiles fly straight and are dropped once they leave the playfield
fn move_projectiles(state: &mut GameState, dt: f32) {
    let field = state.playfield;
    for shot in state.projectiles.iter_mut() {
        shot.pos = integrate(shot.pos, shot.velocity(), dt);
    }
    state.projectiles.retain(|shot| field.contains(shot.pos));
}
