//! Player controller: intents to motion, firing, respawn

use glam::Vec2;

use super::kinematics::{Heading, Playfield, integrate};
use super::schedule::ScheduledAction;
use super::state::{GameEvent, GameState, Player, Projectile};
use super::tick::ControlIntents;
use crate::consts::*;

/// Apply one frame of held intents to the player.
///
/// Thrust wins over turning; left and right both apply when held together.
/// Firing is edge-triggered against `state.prior_intents`.
pub fn apply_intents(state: &mut GameState, intents: &ControlIntents, dt: f32) {
    let field = state.playfield;
    let player = &mut state.player;

    if intents.thrust {
        step(player, field, 0.0, PLAYER_THRUST, dt);
    }
    if intents.turn_left && !intents.thrust {
        step(player, field, -PLAYER_TURN_RATE, 0.0, dt);
    }
    if intents.turn_right && !intents.thrust {
        step(player, field, PLAYER_TURN_RATE, 0.0, dt);
    }

    if intents.fire && !state.prior_intents.fire && state.player.alive {
        fire(state);
    }
}

/// Rotate by `d_theta`, then move `d_v * dt` along the new heading and wrap
fn step(player: &mut Player, field: Playfield, d_theta: f32, d_v: f32, dt: f32) {
    player.heading += d_theta;
    let vel = Heading::Standard.velocity(d_v, player.heading);
    player.pos = field.wrap(integrate(player.pos, vel, dt), PLAYER_WRAP_MARGIN);
}

/// Launch a projectile from the player's muzzle. Returns its ID.
pub fn fire(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let muzzle = state.player.pos + Vec2::new(PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y);
    state
        .projectiles
        .push(Projectile::new(id, muzzle, state.player.heading));
    log::trace!("Shot {} fired at heading {:.2}", id, state.player.heading);
    state.emit(GameEvent::ShotFired);
    id
}

/// Queue a respawn `respawn_delay_ms` from now, replacing any pending one
pub fn schedule_respawn(state: &mut GameState) {
    if let Some(previous) = state.player.respawn.take() {
        state.scheduler.cancel(previous);
    }
    let due = state.clock_ms + state.respawn_delay_ms;
    let handle = state.scheduler.schedule(due, ScheduledAction::RespawnPlayer);
    state.player.respawn = Some(handle);
    log::debug!("Respawn scheduled for t={:.0}ms", due);
}

/// Put the player back at the center, alive
pub fn respawn(state: &mut GameState) {
    state.player.pos = state.playfield.center();
    state.player.alive = true;
    state.player.respawn = None;
    log::debug!("Player respawned at t={:.0}ms", state.clock_ms);
    state.emit(GameEvent::PlayerRespawned);
}
