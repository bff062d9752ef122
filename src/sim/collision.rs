//! Collision detection and response
//!
//! Three passes run each frame, in this order:
//! 1. player vs bodies (costs lives, re-scans after every hit)
//! 2. body vs body (elastic deflection, every overlapping pair)
//! 3. projectile vs body (destroys and splits, at most one hit per frame)
//!
//! All circle tests are inclusive: bodies exactly touching collide.

use glam::Vec2;

use super::player::schedule_respawn;
use super::state::{DriftBody, GameEvent, GameState};
use crate::consts::*;

/// True when two circles overlap or touch
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}

/// Post-collision velocities for two bodies in a perfectly elastic impact
///
/// Each velocity is split into a component along the contact normal
/// `φ = atan2(Δy, Δx)` and one perpendicular to it. The normal components
/// go through the 1-D elastic exchange weighted by mass; the perpendicular
/// components are kept.
pub fn elastic_deflection(
    a_pos: Vec2,
    a_vel: Vec2,
    a_mass: f32,
    b_pos: Vec2,
    b_vel: Vec2,
    b_mass: f32,
) -> (Vec2, Vec2) {
    let delta = b_pos - a_pos;
    let phi = delta.y.atan2(delta.x);

    let (a_speed, a_theta) = (a_vel.length(), a_vel.y.atan2(a_vel.x));
    let (b_speed, b_theta) = (b_vel.length(), b_vel.y.atan2(b_vel.x));

    let a_along = a_speed * (a_theta - phi).cos();
    let b_along = b_speed * (b_theta - phi).cos();
    let a_perp = a_speed * (a_theta - phi).sin();
    let b_perp = b_speed * (b_theta - phi).sin();

    let total = a_mass + b_mass;
    let a_along_new = (a_along * (a_mass - b_mass) + 2.0 * b_mass * b_along) / total;
    let b_along_new = (b_along * (b_mass - a_mass) + 2.0 * a_mass * a_along) / total;

    let normal = Vec2::new(phi.cos(), phi.sin());
    let tangent = Vec2::new(
        (phi + std::f32::consts::FRAC_PI_2).cos(),
        (phi + std::f32::consts::FRAC_PI_2).sin(),
    );

    (
        normal * a_along_new + tangent * a_perp,
        normal * b_along_new + tangent * b_perp,
    )
}

/// The two pieces a body breaks into when shot
///
/// Each piece has half the radius and half the mass, and its speed is scaled
/// so that its own momentum equals the parent's. The first piece keeps the
/// parent's direction, the second reverses it.
pub fn split_body(parent: &DriftBody, ids: [u32; 2]) -> [DriftBody; 2] {
    let mass = parent.mass / 2.0;
    let vel = parent.vel * (parent.mass / mass);
    let offset = Vec2::splat(FRAGMENT_OFFSET);
    [
        DriftBody {
            id: ids[0],
            pos: parent.pos + offset,
            vel,
            radius: parent.radius / 2.0,
            mass,
        },
        DriftBody {
            id: ids[1],
            pos: parent.pos - offset,
            vel: -vel,
            radius: parent.radius / 2.0,
            mass,
        },
    ]
}

/// Player vs bodies. Returns the number of lives lost this frame.
///
/// After each hit the scan restarts from the first body, so every body that
/// still overlaps the player costs another life. Stops as soon as the game
/// is over.
pub fn resolve_player_hits(state: &mut GameState) -> u32 {
    let mut hits = 0;
    let mut i = 0;

    while let Some(body) = state.bodies.get(i) {
        let closest = state.player.closest_point(body.pos);
        if closest.distance_squared(body.pos) > body.radius * body.radius {
            i += 1;
            continue;
        }

        let body_id = body.id;
        state.bodies.remove(i);
        hits += 1;
        state.session.lives = state.session.lives.saturating_sub(1);
        state.player.alive = false;
        log::debug!(
            "Player struck by body {} ({} lives left)",
            body_id,
            state.session.lives
        );

        if state.session.lives == 0 {
            state.session.game_over = true;
            if let Some(handle) = state.player.respawn.take() {
                state.scheduler.cancel(handle);
            }
            log::info!("Game over - final score {}", state.session.score);
            let score = state.session.score;
            state.emit(GameEvent::GameOver { score });
            return hits;
        }

        schedule_respawn(state);
        let lives = state.session.lives;
        state.emit(GameEvent::PlayerHit { lives });
        i = 0;
    }

    hits
}

/// Body vs body. Deflects every overlapping pair; returns how many.
///
/// Pairs are visited in index order and each deflection is written back
/// before the next pair is tested.
pub fn resolve_body_deflections(state: &mut GameState) -> usize {
    let mut deflections = 0;
    let count = state.bodies.len();

    for i in 0..count.saturating_sub(1) {
        for j in (i + 1)..count {
            let Some((a, b)) = state.bodies.pair_mut(i, j) else {
                continue;
            };
            if !circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }
            let (a_vel, b_vel) = elastic_deflection(a.pos, a.vel, a.mass, b.pos, b.vel, b.mass);
            a.vel = a_vel;
            b.vel = b_vel;
            deflections += 1;
            log::trace!("Bodies {} and {} deflected", a.id, b.id);
        }
    }

    deflections
}

/// Projectile vs bodies. Resolves the first hit found (projectiles outer,
/// bodies inner) and stops. Returns whether anything was destroyed.
pub fn resolve_projectile_hits(state: &mut GameState) -> bool {
    for j in 0..state.projectiles.len() {
        for i in 0..state.bodies.len() {
            let (Some(shot), Some(body)) = (state.projectiles.get(j), state.bodies.get(i)) else {
                continue;
            };
            if !circles_overlap(shot.pos, shot.radius, body.pos, body.radius) {
                continue;
            }

            state.projectiles.remove(j);
            let Some(parent) = state.bodies.remove(i) else {
                return false;
            };

            let fragments = if parent.can_fragment() {
                let ids = [state.next_entity_id(), state.next_entity_id()];
                state.bodies.insert_at(i, split_body(&parent, ids));
                2
            } else {
                0
            };

            state.session.score += SCORE_PER_HIT;
            log::debug!(
                "Body {} destroyed (r={}), {} fragments",
                parent.id,
                parent.radius,
                fragments
            );
            state.emit(GameEvent::BodyDestroyed {
                id: parent.id,
                fragments,
            });
            return true;
        }
    }

    false
}
