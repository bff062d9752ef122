//! Idle/demo mode - synthesizes intents so the game plays itself
//!
//! Pure function of the state, so demo runs stay deterministic.

use glam::Vec2;

use super::state::GameState;
use super::tick::ControlIntents;
use crate::consts::{PLAYER_TURN_RATE, PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y};
use crate::normalize_angle;

/// Bodies closer than this make the pilot stop chasing and just shoot
const ENGAGE_DISTANCE: f32 = 220.0;

/// Pick intents for the next frame
///
/// Turns toward the nearest body, fires when roughly lined up (releasing
/// every other frame so each press is a fresh edge), and closes distance
/// when nothing is in range.
pub fn autopilot(state: &GameState) -> ControlIntents {
    let mut intents = ControlIntents::default();
    if state.session.game_over {
        return intents;
    }

    let player = &state.player;
    let muzzle = player.pos + Vec2::new(PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y);

    let Some(target) = state
        .bodies
        .iter()
        .map(|b| b.pos)
        .min_by(|a, b| {
            a.distance_squared(muzzle)
                .partial_cmp(&b.distance_squared(muzzle))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return intents;
    };

    let to_target = target - muzzle;
    let desired = to_target.y.atan2(to_target.x);
    let error = normalize_angle(desired - player.heading);

    if error.abs() > PLAYER_TURN_RATE / 2.0 {
        intents.turn_left = error < 0.0;
        intents.turn_right = error > 0.0;
    } else if to_target.length() > ENGAGE_DISTANCE {
        intents.thrust = true;
    }

    if error.abs() < 0.3 && player.alive {
        intents.fire = !state.prior_intents.fire;
    }

    intents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::tick::advance;

    fn state_with_target(offset: Vec2) -> GameState {
        let mut state = GameState::new(8, &Settings::default());
        state.session.wave_cleared = false;
        let muzzle = state.player.pos + Vec2::new(-5.0, 5.0);
        state.spawn_body(muzzle + offset, Vec2::ZERO, 8.0, 1.0);
        state
    }

    #[test]
    fn test_idle_with_empty_field() {
        let mut state = GameState::new(8, &Settings::default());
        state.session.wave_cleared = false;
        assert_eq!(autopilot(&state), ControlIntents::default());
    }

    #[test]
    fn test_turns_toward_target() {
        // Straight "up" on screen: heading -π/2 from the player's 0
        let state = state_with_target(Vec2::new(0.0, -150.0));
        let intents = autopilot(&state);
        assert!(intents.turn_left);
        assert!(!intents.turn_right);
        assert!(!intents.fire);
    }

    #[test]
    fn test_fires_on_alternate_frames_when_aligned() {
        let mut state = state_with_target(Vec2::new(150.0, 0.0));
        let first = autopilot(&state);
        assert!(first.fire);
        state.prior_intents = first;
        assert!(!autopilot(&state).fire);
    }

    #[test]
    fn test_closes_distance_to_far_target() {
        let state = state_with_target(Vec2::new(300.0, 0.0));
        assert!(autopilot(&state).thrust);
    }

    #[test]
    fn test_demo_run_scores() {
        let mut state = GameState::new(4242, &Settings::default());
        for _ in 0..6000 {
            let intents = autopilot(&state);
            advance(&mut state, &intents, 16.0);
            if state.session.game_over {
                break;
            }
        }
        assert!(state.session.score > 0 || state.session.game_over);
    }
}
