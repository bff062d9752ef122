//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::kinematics::{Heading, Playfield};
use super::registry::{Entity, Registry};
use super::schedule::{EventHandle, Scheduler};
use super::tick::ControlIntents;
use crate::consts::*;
use crate::settings::Settings;

/// A drifting, destructible body
#[derive(Debug, Clone, PartialEq)]
pub struct DriftBody {
    pub id: u32,
    pub pos: Vec2,
    /// Velocity in units per ms
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl DriftBody {
    /// Build a body from a speed and a heading in the drift-body convention
    pub fn from_heading(id: u32, pos: Vec2, radius: f32, speed: f32, theta: f32, mass: f32) -> Self {
        Self {
            id,
            pos,
            vel: Heading::Compass.velocity(speed, theta),
            radius,
            mass,
        }
    }

    /// Heading angle (radians) in the drift-body convention
    pub fn heading(&self) -> f32 {
        Heading::Compass.angle_of(self.vel)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether destroying this body leaves fragments behind
    pub fn can_fragment(&self) -> bool {
        self.radius > FRAGMENT_RADIUS_THRESHOLD
    }
}

impl Entity for DriftBody {
    fn id(&self) -> u32 {
        self.id
    }
}

/// A player-fired shot
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Heading (radians) in the standard convention
    pub heading: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, heading: f32) -> Self {
        Self {
            id,
            pos,
            radius: PROJECTILE_RADIUS,
            speed: PROJECTILE_SPEED,
            heading,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Heading::Standard.velocity(self.speed, self.heading)
    }
}

impl Entity for Projectile {
    fn id(&self) -> u32 {
        self.id
    }
}

/// The player's craft
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the bounding rect
    pub pos: Vec2,
    /// Heading (radians) in the standard convention
    pub heading: f32,
    pub width: f32,
    pub length: f32,
    pub alive: bool,
    /// Pending respawn, set while the player is down
    pub respawn: Option<EventHandle>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            width: PLAYER_WIDTH,
            length: PLAYER_LENGTH,
            alive: true,
            respawn: None,
        }
    }

    /// Point of the bounding rect closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let min = self.pos;
        let max = self.pos + Vec2::new(self.width, self.length);
        point.clamp(min, max)
    }
}

/// Level, score and lives for the running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    /// Set when the next frame must populate a fresh wave
    pub wave_cleared: bool,
    /// Terminal; no simulation happens once set
    pub game_over: bool,
}

impl SessionState {
    pub fn new(lives: u8) -> Self {
        Self {
            level: 1,
            score: 0,
            lives,
            wave_cleared: true,
            game_over: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

/// Something the host may want to react to (sound, HUD flash, logging)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    /// A projectile destroyed a body, leaving `fragments` pieces
    BodyDestroyed { id: u32, fragments: u8 },
    /// The player lost a life and will respawn
    PlayerHit { lives: u8 },
    PlayerRespawned,
    GameOver { score: u64 },
    WaveSpawned { level: u32, count: u32 },
    WaveCleared { level: u32 },
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub playfield: Playfield,
    pub session: SessionState,
    pub player: Player,
    pub bodies: Registry<DriftBody>,
    pub projectiles: Registry<Projectile>,
    pub scheduler: Scheduler,
    /// Accumulated simulation time in ms
    pub clock_ms: f64,
    /// Frames advanced so far
    pub frame: u64,
    /// Delay between a non-fatal hit and the respawn
    pub respawn_delay_ms: f64,
    /// Intents from the previous frame, for edge detection
    pub prior_intents: ControlIntents,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session; the first wave is populated by the first `advance`
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let playfield = Playfield::new(settings.playfield_width, settings.playfield_height);
        Self {
            playfield,
            session: SessionState::new(settings.starting_lives),
            player: Player::new(playfield.center()),
            bodies: Registry::new(),
            projectiles: Registry::new(),
            scheduler: Scheduler::new(),
            clock_ms: 0.0,
            frame: 0,
            respawn_delay_ms: settings.respawn_delay_ms,
            prior_intents: ControlIntents::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a body at the end of the registry, assigning it a fresh ID
    pub fn spawn_body(&mut self, pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> u32 {
        let id = self.next_entity_id();
        self.bodies.push(DriftBody {
            id,
            pos,
            vel,
            radius,
            mass,
        });
        id
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7, &Settings::default());
        assert_eq!(state.session.level, 1);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.score, 0);
        assert!(state.session.wave_cleared);
        assert!(!state.session.game_over);
        assert!(state.player.alive);
        assert_eq!(state.player.pos, state.playfield.center());
        assert!(state.bodies.is_empty());
    }

    #[test]
    fn test_body_heading_uses_compass_convention() {
        let body = DriftBody::from_heading(1, Vec2::ZERO, 20.0, 1.0, 0.0, 10.0);
        // Heading 0 points down +y for drift bodies
        assert!((body.vel - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert!(body.heading().abs() < 1e-6);
        assert!((body.speed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projectile_heading_uses_standard_convention() {
        let shot = Projectile::new(1, Vec2::ZERO, 0.0);
        assert!((shot.velocity() - Vec2::new(PROJECTILE_SPEED, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_fragment_threshold() {
        let big = DriftBody::from_heading(1, Vec2::ZERO, 20.0, 1.0, 0.0, 10.0);
        let edge = DriftBody { radius: 10.0, ..big.clone() };
        assert!(big.can_fragment());
        assert!(!edge.can_fragment());
    }

    #[test]
    fn test_player_closest_point_clamps_to_rect() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        assert_eq!(player.closest_point(Vec2::new(90.0, 115.0)), Vec2::new(100.0, 115.0));
        assert_eq!(player.closest_point(Vec2::new(200.0, 200.0)), Vec2::new(130.0, 130.0));
        assert_eq!(player.closest_point(Vec2::new(110.0, 120.0)), Vec2::new(110.0, 120.0));
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1, &Settings::default());
        let a = state.spawn_body(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let b = state.spawn_body(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        assert_ne!(a, b);
        assert_eq!(state.bodies.position_of(b), Some(1));
    }
}
