//! Read-only views of the simulation for renderers and HUDs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    pub lives: u8,
    pub score: u64,
    /// Bodies currently on the field
    pub wave_size: usize,
    pub game_over: bool,
}

impl Hud {
    /// Status line in the same layout the game draws at the top of the field
    pub fn status_line(&self) -> String {
        format!(
            "Level: {}    Lives: {}    Score: {}    Asteroids: {}",
            self.level, self.lives, self.score, self.wave_size
        )
    }

    /// Terminal banner, once the game is over
    pub fn game_over_banner(&self) -> Option<String> {
        self.game_over
            .then(|| format!("GAME OVER!  FINAL SCORE:  {}", self.score))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub heading: f32,
    pub width: f32,
    pub length: f32,
    /// Renderers skip the ship while this is false
    pub alive: bool,
}

/// A circle to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs for one frame, in scan order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub player: PlayerView,
    pub bodies: Vec<DiscView>,
    pub projectiles: Vec<DiscView>,
    pub hud: Hud,
}

impl GameState {
    pub fn hud(&self) -> Hud {
        Hud {
            level: self.session.level,
            lives: self.session.lives,
            score: self.session.score,
            wave_size: self.bodies.len(),
            game_over: self.session.game_over,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            player: PlayerView {
                pos: self.player.pos,
                heading: self.player.heading,
                width: self.player.width,
                length: self.player.length,
                alive: self.player.alive,
            },
            bodies: self
                .bodies
                .iter()
                .map(|b| DiscView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| DiscView {
                    pos: p.pos,
                    radius: p.radius,
                })
                .collect(),
            hud: self.hud(),
        }
    }
}
