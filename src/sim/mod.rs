//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `advance(dt)`
//! - Seeded RNG only
//! - Stable iteration order (registry scan order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod kinematics;
pub mod player;
pub mod registry;
pub mod schedule;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod view;

pub use autopilot::autopilot;
pub use collision::{circles_overlap, elastic_deflection, split_body};
pub use kinematics::{Heading, Playfield, integrate};
pub use registry::{Entity, Registry};
pub use schedule::{EventHandle, ScheduledAction, Scheduler};
pub use spawner::{direct_wave, wave_size};
pub use state::{DriftBody, GameEvent, GameState, Player, Projectile, SessionState};
pub use tick::{ControlIntents, advance};
pub use view::{DiscView, Hud, PlayerView, Snapshot};
