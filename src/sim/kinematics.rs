//! Motion integration and playfield edge behavior
//!
//! Every moving entity advances as `pos + vel * dt`. The two entity families
//! disagree on which axis a heading is measured from, so velocity derivation
//! is tied to [`Heading`] rather than unified.

use glam::Vec2;

use crate::{compass_direction, standard_direction};

/// Axis convention used to turn a (speed, heading) pair into a velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// `(v·cosθ, v·sinθ)` - player and projectiles
    Standard,
    /// `(v·sinθ, v·cosθ)` - drift bodies
    Compass,
}

impl Heading {
    /// Velocity vector for a speed along `theta`
    #[inline]
    pub fn velocity(self, speed: f32, theta: f32) -> Vec2 {
        match self {
            Heading::Standard => standard_direction(theta) * speed,
            Heading::Compass => compass_direction(theta) * speed,
        }
    }

    /// Recover the heading angle of a velocity vector under this convention
    #[inline]
    pub fn angle_of(self, vel: Vec2) -> f32 {
        match self {
            Heading::Standard => vel.y.atan2(vel.x),
            Heading::Compass => vel.x.atan2(vel.y),
        }
    }
}

/// Playfield extents; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when `pos` lies in the closed rectangle `[0, w] × [0, h]`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Teleport a position that drifted more than `margin` past an edge to
    /// the opposite edge. Axes are handled independently.
    pub fn wrap(&self, pos: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            wrap_axis(pos.x, self.width, margin),
            wrap_axis(pos.y, self.height, margin),
        )
    }
}

impl Default for Playfield {
    fn default() -> Self {
        use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

#[inline]
fn wrap_axis(coord: f32, extent: f32, margin: f32) -> f32 {
    if coord < -margin {
        extent
    } else if coord > extent + margin {
        0.0
    } else {
        coord
    }
}

/// Advance a position by `vel * dt`
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_body_wraps_past_left_margin() {
        let field = Playfield::default();
        let wrapped = field.wrap(Vec2::new(-31.0, 100.0), 30.0);
        assert_eq!(wrapped, Vec2::new(field.width, 100.0));
    }

    #[test]
    fn test_body_wraps_past_right_margin() {
        let field = Playfield::default();
        let wrapped = field.wrap(Vec2::new(field.width + 31.0, 100.0), 30.0);
        assert_eq!(wrapped, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_margin_is_slack_not_boundary() {
        let field = Playfield::default();
        // Inside the slack band: no teleport yet
        let pos = Vec2::new(-29.0, field.height + 29.0);
        assert_eq!(field.wrap(pos, 30.0), pos);
    }

    #[test]
    fn test_wrap_axes_independent() {
        let field = Playfield::default();
        let wrapped = field.wrap(Vec2::new(-50.0, field.height + 50.0), 40.0);
        assert_eq!(wrapped, Vec2::new(field.width, 0.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let field = Playfield::new(100.0, 50.0);
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(100.0, 50.0)));
        assert!(!field.contains(Vec2::new(100.1, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_heading_roundtrip_per_convention() {
        for conv in [Heading::Standard, Heading::Compass] {
            let vel = conv.velocity(2.0, 0.7);
            assert!((conv.angle_of(vel) - 0.7).abs() < 1e-5);
            assert!((vel.length() - 2.0).abs() < 1e-5);
        }
    }

    proptest! {
        #[test]
        fn prop_integrate_moves_by_velocity_times_dt(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
            dt in 0.0f32..100.0,
        ) {
            let start = Vec2::new(x, y);
            let end = integrate(start, Vec2::new(vx, vy), dt);
            prop_assert!((end.x - (x + vx * dt)).abs() <= 1e-3);
            prop_assert!((end.y - (y + vy * dt)).abs() <= 1e-3);
        }

        #[test]
        fn prop_wrap_leaves_interior_untouched(
            x in 0.0f32..740.0,
            y in 0.0f32..580.0,
            margin in 0.0f32..50.0,
        ) {
            let field = Playfield::default();
            let pos = Vec2::new(x, y);
            prop_assert_eq!(field.wrap(pos, margin), pos);
        }
    }
}
