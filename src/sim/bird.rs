//! Player-controlled bird
//!
//! The bird never moves horizontally. Each tick gravity is added to the
//! vertical velocity and the velocity to the position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which bird texture the renderer should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WingPose {
    /// Just flapped
    Up,
    /// Falling
    Down,
}

/// The bird entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Sprite centre
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    pub velocity: f32,
    /// Visual rotation in degrees, clockwise (nose down)
    pub tilt: f32,
    pub pose: WingPose,
    /// Unrotated sprite size
    pub size: Vec2,
}

impl Bird {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            velocity: 0.0,
            tilt: 0.0,
            pose: WingPose::Up,
            size,
        }
    }

    /// Back to the spawn point, at rest
    pub fn reset(&mut self) {
        self.pos = Vec2::new(BIRD_START_X, BIRD_START_Y);
        self.velocity = 0.0;
        self.tilt = 0.0;
        self.pose = WingPose::Up;
    }

    /// Replace the current velocity with the flap impulse
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
        self.pose = WingPose::Up;
    }

    /// Integrate one frame of gravity
    pub fn tick(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
        // Only the nose-down direction is clamped
        self.tilt = (self.velocity * TILT_PER_VELOCITY).min(MAX_TILT);
        if self.velocity > 0.0 {
            self.pose = WingPose::Down;
        }
    }

    /// Screen bounds of the rotated sprite
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size).rotated_bounds(self.tilt)
    }

    /// Forgiving hit box used for collisions only
    pub fn collision_box(&self) -> Rect {
        self.bounds().inset(BIRD_INSET_X, BIRD_INSET_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(Vec2::new(34.0, 24.0))
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut b = bird();
        b.velocity = 5.5;
        b.flap(-7.0);
        assert_eq!(b.velocity, -7.0);
        // Flapping twice does not accumulate
        b.flap(-7.0);
        assert_eq!(b.velocity, -7.0);
        assert_eq!(b.pose, WingPose::Up);
    }

    #[test]
    fn test_gravity_integration() {
        let mut b = bird();
        b.flap(-7.0);
        let mut expected_y = BIRD_START_Y;
        let mut expected_v = -7.0f32;
        for _ in 0..10 {
            b.tick(0.30);
            expected_v += 0.30;
            expected_y += expected_v;
            assert!((b.velocity - expected_v).abs() < 1e-4);
            assert!((b.pos.y - expected_y).abs() < 1e-3);
        }
        assert_eq!(b.pos.x, BIRD_START_X);
    }

    #[test]
    fn test_tilt_clamped_only_above() {
        let mut b = bird();
        b.velocity = 30.0;
        b.tick(0.0);
        assert_eq!(b.tilt, MAX_TILT);

        b.velocity = -20.0;
        b.tick(0.0);
        assert_eq!(b.tilt, -80.0);
    }

    #[test]
    fn test_pose_switches_when_falling() {
        let mut b = bird();
        b.flap(-7.0);
        b.tick(0.30);
        assert_eq!(b.pose, WingPose::Up);
        b.velocity = 0.0;
        b.tick(0.30);
        assert_eq!(b.pose, WingPose::Down);
    }

    #[test]
    fn test_collision_box_is_inset() {
        let b = bird();
        let visual = b.bounds();
        let hit = b.collision_box();
        assert!((hit.left() - (visual.left() + 10.0)).abs() < 1e-4);
        assert!((hit.top() - (visual.top() + 10.0)).abs() < 1e-4);
        assert!((hit.width() - (visual.width() - 20.0)).abs() < 1e-4);
        assert!((hit.height() - (visual.height() - 20.0)).abs() < 1e-4);
    }

    #[test]
    fn test_reset() {
        let mut b = bird();
        b.flap(-7.0);
        for _ in 0..5 {
            b.tick(0.55);
        }
        b.reset();
        assert_eq!(b.pos, Vec2::new(120.0, 256.0));
        assert_eq!(b.velocity, 0.0);
        assert_eq!(b.tilt, 0.0);
    }
}
