//! Collision detection for the bird
//!
//! Death is checked against the screen bounds first, then every live pipe.
//! All causes end the run the same way; the cause is kept for logging.

use super::bird::Bird;
use super::pipes::PipeQueue;
use crate::consts::SCREEN_HEIGHT;

/// Why the bird died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Ceiling,
    Ground,
    Pipe,
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Alive,
    Died(DeathCause),
}

impl Outcome {
    pub fn is_dead(&self) -> bool {
        matches!(self, Outcome::Died(_))
    }
}

/// Check the bird against the screen edges and the pipes
pub fn evaluate(bird: &Bird, pipes: &PipeQueue) -> Outcome {
    let hit_box = bird.collision_box();

    if hit_box.top() < 0.0 {
        return Outcome::Died(DeathCause::Ceiling);
    }
    if hit_box.bottom() > SCREEN_HEIGHT {
        return Outcome::Died(DeathCause::Ground);
    }

    let hit_pipe = pipes
        .iter()
        .flat_map(|pair| pair.collision_boxes())
        .any(|pipe_box| hit_box.intersects(&pipe_box));
    if hit_pipe {
        return Outcome::Died(DeathCause::Pipe);
    }

    Outcome::Alive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::PipePair;
    use glam::Vec2;

    fn bird_at(y: f32) -> Bird {
        let mut b = Bird::new(Vec2::new(34.0, 24.0));
        b.pos.y = y;
        b
    }

    #[test]
    fn test_alive_in_open_air() {
        assert_eq!(evaluate(&bird_at(256.0), &PipeQueue::new()), Outcome::Alive);
    }

    #[test]
    fn test_ceiling() {
        // Hit box top = y - 12 + 10 = y - 2
        assert_eq!(evaluate(&bird_at(2.0), &PipeQueue::new()), Outcome::Alive);
        assert_eq!(
            evaluate(&bird_at(1.5), &PipeQueue::new()),
            Outcome::Died(DeathCause::Ceiling)
        );
    }

    #[test]
    fn test_ground() {
        // Hit box bottom = y + 2
        assert_eq!(
            evaluate(&bird_at(SCREEN_HEIGHT - 2.0), &PipeQueue::new()),
            Outcome::Alive
        );
        assert_eq!(
            evaluate(&bird_at(SCREEN_HEIGHT - 1.5), &PipeQueue::new()),
            Outcome::Died(DeathCause::Ground)
        );
    }

    #[test]
    fn test_pipe_hit_and_gap_pass() {
        let mut pipes = PipeQueue::new();
        // Pipe spans the bird's column; gap from 200 to 350
        pipes.push_back(PipePair::new(BIRD_START_X - 39.0, 78.0, 200, 150));

        assert_eq!(evaluate(&bird_at(275.0), &pipes), Outcome::Alive);
        assert_eq!(
            evaluate(&bird_at(150.0), &pipes),
            Outcome::Died(DeathCause::Pipe)
        );
        assert_eq!(
            evaluate(&bird_at(400.0), &pipes),
            Outcome::Died(DeathCause::Pipe)
        );
    }

    #[test]
    fn test_pipe_inset_is_forgiving() {
        let mut pipes = PipeQueue::new();
        // Bird hit box spans x 113..127. Pipe sprite starts at 124 but its
        // collision box starts at 129.
        pipes.push_back(PipePair::new(124.0, 78.0, 20, 150));
        assert!(pipes.front().is_some_and(|p| p.top.contains(Vec2::new(125.0, 10.0))));
        assert_eq!(evaluate(&bird_at(10.0), &pipes), Outcome::Alive);
    }
}
