//! Run state and core simulation types
//!
//! Everything that changes during a single run lives in `RunState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::pipes::ObstacleStream;
use crate::consts::*;

/// Something that happened during a tick that the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pipe pair was passed; `score` is the new total
    Scored { score: u32 },
    /// The bird collided; `score` is the final score
    Died { score: u32 },
}

/// Sprite sizes the simulation needs for its geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    /// Unrotated bird sprite
    pub bird_size: Vec2,
    /// Unscaled top pipe texture ("pipe-down")
    pub pipe_texture: Vec2,
    /// Unscaled bottom pipe texture ("pipe-up")
    pub pipe_up_texture: Vec2,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            bird_size: Vec2::from(DEFAULT_BIRD_SIZE),
            pipe_texture: Vec2::from(DEFAULT_PIPE_TEXTURE),
            pipe_up_texture: Vec2::from(DEFAULT_PIPE_TEXTURE),
        }
    }
}

impl SpriteMetrics {
    /// On-screen width of the top pipe
    pub fn pipe_width(&self) -> f32 {
        self.pipe_texture.x * PIPE_SCALE_X
    }

    /// On-screen width of the bottom pipe
    pub fn bottom_pipe_width(&self) -> f32 {
        self.pipe_up_texture.x * PIPE_SCALE_X
    }
}

/// State of the current (or last) run
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed the gap generator started from
    pub seed: u64,
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    pub bird: Bird,
    pub obstacles: ObstacleStream,
    pub score: u32,
    /// False while armed (waiting for the first flap) and after death
    pub started: bool,
    /// Ticks simulated since the run started
    pub time_ticks: u64,
    rng: Pcg32,
}

impl RunState {
    pub fn new(seed: u64, difficulty: Difficulty, metrics: SpriteMetrics) -> Self {
        Self {
            seed,
            difficulty,
            profile: difficulty.profile(),
            bird: Bird::new(metrics.bird_size),
            obstacles: ObstacleStream::with_widths(
                metrics.pipe_width(),
                metrics.bottom_pipe_width(),
            ),
            score: 0,
            started: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Arm a fresh run: no pipes, bird at rest, score zero, current
    /// difficulty re-applied. The gap generator keeps its sequence.
    pub fn reset(&mut self) {
        self.profile = self.difficulty.profile();
        self.bird.reset();
        self.obstacles.reset();
        self.score = 0;
        self.started = false;
        self.time_ticks = 0;
    }

    /// Switch difficulty without touching the run in progress
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
    }

    /// Flap the bird. Returns true when this flap started the run.
    pub fn flap(&mut self) -> bool {
        let starting = !self.started;
        self.started = true;
        self.bird.flap(self.profile.flap_impulse);
        starting
    }

    pub fn pipe_count(&self) -> usize {
        self.obstacles.queue.len()
    }

    /// Spawn a pipe pair if one is due
    pub fn spawn_pipes(&mut self) -> Option<i32> {
        self.obstacles
            .spawn(self.difficulty, &self.profile, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_is_armed() {
        let run = RunState::new(1, Difficulty::Easy, SpriteMetrics::default());
        assert!(!run.started);
        assert_eq!(run.score, 0);
        assert_eq!(run.pipe_count(), 0);
        assert_eq!(run.bird.pos, Vec2::new(120.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(run.bird.velocity, 0.0);
        assert!((run.obstacles.pipe_width - 78.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_flap_starts_run_once() {
        let mut run = RunState::new(1, Difficulty::Easy, SpriteMetrics::default());
        assert!(run.flap());
        assert!(run.started);
        assert_eq!(run.bird.velocity, -7.0);
        assert!(!run.flap());
    }

    #[test]
    fn test_apply_difficulty_keeps_run() {
        let mut run = RunState::new(1, Difficulty::Easy, SpriteMetrics::default());
        run.flap();
        run.score = 4;
        run.apply_difficulty(Difficulty::Hard);
        assert_eq!(run.profile, Difficulty::Hard.profile());
        assert_eq!(run.score, 4);
        assert!(run.started);
    }

    #[test]
    fn test_reset() {
        let mut run = RunState::new(1, Difficulty::Hard, SpriteMetrics::default());
        run.flap();
        run.spawn_pipes();
        run.spawn_pipes();
        run.score = 9;
        run.bird.pos.y = 10.0;
        run.reset();
        assert_eq!(run.score, 0);
        assert_eq!(run.pipe_count(), 0);
        assert!(!run.started);
        assert_eq!(run.bird.pos.y, 256.0);
        assert!(run.obstacles.next_gap_high());
        assert!(run.obstacles.queue.is_empty());
    }

    #[test]
    fn test_pipe_textures_scale_separately() {
        let metrics = SpriteMetrics {
            pipe_up_texture: Vec2::new(60.0, 320.0),
            ..SpriteMetrics::default()
        };
        let mut run = RunState::new(1, Difficulty::Easy, metrics);
        run.spawn_pipes();
        let pair = run.obstacles.queue.front().expect("spawned");
        assert_eq!(pair.top.width(), 78.0);
        assert_eq!(pair.bottom.width(), 90.0);
    }
}
