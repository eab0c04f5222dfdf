//! Difficulty levels and their tuned parameter sets

use serde::{Deserialize, Serialize};

/// Selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

/// Tuned physics and obstacle parameters for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub flap_impulse: f32,
    /// Horizontal pipe velocity per tick (negative = leftward)
    pub pipe_speed: f32,
    /// Vertical opening between top and bottom pipe
    pub gap_size: i32,
    /// Horizontal distance between consecutive spawns
    pub spawn_interval: i32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Parameter set for this level
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                gravity: 0.30,
                flap_impulse: -7.0,
                pipe_speed: -2.8,
                gap_size: 150,
                spawn_interval: 250,
            },
            Difficulty::Hard => DifficultyProfile {
                gravity: 0.55,
                flap_impulse: -8.5,
                pipe_speed: -4.8,
                gap_size: 110,
                spawn_interval: 180,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    /// Whether gap placement follows the fixed high/low pattern
    pub fn alternating_gaps(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

impl DifficultyProfile {
    /// Largest gap offset for this profile's gap size
    pub fn max_gap_y(&self) -> i32 {
        crate::max_gap_y(self.gap_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_profile() {
        let p = Difficulty::Easy.profile();
        assert!((p.gravity - 0.30).abs() < f32::EPSILON);
        assert!((p.flap_impulse - (-7.0)).abs() < f32::EPSILON);
        assert!((p.pipe_speed - (-2.8)).abs() < f32::EPSILON);
        assert_eq!(p.gap_size, 150);
        assert_eq!(p.spawn_interval, 250);
        assert_eq!(p.max_gap_y(), 225);
    }

    #[test]
    fn test_hard_profile() {
        let p = Difficulty::Hard.profile();
        assert!((p.gravity - 0.55).abs() < f32::EPSILON);
        assert!((p.flap_impulse - (-8.5)).abs() < f32::EPSILON);
        assert!((p.pipe_speed - (-4.8)).abs() < f32::EPSILON);
        assert_eq!(p.gap_size, 110);
        assert_eq!(p.spawn_interval, 180);
        assert_eq!(p.max_gap_y(), 265);
    }

    #[test]
    fn test_hard_is_harder() {
        let easy = Difficulty::Easy.profile();
        let hard = Difficulty::Hard.profile();
        assert!(hard.gravity > easy.gravity);
        assert!(hard.pipe_speed < easy.pipe_speed);
        assert!(hard.gap_size < easy.gap_size);
        assert!(hard.spawn_interval < easy.spawn_interval);
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert!(!Difficulty::Easy.alternating_gaps());
        assert!(Difficulty::Hard.alternating_gaps());
    }
}
