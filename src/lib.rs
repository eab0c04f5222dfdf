//! Flappy Bird - a single-player reflex arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (bird physics, pipe stream, collisions)
//! - `ui`: Screen handlers, menu navigation, control layout and view model
//! - `session`: The `GameSession` state machine that owns everything
//! - `highscores`: Top-3 leaderboard policy
//! - `persistence`: Text storage collaborator (leaderboard, settings)
//! - `assets`: Asset manifest and loader collaborator
//! - `audio`: Sound effect / music collaborator
//! - `platform`: Normalized input events

pub mod assets;
pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{AssetError, StartupError};
pub use highscores::Leaderboard;
pub use session::GameSession;
pub use settings::{Paths, Settings};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 864.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    /// Ground strip at the bottom of the background art
    pub const GROUND_HEIGHT: i32 = 112;

    /// Frame rate the host limits the loop to
    pub const FRAME_RATE: u32 = 60;
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Pipe stream
    pub const MAX_PIPES: usize = 20;
    pub const MIN_GAP_Y: i32 = 50;
    /// Clearance between the bottom pipe's top edge and the ground
    pub const GAP_FLOOR_MARGIN: i32 = 25;
    /// Horizontal stretch applied to the pipe textures
    pub const PIPE_SCALE_X: f32 = 1.5;
    /// Pipe collision box is narrower than the sprite by this much per side
    pub const PIPE_INSET_X: f32 = 5.0;

    /// Bird spawn point (sprite centre)
    pub const BIRD_START_X: f32 = 120.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    /// Bird collision box inset per side
    pub const BIRD_INSET_X: f32 = 10.0;
    pub const BIRD_INSET_Y: f32 = 10.0;
    /// Degrees of tilt per unit of vertical velocity
    pub const TILT_PER_VELOCITY: f32 = 4.0;
    /// Nose-down tilt ceiling (degrees)
    pub const MAX_TILT: f32 = 90.0;

    /// Fallback sprite sizes when no image was loaded
    pub const DEFAULT_BIRD_SIZE: (f32, f32) = (34.0, 24.0);
    pub const DEFAULT_PIPE_TEXTURE: (f32, f32) = (52.0, 320.0);

    /// Intro animation
    pub const INTRO_FRAME_COUNT: usize = 19;
    pub const INTRO_FRAME_DURATION: f32 = 0.40;
}

/// Largest gap offset that keeps the bottom pipe above the ground
#[inline]
pub fn max_gap_y(gap_size: i32) -> i32 {
    consts::SCREEN_HEIGHT as i32 - consts::GROUND_HEIGHT - gap_size - consts::GAP_FLOOR_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_gap_y() {
        assert_eq!(max_gap_y(150), 225);
        assert_eq!(max_gap_y(110), 265);
    }
}
