//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod bird;
pub mod collision;
pub mod difficulty;
pub mod pipes;
pub mod rect;
pub mod state;
pub mod tick;

pub use bird::{Bird, WingPose};
pub use collision::{DeathCause, Outcome, evaluate};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use pipes::{ObstacleStream, PipePair, PipeQueue};
pub use rect::Rect;
pub use state::{GameEvent, RunState, SpriteMetrics};
pub use tick::{autopilot_wants_flap, tick};
