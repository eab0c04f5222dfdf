//! Render snapshot
//!
//! The renderer is a host concern; it gets a `ViewModel` each frame and
//! draws it back to front: background, playfield, overlay, texts, controls.

use glam::Vec2;
use serde::Serialize;

use super::Screen;
use super::layout::Control;
use super::screens::menu_controls;
use crate::session::World;
use crate::sim::{Difficulty, Rect, WingPose};

pub const TITLE: &str = "Flappy Bird by FMT Studios";
pub const START_PROMPT: &str = "PRESS SPACE OR CLICK TO START";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub control: Control,
    pub asset: &'static str,
    pub rect: Rect,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirdView {
    pub pos: Vec2,
    pub size: Vec2,
    /// Degrees, clockwise
    pub tilt: f32,
    pub pose: WingPose,
}

impl BirdView {
    pub fn asset(&self) -> &'static str {
        match self.pose {
            WingPose::Up => "bird-up",
            WingPose::Down => "bird-down",
        }
    }
}

/// Pipes and bird, drawn on Playing, Paused and GameOver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayfieldView {
    pub bird: BirdView,
    /// (top, bottom) per pair, front first
    pub pipes: Vec<(Rect, Rect)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub screen: Screen,
    /// Intro frame to show; `None` draws only the background colour
    pub intro_frame: Option<usize>,
    pub title: Option<&'static str>,
    pub playfield: Option<PlayfieldView>,
    /// Live score, top of the screen
    pub score: Option<u32>,
    pub start_prompt: bool,
    /// Darken the playfield under the pause menu
    pub dimmed: bool,
    /// "Score: N" on the game over screen
    pub final_score: Option<String>,
    pub leaderboard: Vec<String>,
    pub controls: Vec<ControlView>,
}

impl ViewModel {
    pub fn build(screen: Screen, highlighted: Option<usize>, world: &World) -> Self {
        let run = &world.run;
        let in_game = matches!(screen, Screen::Playing | Screen::Paused | Screen::GameOver);

        let playfield = in_game.then(|| PlayfieldView {
            bird: BirdView {
                pos: run.bird.pos,
                size: run.bird.size,
                tilt: run.bird.tilt,
                pose: run.bird.pose,
            },
            pipes: run.obstacles.queue.iter().map(|p| (p.top, p.bottom)).collect(),
        });

        let title = match screen {
            Screen::MainMenu => Some(TITLE),
            Screen::Leaderboard => Some("LEADERBOARD"),
            Screen::GameOver => Some("GAME OVER"),
            _ => None,
        };

        let mut controls = Vec::new();
        for (i, &control) in menu_controls(screen).iter().enumerate() {
            let highlighted = highlighted == Some(i)
                || (screen == Screen::Difficulty
                    && highlighted.is_none()
                    && default_difficulty_highlight(control, world.settings.difficulty));
            if let Some(view) = control_view(world, control, highlighted) {
                controls.push(view);
            }
        }
        if screen == Screen::Settings {
            let indicator = match world.settings.difficulty {
                Difficulty::Easy => Control::EasyIndicator,
                Difficulty::Hard => Control::HardIndicator,
            };
            controls.extend(control_view(world, indicator, false));
        }

        Self {
            screen,
            intro_frame: None,
            title,
            playfield,
            score: (screen == Screen::Playing).then_some(run.score),
            start_prompt: screen == Screen::Playing && !run.started,
            dimmed: screen == Screen::Paused,
            final_score: (screen == Screen::GameOver).then(|| format!("Score: {}", run.score)),
            leaderboard: if screen == Screen::Leaderboard {
                world.leaderboard.display_lines()
            } else {
                Vec::new()
            },
            controls,
        }
    }

    pub fn highlighted_controls(&self) -> Vec<Control> {
        self.controls
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.control)
            .collect()
    }
}

/// With nothing highlighted, the difficulty menu marks the active one
fn default_difficulty_highlight(control: Control, difficulty: Difficulty) -> bool {
    matches!(
        (control, difficulty),
        (Control::Easy, Difficulty::Easy) | (Control::Hard, Difficulty::Hard)
    )
}

fn control_view(world: &World, control: Control, highlighted: bool) -> Option<ControlView> {
    let rect = world.layout.bounds(control)?;
    Some(ControlView {
        control,
        asset: control.asset_name(&world.settings),
        rect,
        highlighted,
    })
}
