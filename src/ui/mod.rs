//! Screens, menus and what gets drawn on them
//!
//! Each screen is a `ScreenHandler`. The session owns exactly one handler at
//! a time and swaps it when a handler returns a `Transition`.

pub mod layout;
pub mod menu;
pub mod screens;
pub mod view;

use serde::Serialize;

use crate::platform::InputEvent;
use crate::session::World;

pub use layout::{ButtonLayout, Control};
pub use menu::{MenuCursor, MenuInput};
pub use view::ViewModel;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    Intro,
    MainMenu,
    Settings,
    Difficulty,
    Leaderboard,
    Playing,
    Paused,
    GameOver,
}

/// What a handler asks the session to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(Screen),
    /// Reset the run and enter `Playing` armed
    NewRun,
    /// Stop the main loop
    Quit,
}

/// Behaviour of one screen
pub trait ScreenHandler {
    fn screen(&self) -> Screen;

    /// React to one input event
    fn handle(&mut self, event: &InputEvent, world: &mut World) -> Transition;

    /// Per-frame work after input has been drained
    fn update(&mut self, _dt: f32, _world: &mut World) -> Transition {
        Transition::Stay
    }

    /// Highlighted menu option, if any
    fn highlighted(&self) -> Option<usize> {
        None
    }

    /// Snapshot for the renderer
    fn view(&self, world: &World) -> ViewModel {
        ViewModel::build(self.screen(), self.highlighted(), world)
    }
}
