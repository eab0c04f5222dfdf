//! Interactive controls and where they sit on screen
//!
//! Buttons are stacked in centred columns; their sizes come from the loaded
//! button images, so the layout is recomputed whenever a toggle button's
//! image is swapped.

use std::collections::HashMap;

use glam::Vec2;
use serde::Serialize;

use crate::assets::{AssetCatalog, music_button, sound_button};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::Rect;

/// Size used when a button image reported no dimensions
pub const DEFAULT_BUTTON_SIZE: (f32, f32) = (200.0, 60.0);
/// Scale of the difficulty indicator next to the settings button
pub const INDICATOR_SCALE: f32 = 0.6;

/// Every on-screen control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Control {
    // Main menu
    NewGame,
    Settings,
    Leaderboard,
    Exit,
    // Settings
    Difficulty,
    Sound,
    Music,
    SettingsBack,
    // Difficulty
    Easy,
    Hard,
    DifficultyBack,
    // Pause
    Resume,
    Restart,
    PauseMainMenu,
    PauseExit,
    // Game over
    PlayAgain,
    GameOverMainMenu,
    GameOverExit,
    // Leaderboard
    LeaderboardBack,
    // Settings decoration (not clickable)
    EasyIndicator,
    HardIndicator,
}

impl Control {
    /// Image this control is drawn with
    pub fn asset_name(&self, settings: &Settings) -> &'static str {
        match self {
            Control::NewGame => "btn-new-game",
            Control::Settings => "btn-settings",
            Control::Leaderboard => "btn-leaderboard",
            Control::Exit => "btn-exit",
            Control::Difficulty => "btn-difficulty",
            Control::Sound => sound_button(settings.sound_on),
            Control::Music => music_button(settings.music_on),
            Control::SettingsBack | Control::DifficultyBack | Control::LeaderboardBack => {
                "btn-back"
            }
            Control::Easy | Control::EasyIndicator => "btn-easy",
            Control::Hard | Control::HardIndicator => "btn-hard",
            Control::Resume => "btn-resume",
            Control::Restart => "btn-restart",
            Control::PauseMainMenu => "btn-pause-main",
            Control::PauseExit => "btn-pause-exit",
            Control::PlayAgain => "btn-again",
            Control::GameOverMainMenu => "btn-over-main",
            Control::GameOverExit => "btn-over-exit",
        }
    }
}

/// Screen rectangles of all controls
#[derive(Debug, Clone, Default)]
pub struct ButtonLayout {
    rects: HashMap<Control, Rect>,
}

impl ButtonLayout {
    pub fn compute(assets: &AssetCatalog, settings: &Settings) -> Self {
        let size_of = |control: Control| {
            assets
                .image_size(control.asset_name(settings))
                .unwrap_or(Vec2::from(DEFAULT_BUTTON_SIZE))
        };

        let mut layout = Self::default();
        let mut column = |controls: &[Control], start_y: f32, spacing: f32| {
            for (i, &control) in controls.iter().enumerate() {
                let size = size_of(control);
                let x = SCREEN_WIDTH / 2.0 - size.x / 2.0;
                let y = start_y + spacing * i as f32;
                layout.rects.insert(control, Rect::new(x, y, size.x, size.y));
            }
        };

        column(
            &[Control::NewGame, Control::Settings, Control::Leaderboard, Control::Exit],
            180.0,
            80.0,
        );
        column(
            &[Control::Difficulty, Control::Sound, Control::Music, Control::SettingsBack],
            120.0,
            70.0,
        );
        column(&[Control::Easy, Control::Hard, Control::DifficultyBack], 180.0, 80.0);
        column(
            &[Control::Resume, Control::Restart, Control::PauseMainMenu, Control::PauseExit],
            140.0,
            70.0,
        );
        column(
            &[Control::PlayAgain, Control::GameOverMainMenu, Control::GameOverExit],
            200.0,
            80.0,
        );
        column(&[Control::LeaderboardBack], SCREEN_HEIGHT - 100.0, 0.0);

        if let Some(anchor) = layout.rects.get(&Control::Difficulty).copied() {
            for indicator in [Control::EasyIndicator, Control::HardIndicator] {
                let size = size_of(indicator) * INDICATOR_SCALE;
                let rect = Rect::new(anchor.right() + 30.0, anchor.top() + 8.0, size.x, size.y);
                layout.rects.insert(indicator, rect);
            }
        }

        layout
    }

    pub fn bounds(&self, control: Control) -> Option<Rect> {
        self.rects.get(&control).copied()
    }

    /// Index of the first control in `controls` under `pos`
    pub fn hit(&self, controls: &[Control], pos: Vec2) -> Option<usize> {
        controls
            .iter()
            .position(|c| self.bounds(*c).is_some_and(|r| r.contains(pos)))
    }
}
