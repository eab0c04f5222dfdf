//! Game settings and preferences
//!
//! Persisted as JSON, separately from the leaderboard.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::persistence::TextStore;
use crate::sim::Difficulty;

/// Player preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects (flap, score, death, menu ticks)
    pub sound_on: bool,
    /// Background music
    pub music_on: bool,
    /// Selected difficulty
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            music_on: true,
            difficulty: Difficulty::Easy,
        }
    }
}

impl Settings {
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        self.music_on
    }

    /// Load settings; anything unreadable falls back to defaults
    pub fn load(store: &dyn TextStore) -> Self {
        if let Ok(json) = store.read() {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings
    pub fn save(&self, store: &mut dyn TextStore) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match store.write(&json) {
                Ok(()) => log::debug!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

/// File locations and run options for the native binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory holding images, fonts and audio
    pub assets_dir: PathBuf,
    /// Leaderboard text file
    pub leaderboard: PathBuf,
    /// Settings JSON file
    pub settings: PathBuf,
    /// Frames the headless demo plays
    pub demo_frames: u32,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            leaderboard: PathBuf::from("leaderboard.txt"),
            settings: PathBuf::from("settings.json"),
            demo_frames: 60 * 60,
        }
    }
}

impl Paths {
    /// Defaults overridden by FLAPPY_ASSETS, FLAPPY_LEADERBOARD,
    /// FLAPPY_SETTINGS and FLAPPY_DEMO_FRAMES
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut paths = Self::default();
        if let Some(dir) = lookup("FLAPPY_ASSETS") {
            paths.assets_dir = dir.into();
        }
        if let Some(file) = lookup("FLAPPY_LEADERBOARD") {
            paths.leaderboard = file.into();
        }
        if let Some(file) = lookup("FLAPPY_SETTINGS") {
            paths.settings = file.into();
        }
        if let Some(frames) = lookup("FLAPPY_DEMO_FRAMES") {
            match frames.parse() {
                Ok(n) => paths.demo_frames = n,
                Err(_) => log::warn!("Ignoring invalid FLAPPY_DEMO_FRAMES={:?}", frames),
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.sound_on);
        assert!(s.music_on);
        assert_eq!(s.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_save_load() {
        let mut store = MemoryStore::new();
        let mut s = Settings::default();
        s.toggle_sound();
        s.difficulty = Difficulty::Hard;
        s.save(&mut store);
        assert_eq!(Settings::load(&store), s);
    }

    #[test]
    fn test_malformed_falls_back() {
        let store = MemoryStore::with_contents("{ not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let store = MemoryStore::with_contents(r#"{"music_on": false}"#);
        let s = Settings::load(&store);
        assert!(!s.music_on);
        assert!(s.sound_on);
    }

    #[test]
    fn test_paths_from_lookup() {
        let paths = Paths::from_lookup(|key| match key {
            "FLAPPY_ASSETS" => Some("/tmp/art".to_string()),
            "FLAPPY_DEMO_FRAMES" => Some("120".to_string()),
            _ => None,
        });
        assert_eq!(paths.assets_dir, PathBuf::from("/tmp/art"));
        assert_eq!(paths.demo_frames, 120);
        assert_eq!(paths.leaderboard, PathBuf::from("leaderboard.txt"));

        let bad = Paths::from_lookup(|key| (key == "FLAPPY_DEMO_FRAMES").then(|| "lots".to_string()));
        assert_eq!(bad.demo_frames, Paths::default().demo_frames);
    }
}
