//! High score leaderboard system
//!
//! Tracks the top 3 scores, persisted as three newline-delimited integers.

use serde::{Deserialize, Serialize};

use crate::persistence::TextStore;

/// Number of scores kept
pub const MAX_HIGH_SCORES: usize = 3;

/// Top-3 leaderboard, always sorted descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    entries: [u32; MAX_HIGH_SCORES],
}

impl Leaderboard {
    /// Empty leaderboard (all zeros)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in any order
    pub fn from_entries(mut entries: [u32; MAX_HIGH_SCORES]) -> Self {
        entries.sort_unstable_by(|a, b| b.cmp(a));
        Self { entries }
    }

    pub fn entries(&self) -> [u32; MAX_HIGH_SCORES] {
        self.entries
    }

    /// Get the top score
    pub fn top_score(&self) -> u32 {
        self.entries[0]
    }

    /// Parse persisted text. Entries are whitespace separated; each one is
    /// read as a leading signed decimal, so `12abc` yields 12 and ends the
    /// read there. The first unreadable entry and everything after it become
    /// 0. Negative entries count as 0.
    pub fn parse(text: &str) -> Self {
        let mut entries = [0; MAX_HIGH_SCORES];
        let mut tokens = text.split_whitespace();
        for slot in entries.iter_mut() {
            let Some((value, whole)) = tokens.next().and_then(leading_int) else {
                break;
            };
            match u32::try_from(value) {
                Ok(value) => *slot = value,
                Err(_) if value < 0 => *slot = 0,
                Err(_) => break,
            }
            if !whole {
                break;
            }
        }
        Self::from_entries(entries)
    }

    /// Persisted form: one score per line
    pub fn to_text(&self) -> String {
        self.entries.iter().map(|score| format!("{score}\n")).collect()
    }

    /// Merge a finished run's score. Returns the rank achieved (1-indexed)
    /// or None if it did not make the top 3. Equal scores already on the
    /// board stay ahead of the new one.
    pub fn update(&mut self, score: u32) -> Option<usize> {
        let pos = self.entries.iter().position(|&e| score > e)?;
        self.entries.copy_within(pos..MAX_HIGH_SCORES - 1, pos + 1);
        self.entries[pos] = score;
        Some(pos + 1)
    }

    /// Display strings for the leaderboard screen ("1. 300")
    pub fn display_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, score)| format!("{}. {}", i + 1, score))
            .collect()
    }

    /// Load from storage; missing or malformed data degrades to zeros
    pub fn load(store: &dyn TextStore) -> Self {
        match store.read() {
            Ok(text) => {
                let board = Self::parse(&text);
                log::info!("Loaded leaderboard {:?}", board.entries);
                board
            }
            Err(e) => {
                log::info!("No leaderboard found ({}), starting fresh", e);
                Self::new()
            }
        }
    }

    /// Write all three entries, overwriting what was stored
    pub fn save(&self, store: &mut dyn TextStore) {
        match store.write(&self.to_text()) {
            Ok(()) => log::info!("Leaderboard saved {:?}", self.entries),
            Err(e) => log::warn!("Failed to save leaderboard: {}", e),
        }
    }

    /// Merge a score and persist immediately
    pub fn record(&mut self, score: u32, store: &mut dyn TextStore) -> Option<usize> {
        let rank = self.update(score);
        self.save(store);
        rank
    }
}

/// Leading `[+-]digits` of a token, and whether it spans the whole token
fn leading_int(token: &str) -> Option<(i64, bool)> {
    let sign = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    let value = token[..end].parse::<i64>().ok()?;
    Some((value, end == token.len()))
}
