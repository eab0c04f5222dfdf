//! Keyboard/mouse menu navigation

use super::layout::{ButtonLayout, Control};
use crate::platform::{InputEvent, Key};

/// Highlight position within a menu of `len` options.
///
/// Starts with nothing highlighted. Down from nothing lands on the first
/// option; Up from nothing lands on the second-to-last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    selected: Option<usize>,
    len: usize,
}

impl MenuCursor {
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            len,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.len,
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        // "Nothing" counts as index -1
        let current = self.selected.map_or(-1, |i| i as i64);
        let n = self.len as i64;
        self.selected = Some((current - 1 + n).rem_euclid(n) as usize);
    }
}

/// What a menu event amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Ignored,
    /// Highlight moved (plays the tick sound)
    Moved,
    /// Option at this index was chosen
    Activate(usize),
}

/// Interpret an event for a menu whose options are `controls`.
///
/// Enter activates the highlighted option; a left click activates the first
/// option under the pointer whether or not anything is highlighted.
pub fn read_menu_input(
    cursor: &mut MenuCursor,
    event: &InputEvent,
    controls: &[Control],
    layout: &ButtonLayout,
) -> MenuInput {
    match event {
        InputEvent::KeyDown(Key::Down) => {
            cursor.next();
            MenuInput::Moved
        }
        InputEvent::KeyDown(Key::Up) => {
            cursor.prev();
            MenuInput::Moved
        }
        InputEvent::KeyDown(Key::Enter) => cursor
            .selected()
            .map_or(MenuInput::Ignored, MenuInput::Activate),
        _ => event
            .left_click()
            .and_then(|pos| layout.hit(controls, pos))
            .map_or(MenuInput::Ignored, MenuInput::Activate),
    }
}
