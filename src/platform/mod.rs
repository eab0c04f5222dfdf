//! Platform abstraction layer
//!
//! The host translates its window/input library's events into this small
//! normalized set before handing them to the session.

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Space,
    Escape,
    /// Anything else (still counts as "any key" on the intro)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A normalized input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Close,
    KeyDown(Key),
    /// Mouse press at a position in screen coordinates
    MouseDown { button: MouseButton, pos: Vec2 },
}

impl InputEvent {
    /// Left click position, if this is one
    pub fn left_click(&self) -> Option<Vec2> {
        match self {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } => Some(*pos),
            _ => None,
        }
    }

    pub fn click(x: f32, y: f32) -> Self {
        InputEvent::MouseDown {
            button: MouseButton::Left,
            pos: Vec2::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_click() {
        assert_eq!(InputEvent::click(3.0, 4.0).left_click(), Some(Vec2::new(3.0, 4.0)));
        let right = InputEvent::MouseDown {
            button: MouseButton::Right,
            pos: Vec2::ZERO,
        };
        assert_eq!(right.left_click(), None);
        assert_eq!(InputEvent::KeyDown(Key::Enter).left_click(), None);
    }
}
