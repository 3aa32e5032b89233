//! Directional canonicalization
//!
//! Held direction keys collapse to one 8-way token. Opposite keys held
//! together cancel out on that axis.

use serde::{Deserialize, Serialize};

use crate::input::token::InputToken;

/// Raw state of the four direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionalState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalState {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self { up, down, left, right }
    }

    /// Collapse the held keys to 8-way notation
    pub fn canonical(&self) -> InputToken {
        let vertical = match (self.up, self.down) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        };
        let horizontal = match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };

        match (vertical, horizontal) {
            (1, -1) => InputToken::UpLeft,
            (1, 1) => InputToken::UpRight,
            (1, _) => InputToken::Up,
            (-1, -1) => InputToken::DownLeft,
            (-1, 1) => InputToken::DownRight,
            (-1, _) => InputToken::Down,
            (_, -1) => InputToken::Left,
            (_, 1) => InputToken::Right,
            _ => InputToken::Neutral,
        }
    }
}

/// Tracks held direction keys and emits a token only when the canonical direction changes
#[derive(Debug, Clone, Default)]
pub struct DirectionTracker {
    keys: DirectionalState,
    last: Option<InputToken>,
}

impl DirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full key snapshot; returns the new direction if it changed
    pub fn update(&mut self, keys: DirectionalState) -> Option<InputToken> {
        self.keys = keys;
        let token = keys.canonical();
        if self.last == Some(token) {
            return None;
        }
        self.last = Some(token);
        Some(token)
    }

    /// Current held direction
    pub fn current(&self) -> InputToken {
        self.keys.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonals() {
        assert_eq!(
            DirectionalState::new(false, true, false, true).canonical(),
            InputToken::DownRight
        );
        assert_eq!(
            DirectionalState::new(true, false, true, false).canonical(),
            InputToken::UpLeft
        );
    }

    #[test]
    fn test_opposites_cancel() {
        assert_eq!(
            DirectionalState::new(false, false, true, true).canonical(),
            InputToken::Neutral
        );
        assert_eq!(
            DirectionalState::new(true, true, false, true).canonical(),
            InputToken::Right
        );
    }

    #[test]
    fn test_nothing_held_is_neutral() {
        assert_eq!(DirectionalState::default().canonical(), InputToken::Neutral);
    }

    #[test]
    fn test_tracker_only_reports_changes() {
        let mut tracker = DirectionTracker::new();
        let down = DirectionalState::new(false, true, false, false);
        assert_eq!(tracker.update(down), Some(InputToken::Down));
        assert_eq!(tracker.update(down), None);

        let down_right = DirectionalState::new(false, true, false, true);
        assert_eq!(tracker.update(down_right), Some(InputToken::DownRight));
        assert_eq!(tracker.current(), InputToken::DownRight);
    }
}
