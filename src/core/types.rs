//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation frame counter (one per rendered frame)
pub type Frame = u64;

/// Wall-clock milliseconds, used only to age input buffer entries
pub type Millis = u64;

/// Which of the two players a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn both() -> [PlayerSlot; 2] {
        [PlayerSlot::One, PlayerSlot::Two]
    }
}

/// Horizontal facing of a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Convert a frame number to the millisecond clock at 60 frames per second
pub fn frame_to_millis(frame: Frame) -> Millis {
    frame * 50 / 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_slot() {
        assert_eq!(PlayerSlot::One.opponent(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::Two.opponent().index(), 0);
    }

    #[test]
    fn test_frame_clock() {
        assert_eq!(frame_to_millis(0), 0);
        assert_eq!(frame_to_millis(3), 50);
        assert_eq!(frame_to_millis(60), 1000);
    }
}
