//! Discrete input tokens
//!
//! The input layer reports one token per key transition. Directions are
//! already collapsed to 8-way notation by the time they become tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::KombatError;

/// A single buffered input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputToken {
    Left,
    Right,
    Up,
    Down,
    DownLeft,
    DownRight,
    UpLeft,
    UpRight,
    Neutral,
    Punch,
    Kick,
    Block,
    Special,
}

impl InputToken {
    /// Every token, directions first
    pub const ALL: [InputToken; 13] = [
        InputToken::Left,
        InputToken::Right,
        InputToken::Up,
        InputToken::Down,
        InputToken::DownLeft,
        InputToken::DownRight,
        InputToken::UpLeft,
        InputToken::UpRight,
        InputToken::Neutral,
        InputToken::Punch,
        InputToken::Kick,
        InputToken::Block,
        InputToken::Special,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InputToken::Left => "left",
            InputToken::Right => "right",
            InputToken::Up => "up",
            InputToken::Down => "down",
            InputToken::DownLeft => "down-left",
            InputToken::DownRight => "down-right",
            InputToken::UpLeft => "up-left",
            InputToken::UpRight => "up-right",
            InputToken::Neutral => "neutral",
            InputToken::Punch => "punch",
            InputToken::Kick => "kick",
            InputToken::Block => "block",
            InputToken::Special => "special",
        }
    }

    /// Is this a stick position (including neutral)?
    pub fn is_direction(self) -> bool {
        !self.is_button()
    }

    /// Is this a button press?
    pub fn is_button(self) -> bool {
        matches!(
            self,
            InputToken::Punch | InputToken::Kick | InputToken::Block | InputToken::Special
        )
    }

    /// Does this direction include down?
    pub fn is_crouching(self) -> bool {
        matches!(
            self,
            InputToken::Down | InputToken::DownLeft | InputToken::DownRight
        )
    }

    /// Swap left and right, leaving vertical components and buttons alone
    pub fn mirrored(self) -> Self {
        match self {
            InputToken::Left => InputToken::Right,
            InputToken::Right => InputToken::Left,
            InputToken::DownLeft => InputToken::DownRight,
            InputToken::DownRight => InputToken::DownLeft,
            InputToken::UpLeft => InputToken::UpRight,
            InputToken::UpRight => InputToken::UpLeft,
            other => other,
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputToken {
    type Err = KombatError;

    /// Accepts the canonical names plus `back`/`forward` style aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim().to_lowercase().as_str() {
            "left" | "back" => InputToken::Left,
            "right" | "forward" => InputToken::Right,
            "up" => InputToken::Up,
            "down" => InputToken::Down,
            "down-left" | "down-back" => InputToken::DownLeft,
            "down-right" | "down-forward" => InputToken::DownRight,
            "up-left" | "up-back" => InputToken::UpLeft,
            "up-right" | "up-forward" => InputToken::UpRight,
            "neutral" => InputToken::Neutral,
            "punch" => InputToken::Punch,
            "kick" => InputToken::Kick,
            "block" => InputToken::Block,
            "special" => InputToken::Special,
            other => return Err(KombatError::InvalidPattern(format!("unknown token '{}'", other))),
        };
        Ok(token)
    }
}
