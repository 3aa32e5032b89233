//! Fighter phase state machine
//!
//! A fighter is always in exactly one phase. Timed phases (hurt, blocking,
//! attacking, special) carry a frame timer and fall back to `Idle` when it
//! runs out; movement phases follow the held direction.

use serde::{Deserialize, Serialize};

use crate::combat::attack::AttackType;
use crate::input::token::InputToken;

/// What the fighter is doing, as shown by the animation layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FighterPhase {
    #[default]
    Idle,
    Walking,
    Crouching,
    Jumping,
    /// Performing an ordinary attack; `cancelable` opens once it makes contact
    Attacking { attack: AttackType, cancelable: bool },
    /// Performing a special or super
    Special { name: String },
    Hurt,
    Blocking,
    KnockedOut,
}

impl FighterPhase {
    /// Phases that end on their own when the timer expires
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            FighterPhase::Attacking { .. }
                | FighterPhase::Special { .. }
                | FighterPhase::Hurt
                | FighterPhase::Blocking
        )
    }

    /// Phases the held direction may replace
    pub fn is_neutral(&self) -> bool {
        matches!(
            self,
            FighterPhase::Idle | FighterPhase::Walking | FighterPhase::Crouching | FighterPhase::Jumping
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            FighterPhase::Idle => "idle",
            FighterPhase::Walking => "walking",
            FighterPhase::Crouching => "crouching",
            FighterPhase::Jumping => "jumping",
            FighterPhase::Attacking { .. } => "attacking",
            FighterPhase::Special { .. } => "special",
            FighterPhase::Hurt => "hurt",
            FighterPhase::Blocking => "blocking",
            FighterPhase::KnockedOut => "knocked_out",
        }
    }
}

/// Phase plus the frames left in it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FighterState {
    #[serde(flatten)]
    pub phase: FighterPhase,
    pub timer: u32,
}

impl FighterState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn hurt(frames: u32) -> Self {
        Self {
            phase: FighterPhase::Hurt,
            timer: frames,
        }
    }

    pub fn blocking(frames: u32) -> Self {
        Self {
            phase: FighterPhase::Blocking,
            timer: frames,
        }
    }

    pub fn attacking(attack: AttackType, frames: u32) -> Self {
        Self {
            phase: FighterPhase::Attacking {
                attack,
                cancelable: false,
            },
            timer: frames,
        }
    }

    pub fn special(name: impl Into<String>, frames: u32) -> Self {
        Self {
            phase: FighterPhase::Special { name: name.into() },
            timer: frames,
        }
    }

    pub fn knocked_out() -> Self {
        Self {
            phase: FighterPhase::KnockedOut,
            timer: 0,
        }
    }

    /// Can the current phase be cancelled into a special?
    pub fn is_cancelable(&self) -> bool {
        matches!(
            self.phase,
            FighterPhase::Attacking {
                cancelable: true,
                ..
            }
        )
    }

    /// Open the cancel window of an attack that made contact
    pub fn with_cancel_window(self) -> Self {
        match self.phase {
            FighterPhase::Attacking { attack, .. } => Self {
                phase: FighterPhase::Attacking {
                    attack,
                    cancelable: true,
                },
                timer: self.timer,
            },
            _ => self,
        }
    }

    /// Follow the held direction while in a neutral phase
    pub fn with_movement(self, held: InputToken) -> Self {
        if !self.phase.is_neutral() {
            return self;
        }
        let phase = match held {
            InputToken::Down | InputToken::DownLeft | InputToken::DownRight => FighterPhase::Crouching,
            InputToken::Up | InputToken::UpLeft | InputToken::UpRight => FighterPhase::Jumping,
            InputToken::Left | InputToken::Right => FighterPhase::Walking,
            _ => FighterPhase::Idle,
        };
        Self { phase, timer: 0 }
    }

    /// Advance one frame
    pub fn tick(self) -> Self {
        if !self.phase.is_timed() {
            return self;
        }
        match self.timer {
            0 | 1 => Self::idle(),
            timer => Self {
                timer: timer - 1,
                ..self
            },
        }
    }
}
