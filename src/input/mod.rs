//! Input buffering and motion recognition

pub mod buffer;
pub mod direction;
pub mod pattern;
pub mod recognizer;
pub mod token;

pub use buffer::{InputBuffer, InputEntry};
pub use direction::{DirectionTracker, DirectionalState};
pub use pattern::{matches_pattern, MotionPattern, PatternSlot};
pub use recognizer::{
    check_special_move_inputs, check_super_move_inputs, select_move, MoveSelection, NormalAttack,
};
pub use token::InputToken;
