//! Match driver: frame stepping, rounds, events and CPU opponents

pub mod cpu;
pub mod events;
pub mod report;
pub mod round;
pub mod session;

pub use cpu::{play_cpu_match, CpuController, CpuProfile};
pub use events::CombatEvent;
pub use report::{FighterStats, MatchReport};
pub use round::{check_round_end, RoundEndReason, RoundResult, RoundState};
pub use session::{Duel, FrameInput};
