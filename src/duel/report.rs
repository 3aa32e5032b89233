//! Match statistics and the final report

use serde::{Deserialize, Serialize};

use crate::core::types::{Frame, PlayerSlot};
use crate::duel::round::RoundResult;

/// Running totals for one side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterStats {
    pub attacks: u32,
    pub hits: u32,
    pub blocked: u32,
    pub whiffs: u32,
    pub specials: u32,
    pub supers: u32,
    pub damage_dealt: u32,
    pub max_combo: u32,
}

impl FighterStats {
    /// Fraction of attacks that connected cleanly
    pub fn hit_rate(&self) -> f32 {
        if self.attacks == 0 {
            return 0.0;
        }
        self.hits as f32 / self.attacks as f32
    }
}

/// Summary of a finished (or abandoned) match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub fighters: [String; 2],
    /// Name of the winner, `None` on a draw or unfinished match
    pub winner: Option<String>,
    pub winner_slot: Option<PlayerSlot>,
    pub finished: bool,
    pub rounds: Vec<RoundResult>,
    pub total_frames: Frame,
    pub stats: [FighterStats; 2],
}

impl MatchReport {
    pub fn summary(&self) -> String {
        let result = match (&self.winner, self.finished) {
            (Some(name), _) => format!("{} wins", name),
            (None, true) => "draw".to_string(),
            (None, false) => "unfinished".to_string(),
        };
        format!(
            "{} vs {}: {} after {} round(s), {} frames",
            self.fighters[0],
            self.fighters[1],
            result,
            self.rounds.len(),
            self.total_frames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        let stats = FighterStats {
            attacks: 4,
            hits: 3,
            ..Default::default()
        };
        assert!((stats.hit_rate() - 0.75).abs() < 1e-6);
        assert_eq!(FighterStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_summary_mentions_winner() {
        let report = MatchReport {
            fighters: ["BadMan".into(), "Jester".into()],
            winner: Some("Jester".into()),
            winner_slot: Some(PlayerSlot::Two),
            finished: true,
            rounds: Vec::new(),
            total_frames: 600,
            stats: Default::default(),
        };
        assert!(report.summary().contains("Jester wins"));
    }
}
