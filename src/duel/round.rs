//! Round and match bookkeeping

use serde::{Deserialize, Serialize};

use crate::combat::fighter::Fighter;
use crate::core::config::CombatConfig;
use crate::core::types::PlayerSlot;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEndReason {
    KnockOut,
    DoubleKnockOut,
    TimeOut,
}

/// Result of one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    /// `None` on a draw
    pub winner: Option<PlayerSlot>,
    pub reason: RoundEndReason,
    pub frames: u32,
}

/// Clock and score of the match in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub number: u32,
    pub frames_remaining: u32,
    pub wins: [u8; 2],
    pub results: Vec<RoundResult>,
}

impl RoundState {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            number: 1,
            frames_remaining: config.round_time_frames,
            wins: [0, 0],
            results: Vec::new(),
        }
    }

    /// Most rounds a match may run before it is called on wins
    pub fn max_rounds(config: &CombatConfig) -> u32 {
        config.rounds_to_win as u32 * 2 + 1
    }

    /// Count down the round clock
    pub fn tick(&mut self) {
        self.frames_remaining = self.frames_remaining.saturating_sub(1);
    }

    pub fn wins_for(&self, slot: PlayerSlot) -> u8 {
        self.wins[slot.index()]
    }

    /// Record a finished round and advance the round counter
    pub fn record(&mut self, result: RoundResult, config: &CombatConfig) {
        if let Some(winner) = result.winner {
            self.wins[winner.index()] += 1;
        }
        self.results.push(result);
        self.number += 1;
        self.frames_remaining = config.round_time_frames;
    }

    /// Winner of the match, once decided
    ///
    /// Returns `Some(None)` for a drawn match that ran out of rounds.
    pub fn match_winner(&self, config: &CombatConfig) -> Option<Option<PlayerSlot>> {
        for slot in PlayerSlot::both() {
            if self.wins_for(slot) >= config.rounds_to_win {
                return Some(Some(slot));
            }
        }

        if self.results.len() as u32 >= Self::max_rounds(config) {
            let [one, two] = self.wins;
            return Some(match one.cmp(&two) {
                std::cmp::Ordering::Greater => Some(PlayerSlot::One),
                std::cmp::Ordering::Less => Some(PlayerSlot::Two),
                std::cmp::Ordering::Equal => None,
            });
        }

        None
    }
}

/// Check whether the round is over after this frame's resolution
pub fn check_round_end(fighters: &[Fighter; 2], round: &RoundState, config: &CombatConfig) -> Option<RoundResult> {
    let elapsed = config.round_time_frames - round.frames_remaining.min(config.round_time_frames);
    let [one, two] = fighters;

    let (winner, reason) = match (one.is_knocked_out(), two.is_knocked_out()) {
        (true, true) => (None, RoundEndReason::DoubleKnockOut),
        (false, true) => (Some(PlayerSlot::One), RoundEndReason::KnockOut),
        (true, false) => (Some(PlayerSlot::Two), RoundEndReason::KnockOut),
        (false, false) if round.frames_remaining == 0 => {
            let winner = match one.health.cmp(&two.health) {
                std::cmp::Ordering::Greater => Some(PlayerSlot::One),
                std::cmp::Ordering::Less => Some(PlayerSlot::Two),
                std::cmp::Ordering::Equal => None,
            };
            (winner, RoundEndReason::TimeOut)
        }
        (false, false) => return None,
    };

    Some(RoundResult {
        round: round.number,
        winner,
        reason,
        frames: elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(config: &CombatConfig) -> [Fighter; 2] {
        [Fighter::new("BadMan", config), Fighter::new("Jester", config)]
    }

    #[test]
    fn test_no_end_while_both_standing() {
        let config = CombatConfig::default();
        let round = RoundState::new(&config);
        assert!(check_round_end(&pair(&config), &round, &config).is_none());
    }

    #[test]
    fn test_knockout_ends_round() {
        let config = CombatConfig::default();
        let round = RoundState::new(&config);
        let mut fighters = pair(&config);
        fighters[1].health = 0;

        let result = check_round_end(&fighters, &round, &config).unwrap();
        assert_eq!(result.winner, Some(PlayerSlot::One));
        assert_eq!(result.reason, RoundEndReason::KnockOut);
    }

    #[test]
    fn test_timeout_goes_to_higher_health() {
        let config = CombatConfig::default();
        let mut round = RoundState::new(&config);
        round.frames_remaining = 0;
        let mut fighters = pair(&config);
        fighters[0].health = 40;
        fighters[1].health = 41;

        let result = check_round_end(&fighters, &round, &config).unwrap();
        assert_eq!(result.winner, Some(PlayerSlot::Two));
        assert_eq!(result.reason, RoundEndReason::TimeOut);
        assert_eq!(result.frames, config.round_time_frames);

        fighters[1].health = 40;
        let result = check_round_end(&fighters, &round, &config).unwrap();
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_match_won_at_rounds_to_win() {
        let config = CombatConfig::default();
        let mut round = RoundState::new(&config);
        let win = |n| RoundResult {
            round: n,
            winner: Some(PlayerSlot::Two),
            reason: RoundEndReason::KnockOut,
            frames: 100,
        };

        round.record(win(1), &config);
        assert_eq!(round.match_winner(&config), None);
        round.record(win(2), &config);
        assert_eq!(round.match_winner(&config), Some(Some(PlayerSlot::Two)));
        assert_eq!(round.number, 3);
    }

    #[test]
    fn test_drawn_rounds_eventually_end_match() {
        let config = CombatConfig::default();
        let mut round = RoundState::new(&config);
        for n in 1..=RoundState::max_rounds(&config) {
            round.record(
                RoundResult {
                    round: n,
                    winner: None,
                    reason: RoundEndReason::TimeOut,
                    frames: config.round_time_frames,
                },
                &config,
            );
        }
        assert_eq!(round.match_winner(&config), Some(None));
    }
}
