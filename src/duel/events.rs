//! Events emitted by the duel driver for the presentation layer

use serde::{Deserialize, Serialize};

use crate::combat::attack::AttackType;
use crate::core::types::{Frame, PlayerSlot};
use crate::duel::round::RoundEndReason;

/// Something that happened on a given frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    /// An ordinary attack came out
    AttackStarted {
        frame: Frame,
        player: PlayerSlot,
        attack: String,
        attack_type: AttackType,
    },
    /// A special or super came out
    SpecialPerformed {
        frame: Frame,
        player: PlayerSlot,
        name: String,
        is_super: bool,
        meter_spent: u32,
        cancelled: bool,
    },
    Hit {
        frame: Frame,
        attacker: PlayerSlot,
        damage: u32,
        combo: u32,
        defender_health: u32,
    },
    Blocked {
        frame: Frame,
        attacker: PlayerSlot,
        chip: u32,
        defender_health: u32,
    },
    Whiff {
        frame: Frame,
        attacker: PlayerSlot,
    },
    RoundOver {
        frame: Frame,
        round: u32,
        winner: Option<PlayerSlot>,
        reason: RoundEndReason,
    },
    MatchOver {
        frame: Frame,
        winner: Option<PlayerSlot>,
    },
}

impl CombatEvent {
    pub fn frame(&self) -> Frame {
        match self {
            CombatEvent::AttackStarted { frame, .. }
            | CombatEvent::SpecialPerformed { frame, .. }
            | CombatEvent::Hit { frame, .. }
            | CombatEvent::Blocked { frame, .. }
            | CombatEvent::Whiff { frame, .. }
            | CombatEvent::RoundOver { frame, .. }
            | CombatEvent::MatchOver { frame, .. } => *frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_tagged() {
        let event = CombatEvent::Hit {
            frame: 12,
            attacker: PlayerSlot::One,
            damage: 10,
            combo: 2,
            defender_health: 78,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "hit");
        assert_eq!(json["damage"], 10);
        assert_eq!(event.frame(), 12);
    }
}
