//! Per-fighter combat timers and combo bookkeeping
//!
//! `CombatState` is a small `Copy` value. Ticking and resolution return a new
//! value; nothing mutates a shared state in place.

use serde::{Deserialize, Serialize};

use crate::core::config::CombatConfig;

/// Transient combat state owned by exactly one fighter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Frames left unable to act after being hit
    pub hitstun: u32,
    /// Frames left unable to act after blocking
    pub blockstun: u32,
    /// Frames left that cannot be hit
    pub invulnerable_frames: u32,
    /// Hits taken in the current combo
    pub combo_count: u32,
    /// Damage taken in the current combo
    pub combo_damage: u32,
    /// Multiplier on the next hit's damage, in (0, 1]
    pub combo_scaling: f64,
    /// Frames until the current combo drops
    pub last_hit_timer: u32,
    /// Signed frame advantage after this fighter's last exchange
    pub advantage: i32,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            hitstun: 0,
            blockstun: 0,
            invulnerable_frames: 0,
            combo_count: 0,
            combo_damage: 0,
            combo_scaling: 1.0,
            last_hit_timer: 0,
            advantage: 0,
        }
    }
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Neither hitstun nor blockstun is running
    pub fn is_free(&self) -> bool {
        self.hitstun == 0 && self.blockstun == 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_frames > 0
    }

    pub fn in_combo(&self) -> bool {
        self.combo_count > 0
    }

    /// The same state with combo fields back at (0, 0, 1.0)
    pub fn with_combo_reset(self) -> Self {
        Self {
            combo_count: 0,
            combo_damage: 0,
            combo_scaling: 1.0,
            ..self
        }
    }

    /// The same state with one more hit recorded in the combo
    pub fn with_hit_recorded(self, damage: u32, hitstun: u32, config: &CombatConfig) -> Self {
        let combo_count = self.combo_count.saturating_add(1);
        Self {
            hitstun,
            last_hit_timer: config.combo_timeout_frames,
            combo_count,
            combo_damage: self.combo_damage.saturating_add(damage),
            combo_scaling: config.scaling_for(combo_count),
            ..self
        }
    }

    pub fn with_invulnerability(self, frames: u32) -> Self {
        Self {
            invulnerable_frames: self.invulnerable_frames.max(frames),
            ..self
        }
    }
}

/// Advance a combat state by one frame
///
/// Stun and invulnerability timers count down to zero and stop there. The
/// combo timer counts down only while running; reaching zero drops the combo.
/// Ticking a quiet state leaves it unchanged.
pub fn update_combat_state(state: CombatState) -> CombatState {
    let mut next = CombatState {
        hitstun: state.hitstun.saturating_sub(1),
        blockstun: state.blockstun.saturating_sub(1),
        invulnerable_frames: state.invulnerable_frames.saturating_sub(1),
        ..state
    };

    if state.last_hit_timer > 0 {
        next.last_hit_timer = state.last_hit_timer - 1;
        if next.last_hit_timer == 0 {
            tracing::trace!(combo_count = state.combo_count, "combo dropped");
            next = next.with_combo_reset();
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_free() {
        let state = CombatState::default();
        assert!(state.is_free());
        assert!(!state.is_invulnerable());
        assert_eq!(state.combo_scaling, 1.0);
    }

    #[test]
    fn test_timers_count_down_and_floor() {
        let state = CombatState {
            hitstun: 2,
            blockstun: 1,
            invulnerable_frames: 3,
            ..Default::default()
        };

        let state = update_combat_state(state);
        assert_eq!((state.hitstun, state.blockstun, state.invulnerable_frames), (1, 0, 2));

        let state = update_combat_state(update_combat_state(update_combat_state(state)));
        assert_eq!((state.hitstun, state.blockstun, state.invulnerable_frames), (0, 0, 0));
    }

    #[test]
    fn test_quiet_tick_is_identity() {
        let quiet = CombatState {
            advantage: -3,
            ..Default::default()
        };
        assert_eq!(update_combat_state(quiet), quiet);
    }

    #[test]
    fn test_combo_resets_when_timer_expires() {
        let config = CombatConfig::default();
        let mut state = CombatState::default()
            .with_hit_recorded(12, 12, &config)
            .with_hit_recorded(10, 12, &config);
        assert_eq!(state.combo_count, 2);

        for _ in 0..config.combo_timeout_frames - 1 {
            state = update_combat_state(state);
        }
        assert_eq!(state.combo_count, 2);
        assert_eq!(state.last_hit_timer, 1);

        state = update_combat_state(state);
        assert_eq!(state.combo_count, 0);
        assert_eq!(state.combo_damage, 0);
        assert_eq!(state.combo_scaling, 1.0);
    }

    #[test]
    fn test_hit_recorded_restarts_timer() {
        let config = CombatConfig::default();
        let mut state = CombatState::default().with_hit_recorded(5, 10, &config);
        for _ in 0..30 {
            state = update_combat_state(state);
        }
        state = state.with_hit_recorded(5, 10, &config);
        assert_eq!(state.last_hit_timer, config.combo_timeout_frames);
        assert_eq!(state.combo_count, 2);
    }

    #[test]
    fn test_long_combo_saturates_counters() {
        let config = CombatConfig::default();
        let state = CombatState {
            combo_count: u32::MAX,
            combo_damage: u32::MAX - 3,
            ..Default::default()
        }
        .with_hit_recorded(12, 12, &config);
        assert_eq!(state.combo_count, u32::MAX);
        assert_eq!(state.combo_damage, u32::MAX);
        assert_eq!(state.combo_scaling, config.min_combo_scaling);
    }

    #[test]
    fn test_invulnerability_keeps_longer_window() {
        let state = CombatState::default().with_invulnerability(10).with_invulnerability(4);
        assert_eq!(state.invulnerable_frames, 10);
    }
}
