//! Combat configuration with documented constants
//!
//! Every tunable number the combat core reads is collected here and passed
//! explicitly into the functions that need it. Defaults come from
//! `combat::constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::constants::*;
use crate::core::error::{KombatError, Result};

/// Configuration for the combat core
///
/// Loaded from TOML (`data/combat.toml`); any key left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    // === COMBOS ===
    /// Frames after the last hit before a combo drops
    ///
    /// Restarted on every hit. At 60 frames the defender has one second
    /// of neutral before scaling resets.
    pub combo_timeout_frames: u32,

    /// Damage scaling lost per hit already in the combo
    pub combo_scaling_step: f64,

    /// Scaling never drops below this, so long combos still do damage
    pub min_combo_scaling: f64,

    // === BLOCKING ===
    /// Fraction of a blocked attack's damage dealt as chip
    pub chip_damage_ratio: f64,

    /// Health a block can never take the defender below
    pub block_health_floor: u32,

    /// Frames subtracted from blockstun when computing the attacker's disadvantage
    pub block_advantage_offset: i32,

    // === ADVANTAGE ===
    /// Recovery the attacker is assumed to have left after a hit connects
    pub hit_recovery_assumption: u32,

    // === METER ===
    /// Meter cap
    pub meter_max: u32,

    /// Fraction of dealt damage converted to meter before the attack-type factor
    pub meter_gain_ratio: f64,

    // === FIGHTERS ===
    /// Health every fighter starts a round with
    pub max_health: u32,

    // === INPUT ===
    /// Maximum tokens kept per input buffer
    pub input_buffer_capacity: usize,

    /// Age after which buffered tokens are dropped
    pub input_window_ms: u64,

    // === ROUNDS ===
    /// Round clock in frames
    pub round_time_frames: u32,

    /// Round wins needed to take the match
    pub rounds_to_win: u8,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            combo_timeout_frames: COMBO_TIMEOUT_FRAMES,
            combo_scaling_step: COMBO_SCALING_STEP,
            min_combo_scaling: MIN_COMBO_SCALING,

            chip_damage_ratio: CHIP_DAMAGE_RATIO,
            block_health_floor: BLOCK_HEALTH_FLOOR,
            block_advantage_offset: BLOCK_ADVANTAGE_OFFSET,

            hit_recovery_assumption: HIT_RECOVERY_ASSUMPTION,

            meter_max: METER_MAX,
            meter_gain_ratio: METER_GAIN_RATIO,

            max_health: DEFAULT_MAX_HEALTH,

            input_buffer_capacity: INPUT_BUFFER_CAPACITY,
            input_window_ms: INPUT_WINDOW_MS,

            round_time_frames: ROUND_TIME_FRAMES,
            rounds_to_win: ROUNDS_TO_WIN,
        }
    }
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: CombatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.combo_timeout_frames == 0 {
            return Err(KombatError::InvalidConfig(
                "combo_timeout_frames must be positive".into(),
            ));
        }

        if !(self.min_combo_scaling > 0.0 && self.min_combo_scaling <= 1.0) {
            return Err(KombatError::InvalidConfig(format!(
                "min_combo_scaling ({}) must be in (0, 1]",
                self.min_combo_scaling
            )));
        }

        if self.combo_scaling_step < 0.0 {
            return Err(KombatError::InvalidConfig(
                "combo_scaling_step must not be negative".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.chip_damage_ratio) {
            return Err(KombatError::InvalidConfig(format!(
                "chip_damage_ratio ({}) must be in [0, 1]",
                self.chip_damage_ratio
            )));
        }

        if self.block_health_floor == 0 {
            return Err(KombatError::InvalidConfig(
                "block_health_floor must be at least 1".into(),
            ));
        }

        if self.meter_max == 0 || self.max_health == 0 {
            return Err(KombatError::InvalidConfig(
                "meter_max and max_health must be positive".into(),
            ));
        }

        if self.input_buffer_capacity == 0 || self.input_window_ms == 0 {
            return Err(KombatError::InvalidConfig(
                "input buffer capacity and window must be positive".into(),
            ));
        }

        if self.rounds_to_win == 0 || self.round_time_frames == 0 {
            return Err(KombatError::InvalidConfig(
                "rounds_to_win and round_time_frames must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Combo scaling after `combo_count` hits
    pub fn scaling_for(&self, combo_count: u32) -> f64 {
        (1.0 - combo_count as f64 * self.combo_scaling_step).max(self.min_combo_scaling)
    }
}
