//! Combat system constants - all tunable values in one place
//!
//! These are the defaults behind `CombatConfig`. Frame counts assume 60 frames per second.

// Combo constants
pub const COMBO_TIMEOUT_FRAMES: u32 = 60;
pub const COMBO_SCALING_STEP: f64 = 0.1;
pub const MIN_COMBO_SCALING: f64 = 0.1;

// Block constants
pub const CHIP_DAMAGE_RATIO: f64 = 0.1;
pub const BLOCK_HEALTH_FLOOR: u32 = 1;
pub const BLOCK_ADVANTAGE_OFFSET: i32 = 2;

// Attacker recovery assumed when estimating advantage on hit
pub const HIT_RECOVERY_ASSUMPTION: u32 = 5;

// Meter constants
pub const METER_MAX: u32 = 100;
pub const METER_GAIN_RATIO: f64 = 0.3;

// Fighter constants
pub const DEFAULT_MAX_HEALTH: u32 = 100;

// Input buffer constants
pub const INPUT_BUFFER_CAPACITY: usize = 10;
pub const INPUT_WINDOW_MS: u64 = 500;

// Round constants
pub const ROUND_TIME_FRAMES: u32 = 99 * 60;
pub const ROUNDS_TO_WIN: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_constants_reasonable() {
        assert!(COMBO_TIMEOUT_FRAMES > 0);
        assert!(MIN_COMBO_SCALING > 0.0 && MIN_COMBO_SCALING <= 1.0);
        assert!(COMBO_SCALING_STEP > 0.0 && COMBO_SCALING_STEP < 1.0);
    }

    #[test]
    fn test_block_constants_reasonable() {
        assert!(CHIP_DAMAGE_RATIO > 0.0 && CHIP_DAMAGE_RATIO < 1.0);
        assert!(BLOCK_HEALTH_FLOOR >= 1);
    }

    #[test]
    fn test_input_window_constants_reasonable() {
        assert!(INPUT_BUFFER_CAPACITY >= 4);
        assert!((300..=500).contains(&INPUT_WINDOW_MS));
    }
}
