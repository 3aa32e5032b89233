//! Hit and block resolution
//!
//! Every function here is pure: it reads fighter snapshots and returns new
//! ones. A resolution is either fully applied (a new pair is returned) or not
//! applied at all.

use serde::Serialize;

use crate::combat::attack::AttackType;
use crate::combat::fighter::Fighter;
use crate::combat::phase::FighterState;
use crate::combat::state::CombatState;
use crate::core::config::CombatConfig;
use crate::moves::frame_data::FrameData;

/// Updated fighters after one exchange
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    pub attacker: Fighter,
    pub defender: Fighter,
    /// Health actually taken from the defender
    pub damage: u32,
}

/// Damage after combo scaling and the attack-type multiplier, floored
pub fn calculate_damage(base_damage: u32, state: &CombatState, attack_type: AttackType) -> u32 {
    let scaled = base_damage as f64 * state.combo_scaling * attack_type.damage_multiplier();
    scaled.floor().max(0.0) as u32
}

/// Meter the attacker earns for dealing `damage` with `attack_type`
///
/// Not floored: fractions are banked on the fighter until they add up.
pub fn meter_gain(attack_type: AttackType, damage: u32, config: &CombatConfig) -> f64 {
    let base_gain = damage as f64 * config.meter_gain_ratio;
    (base_gain * attack_type.meter_factor()).max(0.0)
}

/// Resolve an attack that connected
pub fn apply_hit(
    attacker: &Fighter,
    defender: &Fighter,
    base_damage: u32,
    hitstun_frames: u32,
    attack_type: AttackType,
    config: &CombatConfig,
) -> Exchange {
    let final_damage = calculate_damage(base_damage, &defender.combat, attack_type);

    let mut new_defender = defender.clone();
    new_defender.health = defender.health.saturating_sub(final_damage);
    new_defender.combat = defender
        .combat
        .with_hit_recorded(final_damage, hitstun_frames, config);
    new_defender.state = FighterState::hurt(hitstun_frames);

    let gain = meter_gain(attack_type, final_damage, config);
    let mut new_attacker = attacker.clone().with_meter_gain(gain, config);
    new_attacker.combat.advantage =
        hitstun_frames.saturating_sub(config.hit_recovery_assumption) as i32;

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        %attack_type,
        damage = final_damage,
        combo = new_defender.combat.combo_count,
        health = new_defender.health,
        "hit"
    );

    Exchange {
        attacker: new_attacker,
        defender: new_defender,
        damage: final_damage,
    }
}

/// Resolve an attack that was blocked
///
/// Chip damage can never take the defender below `block_health_floor`, and
/// blocking drops any combo the defender was suffering.
pub fn apply_block(
    attacker: &Fighter,
    defender: &Fighter,
    damage: u32,
    blockstun_frames: u32,
    config: &CombatConfig,
) -> Exchange {
    let chip_damage = (damage as f64 * config.chip_damage_ratio).floor().max(0.0) as u32;

    let mut new_defender = defender.clone();
    new_defender.health = defender
        .health
        .saturating_sub(chip_damage)
        .max(config.block_health_floor);
    new_defender.combat = CombatState {
        blockstun: blockstun_frames,
        ..defender.combat.with_combo_reset()
    };
    new_defender.state = FighterState::blocking(blockstun_frames);

    let gain = meter_gain(AttackType::Light, chip_damage, config);
    let mut new_attacker = attacker.clone().with_meter_gain(gain, config);
    new_attacker.combat.advantage = -(blockstun_frames as i32 - config.block_advantage_offset);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        chip = chip_damage,
        blockstun = blockstun_frames,
        "blocked"
    );

    let taken = defender.health.saturating_sub(new_defender.health);
    Exchange {
        attacker: new_attacker,
        defender: new_defender,
        damage: taken,
    }
}

/// An attack about to be resolved against an opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttackRequest {
    pub base_damage: u32,
    pub hitstun: u32,
    pub blockstun: u32,
    pub attack_type: AttackType,
}

impl AttackRequest {
    pub fn from_frame_data(data: &FrameData, attack_type: AttackType) -> Self {
        Self {
            base_damage: data.damage,
            hitstun: data.hitstun,
            blockstun: data.blockstun,
            attack_type,
        }
    }
}

/// Outcome of `resolve_attack`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Hit(Exchange),
    Blocked(Exchange),
    /// The defender was invulnerable; nothing changes
    Whiff,
}

impl Resolution {
    pub fn exchange(&self) -> Option<&Exchange> {
        match self {
            Resolution::Hit(exchange) | Resolution::Blocked(exchange) => Some(exchange),
            Resolution::Whiff => None,
        }
    }
}

/// Can this defender block right now?
///
/// A fighter already in blockstun keeps blocking. A fighter in hitstun, or
/// still in the startup or recovery of its own move, cannot.
pub fn can_block(defender: &Fighter) -> bool {
    defender.combat.hitstun == 0 && (defender.is_ready() || defender.combat.blockstun > 0)
}

/// Decide between hit, block and whiff, then apply it
pub fn resolve_attack(
    attacker: &Fighter,
    defender: &Fighter,
    request: AttackRequest,
    defender_guarding: bool,
    config: &CombatConfig,
) -> Resolution {
    if defender.is_invulnerable() {
        tracing::debug!(
            attacker = %attacker.name,
            defender = %defender.name,
            "whiff on invulnerable defender"
        );
        return Resolution::Whiff;
    }

    if defender_guarding && can_block(defender) {
        return Resolution::Blocked(apply_block(
            attacker,
            defender,
            request.base_damage,
            request.blockstun,
            config,
        ));
    }

    Resolution::Hit(apply_hit(
        attacker,
        defender,
        request.base_damage,
        request.hitstun,
        request.attack_type,
        config,
    ))
}
