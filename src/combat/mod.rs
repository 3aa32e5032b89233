//! Combat core: fighter state, timers and hit/block resolution

pub mod attack;
pub mod constants;
pub mod fighter;
pub mod phase;
pub mod resolution;
pub mod state;

pub use attack::AttackType;
pub use fighter::Fighter;
pub use phase::{FighterPhase, FighterState};
pub use resolution::{
    apply_block, apply_hit, calculate_damage, meter_gain, resolve_attack, AttackRequest, Exchange,
    Resolution,
};
pub use state::{update_combat_state, CombatState};
