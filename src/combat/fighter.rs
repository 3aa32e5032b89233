//! Fighter snapshot
//!
//! Fighters are values. Ticks and resolutions return new fighters; the
//! caller replaces its stored copy with the returned one.

use serde::{Deserialize, Serialize};

use crate::combat::phase::{FighterPhase, FighterState};
use crate::combat::state::{update_combat_state, CombatState};
use crate::core::config::CombatConfig;
use crate::core::types::Facing;

/// Absorbs float drift when fractional gains sum to a whole point
const METER_EPSILON: f64 = 1e-9;

/// The parts of a fighter the combat core reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    /// Super meter, 0..=meter_max
    pub meter: u32,
    /// Fraction of a meter point earned but not yet banked
    #[serde(default)]
    pub meter_carry: f64,
    pub combat: CombatState,
    pub state: FighterState,
    pub facing: Facing,
}

impl Fighter {
    /// A fighter at round start: full health, empty meter
    pub fn new(name: impl Into<String>, config: &CombatConfig) -> Self {
        Self {
            name: name.into(),
            health: config.max_health,
            max_health: config.max_health,
            meter: 0,
            meter_carry: 0.0,
            combat: CombatState::default(),
            state: FighterState::idle(),
            facing: Facing::Right,
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// No stun running and not reeling from a hit
    pub fn can_act(&self) -> bool {
        self.combat.is_free()
            && !matches!(
                self.state.phase,
                FighterPhase::Hurt | FighterPhase::KnockedOut
            )
    }

    /// Free to start a new move right now (not mid-attack)
    pub fn is_ready(&self) -> bool {
        self.can_act() && !self.state.phase.is_timed()
    }

    pub fn can_cancel(&self) -> bool {
        self.state.is_cancelable() && self.can_act()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.combat.is_invulnerable()
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    /// Advance one simulation frame
    pub fn tick(&self) -> Fighter {
        Fighter {
            combat: update_combat_state(self.combat),
            state: self.state.clone().tick(),
            ..self.clone()
        }
    }

    /// Add meter, clamped to the cap
    ///
    /// Whole points go to `meter`; the remainder is carried to the next gain.
    pub fn with_meter_gain(mut self, gain: f64, config: &CombatConfig) -> Self {
        if gain <= 0.0 {
            return self;
        }

        let total = self.meter as f64 + self.meter_carry + gain;
        if total + METER_EPSILON >= config.meter_max as f64 {
            self.meter = config.meter_max;
            self.meter_carry = 0.0;
        } else {
            let whole = (total + METER_EPSILON).floor();
            self.meter = whole as u32;
            self.meter_carry = (total - whole).max(0.0);
        }
        self
    }

    /// Spend meter, or `None` if the fighter cannot pay
    pub fn spend_meter(mut self, cost: u32) -> Option<Self> {
        self.meter = self.meter.checked_sub(cost)?;
        Some(self)
    }
}
