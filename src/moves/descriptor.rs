//! Special and super move descriptors
//!
//! Descriptors are data owned by the roster. The combat core only matches
//! their input patterns and reads their damage and timings; effects and
//! projectiles are carried through for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::combat::attack::AttackType;
use crate::input::pattern::MotionPattern;
use crate::moves::frame_data::FrameData;

/// Startup/active/recovery timings of a declared move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveFrames {
    pub startup: u32,
    pub active: u32,
    pub recovery: u32,
}

/// Presentation effect triggered by a move (screen shake, flash, slow-mo...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEffect {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: u32,
}

/// Projectile spawned by a move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpec {
    pub speed: f32,
    pub lifetime: u32,
}

/// A special or super move as declared by a fighter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub name: String,
    pub input: MotionPattern,
    pub damage: u32,
    /// Meter spent to perform the move
    #[serde(default)]
    pub cost: u32,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: AttackType,
    pub frames: MoveFrames,
    #[serde(default)]
    pub effects: Option<MoveEffect>,
    #[serde(default)]
    pub projectile: Option<ProjectileSpec>,
}

pub type SpecialMove = MoveDescriptor;
pub type SuperMove = MoveDescriptor;

fn default_kind() -> AttackType {
    AttackType::Special
}

impl MoveDescriptor {
    pub fn total_frames(&self) -> u32 {
        self.frames.startup + self.frames.active + self.frames.recovery
    }

    /// Frame data for resolving this move
    ///
    /// Damage and timings come from the descriptor; stun durations come from
    /// the generic entry for the move's class.
    pub fn frame_data(&self, class_data: &FrameData) -> FrameData {
        FrameData {
            startup: self.frames.startup,
            active: self.frames.active,
            recovery: self.frames.recovery,
            damage: self.damage,
            hitstun: class_data.hitstun,
            blockstun: class_data.blockstun,
        }
    }
}
