//! Seeded computer opponent
//!
//! The controller only produces input tokens; it goes through the same
//! buffer and recognizer as a human player. Two controllers built from the
//! same seeds always produce the same match.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::fighter::Fighter;
use crate::core::types::{Facing, PlayerSlot};
use crate::duel::events::CombatEvent;
use crate::duel::session::{Duel, FrameInput};
use crate::input::token::InputToken;
use crate::moves::descriptor::MoveDescriptor;
use crate::moves::roster::MoveSet;

const WANDER_DIRECTIONS: [InputToken; 6] = [
    InputToken::Neutral,
    InputToken::Left,
    InputToken::Right,
    InputToken::Down,
    InputToken::DownRight,
    InputToken::DownLeft,
];

/// Per-frame probabilities that shape a CPU's play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuProfile {
    /// Chance to start an attack on a frame the fighter is ready
    pub aggression: f32,
    /// Chance an attack is a special (or super, with meter) instead of a normal
    pub special_chance: f32,
    /// Chance to start guarding on any frame
    pub guard_chance: f32,
    /// Chance to change the held direction on an idle frame
    pub wander_chance: f32,
}

impl Default for CpuProfile {
    fn default() -> Self {
        Self {
            aggression: 0.12,
            special_chance: 0.35,
            guard_chance: 0.04,
            wander_chance: 0.05,
        }
    }
}

/// Random but reproducible input source for one player
#[derive(Debug, Clone)]
pub struct CpuController {
    rng: ChaCha8Rng,
    profile: CpuProfile,
    pending: VecDeque<InputToken>,
    guard_frames: u32,
}

impl CpuController {
    pub fn new(seed: u64) -> Self {
        Self::with_profile(seed, CpuProfile::default())
    }

    pub fn with_profile(seed: u64, profile: CpuProfile) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            profile,
            pending: VecDeque::new(),
            guard_frames: 0,
        }
    }

    pub fn profile(&self) -> &CpuProfile {
        &self.profile
    }

    /// Decide this frame's input for `me`
    pub fn next_input(&mut self, me: &Fighter, moveset: &MoveSet) -> FrameInput {
        let mut input = FrameInput::idle();

        if self.guard_frames > 0 {
            self.guard_frames -= 1;
            input.guard = true;
        } else if self.rng.gen::<f32>() < self.profile.guard_chance {
            self.guard_frames = self.rng.gen_range(6..24);
            input.guard = true;
        }

        if self.pending.is_empty() {
            if me.can_cancel() && self.rng.gen::<f32>() < self.profile.special_chance {
                self.queue_declared(me, moveset);
            } else if me.is_ready() && self.rng.gen::<f32>() < self.profile.aggression {
                self.queue_attack(me, moveset);
            } else if me.is_ready() && self.rng.gen::<f32>() < self.profile.wander_chance {
                let direction = WANDER_DIRECTIONS[self.rng.gen_range(0..WANDER_DIRECTIONS.len())];
                self.pending.push_back(direction);
            }
        }

        // motions are fed one token per frame
        if let Some(token) = self.pending.pop_front() {
            input.tokens.push(token);
        }

        input
    }

    fn queue_attack(&mut self, me: &Fighter, moveset: &MoveSet) {
        if self.rng.gen::<f32>() < self.profile.special_chance && self.queue_declared(me, moveset) {
            return;
        }

        let button = if self.rng.gen_bool(0.5) {
            InputToken::Punch
        } else {
            InputToken::Kick
        };
        self.pending.push_back(button);
    }

    /// Queue the full motion of an affordable super, or else a random special
    fn queue_declared(&mut self, me: &Fighter, moveset: &MoveSet) -> bool {
        let supers: Vec<&MoveDescriptor> = moveset
            .super_moves
            .iter()
            .filter(|m| m.cost <= me.meter)
            .collect();

        let choice = if !supers.is_empty() && self.rng.gen_bool(0.5) {
            Some(supers[self.rng.gen_range(0..supers.len())])
        } else if !moveset.special_moves.is_empty() {
            let specials = &moveset.special_moves;
            Some(&specials[self.rng.gen_range(0..specials.len())])
        } else {
            None
        };

        match choice {
            Some(descriptor) => {
                let pattern = match me.facing {
                    Facing::Right => descriptor.input.clone(),
                    Facing::Left => descriptor.input.mirrored(),
                };
                self.pending.extend(pattern.example_sequence());
                true
            }
            None => false,
        }
    }
}

/// Drive a duel with two CPU controllers until it ends or `max_frames` pass
///
/// Returns every event the duel emitted.
pub fn play_cpu_match(duel: &mut Duel, cpus: &mut [CpuController; 2], max_frames: u64) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    while !duel.is_over() && duel.frame() < max_frames {
        let [one, two] = cpus;
        let inputs = [
            one.next_input(duel.fighter(PlayerSlot::One), duel.moveset(PlayerSlot::One)),
            two.next_input(duel.fighter(PlayerSlot::Two), duel.moveset(PlayerSlot::Two)),
        ];
        events.extend(duel.step(inputs));
    }

    events
}
