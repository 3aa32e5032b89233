//! Special/super recognition and move selection
//!
//! Move patterns are written for a fighter facing right. A fighter facing
//! left has its buffered directions mirrored before matching.

use serde::Serialize;

use crate::combat::attack::AttackType;
use crate::core::types::Facing;
use crate::input::buffer::InputBuffer;
use crate::input::pattern::matches_pattern;
use crate::input::token::InputToken;
use crate::moves::descriptor::{MoveDescriptor, SpecialMove, SuperMove};
use crate::moves::roster::MoveSet;

/// An ordinary button attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalAttack {
    pub button: InputToken,
    pub strength: AttackType,
}

impl NormalAttack {
    /// Frame data key for this attack
    pub fn move_name(&self) -> &'static str {
        match (self.button, self.strength) {
            (InputToken::Kick, AttackType::Light) => "light_kick",
            (InputToken::Kick, AttackType::Heavy) => "heavy_kick",
            (InputToken::Kick, _) => "medium_kick",
            (_, AttackType::Light) => "light_punch",
            (_, AttackType::Heavy) => "heavy_punch",
            _ => "medium_punch",
        }
    }
}

/// What a button press turned into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveSelection<'a> {
    Super(&'a SuperMove),
    Special(&'a SpecialMove),
    Normal(NormalAttack),
    Nothing,
}

impl MoveSelection<'_> {
    pub fn is_nothing(&self) -> bool {
        matches!(self, MoveSelection::Nothing)
    }
}

/// Buffered tokens as seen by a fighter facing right
pub fn facing_sequence(buffer: &InputBuffer, facing: Facing) -> Vec<InputToken> {
    match facing {
        Facing::Right => buffer.sequence(),
        Facing::Left => buffer.entries().map(|e| e.token.mirrored()).collect(),
    }
}

fn first_match<'a>(sequence: &[InputToken], moves: &'a [MoveDescriptor]) -> Option<&'a MoveDescriptor> {
    moves.iter().find(|m| matches_pattern(sequence, &m.input))
}

/// First special, in declaration order, whose input the buffer ends with
pub fn check_special_move_inputs<'a>(
    buffer: &InputBuffer,
    moveset: &'a MoveSet,
    facing: Facing,
) -> Option<&'a SpecialMove> {
    let sequence = facing_sequence(buffer, facing);
    first_match(&sequence, &moveset.special_moves)
}

/// First super, in declaration order, whose input the buffer ends with
pub fn check_super_move_inputs<'a>(
    buffer: &InputBuffer,
    moveset: &'a MoveSet,
    facing: Facing,
) -> Option<&'a SuperMove> {
    let sequence = facing_sequence(buffer, facing);
    first_match(&sequence, &moveset.super_moves)
}

/// Choose what a button press does
///
/// A matched super the fighter can pay for wins, then a matched special, then
/// an ordinary attack whose strength comes from the held direction (crouching
/// is light, toward the opponent is heavy). The `special` button is a
/// shortcut for the fighter's first special.
pub fn select_move<'a>(
    buffer: &InputBuffer,
    moveset: &'a MoveSet,
    meter: u32,
    facing: Facing,
    held: InputToken,
    button: InputToken,
) -> MoveSelection<'a> {
    if !button.is_button() || button == InputToken::Block {
        return MoveSelection::Nothing;
    }

    if let Some(super_move) = check_super_move_inputs(buffer, moveset, facing) {
        if meter >= super_move.cost {
            tracing::trace!(name = %super_move.name, "super input recognized");
            return MoveSelection::Super(super_move);
        }
        tracing::trace!(name = %super_move.name, meter, cost = super_move.cost, "super input without meter");
    }

    if let Some(special) = check_special_move_inputs(buffer, moveset, facing) {
        if meter >= special.cost {
            tracing::trace!(name = %special.name, "special input recognized");
            return MoveSelection::Special(special);
        }
    }

    if button == InputToken::Special {
        return match moveset.special_moves.first() {
            Some(special) if meter >= special.cost => MoveSelection::Special(special),
            _ => MoveSelection::Nothing,
        };
    }

    let held = match facing {
        Facing::Right => held,
        Facing::Left => held.mirrored(),
    };
    let strength = if held.is_crouching() {
        AttackType::Light
    } else if matches!(held, InputToken::Right | InputToken::UpRight) {
        AttackType::Heavy
    } else {
        AttackType::Medium
    };

    MoveSelection::Normal(NormalAttack { button, strength })
}
