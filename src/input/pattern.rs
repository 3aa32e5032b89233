//! Motion patterns and suffix matching
//!
//! Patterns are written as comma-separated tokens (`down,down-right,right,punch`).
//! A slot written with `+` (`punch+kick`) is a chord.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{KombatError, Result};
use crate::input::token::InputToken;

/// Quarter-circle forward
pub const QCF: &str = "down,down-right,right";
/// Quarter-circle back
pub const QCB: &str = "down,down-left,left";
/// Dragon punch (forward, down, down-forward)
pub const DP: &str = "right,down,down-right";
/// Half-circle forward
pub const HCF: &str = "left,down-left,down,down-right,right";
/// Half-circle back
pub const HCB: &str = "right,down-right,down,down-left,left";
/// Double quarter-circle forward
pub const DQCF: &str = "down,down-right,right,down,down-right,right";
/// Charge back, then forward
pub const CHARGE_BACK_FORWARD: &str = "left,right";
/// Charge down, then up
pub const CHARGE_DOWN_UP: &str = "down,up";

/// One position in a pattern
///
/// A chord slot matches when ANY of its tokens equals the input at that
/// position. Two buttons pressed on the same frame arrive as two separate
/// tokens, so this does not check that the chord was pressed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSlot {
    tokens: Vec<InputToken>,
}

impl PatternSlot {
    pub fn single(token: InputToken) -> Self {
        Self { tokens: vec![token] }
    }

    pub fn chord(tokens: Vec<InputToken>) -> Self {
        Self { tokens }
    }

    pub fn is_chord(&self) -> bool {
        self.tokens.len() > 1
    }

    pub fn tokens(&self) -> &[InputToken] {
        &self.tokens
    }

    pub fn accepts(&self, token: InputToken) -> bool {
        self.tokens.contains(&token)
    }

    fn mirrored(&self) -> Self {
        Self {
            tokens: self.tokens.iter().map(|t| t.mirrored()).collect(),
        }
    }
}

/// A named-by-notation ordered list of slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MotionPattern {
    notation: String,
    slots: Vec<PatternSlot>,
}

impl MotionPattern {
    /// Parse `down,down-right,right` style notation
    pub fn parse(notation: &str) -> Result<Self> {
        let mut slots = Vec::new();
        for raw_slot in notation.split(',') {
            let raw_slot = raw_slot.trim();
            if raw_slot.is_empty() {
                return Err(KombatError::InvalidPattern(format!(
                    "empty slot in '{}'",
                    notation
                )));
            }
            let tokens = raw_slot
                .split('+')
                .map(str::parse::<InputToken>)
                .collect::<Result<Vec<_>>>()?;
            slots.push(PatternSlot::chord(tokens));
        }

        Ok(Self {
            notation: notation.trim().to_string(),
            slots,
        })
    }

    pub fn from_tokens(tokens: &[InputToken]) -> Self {
        let notation = tokens
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            notation,
            slots: tokens.iter().copied().map(PatternSlot::single).collect(),
        }
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn slots(&self) -> &[PatternSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The same motion for a fighter facing the other way
    pub fn mirrored(&self) -> Self {
        let slots: Vec<PatternSlot> = self.slots.iter().map(PatternSlot::mirrored).collect();
        let notation = slots
            .iter()
            .map(|s| {
                s.tokens()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect::<Vec<_>>()
            .join(",");
        Self { notation, slots }
    }

    /// One representative token sequence that performs this pattern
    ///
    /// Chords contribute their first token.
    pub fn example_sequence(&self) -> Vec<InputToken> {
        self.slots.iter().filter_map(|s| s.tokens.first().copied()).collect()
    }
}

impl FromStr for MotionPattern {
    type Err = KombatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MotionPattern {
    type Error = KombatError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MotionPattern> for String {
    fn from(pattern: MotionPattern) -> Self {
        pattern.notation
    }
}

impl fmt::Display for MotionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

/// Does `sequence` end with `pattern`?
///
/// Too-short sequences and empty patterns never match.
pub fn matches_pattern(sequence: &[InputToken], pattern: &MotionPattern) -> bool {
    if pattern.is_empty() || sequence.len() < pattern.len() {
        return false;
    }

    let tail = &sequence[sequence.len() - pattern.len()..];
    tail.iter()
        .zip(pattern.slots())
        .all(|(token, slot)| slot.accepts(*token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputToken::*;

    #[test]
    fn test_qcf_matches_suffix() {
        let qcf = MotionPattern::parse(QCF).unwrap();
        let sequence = [Neutral, Punch, Down, DownRight, Right];
        assert!(matches_pattern(&sequence, &qcf));
    }

    #[test]
    fn test_qcb_does_not_match_qcf_input() {
        let qcb = MotionPattern::parse(QCB).unwrap();
        let sequence = [Neutral, Punch, Down, DownRight, Right];
        assert!(!matches_pattern(&sequence, &qcb));
    }

    #[test]
    fn test_short_sequence_never_matches() {
        let qcf = MotionPattern::parse(QCF).unwrap();
        assert!(!matches_pattern(&[], &qcf));
        assert!(!matches_pattern(&[DownRight, Right], &qcf));
    }

    #[test]
    fn test_match_must_be_at_end() {
        let qcf = MotionPattern::parse(QCF).unwrap();
        assert!(!matches_pattern(&[Down, DownRight, Right, Neutral], &qcf));
    }

    #[test]
    fn test_chord_matches_either_button() {
        // Loose chord semantics: one of the chorded buttons is enough
        let pattern = MotionPattern::parse("down,punch+kick").unwrap();
        assert!(pattern.slots()[1].is_chord());
        assert!(matches_pattern(&[Down, Punch], &pattern));
        assert!(matches_pattern(&[Down, Kick], &pattern));
        assert!(!matches_pattern(&[Down, Block], &pattern));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!(MotionPattern::parse("down,,right").is_err());
        assert!(MotionPattern::parse("down,sideways").is_err());
    }

    #[test]
    fn test_mirrored_pattern() {
        let qcf = MotionPattern::parse(QCF).unwrap();
        assert_eq!(qcf.mirrored(), MotionPattern::parse(QCB).unwrap());
    }

    #[test]
    fn test_named_patterns_parse() {
        for notation in [QCF, QCB, DP, HCF, HCB, DQCF, CHARGE_BACK_FORWARD, CHARGE_DOWN_UP] {
            let pattern = MotionPattern::parse(notation).unwrap();
            assert!(matches_pattern(&pattern.example_sequence(), &pattern));
        }
    }

    #[test]
    fn test_aliases_normalize_through_tokens() {
        let pattern = MotionPattern::parse("down, down-forward, forward").unwrap();
        assert!(matches_pattern(&[Down, DownRight, Right], &pattern));
    }
}
