//! Fighter move lists loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{KombatError, Result};
use crate::moves::descriptor::{SpecialMove, SuperMove};

const BUILTIN_ROSTER: &str = include_str!("../../data/roster.toml");

/// Special and super moves of one fighter, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSet {
    pub name: String,
    #[serde(default)]
    pub special_moves: Vec<SpecialMove>,
    #[serde(default)]
    pub super_moves: Vec<SuperMove>,
}

impl MoveSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            special_moves: Vec::new(),
            super_moves: Vec::new(),
        }
    }

    pub fn with_special(mut self, special: SpecialMove) -> Self {
        self.special_moves.push(special);
        self
    }

    pub fn with_super(mut self, super_move: SuperMove) -> Self {
        self.super_moves.push(super_move);
        self
    }
}

/// Every selectable fighter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    fighters: Vec<MoveSet>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The roster shipped in `data/roster.toml`
    pub fn builtin() -> Result<Self> {
        Self::parse_toml(BUILTIN_ROSTER)
    }

    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let roster: Roster = toml::from_str(content)?;
        Ok(roster)
    }

    pub fn add(&mut self, moveset: MoveSet) {
        self.fighters.push(moveset);
    }

    /// Find a fighter by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&MoveSet> {
        self.fighters
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Like `get`, but a missing fighter is an error
    pub fn require(&self, name: &str) -> Result<&MoveSet> {
        self.get(name)
            .ok_or_else(|| KombatError::UnknownFighter(name.to_string()))
    }

    pub fn all(&self) -> &[MoveSet] {
        &self.fighters
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fighters.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::attack::AttackType;

    #[test]
    fn test_builtin_roster_parses() {
        let roster = Roster::builtin().unwrap();
        assert!(roster.all().len() >= 2);
        for fighter in roster.all() {
            assert!(!fighter.special_moves.is_empty(), "{} has no specials", fighter.name);
            assert!(!fighter.super_moves.is_empty(), "{} has no supers", fighter.name);
            for super_move in &fighter.super_moves {
                assert_eq!(super_move.kind, AttackType::Super);
                assert!(super_move.cost > 0);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let roster = Roster::builtin().unwrap();
        assert!(roster.get("badman").is_some());
        assert!(matches!(
            roster.require("Nobody"),
            Err(KombatError::UnknownFighter(_))
        ));
    }
}
