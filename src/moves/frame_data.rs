//! Static frame data, keyed by move name

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{KombatError, Result};

const BUILTIN_FRAME_DATA: &str = include_str!("../../data/frame_data.toml");

/// Timing and damage for one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameData {
    pub startup: u32,
    pub active: u32,
    pub recovery: u32,
    pub damage: u32,
    pub hitstun: u32,
    pub blockstun: u32,
}

impl FrameData {
    /// Frame advantage on hit: hitstun minus the attacker's recovery
    pub fn advantage(&self) -> i32 {
        self.hitstun as i32 - self.recovery as i32
    }

    /// Frame advantage when blocked
    pub fn block_advantage(&self) -> i32 {
        self.blockstun as i32 - self.recovery as i32
    }

    /// Frames from input to the end of recovery
    pub fn total_frames(&self) -> u32 {
        self.startup + self.active + self.recovery
    }
}

/// All frame data known to a match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameDataTable {
    moves: AHashMap<String, FrameData>,
}

impl FrameDataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame data shipped in `data/frame_data.toml`
    pub fn builtin() -> Result<Self> {
        Self::parse_toml(BUILTIN_FRAME_DATA)
    }

    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let table: FrameDataTable = toml::from_str(content)?;
        Ok(table)
    }

    pub fn insert(&mut self, name: impl Into<String>, data: FrameData) {
        self.moves.insert(name.into(), data);
    }

    pub fn get(&self, name: &str) -> Option<&FrameData> {
        self.moves.get(name)
    }

    /// Like `get`, but a missing entry is an error
    pub fn require(&self, name: &str) -> Result<&FrameData> {
        self.get(name)
            .ok_or_else(|| KombatError::UnknownMove(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(String::as_str)
    }
}
