//! Attack classes and their damage/meter tables

use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of an attack, which sets its damage multiplier and meter factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AttackType {
    Light,
    #[default]
    Medium,
    Heavy,
    Special,
    Super,
}

impl AttackType {
    pub const ALL: [AttackType; 5] = [
        AttackType::Light,
        AttackType::Medium,
        AttackType::Heavy,
        AttackType::Special,
        AttackType::Super,
    ];

    /// Look up an attack type by key
    ///
    /// Unknown keys fall back to `Medium`, whose multiplier is 1.0.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "light" => AttackType::Light,
            "medium" => AttackType::Medium,
            "heavy" => AttackType::Heavy,
            "special" => AttackType::Special,
            "super" => AttackType::Super,
            other => {
                tracing::debug!(key = other, "unknown attack type, using medium");
                AttackType::Medium
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttackType::Light => "light",
            AttackType::Medium => "medium",
            AttackType::Heavy => "heavy",
            AttackType::Special => "special",
            AttackType::Super => "super",
        }
    }

    /// Damage multiplier applied on hit
    pub fn damage_multiplier(self) -> f64 {
        match self {
            AttackType::Light => 0.8,
            AttackType::Medium => 1.0,
            AttackType::Heavy => 1.3,
            AttackType::Special => 1.5,
            AttackType::Super => 2.0,
        }
    }

    /// Meter factor applied to the attacker's gain
    ///
    /// Supers build no meter.
    pub fn meter_factor(self) -> f64 {
        match self {
            AttackType::Light => 0.5,
            AttackType::Medium => 1.0,
            AttackType::Heavy => 1.5,
            AttackType::Special => 2.0,
            AttackType::Super => 0.0,
        }
    }
}

impl From<String> for AttackType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(AttackType::Light.damage_multiplier(), 0.8);
        assert_eq!(AttackType::Medium.damage_multiplier(), 1.0);
        assert_eq!(AttackType::Heavy.damage_multiplier(), 1.3);
        assert_eq!(AttackType::Special.damage_multiplier(), 1.5);
        assert_eq!(AttackType::Super.damage_multiplier(), 2.0);
    }

    #[test]
    fn test_super_has_no_meter_factor() {
        assert_eq!(AttackType::Super.meter_factor(), 0.0);
        assert!(AttackType::Heavy.meter_factor() > AttackType::Light.meter_factor());
    }

    #[test]
    fn test_unknown_key_defaults_to_medium() {
        assert_eq!(AttackType::from_key("uppercut"), AttackType::Medium);
        assert_eq!(AttackType::from_key("HEAVY"), AttackType::Heavy);
    }

    #[test]
    fn test_deserialize_unknown_as_medium() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: AttackType,
        }
        let parsed: Wrapper = toml::from_str("kind = \"sweep\"").unwrap();
        assert_eq!(parsed.kind, AttackType::Medium);
        let parsed: Wrapper = toml::from_str("kind = \"super\"").unwrap();
        assert_eq!(parsed.kind, AttackType::Super);
    }
}
