//! Core enums shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Incoming damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Em,
    Explosive,
    Kinetic,
    Thermal,
}

impl DamageType {
    /// All damage types, in damage profile order
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Em,
            DamageType::Explosive,
            DamageType::Kinetic,
            DamageType::Thermal,
        ]
    }

    /// Position of this type in a `[em, explosive, kinetic, thermal]` array
    pub fn index(self) -> usize {
        match self {
            DamageType::Em => 0,
            DamageType::Explosive => 1,
            DamageType::Kinetic => 2,
            DamageType::Thermal => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DamageType::Em => "em",
            DamageType::Explosive => "explosive",
            DamageType::Kinetic => "kinetic",
            DamageType::Thermal => "thermal",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hitpoint layer, depleted in this order in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Shield,
    Armor,
    Hull,
}

impl LayerKind {
    pub fn all() -> &'static [LayerKind] {
        &[LayerKind::Shield, LayerKind::Armor, LayerKind::Hull]
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Shield => "shield",
            LayerKind::Armor => "armor",
            LayerKind::Hull => "hull",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Targeting sensor type. A hull carries exactly one non-zero sensor strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Radar,
    Ladar,
    Magnetometric,
    Gravimetric,
}

impl SensorType {
    /// All sensor types, in lookup order
    pub fn all() -> &'static [SensorType] {
        &[
            SensorType::Radar,
            SensorType::Ladar,
            SensorType::Magnetometric,
            SensorType::Gravimetric,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            SensorType::Radar => "radar",
            SensorType::Ladar => "ladar",
            SensorType::Magnetometric => "magnetometric",
            SensorType::Gravimetric => "gravimetric",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_index_matches_order() {
        for (i, damage_type) in DamageType::all().iter().enumerate() {
            assert_eq!(damage_type.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DamageType::Em).unwrap();
        assert_eq!(json, "\"em\"");
        let kind: LayerKind = serde_json::from_str("\"armor\"").unwrap();
        assert_eq!(kind, LayerKind::Armor);
    }
}
