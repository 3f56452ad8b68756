//! Small derived value objects

use crate::types::{LayerKind, SensorType};
use serde::{Serialize, Serializer};

/// Capacitor pool and its full recharge time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Capacitor {
    /// Capacity in GJ
    pub capacity: f64,
    /// Full recharge time in seconds
    pub recharge: f64,
}

/// The ship's active targeting sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorStrength {
    pub sensor_type: SensorType,
    pub strength: f64,
}

/// Effective hitpoints per layer for one damage profile.
///
/// A layer is `None` when its attributes are unavailable and
/// `Some(f64::INFINITY)` when it is immune to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EffectiveHitpoints {
    #[serde(serialize_with = "serialize_hitpoints")]
    pub shield: Option<f64>,
    #[serde(serialize_with = "serialize_hitpoints")]
    pub armor: Option<f64>,
    #[serde(serialize_with = "serialize_hitpoints")]
    pub hull: Option<f64>,
}

/// Serialize hitpoints with immunity as the string `"infinite"`, since JSON
/// has no infinity and `null` already means unavailable
pub fn serialize_hitpoints<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.is_infinite() => s.serialize_str("infinite"),
        Some(v) => s.serialize_f64(*v),
        None => s.serialize_none(),
    }
}

impl EffectiveHitpoints {
    pub fn get(&self, kind: LayerKind) -> Option<f64> {
        match kind {
            LayerKind::Shield => self.shield,
            LayerKind::Armor => self.armor,
            LayerKind::Hull => self.hull,
        }
    }

    /// Survivability across all layers, depleted in sequence
    pub fn total(&self) -> Option<f64> {
        Some(self.shield? + self.armor? + self.hull?)
    }
}
