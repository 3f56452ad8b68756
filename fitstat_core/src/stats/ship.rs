//! ShipStats - Every derived stat of a fit in one value

use super::{Capacitor, SensorStrength, Slots};
use crate::defense::Layer;
use serde::Serialize;

/// Snapshot of all derived properties, built on demand by the calculator.
///
/// Units: scan resolution in mm, target range in km, capacitor and shield
/// recharge in s, mass in kg, speed in m/s, signature radius in m, warp speed
/// in AU/s, align time in s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipStats {
    // === Targeting ===
    pub scan_resolution: Option<f64>,
    pub target_range: Option<f64>,
    pub max_targets: Option<f64>,
    pub sensor: Option<SensorStrength>,

    // === Capacitor ===
    pub capacitor: Option<Capacitor>,

    // === Defense ===
    pub shield: Option<Layer>,
    pub armor: Option<Layer>,
    pub hull: Option<Layer>,

    // === Navigation ===
    pub mass: Option<f64>,
    pub agility: Option<f64>,
    pub speed: Option<f64>,
    pub signature_radius: Option<f64>,
    pub warp_speed: Option<f64>,
    pub align_time: Option<f64>,

    // === Fitting ===
    pub slots: Slots,
}

impl ShipStats {
    /// Names of stats the source could not supply
    pub fn unavailable(&self) -> Vec<&'static str> {
        let checks = [
            ("scan_resolution", self.scan_resolution.is_none()),
            ("target_range", self.target_range.is_none()),
            ("max_targets", self.max_targets.is_none()),
            ("sensor", self.sensor.is_none()),
            ("capacitor", self.capacitor.is_none()),
            ("shield", self.shield.is_none()),
            ("armor", self.armor.is_none()),
            ("hull", self.hull.is_none()),
            ("mass", self.mass.is_none()),
            ("agility", self.agility.is_none()),
            ("speed", self.speed.is_none()),
            ("signature_radius", self.signature_radius.is_none()),
            ("warp_speed", self.warp_speed.is_none()),
            ("align_time", self.align_time.is_none()),
        ];
        checks
            .iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| *name)
            .collect()
    }
}
