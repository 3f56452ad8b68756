//! AttributeId - Numeric keys shared with the fitting engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one resolved numeric ship property
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(pub u32);

impl AttributeId {
    // === Navigation ===
    pub const MASS: AttributeId = AttributeId(4);
    pub const AGILITY: AttributeId = AttributeId(70);
    pub const MAX_VELOCITY: AttributeId = AttributeId(37);
    pub const WARP_SPEED_MULTIPLIER: AttributeId = AttributeId(600);
    pub const SIGNATURE_RADIUS: AttributeId = AttributeId(552);

    // === Targeting ===
    pub const SCAN_RESOLUTION: AttributeId = AttributeId(564);
    pub const MAX_TARGET_RANGE: AttributeId = AttributeId(76);
    pub const SCAN_RADAR_STRENGTH: AttributeId = AttributeId(208);
    pub const SCAN_LADAR_STRENGTH: AttributeId = AttributeId(209);
    pub const SCAN_MAGNETOMETRIC_STRENGTH: AttributeId = AttributeId(210);
    pub const SCAN_GRAVIMETRIC_STRENGTH: AttributeId = AttributeId(211);
    pub const MAX_LOCKED_TARGETS: AttributeId = AttributeId(192);

    // === Capacitor ===
    pub const CAPACITOR_CAPACITY: AttributeId = AttributeId(482);
    /// Capacitor recharge time in milliseconds
    pub const CAPACITOR_RECHARGE: AttributeId = AttributeId(55);

    // === Shield ===
    pub const SHIELD_CAPACITY: AttributeId = AttributeId(263);
    /// Shield recharge time in milliseconds
    pub const SHIELD_RECHARGE: AttributeId = AttributeId(479);
    pub const SHIELD_EM_RESONANCE: AttributeId = AttributeId(271);
    pub const SHIELD_EXPLOSIVE_RESONANCE: AttributeId = AttributeId(272);
    pub const SHIELD_KINETIC_RESONANCE: AttributeId = AttributeId(273);
    pub const SHIELD_THERMAL_RESONANCE: AttributeId = AttributeId(274);

    // === Armor ===
    pub const ARMOR_CAPACITY: AttributeId = AttributeId(265);
    pub const ARMOR_EM_RESONANCE: AttributeId = AttributeId(267);
    pub const ARMOR_EXPLOSIVE_RESONANCE: AttributeId = AttributeId(268);
    pub const ARMOR_KINETIC_RESONANCE: AttributeId = AttributeId(269);
    pub const ARMOR_THERMAL_RESONANCE: AttributeId = AttributeId(270);

    // === Hull ===
    pub const HULL_CAPACITY: AttributeId = AttributeId(9);
    pub const HULL_EM_RESONANCE: AttributeId = AttributeId(974);
    pub const HULL_EXPLOSIVE_RESONANCE: AttributeId = AttributeId(975);
    pub const HULL_KINETIC_RESONANCE: AttributeId = AttributeId(976);
    pub const HULL_THERMAL_RESONANCE: AttributeId = AttributeId(977);

    // === Slots ===
    pub const HIGH_SLOTS: AttributeId = AttributeId(14);
    pub const MED_SLOTS: AttributeId = AttributeId(13);
    pub const LOW_SLOTS: AttributeId = AttributeId(12);
    pub const RIG_SLOTS: AttributeId = AttributeId(1137);
    pub const SUBSYSTEM_SLOTS: AttributeId = AttributeId(1367);
    pub const LAUNCHER_SLOTS: AttributeId = AttributeId(101);
    pub const TURRET_SLOTS: AttributeId = AttributeId(102);

    /// Every ID the calculator reads, with a display name
    pub const KNOWN: &'static [(AttributeId, &'static str)] = &[
        (AttributeId::MASS, "mass"),
        (AttributeId::AGILITY, "agility"),
        (AttributeId::MAX_VELOCITY, "maxVelocity"),
        (AttributeId::WARP_SPEED_MULTIPLIER, "warpSpeedMultiplier"),
        (AttributeId::SIGNATURE_RADIUS, "signatureRadius"),
        (AttributeId::SCAN_RESOLUTION, "scanResolution"),
        (AttributeId::MAX_TARGET_RANGE, "maxTargetRange"),
        (AttributeId::SCAN_RADAR_STRENGTH, "scanRadarStrength"),
        (AttributeId::SCAN_LADAR_STRENGTH, "scanLadarStrength"),
        (AttributeId::SCAN_MAGNETOMETRIC_STRENGTH, "scanMagnetometricStrength"),
        (AttributeId::SCAN_GRAVIMETRIC_STRENGTH, "scanGravimetricStrength"),
        (AttributeId::MAX_LOCKED_TARGETS, "maxLockedTargets"),
        (AttributeId::CAPACITOR_CAPACITY, "capacitorCapacity"),
        (AttributeId::CAPACITOR_RECHARGE, "rechargeRate"),
        (AttributeId::SHIELD_CAPACITY, "shieldCapacity"),
        (AttributeId::SHIELD_RECHARGE, "shieldRechargeRate"),
        (AttributeId::SHIELD_EM_RESONANCE, "shieldEmDamageResonance"),
        (AttributeId::SHIELD_EXPLOSIVE_RESONANCE, "shieldExplosiveDamageResonance"),
        (AttributeId::SHIELD_KINETIC_RESONANCE, "shieldKineticDamageResonance"),
        (AttributeId::SHIELD_THERMAL_RESONANCE, "shieldThermalDamageResonance"),
        (AttributeId::ARMOR_CAPACITY, "armorHP"),
        (AttributeId::ARMOR_EM_RESONANCE, "armorEmDamageResonance"),
        (AttributeId::ARMOR_EXPLOSIVE_RESONANCE, "armorExplosiveDamageResonance"),
        (AttributeId::ARMOR_KINETIC_RESONANCE, "armorKineticDamageResonance"),
        (AttributeId::ARMOR_THERMAL_RESONANCE, "armorThermalDamageResonance"),
        (AttributeId::HULL_CAPACITY, "hp"),
        (AttributeId::HULL_EM_RESONANCE, "emDamageResonance"),
        (AttributeId::HULL_EXPLOSIVE_RESONANCE, "explosiveDamageResonance"),
        (AttributeId::HULL_KINETIC_RESONANCE, "kineticDamageResonance"),
        (AttributeId::HULL_THERMAL_RESONANCE, "thermalDamageResonance"),
        (AttributeId::HIGH_SLOTS, "hiSlots"),
        (AttributeId::MED_SLOTS, "medSlots"),
        (AttributeId::LOW_SLOTS, "lowSlots"),
        (AttributeId::RIG_SLOTS, "rigSlots"),
        (AttributeId::SUBSYSTEM_SLOTS, "maxSubSystems"),
        (AttributeId::LAUNCHER_SLOTS, "launcherSlotsLeft"),
        (AttributeId::TURRET_SLOTS, "turretSlotsLeft"),
    ];

    /// Display name for IDs the calculator knows about
    pub fn name(self) -> Option<&'static str> {
        Self::KNOWN
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }
}

impl From<u32> for AttributeId {
    fn from(id: u32) -> Self {
        AttributeId(id)
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
