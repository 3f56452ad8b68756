//! Shared attribute tables for unit tests

use crate::attribute::{AttributeId, AttributeTable};

/// A battleship with gravimetric sensors and fixed slots
pub(crate) fn battleship_table() -> AttributeTable {
    [
        (AttributeId::MASS, 97_300_000.0),
        (AttributeId::AGILITY, 0.12),
        (AttributeId::MAX_VELOCITY, 120.0),
        (AttributeId::SIGNATURE_RADIUS, 400.0),
        (AttributeId::WARP_SPEED_MULTIPLIER, 2.0),
        (AttributeId::SCAN_RESOLUTION, 95.0),
        (AttributeId::MAX_TARGET_RANGE, 75_000.0),
        (AttributeId::SCAN_RADAR_STRENGTH, 0.0),
        (AttributeId::SCAN_LADAR_STRENGTH, 0.0),
        (AttributeId::SCAN_MAGNETOMETRIC_STRENGTH, 0.0),
        (AttributeId::SCAN_GRAVIMETRIC_STRENGTH, 26.0),
        (AttributeId::MAX_LOCKED_TARGETS, 7.0),
        (AttributeId::CAPACITOR_CAPACITY, 5500.0),
        (AttributeId::CAPACITOR_RECHARGE, 875_000.0),
        (AttributeId::SHIELD_CAPACITY, 6000.0),
        (AttributeId::SHIELD_RECHARGE, 2_500_000.0),
        (AttributeId::SHIELD_EM_RESONANCE, 1.0),
        (AttributeId::SHIELD_EXPLOSIVE_RESONANCE, 0.5),
        (AttributeId::SHIELD_KINETIC_RESONANCE, 0.6),
        (AttributeId::SHIELD_THERMAL_RESONANCE, 0.8),
        (AttributeId::ARMOR_CAPACITY, 5000.0),
        (AttributeId::ARMOR_EM_RESONANCE, 0.5),
        (AttributeId::ARMOR_EXPLOSIVE_RESONANCE, 0.9),
        (AttributeId::ARMOR_KINETIC_RESONANCE, 0.75),
        (AttributeId::ARMOR_THERMAL_RESONANCE, 0.65),
        (AttributeId::HULL_CAPACITY, 6000.0),
        (AttributeId::HULL_EM_RESONANCE, 0.67),
        (AttributeId::HULL_EXPLOSIVE_RESONANCE, 0.67),
        (AttributeId::HULL_KINETIC_RESONANCE, 0.67),
        (AttributeId::HULL_THERMAL_RESONANCE, 0.67),
        (AttributeId::HIGH_SLOTS, 8.0),
        (AttributeId::MED_SLOTS, 6.0),
        (AttributeId::LOW_SLOTS, 5.0),
        (AttributeId::RIG_SLOTS, 3.0),
        (AttributeId::TURRET_SLOTS, 4.0),
        (AttributeId::LAUNCHER_SLOTS, 6.0),
    ]
    .into_iter()
    .collect()
}
