//! StatsCalculator - Derived stats over a resolved attribute source

mod defense;
mod navigation;

use crate::attribute::{AttributeId, AttributeSource};
use crate::config::CalculatorConstants;
use crate::stats::{slot_count, Capacitor, SensorStrength, ShipStats, Slots};
use crate::types::SensorType;
use std::fmt;

pub(crate) const MILLISECONDS_PER_SECOND: f64 = 1000.0;
pub(crate) const METERS_PER_KILOMETER: f64 = 1000.0;

/// Read-only view of a fit's resolved attributes.
///
/// Every accessor re-reads the source, so results always reflect its current
/// state. Missing attributes and an unresolved source never raise: composite
/// stats come back as `None`, slot counts as 0.
pub struct StatsCalculator<'a, S: AttributeSource + ?Sized> {
    source: Option<&'a S>,
    constants: CalculatorConstants,
}

impl<'a, S: AttributeSource + ?Sized> StatsCalculator<'a, S> {
    /// Create a calculator over a resolved source with default constants
    pub fn new(source: &'a S) -> Self {
        Self::from_option(Some(source))
    }

    /// Create a calculator for a ship the engine has not resolved
    pub fn unresolved() -> Self {
        Self::from_option(None)
    }

    pub fn from_option(source: Option<&'a S>) -> Self {
        StatsCalculator {
            source,
            constants: CalculatorConstants::default(),
        }
    }

    pub fn with_constants(mut self, constants: CalculatorConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn constants(&self) -> &CalculatorConstants {
        &self.constants
    }

    pub fn is_resolved(&self) -> bool {
        self.source.is_some()
    }

    /// Look up one attribute. `None` if the source is unresolved or lacks it.
    pub fn get_attribute(&self, id: AttributeId) -> Option<f64> {
        let value = self.source.and_then(|source| source.lookup(id));
        tracing::trace!(attribute = %id, ?value, "attribute lookup");
        value
    }

    /// Look up one attribute, falling back to `default`
    pub fn get_attribute_or(&self, id: AttributeId, default: f64) -> f64 {
        self.get_attribute(id).unwrap_or(default)
    }

    /// All of `ids`, or `None` (logged against `stat`) if any is missing
    pub(crate) fn require<const N: usize>(
        &self,
        stat: &'static str,
        ids: [AttributeId; N],
    ) -> Option<[f64; N]> {
        let mut values = [0.0; N];
        for (value, id) in values.iter_mut().zip(ids) {
            match self.get_attribute(id) {
                Some(v) => *value = v,
                None => {
                    tracing::debug!(stat, attribute = %id, "stat unavailable: missing attribute");
                    return None;
                }
            }
        }
        Some(values)
    }

    // === Targeting ===

    /// Scan resolution in mm
    pub fn scan_resolution(&self) -> Option<f64> {
        self.get_attribute(AttributeId::SCAN_RESOLUTION)
    }

    /// Maximum targeting range in km
    pub fn target_range(&self) -> Option<f64> {
        self.get_attribute(AttributeId::MAX_TARGET_RANGE)
            .map(|meters| meters / METERS_PER_KILOMETER)
    }

    /// Maximum number of locked targets
    pub fn max_targets(&self) -> Option<f64> {
        self.get_attribute(AttributeId::MAX_LOCKED_TARGETS)
    }

    /// The first present, non-zero sensor strength in radar, ladar,
    /// magnetometric, gravimetric order
    pub fn sensor(&self) -> Option<SensorStrength> {
        SensorType::all().iter().find_map(|&sensor_type| {
            self.get_attribute(sensor_attribute(sensor_type))
                .filter(|&strength| strength != 0.0)
                .map(|strength| SensorStrength {
                    sensor_type,
                    strength,
                })
        })
    }

    pub fn sensor_strength(&self) -> Option<f64> {
        self.sensor().map(|sensor| sensor.strength)
    }

    // === Capacitor ===

    pub fn capacitor(&self) -> Option<Capacitor> {
        let [capacity, recharge] = self.require(
            "capacitor",
            [AttributeId::CAPACITOR_CAPACITY, AttributeId::CAPACITOR_RECHARGE],
        )?;
        Some(Capacitor {
            capacity,
            recharge: recharge / MILLISECONDS_PER_SECOND,
        })
    }

    // === Fitting ===

    /// Slot layout. A hull missing any of high/med/low gets its module slots
    /// from subsystems and reports all three as 0.
    pub fn slots(&self) -> Slots {
        let modules = self.require(
            "slots",
            [
                AttributeId::HIGH_SLOTS,
                AttributeId::MED_SLOTS,
                AttributeId::LOW_SLOTS,
            ],
        );
        let (high, med, low) = match modules {
            Some([high, med, low]) => (high, med, low),
            None => (0.0, 0.0, 0.0),
        };

        Slots {
            high: slot_count(high),
            med: slot_count(med),
            low: slot_count(low),
            rig: slot_count(self.get_attribute_or(AttributeId::RIG_SLOTS, 0.0)),
            subsystem: slot_count(self.get_attribute_or(AttributeId::SUBSYSTEM_SLOTS, 0.0)),
            turret: slot_count(self.get_attribute_or(AttributeId::TURRET_SLOTS, 0.0)),
            launcher: slot_count(self.get_attribute_or(AttributeId::LAUNCHER_SLOTS, 0.0)),
            subsystem_hull: modules.is_none(),
        }
    }

    // === Aggregate ===

    /// Every derived stat, read fresh from the source
    pub fn ship_stats(&self) -> ShipStats {
        ShipStats {
            scan_resolution: self.scan_resolution(),
            target_range: self.target_range(),
            max_targets: self.max_targets(),
            sensor: self.sensor(),
            capacitor: self.capacitor(),
            shield: self.shield(),
            armor: self.armor(),
            hull: self.hull(),
            mass: self.mass(),
            agility: self.agility(),
            speed: self.speed(),
            signature_radius: self.signature_radius(),
            warp_speed: self.warp_speed(),
            align_time: self.align_time(),
            slots: self.slots(),
        }
    }
}

impl<S: AttributeSource + ?Sized> Clone for StatsCalculator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: AttributeSource + ?Sized> Copy for StatsCalculator<'_, S> {}

impl<S: AttributeSource + ?Sized> fmt::Debug for StatsCalculator<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsCalculator")
            .field("resolved", &self.is_resolved())
            .field("constants", &self.constants)
            .finish()
    }
}

fn sensor_attribute(sensor_type: SensorType) -> AttributeId {
    match sensor_type {
        SensorType::Radar => AttributeId::SCAN_RADAR_STRENGTH,
        SensorType::Ladar => AttributeId::SCAN_LADAR_STRENGTH,
        SensorType::Magnetometric => AttributeId::SCAN_MAGNETOMETRIC_STRENGTH,
        SensorType::Gravimetric => AttributeId::SCAN_GRAVIMETRIC_STRENGTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeTable;
    use crate::test_fixtures::battleship_table;

    #[test]
    fn test_get_attribute() {
        let table = battleship_table();
        let calc = StatsCalculator::new(&table);

        assert_eq!(calc.get_attribute(AttributeId::MASS), Some(97_300_000.0));
        assert_eq!(calc.get_attribute(AttributeId::SUBSYSTEM_SLOTS), None);
        assert!((calc.get_attribute_or(AttributeId::SUBSYSTEM_SLOTS, 4.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unresolved_source_degrades() {
        let calc = StatsCalculator::<AttributeTable>::unresolved();

        assert!(!calc.is_resolved());
        assert_eq!(calc.get_attribute(AttributeId::MASS), None);
        assert!((calc.get_attribute_or(AttributeId::MASS, 1.0) - 1.0).abs() < f64::EPSILON);

        let stats = calc.ship_stats();
        assert_eq!(stats.scan_resolution, None);
        assert_eq!(stats.sensor, None);
        assert_eq!(stats.capacitor, None);
        assert_eq!(stats.shield, None);
        assert_eq!(stats.align_time, None);
        assert_eq!(stats.warp_speed, None);
        assert_eq!(stats.slots.module_slots(), 0);
        assert!(stats.slots.subsystem_hull);
        assert_eq!(stats.unavailable().len(), 14);
    }

    #[test]
    fn test_targeting_passthrough() {
        let table = battleship_table();
        let calc = StatsCalculator::new(&table);

        assert_eq!(calc.scan_resolution(), Some(95.0));
        assert_eq!(calc.max_targets(), Some(7.0));
        assert!((calc.target_range().unwrap() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sensor_picks_single_non_zero() {
        let table = battleship_table();
        let calc = StatsCalculator::new(&table);

        let sensor = calc.sensor().unwrap();
        assert_eq!(sensor.sensor_type, SensorType::Gravimetric);
        assert_eq!(calc.sensor_strength(), Some(26.0));
    }

    #[test]
    fn test_sensor_first_in_order_wins() {
        let table: AttributeTable = [
            (AttributeId::SCAN_LADAR_STRENGTH, 12.0),
            (AttributeId::SCAN_MAGNETOMETRIC_STRENGTH, 30.0),
        ]
        .into_iter()
        .collect();
        let calc = StatsCalculator::new(&table);

        let sensor = calc.sensor().unwrap();
        assert_eq!(sensor.sensor_type, SensorType::Ladar);
        assert!((sensor.strength - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sensor_unavailable() {
        let empty = AttributeTable::new();
        assert_eq!(StatsCalculator::new(&empty).sensor_strength(), None);

        let zeros: AttributeTable = SensorType::all()
            .iter()
            .map(|&t| (sensor_attribute(t), 0.0))
            .collect();
        assert_eq!(StatsCalculator::new(&zeros).sensor_strength(), None);
    }

    #[test]
    fn test_capacitor_recharge_in_seconds() {
        let table = battleship_table();
        let capacitor = StatsCalculator::new(&table).capacitor().unwrap();

        assert!((capacitor.capacity - 5500.0).abs() < f64::EPSILON);
        assert!((capacitor.recharge - 875.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capacitor_missing_recharge() {
        let mut table = battleship_table();
        table.remove(AttributeId::CAPACITOR_RECHARGE);
        assert_eq!(StatsCalculator::new(&table).capacitor(), None);
    }

    #[test]
    fn test_slots_fixed_hull() {
        let table = battleship_table();
        let slots = StatsCalculator::new(&table).slots();

        assert_eq!(
            slots,
            Slots {
                high: 8,
                med: 6,
                low: 5,
                rig: 3,
                subsystem: 0,
                turret: 4,
                launcher: 6,
                subsystem_hull: false,
            }
        );
    }

    #[test]
    fn test_slots_subsystem_hull() {
        let table: AttributeTable = [
            (AttributeId::RIG_SLOTS, 2.0),
            (AttributeId::SUBSYSTEM_SLOTS, 4.0),
        ]
        .into_iter()
        .collect();
        let slots = StatsCalculator::new(&table).slots();

        assert!(slots.subsystem_hull);
        assert_eq!((slots.high, slots.med, slots.low), (0, 0, 0));
        assert_eq!(slots.rig, 2);
        assert_eq!(slots.subsystem, 4);
        assert_eq!(slots.turret, 0);
        assert_eq!(slots.launcher, 0);
    }

    #[test]
    fn test_slots_one_module_slot_missing() {
        let mut table = battleship_table();
        table.remove(AttributeId::MED_SLOTS);
        let slots = StatsCalculator::new(&table).slots();

        assert!(slots.subsystem_hull);
        assert_eq!(slots.module_slots(), 0);
        assert_eq!(slots.rig, 3);
    }

    #[test]
    fn test_slots_independent_defaults() {
        let mut table = battleship_table();
        table.remove(AttributeId::RIG_SLOTS);
        table.remove(AttributeId::TURRET_SLOTS);
        let slots = StatsCalculator::new(&table).slots();

        assert!(!slots.subsystem_hull);
        assert_eq!((slots.high, slots.med, slots.low), (8, 6, 5));
        assert_eq!(slots.rig, 0);
        assert_eq!(slots.turret, 0);
        assert_eq!(slots.launcher, 6);
    }

    #[test]
    fn test_stats_track_source_changes() {
        let mut table = battleship_table();
        assert_eq!(StatsCalculator::new(&table).scan_resolution(), Some(95.0));

        table.insert(AttributeId::SCAN_RESOLUTION, 120.0);
        assert_eq!(StatsCalculator::new(&table).scan_resolution(), Some(120.0));
    }

    #[test]
    fn test_ship_stats_complete_for_fixture() {
        let table = battleship_table();
        let stats = StatsCalculator::new(&table).ship_stats();
        assert!(stats.unavailable().is_empty());
    }
}
