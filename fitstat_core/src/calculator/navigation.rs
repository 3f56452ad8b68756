//! Navigation stats for StatsCalculator

use super::StatsCalculator;
use crate::attribute::{AttributeId, AttributeSource};

impl<S: AttributeSource + ?Sized> StatsCalculator<'_, S> {
    /// Mass in kg
    pub fn mass(&self) -> Option<f64> {
        self.get_attribute(AttributeId::MASS)
    }

    /// Inertia modifier
    pub fn agility(&self) -> Option<f64> {
        self.get_attribute(AttributeId::AGILITY)
    }

    /// Maximum velocity in m/s
    pub fn speed(&self) -> Option<f64> {
        self.get_attribute(AttributeId::MAX_VELOCITY)
    }

    /// Signature radius in m
    pub fn signature_radius(&self) -> Option<f64> {
        self.get_attribute(AttributeId::SIGNATURE_RADIUS)
    }

    /// Warp speed in AU/s
    pub fn warp_speed(&self) -> Option<f64> {
        self.get_attribute(AttributeId::WARP_SPEED_MULTIPLIER)
            .map(|multiplier| multiplier * self.constants.base_warp_speed)
    }

    /// Seconds to align for warp.
    ///
    /// Velocity decays exponentially with time constant agility × mass / 1e6
    /// seconds; aligning takes until only 25% of the gap remains:
    /// `-ln(0.25) * agility * mass / 1e6`.
    pub fn align_time(&self) -> Option<f64> {
        let [agility, mass] =
            self.require("align_time", [AttributeId::AGILITY, AttributeId::MASS])?;
        Some(
            -self.constants.align_velocity_fraction.ln() * agility * mass
                / self.constants.align_time_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeTable;
    use crate::config::CalculatorConstants;
    use crate::test_fixtures::battleship_table;

    #[test]
    fn test_passthrough() {
        let table = battleship_table();
        let calc = StatsCalculator::new(&table);

        assert_eq!(calc.mass(), Some(97_300_000.0));
        assert_eq!(calc.agility(), Some(0.12));
        assert_eq!(calc.speed(), Some(120.0));
        assert_eq!(calc.signature_radius(), Some(400.0));
    }

    #[test]
    fn test_align_time() {
        let table: AttributeTable = [(AttributeId::AGILITY, 3.0), (AttributeId::MASS, 1.0e9)]
            .into_iter()
            .collect();
        let align = StatsCalculator::new(&table).align_time().unwrap();

        let expected = -(0.25f64).ln() * 3.0 * 1.0e9 / 1.0e6;
        assert!((align - expected).abs() < 1e-9);
        assert!((align - 4158.88).abs() < 0.01);
    }

    #[test]
    fn test_align_time_needs_both_inputs() {
        let table: AttributeTable = [(AttributeId::AGILITY, 3.0)].into_iter().collect();
        assert_eq!(StatsCalculator::new(&table).align_time(), None);

        let table: AttributeTable = [(AttributeId::MASS, 1.0e9)].into_iter().collect();
        assert_eq!(StatsCalculator::new(&table).align_time(), None);
    }

    #[test]
    fn test_warp_speed() {
        let table: AttributeTable = [(AttributeId::WARP_SPEED_MULTIPLIER, 6.0)]
            .into_iter()
            .collect();
        let warp = StatsCalculator::new(&table).warp_speed().unwrap();
        assert!((warp - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_warp_speed_custom_base() {
        let table: AttributeTable = [(AttributeId::WARP_SPEED_MULTIPLIER, 2.0)]
            .into_iter()
            .collect();
        let constants = CalculatorConstants {
            base_warp_speed: 4.5,
            ..CalculatorConstants::default()
        };
        let calc = StatsCalculator::new(&table).with_constants(constants);
        assert!((calc.warp_speed().unwrap() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_warp_speed_missing_multiplier() {
        let table = AttributeTable::new();
        assert_eq!(StatsCalculator::new(&table).warp_speed(), None);
    }
}
