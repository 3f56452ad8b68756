//! DamageProfile - Relative weighting of incoming damage types

use crate::types::DamageType;
use serde::Serialize;
use thiserror::Error;

/// Damage profile construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("{damage_type} damage must not be negative (got {value})")]
    Negative { damage_type: DamageType, value: f64 },
    #[error("{damage_type} damage must be finite (got {value})")]
    NonFinite { damage_type: DamageType, value: f64 },
    #[error("damage profile must contain some damage")]
    ZeroTotal,
}

/// Incoming damage mix as `(em, explosive, kinetic, thermal)`.
///
/// Components are relative and need not sum to 1. A constructed profile is
/// always non-negative, finite, and has a positive total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageProfile {
    em: f64,
    explosive: f64,
    kinetic: f64,
    thermal: f64,
}

impl Default for DamageProfile {
    fn default() -> Self {
        Self::uniform()
    }
}

impl DamageProfile {
    /// Equal weight on all four damage types
    pub fn uniform() -> Self {
        DamageProfile {
            em: 1.0,
            explosive: 1.0,
            kinetic: 1.0,
            thermal: 1.0,
        }
    }

    pub fn new(em: f64, explosive: f64, kinetic: f64, thermal: f64) -> Result<Self, ProfileError> {
        let components = [em, explosive, kinetic, thermal];
        for (&damage_type, &value) in DamageType::all().iter().zip(components.iter()) {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite { damage_type, value });
            }
            if value < 0.0 {
                return Err(ProfileError::Negative { damage_type, value });
            }
        }

        let total: f64 = components.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(ProfileError::ZeroTotal);
        }

        Ok(DamageProfile {
            em,
            explosive,
            kinetic,
            thermal,
        })
    }

    /// All damage on a single type
    pub fn single(damage_type: DamageType) -> Self {
        let mut components = [0.0; 4];
        components[damage_type.index()] = 1.0;
        DamageProfile {
            em: components[0],
            explosive: components[1],
            kinetic: components[2],
            thermal: components[3],
        }
    }

    pub fn component(&self, damage_type: DamageType) -> f64 {
        self.components()[damage_type.index()]
    }

    /// Raw components as `[em, explosive, kinetic, thermal]`
    pub fn components(&self) -> [f64; 4] {
        [self.em, self.explosive, self.kinetic, self.thermal]
    }

    pub fn total(&self) -> f64 {
        self.em + self.explosive + self.kinetic + self.thermal
    }

    /// Normalized weights as `[em, explosive, kinetic, thermal]`.
    ///
    /// The thermal weight is closed by subtraction, so the four weights sum to
    /// 1 and any rounding from the first three divisions lands in thermal.
    pub fn weights(&self) -> [f64; 4] {
        let total = self.total();
        let em = self.em / total;
        let explosive = self.explosive / total;
        let kinetic = self.kinetic / total;
        let thermal = 1.0 - em - explosive - kinetic;
        [em, explosive, kinetic, thermal]
    }

    /// Normalized weight of one damage type
    pub fn weight(&self, damage_type: DamageType) -> f64 {
        self.weights()[damage_type.index()]
    }

    /// Share of damage as a percentage (0-100), for display
    pub fn percent(&self, damage_type: DamageType) -> f64 {
        self.weight(damage_type) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniform_weights() {
        let weights = DamageProfile::uniform().weights();
        for w in weights {
            assert!((w - 0.25).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_single_type_weights() {
        let profile = DamageProfile::single(DamageType::Em);
        assert_eq!(profile.weights(), [1.0, 0.0, 0.0, 0.0]);

        let profile = DamageProfile::single(DamageType::Thermal);
        assert_eq!(profile.weights(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unnormalized_profile() {
        // 62/22/16 split, total 100
        let profile = DamageProfile::new(0.0, 62.0, 22.0, 16.0).unwrap();
        assert!((profile.weight(DamageType::Explosive) - 0.62).abs() < 1e-12);
        assert!((profile.weight(DamageType::Thermal) - 0.16).abs() < 1e-12);
        assert!((profile.percent(DamageType::Kinetic) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_thermal_weight_closed_by_subtraction() {
        let profile = DamageProfile::new(1.0, 2.0, 3.0, 7.0).unwrap();
        let w = profile.weights();
        let total = 13.0;
        assert_eq!(w[0], 1.0 / total);
        assert_eq!(w[1], 2.0 / total);
        assert_eq!(w[2], 3.0 / total);
        assert_eq!(w[3], 1.0 - w[0] - w[1] - w[2]);
    }

    #[test]
    fn test_rejects_negative() {
        let result = DamageProfile::new(1.0, -1.0, 0.0, 0.0);
        assert_eq!(
            result,
            Err(ProfileError::Negative {
                damage_type: DamageType::Explosive,
                value: -1.0
            })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = DamageProfile::new(f64::NAN, 1.0, 1.0, 1.0);
        assert!(matches!(result, Err(ProfileError::NonFinite { .. })));

        let result = DamageProfile::new(1.0, 1.0, f64::INFINITY, 1.0);
        assert!(matches!(result, Err(ProfileError::NonFinite { .. })));
    }

    #[test]
    fn test_rejects_zero_total() {
        assert_eq!(
            DamageProfile::new(0.0, 0.0, 0.0, 0.0),
            Err(ProfileError::ZeroTotal)
        );
    }

    proptest! {
        #[test]
        fn weights_sum_to_one(
            em in 0.0f64..1.0e6,
            explosive in 0.0f64..1.0e6,
            kinetic in 0.0f64..1.0e6,
            thermal in 0.001f64..1.0e6,
        ) {
            let profile = DamageProfile::new(em, explosive, kinetic, thermal).unwrap();
            let w = profile.weights();
            let sum: f64 = w.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-12);
            prop_assert_eq!(w[3], 1.0 - w[0] - w[1] - w[2]);
        }
    }
}
