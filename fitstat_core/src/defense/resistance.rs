//! Resistance - Conversion from damage resonance to resistance
//!
//! The engine stores each resist as a resonance: the fraction of incoming
//! damage that is taken. Resistance is the absorbed fraction:
//! - resist = 1 - resonance
//! - 0.0 = no resistance, 1.0 = immune

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Convert a damage resonance (fraction taken) into a resistance (fraction absorbed)
pub fn resist_from_resonance(resonance: f64) -> f64 {
    1.0 - resonance
}

/// Whether a resistance is at or beyond immunity
pub fn is_resistance_capped(resist: f64) -> bool {
    resist >= 1.0
}

/// Resistance fractions for the four damage types of one layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Resists {
    pub em: f64,
    pub explosive: f64,
    pub kinetic: f64,
    pub thermal: f64,
}

impl Resists {
    /// Build from raw resonances ordered `[em, explosive, kinetic, thermal]`
    pub fn from_resonances(resonances: [f64; 4]) -> Self {
        Resists {
            em: resist_from_resonance(resonances[0]),
            explosive: resist_from_resonance(resonances[1]),
            kinetic: resist_from_resonance(resonances[2]),
            thermal: resist_from_resonance(resonances[3]),
        }
    }

    /// Same resist for every damage type
    pub fn uniform(resist: f64) -> Self {
        Resists {
            em: resist,
            explosive: resist,
            kinetic: resist,
            thermal: resist,
        }
    }

    pub fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Em => self.em,
            DamageType::Explosive => self.explosive,
            DamageType::Kinetic => self.kinetic,
            DamageType::Thermal => self.thermal,
        }
    }

    /// Resistance as a percentage (0-100), for display
    pub fn percent(&self, damage_type: DamageType) -> f64 {
        self.get(damage_type) * 100.0
    }
}
