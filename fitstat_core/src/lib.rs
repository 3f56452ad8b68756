//! fitstat_core - Derived combat statistics for resolved ship fits
//!
//! This library provides:
//! - AttributeSource: the single capability read from a fitting engine
//! - StatsCalculator: targeting, capacitor, navigation and slot stats
//! - Layer / DamageProfile: resists and effective hitpoints per damage mix
//! - Config: calculator constants and named damage profiles from TOML

pub mod attribute;
pub mod calculator;
pub mod config;
pub mod defense;
pub mod prelude;
pub mod stats;
pub mod types;

#[cfg(test)]
mod test_fixtures;

// Re-export core types for convenience
pub use attribute::{AttributeId, AttributeSnapshot, AttributeSource, AttributeTable};
pub use calculator::StatsCalculator;
pub use config::{default_profiles, CalculatorConstants, ConfigError, DEFAULT_BASE_WARP_SPEED};
pub use defense::{DamageProfile, Layer, ProfileError, Resists};
pub use stats::{Capacitor, EffectiveHitpoints, SensorStrength, ShipStats, Slots};
pub use types::{DamageType, LayerKind, SensorType};
