//! Prelude module for convenient imports
//!
//! ```rust
//! use fitstat_core::prelude::*;
//! ```

// Attribute access
pub use crate::attribute::{AttributeId, AttributeSnapshot, AttributeSource, AttributeTable};

// Calculator
pub use crate::calculator::StatsCalculator;

// Defense
pub use crate::defense::{DamageProfile, Layer, Resists};

// Stats
pub use crate::stats::{Capacitor, EffectiveHitpoints, SensorStrength, ShipStats, Slots};

// Types
pub use crate::types::{DamageType, LayerKind, SensorType};

// Config
pub use crate::config::{default_profiles, CalculatorConstants};
