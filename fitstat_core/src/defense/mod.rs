//! Defense system - Layers, Resistances, Damage profiles

mod layer;
mod profile;
mod resistance;

pub use layer::{effective_hitpoints, Layer};
pub use profile::{DamageProfile, ProfileError};
pub use resistance::{is_resistance_capped, resist_from_resonance, Resists};
