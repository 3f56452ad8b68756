//! Derived stat value objects

mod ship;
mod slots;
mod values;

pub use ship::ShipStats;
pub use slots::{slot_count, Slots};
pub use values::{serialize_hitpoints, Capacitor, EffectiveHitpoints, SensorStrength};
