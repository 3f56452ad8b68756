//! Slots - Fitting slot layout of a hull

use serde::Serialize;

/// Truncate a raw slot attribute to a count. Negative and NaN values become 0.
pub fn slot_count(value: f64) -> u32 {
    // `as` truncates toward zero and saturates
    value as u32
}

/// Slot counts for a hull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Slots {
    pub high: u32,
    pub med: u32,
    pub low: u32,
    pub rig: u32,
    pub subsystem: u32,
    pub turret: u32,
    pub launcher: u32,
    /// High/med/low come from subsystems, not the hull
    pub subsystem_hull: bool,
}

impl Slots {
    /// Module slots (high + med + low)
    pub fn module_slots(&self) -> u32 {
        self.high + self.med + self.low
    }
}
