//! Layer - One hitpoint pool and its effective hitpoints
//!
//! Effective hitpoints are combined per damage type, not from an averaged
//! resist:
//! - per_type = capacity / (1 - resist)
//! - ehp = Σ weight × per_type
//!
//! `capacity / (1 - average_resist)` is not equivalent once resists differ
//! between types.

use super::profile::DamageProfile;
use super::resistance::{is_resistance_capped, Resists};
use crate::types::{DamageType, LayerKind};
use serde::Serialize;

/// Hitpoints a pool of `capacity` is worth against a single damage type.
///
/// A resist at or above 1.0 never runs out: the result is `f64::INFINITY`.
/// An empty pool is worth nothing regardless of resists.
pub fn effective_hitpoints(capacity: f64, resist: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    if is_resistance_capped(resist) {
        return f64::INFINITY;
    }
    capacity / (1.0 - resist)
}

/// Shield, armor or hull with its resolved capacity and resists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    /// Raw hitpoints
    pub capacity: f64,
    pub resists: Resists,
    /// Full recharge time in seconds; shield only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge: Option<f64>,
}

impl Layer {
    pub fn new(kind: LayerKind, capacity: f64, resists: Resists) -> Self {
        Layer {
            kind,
            capacity,
            resists,
            recharge: None,
        }
    }

    pub fn with_recharge(mut self, seconds: f64) -> Self {
        self.recharge = Some(seconds);
        self
    }

    /// Effective hitpoints under pure damage of one type
    pub fn per_type_ehp(&self, damage_type: DamageType) -> f64 {
        effective_hitpoints(self.capacity, self.resists.get(damage_type))
    }

    /// Effective hitpoints under a damage profile.
    ///
    /// Types absent from the profile, or whose normalized weight is not
    /// positive, are skipped entirely. The thermal weight is a remainder
    /// (`1 - em - explosive - kinetic`), so for profiles without thermal
    /// damage its rounding residue is dropped rather than multiplied into
    /// the thermal term.
    pub fn ehp(&self, profile: &DamageProfile) -> f64 {
        let weights = profile.weights();
        let mut total = 0.0;
        for &damage_type in DamageType::all() {
            let weight = weights[damage_type.index()];
            if profile.component(damage_type) == 0.0 || weight <= 0.0 {
                continue;
            }
            total += weight * self.per_type_ehp(damage_type);
        }
        total
    }
}
