//! AttributeSource - Trait and implementations for resolved attribute providers

mod id;
mod table;

pub use id::AttributeId;
pub use table::{AttributeSnapshot, AttributeTable};

use std::collections::{BTreeMap, HashMap};

/// Anything that exposes a fitting engine's resolved attribute values.
///
/// The mapping is partial: hulls routinely lack attributes (subsystem hulls
/// have no fixed slot counts), and a missing ID is not an error.
pub trait AttributeSource {
    /// Resolved value of `id`, if the source defines it
    fn lookup(&self, id: AttributeId) -> Option<f64>;
}

impl<S: AttributeSource + ?Sized> AttributeSource for &S {
    fn lookup(&self, id: AttributeId) -> Option<f64> {
        (**self).lookup(id)
    }
}

impl<S: AttributeSource + ?Sized> AttributeSource for Box<S> {
    fn lookup(&self, id: AttributeId) -> Option<f64> {
        (**self).lookup(id)
    }
}

impl AttributeSource for HashMap<AttributeId, f64> {
    fn lookup(&self, id: AttributeId) -> Option<f64> {
        self.get(&id).copied()
    }
}

impl AttributeSource for BTreeMap<AttributeId, f64> {
    fn lookup(&self, id: AttributeId) -> Option<f64> {
        self.get(&id).copied()
    }
}
