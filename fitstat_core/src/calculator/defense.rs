//! Layer and effective hitpoint stats for StatsCalculator

use super::{StatsCalculator, MILLISECONDS_PER_SECOND};
use crate::attribute::{AttributeId, AttributeSource};
use crate::defense::{DamageProfile, Layer, Resists};
use crate::stats::EffectiveHitpoints;
use crate::types::LayerKind;

/// Attribute IDs backing one layer
struct LayerAttributes {
    capacity: AttributeId,
    /// `[em, explosive, kinetic, thermal]`
    resonances: [AttributeId; 4],
    recharge: Option<AttributeId>,
}

fn layer_attributes(kind: LayerKind) -> LayerAttributes {
    match kind {
        LayerKind::Shield => LayerAttributes {
            capacity: AttributeId::SHIELD_CAPACITY,
            resonances: [
                AttributeId::SHIELD_EM_RESONANCE,
                AttributeId::SHIELD_EXPLOSIVE_RESONANCE,
                AttributeId::SHIELD_KINETIC_RESONANCE,
                AttributeId::SHIELD_THERMAL_RESONANCE,
            ],
            recharge: Some(AttributeId::SHIELD_RECHARGE),
        },
        LayerKind::Armor => LayerAttributes {
            capacity: AttributeId::ARMOR_CAPACITY,
            resonances: [
                AttributeId::ARMOR_EM_RESONANCE,
                AttributeId::ARMOR_EXPLOSIVE_RESONANCE,
                AttributeId::ARMOR_KINETIC_RESONANCE,
                AttributeId::ARMOR_THERMAL_RESONANCE,
            ],
            recharge: None,
        },
        LayerKind::Hull => LayerAttributes {
            capacity: AttributeId::HULL_CAPACITY,
            resonances: [
                AttributeId::HULL_EM_RESONANCE,
                AttributeId::HULL_EXPLOSIVE_RESONANCE,
                AttributeId::HULL_KINETIC_RESONANCE,
                AttributeId::HULL_THERMAL_RESONANCE,
            ],
            recharge: None,
        },
    }
}

impl<S: AttributeSource + ?Sized> StatsCalculator<'_, S> {
    /// Capacity and resists of one layer; `None` if any of its attributes is
    /// missing, never partially filled
    pub fn layer(&self, kind: LayerKind) -> Option<Layer> {
        let ids = layer_attributes(kind);
        let [capacity, em, explosive, kinetic, thermal] = self.require(
            kind.name(),
            [
                ids.capacity,
                ids.resonances[0],
                ids.resonances[1],
                ids.resonances[2],
                ids.resonances[3],
            ],
        )?;

        let layer = Layer::new(
            kind,
            capacity,
            Resists::from_resonances([em, explosive, kinetic, thermal]),
        );

        match ids.recharge {
            Some(recharge_id) => {
                let [recharge] = self.require(kind.name(), [recharge_id])?;
                Some(layer.with_recharge(recharge / MILLISECONDS_PER_SECOND))
            }
            None => Some(layer),
        }
    }

    pub fn shield(&self) -> Option<Layer> {
        self.layer(LayerKind::Shield)
    }

    pub fn armor(&self) -> Option<Layer> {
        self.layer(LayerKind::Armor)
    }

    pub fn hull(&self) -> Option<Layer> {
        self.layer(LayerKind::Hull)
    }

    /// Effective hitpoints per layer against `profile`. Each layer is
    /// independent: one unavailable layer leaves the others computable.
    pub fn compute_ehp(&self, profile: &DamageProfile) -> EffectiveHitpoints {
        EffectiveHitpoints {
            shield: self.shield().map(|layer| layer.ehp(profile)),
            armor: self.armor().map(|layer| layer.ehp(profile)),
            hull: self.hull().map(|layer| layer.ehp(profile)),
        }
    }

    /// Effective hitpoints against uniform damage
    pub fn ehp(&self) -> EffectiveHitpoints {
        self.compute_ehp(&DamageProfile::uniform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeTable;
    use crate::test_fixtures::battleship_table;
    use crate::types::DamageType;

    fn half_resist_armor() -> AttributeTable {
        [
            (AttributeId::ARMOR_CAPACITY, 1000.0),
            (AttributeId::ARMOR_EM_RESONANCE, 0.5),
            (AttributeId::ARMOR_EXPLOSIVE_RESONANCE, 0.5),
            (AttributeId::ARMOR_KINETIC_RESONANCE, 0.5),
            (AttributeId::ARMOR_THERMAL_RESONANCE, 0.5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resists_from_resonance() {
        let mut table = half_resist_armor();
        table.insert(AttributeId::ARMOR_KINETIC_RESONANCE, 0.2);
        let armor = StatsCalculator::new(&table).armor().unwrap();

        assert!((armor.resists.kinetic - 0.8).abs() < 1e-12);
        assert!((armor.resists.em - 0.5).abs() < f64::EPSILON);
        assert_eq!(armor.recharge, None);
    }

    #[test]
    fn test_shield_recharge_in_seconds() {
        let table = battleship_table();
        let shield = StatsCalculator::new(&table).shield().unwrap();

        assert_eq!(shield.kind, LayerKind::Shield);
        assert!((shield.capacity - 6000.0).abs() < f64::EPSILON);
        assert!((shield.recharge.unwrap() - 2500.0).abs() < f64::EPSILON);
        assert!((shield.resists.em - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_layer_missing_one_resist_is_unavailable() {
        let mut table = half_resist_armor();
        table.remove(AttributeId::ARMOR_THERMAL_RESONANCE);
        assert_eq!(StatsCalculator::new(&table).armor(), None);
    }

    #[test]
    fn test_shield_missing_recharge_is_unavailable() {
        let mut table = battleship_table();
        table.remove(AttributeId::SHIELD_RECHARGE);
        assert_eq!(StatsCalculator::new(&table).shield(), None);
    }

    #[test]
    fn test_ehp_uniform_half_resists() {
        let table = half_resist_armor();
        let ehp = StatsCalculator::new(&table).ehp();

        assert!((ehp.armor.unwrap() - 2000.0).abs() < 1e-9);
        assert_eq!(ehp.shield, None);
        assert_eq!(ehp.hull, None);
        assert_eq!(ehp.total(), None);
    }

    #[test]
    fn test_ehp_single_type_profile() {
        let table = battleship_table();
        let calc = StatsCalculator::new(&table);
        let armor = calc.armor().unwrap();

        let ehp = calc.compute_ehp(&DamageProfile::single(DamageType::Explosive));
        assert_eq!(ehp.armor, Some(armor.per_type_ehp(DamageType::Explosive)));
    }

    #[test]
    fn test_ehp_all_layers() {
        let table = battleship_table();
        let ehp = StatsCalculator::new(&table).ehp();

        // Shield: 6000 × 0.25 × (1/1.0 + 1/0.5 + 1/0.6 + 1/0.8)
        let shield = 6000.0 * 0.25 * (1.0 + 2.0 + 1.0 / 0.6 + 1.25);
        assert!((ehp.shield.unwrap() - shield).abs() < 1e-6);

        // Hull: uniform 33% resist
        assert!((ehp.hull.unwrap() - 6000.0 / 0.67).abs() < 1e-6);

        let total = ehp.total().unwrap();
        assert!((total - (ehp.shield.unwrap() + ehp.armor.unwrap() + ehp.hull.unwrap())).abs() < 1e-9);
    }

    #[test]
    fn test_ehp_immune_layer() {
        let mut table = battleship_table();
        table.insert(AttributeId::SHIELD_EM_RESONANCE, 0.0);
        let calc = StatsCalculator::new(&table);

        assert!(calc.ehp().shield.unwrap().is_infinite());
        let kinetic = calc.compute_ehp(&DamageProfile::single(DamageType::Kinetic));
        assert!(kinetic.shield.unwrap().is_finite());
    }
}
