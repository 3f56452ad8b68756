//! Non-interactive stat report (text or JSON)

use crate::format;
use fitstat_core::stats::serialize_hitpoints;
use fitstat_core::{
    AttributeSnapshot, CalculatorConstants, DamageProfile, DamageType, EffectiveHitpoints, Layer,
    LayerKind, ShipStats, StatsCalculator,
};
use serde::Serialize;
use std::fmt::Write;

/// Damage profile as it appears in a report
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    /// Normalized `[em, explosive, kinetic, thermal]` weights
    pub weights: [f64; 4],
}

/// Everything the report prints for one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub profile: ProfileSummary,
    pub stats: ShipStats,
    pub ehp: EffectiveHitpoints,
    #[serde(serialize_with = "serialize_hitpoints")]
    pub total_ehp: Option<f64>,
}

impl Report {
    pub fn build(
        snapshot: &AttributeSnapshot,
        constants: CalculatorConstants,
        profile_name: &str,
        profile: &DamageProfile,
    ) -> Self {
        let calc = StatsCalculator::new(&snapshot.attributes).with_constants(constants);
        let ehp = calc.compute_ehp(profile);
        Report {
            name: snapshot.label().to_string(),
            profile: ProfileSummary {
                name: profile_name.to_string(),
                weights: profile.weights(),
            },
            stats: calc.ship_stats(),
            ehp,
            total_ehp: ehp.total(),
        }
    }
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &Report) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.name);
    let _ = writeln!(out);

    section(&mut out, "Targeting");
    row(&mut out, "Scan resolution", format::optional(stats.scan_resolution, 0, "mm"));
    row(&mut out, "Target range", format::optional(stats.target_range, 1, "km"));
    row(&mut out, "Max targets", format::optional(stats.max_targets, 0, ""));
    let sensor = match stats.sensor {
        Some(sensor) => format!("{} ({})", format::number(sensor.strength, 1, ""), sensor.sensor_type),
        None => format::UNAVAILABLE.to_string(),
    };
    row(&mut out, "Sensor strength", sensor);

    section(&mut out, "Capacitor");
    row(&mut out, "Capacity", format::optional(stats.capacitor.map(|c| c.capacity), 0, "GJ"));
    row(&mut out, "Recharge", format::optional(stats.capacitor.map(|c| c.recharge), 1, "s"));

    section(&mut out, "Navigation");
    row(&mut out, "Max velocity", format::optional(stats.speed, 1, "m/s"));
    row(&mut out, "Align time", format::optional(stats.align_time, 2, "s"));
    row(&mut out, "Warp speed", format::optional(stats.warp_speed, 2, "AU/s"));
    row(&mut out, "Mass", format::optional(stats.mass, 0, "kg"));
    row(&mut out, "Agility", format::optional(stats.agility, 4, ""));
    row(&mut out, "Signature radius", format::optional(stats.signature_radius, 0, "m"));

    section(&mut out, "Slots");
    let slots = &stats.slots;
    if slots.subsystem_hull {
        row(&mut out, "High/Med/Low", "subsystem hull".to_string());
    } else {
        row(&mut out, "High/Med/Low", format!("{}/{}/{}", slots.high, slots.med, slots.low));
    }
    row(&mut out, "Rigs", slots.rig.to_string());
    row(&mut out, "Subsystems", slots.subsystem.to_string());
    row(&mut out, "Turrets", slots.turret.to_string());
    row(&mut out, "Launchers", slots.launcher.to_string());

    section(&mut out, &format!("Defense vs {}", report.profile.name));
    let _ = writeln!(
        out,
        "  {:8} {:>10} {:>6} {:>6} {:>6} {:>6} {:>12}",
        "", "HP", "EM", "Exp", "Kin", "Therm", "EHP"
    );
    for &kind in LayerKind::all() {
        let layer = match kind {
            LayerKind::Shield => stats.shield,
            LayerKind::Armor => stats.armor,
            LayerKind::Hull => stats.hull,
        };
        layer_row(&mut out, kind, layer.as_ref(), report.ehp.get(kind));
    }
    let _ = writeln!(out, "  {:8} {:>10} {:>40}", "Total", "", format::hitpoints(report.total_ehp));

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "═══ {} ═══", title);
}

fn row(out: &mut String, name: &str, value: String) {
    let _ = writeln!(out, "  {:18} {}", name, value);
}

fn layer_row(out: &mut String, kind: LayerKind, layer: Option<&Layer>, ehp: Option<f64>) {
    let name = capitalize(kind.name());
    match layer {
        Some(layer) => {
            let resists: Vec<String> = DamageType::all()
                .iter()
                .map(|&t| format::percent(layer.resists.get(t)))
                .collect();
            let _ = writeln!(
                out,
                "  {:8} {:>10} {:>6} {:>6} {:>6} {:>6} {:>12}",
                name,
                format::hitpoints(Some(layer.capacity)),
                resists[0],
                resists[1],
                resists[2],
                resists[3],
                format::hitpoints(ehp),
            );
        }
        None => {
            let _ = writeln!(out, "  {:8} {}", name, format::UNAVAILABLE);
        }
    }
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
