//! Stats tab view

use super::{section_header, stat_line};
use crate::app::App;
use crate::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_ship_stats(f, app, chunks[0]);
    draw_fitting(f, app, chunks[1]);
}

fn draw_ship_stats(f: &mut Frame, app: &App, area: Rect) {
    let calc = app.calculator();
    let sensor = match calc.sensor() {
        Some(sensor) => format!(
            "{} ({})",
            format::number(sensor.strength, 1, ""),
            sensor.sensor_type
        ),
        None => format::UNAVAILABLE.to_string(),
    };
    let capacitor = calc.capacitor();

    let lines = vec![
        section_header("Targeting"),
        stat_line("Scan Resolution", format::optional(calc.scan_resolution(), 0, "mm")),
        stat_line("Target Range", format::optional(calc.target_range(), 1, "km")),
        stat_line("Max Targets", format::optional(calc.max_targets(), 0, "")),
        stat_line("Sensor Strength", sensor),
        Line::from(""),
        section_header("Capacitor"),
        stat_line("Capacity", format::optional(capacitor.map(|c| c.capacity), 0, "GJ")),
        stat_line("Recharge", format::optional(capacitor.map(|c| c.recharge), 1, "s")),
        Line::from(""),
        section_header("Navigation"),
        stat_line("Max Velocity", format::optional(calc.speed(), 1, "m/s")),
        stat_line("Align Time", format::optional(calc.align_time(), 2, "s")),
        stat_line("Warp Speed", format::optional(calc.warp_speed(), 2, "AU/s")),
        stat_line("Mass", format::optional(calc.mass(), 0, "kg")),
        stat_line("Agility", format::optional(calc.agility(), 4, "")),
        stat_line("Signature Radius", format::optional(calc.signature_radius(), 0, "m")),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Ship "));

    f.render_widget(paragraph, area);
}

fn draw_fitting(f: &mut Frame, app: &App, area: Rect) {
    let slots = app.calculator().slots();

    let mut lines = vec![section_header("Slots")];
    if slots.subsystem_hull {
        lines.push(stat_line("Module Slots", "from subsystems".to_string()));
    } else {
        lines.push(stat_line("High", slots.high.to_string()));
        lines.push(stat_line("Medium", slots.med.to_string()));
        lines.push(stat_line("Low", slots.low.to_string()));
    }
    lines.push(stat_line("Rigs", slots.rig.to_string()));
    lines.push(stat_line("Subsystems", slots.subsystem.to_string()));
    lines.push(stat_line("Turret Hardpoints", slots.turret.to_string()));
    lines.push(stat_line("Launcher Hardpoints", slots.launcher.to_string()));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Fitting "));

    f.render_widget(paragraph, area);
}
