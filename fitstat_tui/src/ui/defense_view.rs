//! Defense tab view

use super::section_header;
use crate::app::App;
use crate::format;
use crate::report::capitalize;
use fitstat_core::{DamageType, Layer, LayerKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    draw_profiles(f, app, chunks[0]);
    draw_layers(f, app, chunks[1]);
}

fn draw_profiles(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.profiles.len() + 8);

    for (i, (name, _)) in app.profiles.iter().enumerate() {
        let selected = i == app.selected_profile;
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, name), style)));
    }

    let (_, profile) = app.profile();
    lines.push(Line::from(""));
    lines.push(section_header("Mix"));
    for &damage_type in DamageType::all() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:12}", capitalize(damage_type.name())),
                Style::default().fg(damage_color(damage_type)),
            ),
            Span::styled(
                format!("{:.1}%", profile.percent(damage_type)),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Damage Profile "));

    f.render_widget(paragraph, area);
}

fn draw_layers(f: &mut Frame, app: &App, area: Rect) {
    let calc = app.calculator();
    let (name, profile) = app.profile();
    let ehp = calc.compute_ehp(profile);

    let mut lines = vec![header_line()];
    for &kind in LayerKind::all() {
        lines.push(Line::from(""));
        match calc.layer(kind) {
            Some(layer) => {
                lines.extend(layer_lines(&layer));
                lines.push(Line::from(vec![
                    Span::styled(format!("{:14}", "  Effective"), Style::default().fg(Color::Gray)),
                    Span::styled(
                        format::hitpoints(ehp.get(kind)),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            None => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:14}", capitalize(kind.name())),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format::UNAVAILABLE, Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:14}", "Total EHP"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format::hitpoints(ehp.total()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Layers vs {} ", name)),
    );

    f.render_widget(paragraph, area);
}

fn header_line() -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:14}{:>10}", "", "HP"),
        Style::default().fg(Color::DarkGray),
    )];
    for &damage_type in DamageType::all() {
        spans.push(Span::styled(
            format!("{:>12}", capitalize(damage_type.name())),
            Style::default().fg(damage_color(damage_type)),
        ));
    }
    Line::from(spans)
}

/// Resist row and per-type EHP row for one layer
fn layer_lines(layer: &Layer) -> Vec<Line<'static>> {
    let mut resist_spans = vec![Span::styled(
        format!("{:14}{:>10}", capitalize(layer.kind.name()), format::hitpoints(Some(layer.capacity))),
        Style::default().fg(Color::Cyan),
    )];
    let mut ehp_spans = vec![Span::styled(
        format!("{:14}{:>10}", "  per type", ""),
        Style::default().fg(Color::Gray),
    )];

    for &damage_type in DamageType::all() {
        let resist = layer.resists.get(damage_type);
        resist_spans.push(Span::styled(
            format!("{:>12}", format::percent(resist)),
            Style::default().fg(resist_color(resist)),
        ));
        ehp_spans.push(Span::styled(
            format!("{:>12}", format::hitpoints(Some(layer.per_type_ehp(damage_type)))),
            Style::default().fg(Color::White),
        ));
    }

    let mut lines = vec![Line::from(resist_spans), Line::from(ehp_spans)];
    if let Some(recharge) = layer.recharge {
        lines.push(Line::from(vec![
            Span::styled(format!("{:14}", "  Recharge"), Style::default().fg(Color::Gray)),
            Span::styled(format::number(recharge, 0, "s"), Style::default().fg(Color::White)),
        ]));
    }
    lines
}

fn resist_color(resist: f64) -> Color {
    if resist >= 0.75 {
        Color::Green
    } else if resist >= 0.5 {
        Color::Yellow
    } else if resist >= 0.0 {
        Color::White
    } else {
        Color::Red
    }
}

fn damage_color(damage_type: DamageType) -> Color {
    match damage_type {
        DamageType::Em => Color::Blue,
        DamageType::Explosive => Color::LightRed,
        DamageType::Kinetic => Color::Gray,
        DamageType::Thermal => Color::Red,
    }
}
