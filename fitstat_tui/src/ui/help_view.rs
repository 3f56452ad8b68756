//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let base_warp = app.constants.base_warp_speed;

    let lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Stats/Defense/Attributes/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("←/h  →/l", "Previous/next damage profile"),
        key_line("↑/k  ↓/j", "Select profile / scroll attributes"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Formulas"),
        Line::from(""),
        Line::from(Span::styled("Resistance:", Style::default().fg(Color::Yellow))),
        Line::from("  Resist = 1 - damage resonance"),
        Line::from(""),
        Line::from(Span::styled(
            "Effective Hitpoints:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Per type = HP / (1 - resist)"),
        Line::from("  EHP = Σ weight × per type (weights from the damage profile)"),
        Line::from("  100% resist against incoming damage = ∞"),
        Line::from(""),
        Line::from(Span::styled("Align Time:", Style::default().fg(Color::Yellow))),
        Line::from("  -ln(0.25) × agility × mass / 1,000,000 seconds"),
        Line::from(""),
        Line::from(Span::styled("Warp Speed:", Style::default().fg(Color::Yellow))),
        Line::from(format!("  multiplier × {} AU/s", base_warp)),
        Line::from(""),
        Line::from(Span::styled("Slots:", Style::default().fg(Color::Yellow))),
        Line::from("  Hulls without fixed high/med/low slots take them from subsystems"),
        Line::from(""),
        Line::from(Span::styled(
            "Logs go to stderr; set RUST_LOG=debug to see missing attributes.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Formulas "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
