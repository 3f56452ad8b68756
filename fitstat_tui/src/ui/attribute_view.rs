//! Attributes tab view: the raw snapshot the stats are derived from

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .snapshot
        .attributes
        .iter()
        .map(|(id, value)| {
            let (name, color) = match id.name() {
                Some(name) => (name, Color::Gray),
                None => ("(unused)", Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(format!("{:>6}  ", id.0), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:32}", name), Style::default().fg(color)),
                Span::styled(format!("{}", value), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let title = format!(" Attributes ({}) ", app.snapshot.attributes.len());
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.attribute_scroll as u16, 0));

    f.render_widget(paragraph, area);
}
