//! UI rendering

mod attribute_view;
mod defense_view;
mod help_view;
mod stat_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Stats => stat_view::draw(f, app, chunks[1]),
        Tab::Defense => defense_view::draw(f, app, chunks[1]),
        Tab::Attributes => attribute_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

/// Footer: the current tab's keys, highlighted, then the global ones
fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let tab_key = match app.current_tab {
        Tab::Defense => Some(("↑/↓", "Profile")),
        Tab::Attributes => Some(("↑/↓", "Scroll")),
        Tab::Stats | Tab::Help => None,
    };
    let tab_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let global_style = Style::default().fg(Color::Cyan);

    let keys = tab_key
        .map(|(key, desc)| (key, desc, tab_style))
        .into_iter()
        .chain([
            ("Tab", "Next tab", global_style),
            ("←/→", "Profile", global_style),
            ("?", "Help", global_style),
            ("q", "Quit", global_style),
        ]);

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc, style) in keys {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}] ", key), style));
        spans.push(Span::styled(desc, Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = format!(" {} ", app.snapshot.label());
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    let color = if value == crate::format::UNAVAILABLE {
        Color::DarkGray
    } else {
        Color::White
    };
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitstat_core::{default_profiles, AttributeSnapshot, CalculatorConstants};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_footer_keys_follow_tab() {
        let mut app = App::new(
            AttributeSnapshot::default(),
            CalculatorConstants::default(),
            default_profiles(),
        );

        let screen = render(&app);
        assert!(screen.contains("[q] Quit"));
        assert!(screen.contains("[Tab] Next tab"));
        assert!(!screen.contains("[↑/↓]"));

        app.set_tab(2);
        assert!(render(&app).contains("[↑/↓] Scroll"));

        app.set_tab(1);
        assert!(render(&app).contains("[↑/↓] Profile"));
    }

    #[test]
    fn test_defense_tab_renders_unavailable_layers() {
        let mut app = App::new(
            AttributeSnapshot::default(),
            CalculatorConstants::default(),
            default_profiles(),
        );
        app.set_tab(1);

        let screen = render(&app);
        assert!(screen.contains("Layers vs Uniform"));
        assert!(screen.contains("n/a"));
    }
}
